use thiserror::Error;

/// Recoverable problems with state updates and persisted fragments.
///
/// None of these are fatal; the offending entry is skipped and the rest of
/// the update or restore carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("unknown state field `{0}`")]
    UnknownField(String),
    #[error("unknown short key `{0}` in URL")]
    UnknownShortKey(String),
    #[error("field `{field}` does not accept {given}")]
    WrongType { field: &'static str, given: &'static str },
    #[error("unknown palette `{0}`")]
    UnknownPalette(String),
    #[error("malformed URL entry `{0}`")]
    MalformedEntry(String),
    #[error("could not decode URL value for `{field}`")]
    Decode { field: &'static str },
}
