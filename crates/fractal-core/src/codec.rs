//! Number parsing and formatting for persisted state.
//!
//! Every parser here returns `None` instead of a non-finite value; callers
//! treat `None` as "keep the previous value".

/// Parse trimmed text as a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a number and round it to the nearest integer.
pub fn parse_int(text: &str) -> Option<i64> {
    parse_number(text).map(|v| v.round() as i64)
}

/// Parse a 0/1 flag; any non-zero number counts as set.
pub fn parse_flag(text: &str) -> Option<bool> {
    parse_number(text).map(|v| v != 0.0)
}

/// Parse a direction; negative numbers map to -1, everything else to +1.
pub fn parse_sign(text: &str) -> Option<f64> {
    parse_number(text).map(|v| if v < 0.0 { -1.0 } else { 1.0 })
}

/// Shortest text that parses back to the same number.
///
/// Integral values drop the fractional part so `2.0` persists as `2`.
pub fn encode_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0 into 0
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{}", value)
}
