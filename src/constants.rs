/// Browser wiring constants: element ids and pointer tuning.
///
/// The page is expected to provide these elements; missing optional ones
/// are skipped with a log line rather than failing start-up.
pub const CANVAS_ID: &str = "fractal-canvas";
pub const HELP_ID: &str = "help";
pub const HELP_CLOSE_ID: &str = "help-close";
pub const HELP_OPEN_ID: &str = "help-open";
pub const INFO_ID: &str = "info";
pub const ERROR_ID: &str = "error";

// Class toggled on the help and message elements
pub const SHOW_CLASS: &str = "show";

// A press that travels less than this (CSS px) is a click, not a drag
pub const CLICK_SLOP_PX: f64 = 4.0;

// Global the JS renderer registers itself under
pub const RENDERER_GLOBAL: &str = "fractalRenderer";

pub const EXPORT_FILE_NAME: &str = "fractal.png";
