/// Navigation, persistence and gesture tuning constants.
///
/// These constants express intended behavior (zoom range, animation lengths,
/// gesture thresholds) and keep magic numbers out of the controller.

// Zoom range as linear factors; the store keeps zoom as a base-2 exponent
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 98_304.0; // 3 * 2^15
pub const MIN_ZOOM_EXPONENT: f64 = -1.0; // log2(MIN_ZOOM)
pub const MAX_ZOOM_EXPONENT: f64 = 16.584_962_500_721_156; // log2(MAX_ZOOM)

// Fractal parameter bounds
pub const C_BOUND: f64 = 2.5;
pub const MIN_EXPONENT: i32 = 2;
pub const MAX_EXPONENT: i32 = 16;
pub const MIN_ESCAPE_RADIUS: f64 = 0.05;
pub const MAX_ESCAPE_RADIUS: f64 = 2.0;
pub const ESCAPE_RADIUS_NUDGE: f64 = 0.01; // distance kept from exactly 1
pub const MIN_SPEED: f64 = 0.125;
pub const MAX_SPEED: f64 = 16.0;
pub const MIN_SPACING: f64 = 0.125;
pub const MAX_SPACING: f64 = 8.0;

// Default view for the classic z^2 set; other exponents centre on the origin
pub const DEFAULT_CENTER_X: f64 = -0.2;

// Animation durations (milliseconds)
pub const CENTER_TWEEN_MS: f64 = 1000.0;
pub const PAN_TWEEN_MS: f64 = 250.0;
pub const ZOOM_TWEEN_MS: f64 = 300.0;
pub const ZOOM_JUMP_TWEEN_MS: f64 = 2500.0;

// Keyboard steps
pub const PAN_FRACTION_FINE: f64 = 0.05; // of the visible half-span (1/zoom)
pub const PAN_FRACTION_COARSE: f64 = 0.25;
pub const ZOOM_KEY_STEP: f64 = 0.5; // zoom exponent units
pub const C_KEY_STEP: f64 = 0.01;
pub const ESCAPE_RADIUS_KEY_STEP: f64 = 0.05;

// Wheel / trackpad pinch, zoom exponent units per event
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

// Touch gestures
pub const GESTURE_AXIS_THRESHOLD_PX: f64 = 12.0;
pub const GESTURE_STEP_PX: f64 = 32.0; // discrete steps (palette, fractal, exponent)
pub const GESTURE_COMMAND_PX: f64 = 64.0; // four-finger commands (reset, play/pause)
pub const TOUCH_ZOOM_PER_PX: f64 = 0.01;
pub const TOUCH_C_PER_PX: f64 = 0.001;

// Persistence and messaging
pub const FRAGMENT_DELIMITER: char = '_';
pub const PERSIST_THROTTLE_MS: f64 = 200.0;
pub const MESSAGE_HIDE_MS: f64 = 2000.0;
pub const ONBOARDING_MIN_FIELDS: usize = 3; // fewer restored fields => show help

// Render density (backing-store multiplier), not persisted
pub const DEFAULT_DENSITY: f64 = 2.0;
pub const MIN_DENSITY: f64 = 0.125;
pub const MAX_DENSITY: f64 = 2.0;

// Colour table handed to the renderer (RGB triples)
pub const COLOR_TABLE_LEN: usize = 256;
