// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use fractal_core::constants::*;
use web_constants::*;

#[test]
fn zoom_exponent_bounds_match_linear_bounds() {
    assert!((MIN_ZOOM_EXPONENT.exp2() - MIN_ZOOM).abs() < 1e-12);
    assert!((MAX_ZOOM_EXPONENT.exp2() - MAX_ZOOM).abs() / MAX_ZOOM < 1e-12);
    assert!((MAX_ZOOM.log2() - MAX_ZOOM_EXPONENT).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(MIN_EXPONENT < MAX_EXPONENT);
    assert!(MIN_ESCAPE_RADIUS < 1.0 - ESCAPE_RADIUS_NUDGE);
    assert!(MAX_ESCAPE_RADIUS > 1.0 + ESCAPE_RADIUS_NUDGE);
    assert!(MIN_SPEED < 1.0 && 1.0 < MAX_SPEED);
    assert!(MIN_SPACING < 1.0 && 1.0 < MAX_SPACING);
    assert!(MIN_DENSITY <= DEFAULT_DENSITY && DEFAULT_DENSITY <= MAX_DENSITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_escalate() {
    // a press that stays within the click slop never locks an axis
    assert!(CLICK_SLOP_PX < GESTURE_AXIS_THRESHOLD_PX);
    assert!(GESTURE_AXIS_THRESHOLD_PX < GESTURE_STEP_PX);
    assert!(GESTURE_STEP_PX < GESTURE_COMMAND_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    for ms in [
        CENTER_TWEEN_MS,
        PAN_TWEEN_MS,
        ZOOM_TWEEN_MS,
        ZOOM_JUMP_TWEEN_MS,
        PERSIST_THROTTLE_MS,
        MESSAGE_HIDE_MS,
    ] {
        assert!(ms > 0.0);
    }
    assert!(PERSIST_THROTTLE_MS < MESSAGE_HIDE_MS);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, HELP_ID, HELP_CLOSE_ID, HELP_OPEN_ID, INFO_ID, ERROR_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(EXPORT_FILE_NAME.ends_with(".png"));
}
