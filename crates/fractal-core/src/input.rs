//! Raw input to [`Action`] mapping. Pure, so it can be tested on the host.

use crate::constants::{C_KEY_STEP, ESCAPE_RADIUS_KEY_STEP, WHEEL_ZOOM_STEP, ZOOM_KEY_STEP};
use crate::controller::Action;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

#[inline]
fn signed(shift: bool) -> i32 {
    if shift {
        -1
    } else {
        1
    }
}

/// Action for a `KeyboardEvent.code` (layout independent), if bound.
///
/// Chords with Ctrl, Alt or Meta are left to the browser.
pub fn action_for_key(code: &str, mods: Modifiers) -> Option<Action> {
    if mods.ctrl || mods.alt || mods.meta {
        return None;
    }
    let shift = mods.shift;
    let sign = signed(shift) as f64;
    let action = match code {
        "ArrowLeft" => Action::Pan { dx: -1.0, dy: 0.0, coarse: shift },
        "ArrowRight" => Action::Pan { dx: 1.0, dy: 0.0, coarse: shift },
        "ArrowUp" => Action::Pan { dx: 0.0, dy: 1.0, coarse: shift },
        "ArrowDown" => Action::Pan { dx: 0.0, dy: -1.0, coarse: shift },
        "Equal" | "NumpadAdd" if shift => Action::ZoomMax,
        "Equal" | "NumpadAdd" => Action::Zoom(ZOOM_KEY_STEP),
        "Minus" | "NumpadSubtract" if shift => Action::ZoomMin,
        "Minus" | "NumpadSubtract" => Action::Zoom(-ZOOM_KEY_STEP),
        "KeyF" => Action::CycleFractal(signed(shift)),
        "KeyE" => Action::StepExponent(signed(shift)),
        "KeyC" => Action::CyclePalette(signed(shift)),
        "KeyR" => Action::StepC { re: sign * C_KEY_STEP, im: 0.0 },
        "KeyI" => Action::StepC { re: 0.0, im: sign * C_KEY_STEP },
        "KeyB" => Action::StepEscapeRadius(sign * ESCAPE_RADIUS_KEY_STEP),
        "KeyS" => Action::ScaleSpeed(if shift { 0.5 } else { 2.0 }),
        "KeyK" => Action::ScaleSpacing(if shift { 0.5 } else { 2.0 }),
        "KeyD" => Action::ScaleDensity(if shift { 0.5 } else { 2.0 }),
        "KeyV" => Action::ReverseDirection,
        "KeyT" => Action::ToggleSmoothing,
        "KeyP" => Action::ExportFrame,
        "Space" => Action::TogglePlay,
        "Backspace" if shift => Action::ResetAll,
        "Backspace" => Action::ResetView,
        "Slash" if shift => Action::ToggleHelp,
        "Escape" => Action::HideHelp,
        _ => return None,
    };
    Some(action)
}

/// Wheel or trackpad-pinch tick. Scrolling up (negative `delta_y`) zooms in.
pub fn wheel_action(delta_y: f64) -> Option<Action> {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return None;
    }
    Some(Action::Zoom(if delta_y < 0.0 {
        WHEEL_ZOOM_STEP
    } else {
        -WHEEL_ZOOM_STEP
    }))
}
