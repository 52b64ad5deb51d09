//! Interaction policy: what each input means for the view state.
//!
//! Every mutation goes through [`Explorer::update`] so clamping and
//! persistence hold uniformly. Animated changes retarget a tween; direct
//! changes snap the paired channel in the same call.

use crate::constants::*;
use crate::explorer::Explorer;
use crate::frame::Viewport;
use crate::gesture::{Axis, Flow, GestureEvent, TouchPoint};
use crate::persist::Location;
use crate::state::{Field, Patch};
use crate::tween::Easing;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Keyboard pan; `dx`/`dy` are unit directions (+y is up).
    Pan { dx: f64, dy: f64, coarse: bool },
    /// Pointer drag in surface pixels (+y is down); applied immediately.
    Drag { dx: f64, dy: f64, surface: Viewport },
    /// Re-centre on the point under the pointer (surface pixels).
    CenterOn { x: f64, y: f64, surface: Viewport },
    /// Signed zoom-exponent step, short animation.
    Zoom(f64),
    ZoomMax,
    ZoomMin,
    CycleFractal(i32),
    StepExponent(i32),
    CyclePalette(i32),
    StepC { re: f64, im: f64 },
    StepEscapeRadius(f64),
    ScaleSpeed(f64),
    ScaleSpacing(f64),
    ScaleDensity(f64),
    ReverseDirection,
    ToggleSmoothing,
    TogglePlay,
    ExportFrame,
    ResetView,
    ResetAll,
    ToggleHelp,
    HideHelp,
}

/// World-space point under surface pixel `(x, y)` for the given view.
///
/// The shorter side of the surface spans `[-1, 1] / zoom`, so the longer
/// side extends proportionally to the aspect ratio.
pub fn surface_to_world(x: f64, y: f64, surface: Viewport, center: DVec2, zoom: f64) -> DVec2 {
    let s = surface.min_side();
    let n = DVec2::new((2.0 * x - surface.width) / s, -(2.0 * y - surface.height) / s);
    center + n / zoom
}

/// Centre of the default view for a given exponent.
pub fn default_center(exponent: i32) -> DVec2 {
    if exponent == MIN_EXPONENT {
        DVec2::new(DEFAULT_CENTER_X, 0.0)
    } else {
        DVec2::ZERO
    }
}

impl<L: Location> Explorer<L> {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Pan { dx, dy, coarse } => {
                let fraction = if coarse {
                    PAN_FRACTION_COARSE
                } else {
                    PAN_FRACTION_FINE
                };
                let zoom = self.state.zoom_exponent().exp2();
                let target = self.state.center() + DVec2::new(dx, dy) * fraction / zoom;
                self.move_center(target, PAN_TWEEN_MS, Easing::QuadraticOut);
            }
            Action::Drag { dx, dy, surface } => {
                let s = surface.min_side();
                let zoom = self.smoothing.zoom();
                let shift = DVec2::new(2.0 * dx / s, -2.0 * dy / s) / zoom;
                let target = self.smoothing.center() - shift;
                self.move_center(target, 0.0, Easing::Linear);
            }
            Action::CenterOn { x, y, surface } => {
                let target = surface_to_world(
                    x,
                    y,
                    surface,
                    self.smoothing.center(),
                    self.smoothing.zoom(),
                );
                self.move_center(target, CENTER_TWEEN_MS, Easing::QuadraticInOut);
            }
            Action::Zoom(step) => {
                let target = self.state.zoom_exponent() + step;
                self.zoom_to(target, ZOOM_TWEEN_MS);
            }
            Action::ZoomMax => {
                self.zoom_to(MAX_ZOOM_EXPONENT, ZOOM_JUMP_TWEEN_MS);
                self.messages.show_info("Max zoom");
            }
            Action::ZoomMin => {
                self.zoom_to(MIN_ZOOM_EXPONENT, ZOOM_JUMP_TWEEN_MS);
                self.messages.show_info("Min zoom");
            }
            Action::CycleFractal(step) => {
                let next = self.state.fractal().step(step);
                self.update(Patch::new().set(Field::Fractal, next.index() as i32));
                self.messages.show_info(format!("Fractal: {}", next.label()));
            }
            Action::StepExponent(step) => {
                let next = (self.state.exponent() + step).clamp(MIN_EXPONENT, MAX_EXPONENT);
                self.update(Patch::new().set(Field::Exponent, next));
                self.reset_view();
                self.messages.show_info(format!("Exponent: {}", next));
            }
            Action::CyclePalette(step) => {
                let next = self.palettes.step(self.state.palette_id(), step);
                self.update(Patch::new().set(Field::Palette, next));
                self.messages.show_info(format!("Palette: {}", next));
            }
            Action::StepC { re, im } => {
                let c = self.state.c();
                self.update(
                    Patch::new()
                        .set(Field::CReal, c.x + re)
                        .set(Field::CImaginary, c.y + im),
                );
                let c = self.state.c();
                self.messages
                    .show_info(format!("c = {:.3} {:+.3}i", c.x, c.y));
            }
            Action::StepEscapeRadius(step) => {
                let mut next = self.state.escape_radius() + step;
                if (next - 1.0).abs() < ESCAPE_RADIUS_NUDGE {
                    next = 1.0 + step.signum() * ESCAPE_RADIUS_NUDGE;
                }
                self.update(Patch::new().set(Field::EscapeRadius, next));
                self.messages.show_info(format!(
                    "Escape radius: {:.2}",
                    self.state.escape_radius()
                ));
            }
            Action::ScaleSpeed(factor) => {
                self.update(Patch::new().set(Field::Speed, self.state.speed() * factor));
                self.messages
                    .show_info(format!("Speed: {}", self.state.speed()));
            }
            Action::ScaleSpacing(factor) => {
                self.update(Patch::new().set(Field::Spacing, self.state.spacing() * factor));
                self.messages
                    .show_info(format!("Spacing: {}", self.state.spacing()));
            }
            Action::ScaleDensity(factor) => {
                self.density = (self.density * factor).clamp(MIN_DENSITY, MAX_DENSITY);
                self.messages
                    .show_info(format!("Density: {}%", self.density * 100.0));
            }
            Action::ReverseDirection => {
                let next = -self.state.direction();
                self.update(Patch::new().set(Field::Direction, next));
                self.messages.show_info(if next > 0.0 {
                    "Direction: forward"
                } else {
                    "Direction: reverse"
                });
            }
            Action::ToggleSmoothing => {
                let next = !self.state.smoothing();
                self.update(Patch::new().set(Field::Smoothing, next));
                self.messages.show_info(if next {
                    "Smoothing on"
                } else {
                    "Smoothing off"
                });
            }
            Action::TogglePlay => {
                let next = !self.state.playing();
                self.update(Patch::new().set(Field::Playing, next));
                self.messages
                    .show_info(if next { "Playing" } else { "Paused" });
            }
            Action::ExportFrame => {
                self.export_requested = true;
                self.messages.show_info("Exporting frame");
            }
            Action::ResetView => {
                self.reset_view();
            }
            Action::ResetAll => {
                self.reset();
                self.messages.show_info("Reset");
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }
            Action::HideHelp => {
                self.help_visible = false;
            }
        }
    }

    /// Back to the default centre and zoom for the current exponent.
    pub fn reset_view(&mut self) {
        let center = default_center(self.state.exponent());
        self.move_center(center, CENTER_TWEEN_MS, Easing::QuadraticInOut);
        self.zoom_to(0.0, CENTER_TWEEN_MS);
    }

    fn move_center(&mut self, target: DVec2, duration_ms: f64, easing: Easing) {
        self.update(
            Patch::new()
                .set(Field::X, target.x)
                .set(Field::Y, target.y),
        );
        // The store may have rejected a non-finite target; follow what it holds
        let settled = self.state.center();
        self.smoothing.retarget_center(settled, duration_ms, easing);
    }

    fn zoom_to(&mut self, exponent: f64, duration_ms: f64) {
        self.update(Patch::new().set(Field::Zoom, exponent));
        let settled = self.state.zoom_exponent();
        self.smoothing
            .retarget_zoom(settled, duration_ms, Easing::QuadraticOut);
    }

    // ---------------- Touch ----------------

    pub fn touch_start(&mut self, started: &[TouchPoint]) {
        self.gestures.touch_start(started);
    }

    pub fn touch_move(&mut self, changed: &[TouchPoint]) -> Option<GestureEvent> {
        let mut gestures = std::mem::take(&mut self.gestures);
        let event = gestures.touch_move(changed, |ev| self.on_gesture(ev));
        self.gestures = gestures;
        event
    }

    /// Lift touches; a lone finger that never locked an axis was a tap and
    /// re-centres on where it lifted.
    pub fn touch_end(&mut self, ended: &[TouchPoint], surface: Viewport) {
        let tap = match (self.gestures.tracked_id(), self.gestures.active_touches()) {
            (Some(id), 1) if self.gestures.axis_of(id).is_none() => {
                ended.iter().find(|p| p.id == id).copied()
            }
            _ => None,
        };
        let ids: SmallVec<[i32; 4]> = ended.iter().map(|p| p.id).collect();
        self.gestures.touch_end(&ids);
        if let Some(p) = tap {
            self.apply(Action::CenterOn {
                x: p.x,
                y: p.y,
                surface,
            });
        }
    }

    pub fn touch_cancel(&mut self, cancelled: &[i32]) {
        self.gestures.touch_end(cancelled);
    }

    /// Gesture policy keyed by finger count and axis.
    pub fn on_gesture(&mut self, ev: GestureEvent) -> Flow {
        match (ev.additional_fingers, ev.axis) {
            (0, Axis::Y) => {
                // drag up to zoom in
                let target = self.state.zoom_exponent() - ev.delta * TOUCH_ZOOM_PER_PX;
                self.zoom_to(target, 0.0);
                Flow::Consume
            }
            (0, Axis::X) => self.discrete_step(ev.delta, GESTURE_STEP_PX, |s, dir| {
                s.apply(Action::CyclePalette(dir))
            }),
            (1, Axis::X) => {
                self.apply(Action::StepC {
                    re: ev.delta * TOUCH_C_PER_PX,
                    im: 0.0,
                });
                Flow::Consume
            }
            (1, Axis::Y) => {
                self.apply(Action::StepC {
                    re: 0.0,
                    im: -ev.delta * TOUCH_C_PER_PX,
                });
                Flow::Consume
            }
            (2, Axis::X) => self.discrete_step(ev.delta, GESTURE_STEP_PX, |s, dir| {
                s.apply(Action::CycleFractal(dir))
            }),
            (2, Axis::Y) => self.discrete_step(-ev.delta, GESTURE_STEP_PX, |s, dir| {
                s.apply(Action::StepExponent(dir))
            }),
            (_, Axis::X) => self.discrete_step(ev.delta, GESTURE_COMMAND_PX, |s, _| {
                s.apply(Action::TogglePlay)
            }),
            (_, Axis::Y) => self.discrete_step(ev.delta, GESTURE_COMMAND_PX, |s, _| {
                s.apply(Action::ResetAll)
            }),
        }
    }

    /// Fire `step` once the accumulated delta reaches `threshold`; until
    /// then keep accumulating from the same origin.
    fn discrete_step(
        &mut self,
        delta: f64,
        threshold: f64,
        step: impl FnOnce(&mut Self, i32),
    ) -> Flow {
        if delta.abs() < threshold {
            return Flow::Skip;
        }
        step(self, if delta > 0.0 { 1 } else { -1 });
        Flow::Consume
    }
}
