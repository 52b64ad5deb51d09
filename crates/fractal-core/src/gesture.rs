//! Direction-locked multi-touch gesture recognition.
//!
//! The recognizer only answers "what happened": which axis the latest touch
//! is moving along, by how much, and how many other fingers are down. What
//! that means (zoom, palette step, reset, ...) is decided by the controller.

use crate::constants::GESTURE_AXIS_THRESHOLD_PX;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One raw touch point in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Emitted for every move of the tracked touch once its axis is locked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub axis: Axis,
    /// Signed distance along `axis` since the last consumed move.
    pub delta: f64,
    /// Active touches beyond the tracked one.
    pub additional_fingers: usize,
}

/// Handler verdict for a [`GestureEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flow {
    /// Delta consumed; the next delta is measured from here.
    #[default]
    Consume,
    /// Keep the reference point so the next delta keeps accumulating.
    Skip,
}

#[derive(Clone, Copy, Debug)]
struct GestureTouch {
    x: f64,
    y: f64,
    axis: Option<Axis>,
}

#[derive(Debug)]
pub struct GestureRecognizer {
    threshold_px: f64,
    touches: FnvHashMap<i32, GestureTouch>,
    latest: Option<i32>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GESTURE_AXIS_THRESHOLD_PX)
    }
}

impl GestureRecognizer {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            touches: FnvHashMap::default(),
            latest: None,
        }
    }

    #[inline]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    #[inline]
    pub fn tracked_id(&self) -> Option<i32> {
        self.latest
    }

    /// Axis locked for `id`, if any.
    pub fn axis_of(&self, id: i32) -> Option<Axis> {
        self.touches.get(&id).and_then(|t| t.axis)
    }

    /// Register newly started touches; the last one becomes the tracked touch.
    pub fn touch_start(&mut self, started: &[TouchPoint]) {
        for p in started {
            self.touches.insert(
                p.id,
                GestureTouch {
                    x: p.x,
                    y: p.y,
                    axis: None,
                },
            );
            self.latest = Some(p.id);
        }
    }

    /// Feed changed touches; calls `handler` at most once, for the tracked touch.
    ///
    /// Returns the emitted event, if any.
    pub fn touch_move<F>(&mut self, changed: &[TouchPoint], mut handler: F) -> Option<GestureEvent>
    where
        F: FnMut(GestureEvent) -> Flow,
    {
        let id = self.latest?;
        let point = changed.iter().find(|p| p.id == id)?;
        let additional_fingers = self.touches.len().saturating_sub(1);
        let threshold = self.threshold_px;
        let touch = self.touches.get_mut(&id)?;

        let dx = point.x - touch.x;
        let dy = point.y - touch.y;
        if touch.axis.is_none() && (dx.abs() > threshold || dy.abs() > threshold) {
            touch.axis = Some(if dx.abs() > dy.abs() { Axis::X } else { Axis::Y });
        }
        let axis = touch.axis?;

        let event = GestureEvent {
            axis,
            delta: match axis {
                Axis::X => dx,
                Axis::Y => dy,
            },
            additional_fingers,
        };
        if handler(event) == Flow::Consume {
            touch.x = point.x;
            touch.y = point.y;
        }
        Some(event)
    }

    /// Forget ended or cancelled touches.
    pub fn touch_end(&mut self, ended: &[i32]) {
        for id in ended {
            self.touches.remove(id);
            if self.latest == Some(*id) {
                self.latest = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.touches.clear();
        self.latest = None;
    }
}
