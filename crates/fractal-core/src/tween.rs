//! Time-based interpolation of small numeric channels.
//!
//! A [`Tween`] owns one [`SmoothedChannel`] (e.g. the `[x, y]` centre or the
//! `[zoom]` exponent) and moves it toward a target each time it is advanced
//! with a frame timestamp. It never touches the view state directly; the
//! store holds the settled value and the tween holds the animated one.

use smallvec::SmallVec;
use std::ops::Deref;

/// Easing curves applied to normalized progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    QuadraticInOut,
    QuadraticOut,
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
        }
    }
}

/// Live, continuously interpolated numeric vector.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SmoothedChannel(SmallVec<[f64; 2]>);

impl SmoothedChannel {
    pub fn new(values: &[f64]) -> Self {
        Self(SmallVec::from_slice(values))
    }

    /// Overwrite from `values`; extra elements on either side are ignored.
    fn assign(&mut self, values: &[f64]) {
        for (slot, v) in self.0.iter_mut().zip(values) {
            *slot = *v;
        }
    }
}

impl Deref for SmoothedChannel {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    // Target set; the start time is the previous advance, or the next one
    Armed,
    Running { start_ms: f64 },
}

#[derive(Clone, Debug)]
pub struct Tween {
    channel: SmoothedChannel,
    from: SmallVec<[f64; 2]>,
    to: SmallVec<[f64; 2]>,
    duration_ms: f64,
    easing: Easing,
    phase: Phase,
    last_ms: Option<f64>,
}

impl Tween {
    pub fn new(initial: &[f64]) -> Self {
        Self {
            channel: SmoothedChannel::new(initial),
            from: SmallVec::from_slice(initial),
            to: SmallVec::from_slice(initial),
            duration_ms: 0.0,
            easing: Easing::default(),
            phase: Phase::Idle,
            last_ms: None,
        }
    }

    #[inline]
    pub fn channel(&self) -> &SmoothedChannel {
        &self.channel
    }

    /// Value the channel is heading to (equals the channel when idle).
    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.to
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start moving toward `values` from wherever the channel is right now.
    ///
    /// A non-positive or non-finite duration assigns immediately.
    pub fn set_target(&mut self, values: &[f64], duration_ms: f64, easing: Easing) {
        if values.iter().any(|v| !v.is_finite()) {
            log::warn!("[tween] ignoring non-finite target {:?}", values);
            return;
        }
        if !(duration_ms > 0.0) || !duration_ms.is_finite() {
            self.snap(values);
            return;
        }
        self.from = SmallVec::from_slice(&self.channel);
        self.to = SmallVec::from_slice(&self.channel);
        for (slot, v) in self.to.iter_mut().zip(values) {
            *slot = *v;
        }
        self.duration_ms = duration_ms;
        self.easing = easing;
        self.phase = Phase::Armed;
    }

    /// Assign `values` synchronously and disengage any running animation.
    pub fn snap(&mut self, values: &[f64]) {
        self.channel.assign(values);
        self.from = SmallVec::from_slice(&self.channel);
        self.to = SmallVec::from_slice(&self.channel);
        self.phase = Phase::Idle;
    }

    /// Set a single element immediately, leaving the others animating.
    pub fn snap_component(&mut self, index: usize, value: f64) {
        if index >= self.channel.len() || !value.is_finite() {
            return;
        }
        self.channel.0[index] = value;
        self.from[index] = value;
        self.to[index] = value;
    }

    /// Halt at the current, possibly partial, value.
    pub fn stop(&mut self) {
        self.from = SmallVec::from_slice(&self.channel);
        self.to = SmallVec::from_slice(&self.channel);
        self.phase = Phase::Idle;
    }

    /// Write eased values for `now_ms` into the channel.
    ///
    /// Returns `true` while the tween is still running after this step.
    /// Repeated or earlier timestamps leave the channel untouched.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            return self.is_active();
        }
        let prev_ms = self.last_ms;
        if let Some(last) = prev_ms {
            if now_ms <= last {
                return self.is_active();
            }
        }
        self.last_ms = Some(now_ms);

        let start_ms = match self.phase {
            Phase::Idle => return false,
            Phase::Armed => {
                // Count from the previous frame so the first step already moves
                let start_ms = prev_ms.unwrap_or(now_ms);
                self.phase = Phase::Running { start_ms };
                start_ms
            }
            Phase::Running { start_ms } => start_ms,
        };

        let progress = ((now_ms - start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            let to = self.to.clone();
            self.snap(&to);
            return false;
        }
        let eased = self.easing.apply(progress);
        for ((slot, from), to) in self.channel.0.iter_mut().zip(&self.from).zip(&self.to) {
            *slot = from + (to - from) * eased;
        }
        true
    }
}
