//! Throttled two-way sync between the view state and the URL fragment.

use crate::constants::PERSIST_THROTTLE_MS;
use crate::state::ViewState;

/// Where the fragment lives. Fragments are passed without the leading `#`.
pub trait Location {
    fn fragment(&self) -> String;
    fn set_fragment(&mut self, fragment: &str);
    fn clear_fragment(&mut self);
}

/// In-memory location for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryLocation {
    pub fragment: String,
    /// Number of real writes (`set_fragment` + `clear_fragment`).
    pub writes: usize,
}

impl MemoryLocation {
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            fragment: fragment.trim_start_matches('#').to_string(),
            writes: 0,
        }
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.writes += 1;
    }

    fn clear_fragment(&mut self) {
        self.fragment.clear();
        self.writes += 1;
    }
}

/// Leading-edge throttle with a guaranteed trailing write.
///
/// The first change after a quiet period is written on the next poll; later
/// changes inside the window stay pending until the window has elapsed.
#[derive(Clone, Debug, Default)]
pub struct FragmentWriter {
    pending: bool,
    last_write_ms: Option<f64>,
    last_written: Option<String>,
}

impl FragmentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Pick up changes recorded by the state and write if the window allows.
    ///
    /// Returns `true` when the location was actually written.
    pub fn poll(&mut self, now_ms: f64, state: &mut ViewState, location: &mut impl Location) -> bool {
        if state.take_dirty() {
            self.pending = true;
        }
        if !self.pending {
            return false;
        }
        if let Some(last) = self.last_write_ms {
            if now_ms - last < PERSIST_THROTTLE_MS {
                return false;
            }
        }
        self.pending = false;
        let encoded = state.encode_fragment();
        if location.fragment().trim_start_matches('#') == encoded {
            return false;
        }
        location.set_fragment(&encoded);
        self.last_write_ms = Some(now_ms);
        self.last_written = Some(encoded);
        true
    }

    /// Clear the fragment now and drop anything pending.
    pub fn clear(&mut self, now_ms: Option<f64>, location: &mut impl Location) {
        self.pending = false;
        self.last_written = Some(String::new());
        if let Some(now) = now_ms {
            self.last_write_ms = Some(now);
        }
        location.clear_fragment();
    }

    /// Whether `fragment` is the one this writer produced last, i.e. a
    /// `hashchange` caused by our own write.
    pub fn is_own_write(&self, fragment: &str) -> bool {
        self.last_written
            .as_deref()
            .is_some_and(|w| w == fragment.trim_start_matches('#'))
    }

    /// Drop the record of our last write once the URL has moved elsewhere,
    /// so navigating back to that fragment restores it.
    pub fn forget_own_write(&mut self) {
        self.last_written = None;
    }
}
