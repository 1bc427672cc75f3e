//! Tap / double-tap classification
//!
//! The sensor raises its tap flags for several consecutive samples per
//! physical gesture, so each gesture type has a debounce window: a second
//! recognition within the window is dropped.
//!
//! The sample carrying the tap edge usually has a blank location, so the
//! direction of a tap comes from the sample before it.

use super::sample::{GestureSample, Location};

/// Which way a tap moves the browse cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDirection {
    Left,
    Right,
}

impl TapDirection {
    /// Cursor delta for this direction
    pub fn delta(self) -> i8 {
        match self {
            TapDirection::Left => -1,
            TapDirection::Right => 1,
        }
    }

    fn from_location(location: &Location) -> Self {
        if location.west && !location.east {
            TapDirection::Left
        } else {
            TapDirection::Right
        }
    }
}

/// Classifier output for one sample
///
/// A single sample can carry both edges; consumers handle the tap first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Classified {
    pub tap: Option<TapDirection>,
    pub double_tap: bool,
}

/// Debounce bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DebounceState {
    /// Time of the last recognised tap
    last_tap_ms: Option<u64>,
    /// Time of the last recognised double tap
    last_double_tap_ms: Option<u64>,
    /// Direction of the most recent tap, applied when its deferred move fires
    pending_direction: Option<TapDirection>,
}

/// Gesture classifier
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    window_ms: u32,
    debounce: DebounceState,
    /// Location from the previous sample
    previous_location: Location,
}

impl GestureClassifier {
    /// Create a classifier with the given debounce window
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            debounce: DebounceState::default(),
            previous_location: Location::NONE,
        }
    }

    /// Direction waiting on the deferred tap move, consumed once
    pub fn take_pending_direction(&mut self) -> Option<TapDirection> {
        self.debounce.pending_direction.take()
    }

    /// Drop the pending direction (double tap overrides the tap)
    pub fn clear_pending_direction(&mut self) {
        self.debounce.pending_direction = None;
    }

    /// Classify one sample taken at `now_ms`
    pub fn classify(&mut self, sample: &GestureSample, now_ms: u64) -> Classified {
        let lagged = self.previous_location;
        self.previous_location = sample.location;

        let mut out = Classified::default();

        if sample.tap && self.outside_window(self.debounce.last_tap_ms, now_ms) {
            self.debounce.last_tap_ms = Some(now_ms);
            let direction = TapDirection::from_location(&lagged);
            self.debounce.pending_direction = Some(direction);
            out.tap = Some(direction);
        }

        if sample.double_tap && self.outside_window(self.debounce.last_double_tap_ms, now_ms) {
            self.debounce.last_double_tap_ms = Some(now_ms);
            out.double_tap = true;
        }

        out
    }

    fn outside_window(&self, last: Option<u64>, now_ms: u64) -> bool {
        match last {
            None => true,
            Some(t) => now_ms.saturating_sub(t) > self.window_ms as u64,
        }
    }
}
