//! Timer periods for the pane
//!
//! All periods are plain values handed to the pane at construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default status refresh period (ms)
pub const DEFAULT_REFRESH_MS: u32 = 2_000;

/// Default inbox poll period (ms)
pub const DEFAULT_INBOX_POLL_MS: u32 = 8_000;

/// Default debounce window shared by tap and double tap (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Default multiple of the refresh period a new-message banner is held for
pub const DEFAULT_NOTIFICATION_HOLD: u8 = 3;

/// Default upper bound on one outbound send (ms)
pub const DEFAULT_SEND_TIMEOUT_MS: u32 = 10_000;

/// Pane timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaneTimings {
    /// Status refresh period, also the success/failure display time
    pub refresh_ms: u32,
    /// Inbox poll period
    pub inbox_poll_ms: u32,
    /// Minimum gap between two recognised taps (and two double taps)
    pub debounce_ms: u32,
    /// New-message banner duration, in refresh periods
    pub notification_hold: u8,
    /// Send attempts running longer than this count as failed
    pub send_timeout_ms: u32,
}

impl Default for PaneTimings {
    fn default() -> Self {
        Self {
            refresh_ms: DEFAULT_REFRESH_MS,
            inbox_poll_ms: DEFAULT_INBOX_POLL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            notification_hold: DEFAULT_NOTIFICATION_HOLD,
            send_timeout_ms: DEFAULT_SEND_TIMEOUT_MS,
        }
    }
}

impl PaneTimings {
    /// Status refresh period, also how long a send result stays up
    pub fn refresh_period(&self) -> u64 {
        self.refresh_ms as u64
    }

    /// Tap debounce window
    pub fn debounce_period(&self) -> u64 {
        self.debounce_ms as u64
    }

    /// How long the new-message banner stays up
    pub fn notification_ms(&self) -> u64 {
        self.refresh_period() * self.notification_hold.max(1) as u64
    }
}
