//! One-shot deadline timers
//!
//! The pane never sleeps itself. It keeps deadlines and the runtime wakes
//! it at the earliest one (see [`crate::pane::Pane::next_deadline`]).

/// Restartable one-shot timer
///
/// `reset` replaces any pending deadline, so only the latest arming can
/// fire. `cancel` drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShot {
    deadline_ms: Option<u64>,
}

impl OneShot {
    /// Create an idle timer
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Schedule a firing `after_ms` from `now_ms`
    pub fn reset(&mut self, now_ms: u64, after_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(after_ms));
    }

    /// Stop a pending firing
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Scheduled firing time
    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Consume the firing if it is due
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
