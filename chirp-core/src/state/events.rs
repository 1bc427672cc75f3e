//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Timer events
    /// Periodic status refresh fired
    StatusRefresh {
        /// Messaging account is initialised
        account_ready: bool,
    },
    /// Display period of a transient state ran out
    TransientExpired,
    /// Deferred cursor move of a tap fired
    DeferredTap {
        /// Message list has at least one entry
        has_messages: bool,
    },

    // Gesture events
    /// Tap recognised
    Tap,
    /// Double tap recognised
    DoubleTap {
        /// Message list has at least one entry
        has_messages: bool,
    },

    // Send completion events
    /// Outbound send confirmed by the API
    SendSucceeded,
    /// Outbound send failed or timed out
    SendFailed,

    // Poller events
    /// Inbox poller found a message newer than the last one shown
    NewMessage,
}
