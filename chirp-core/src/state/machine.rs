//! State machine definition
//!
//! Everything the pane shows is a function of the current state. This
//! table is the only place transitions are decided.

use super::events::Event;

/// Display states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Messaging account is not initialised
    AccountError,
    /// Message list visible, taps move the cursor
    Browsing,
    /// Outbound send in flight
    Sending,
    /// Last send failed, shown for one refresh period
    SendFailed,
    /// Last send succeeded, shown for one refresh period
    SendSucceeded,
    /// New inbound message banner
    NewNotification,
}

impl DisplayState {
    /// Initial state for an account status
    pub fn initial(account_ready: bool) -> Self {
        if account_ready {
            DisplayState::Browsing
        } else {
            DisplayState::AccountError
        }
    }

    /// Check if this state is left automatically
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DisplayState::Sending
                | DisplayState::SendFailed
                | DisplayState::SendSucceeded
                | DisplayState::NewNotification
        )
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use DisplayState::*;
        use Event::*;

        match (self, event) {
            // Transient states only end through their own timer
            (state, StatusRefresh { .. }) if state.is_transient() => state,
            (_, StatusRefresh { account_ready: false }) => AccountError,
            (_, StatusRefresh { account_ready: true }) => Browsing,

            // Result and banner go back to browsing when their period ends
            (
                DisplayState::SendFailed | DisplayState::SendSucceeded | NewNotification,
                TransientExpired,
            ) => Browsing,

            // Browsing transitions
            (Browsing, DeferredTap { has_messages: true }) => Browsing,
            (Browsing, DoubleTap { has_messages: true }) => Sending,
            (Browsing, NewMessage) => NewNotification,

            // Sending transitions
            (Sending, Event::SendSucceeded) => DisplayState::SendSucceeded,
            (Sending, Event::SendFailed) => DisplayState::SendFailed,

            // NewNotification transitions
            (NewNotification, Tap) => Browsing,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DisplayState; 6] = [
        DisplayState::AccountError,
        DisplayState::Browsing,
        DisplayState::Sending,
        DisplayState::SendFailed,
        DisplayState::SendSucceeded,
        DisplayState::NewNotification,
    ];

    #[test]
    fn test_initial_state() {
        assert_eq!(DisplayState::initial(false), DisplayState::AccountError);
        assert_eq!(DisplayState::initial(true), DisplayState::Browsing);
    }

    #[test]
    fn test_refresh_ignored_in_transient_states() {
        for state in ALL {
            let missing = state.transition(Event::StatusRefresh {
                account_ready: false,
            });
            let ready = state.transition(Event::StatusRefresh {
                account_ready: true,
            });
            if state.is_transient() {
                assert_eq!(missing, state);
                assert_eq!(ready, state);
            } else {
                assert_eq!(missing, DisplayState::AccountError);
                assert_eq!(ready, DisplayState::Browsing);
            }
        }
    }

    #[test]
    fn test_transient_expiry() {
        assert_eq!(
            DisplayState::SendSucceeded.transition(Event::TransientExpired),
            DisplayState::Browsing
        );
        assert_eq!(
            DisplayState::SendFailed.transition(Event::TransientExpired),
            DisplayState::Browsing
        );
        assert_eq!(
            DisplayState::NewNotification.transition(Event::TransientExpired),
            DisplayState::Browsing
        );
        // A send in flight has no display period
        assert_eq!(
            DisplayState::Sending.transition(Event::TransientExpired),
            DisplayState::Sending
        );
        assert_eq!(
            DisplayState::AccountError.transition(Event::TransientExpired),
            DisplayState::AccountError
        );
    }

    #[test]
    fn test_send_flow() {
        let sending = DisplayState::Browsing.transition(Event::DoubleTap { has_messages: true });
        assert_eq!(sending, DisplayState::Sending);

        assert_eq!(
            sending.transition(Event::SendSucceeded),
            DisplayState::SendSucceeded
        );
        assert_eq!(
            sending.transition(Event::SendFailed),
            DisplayState::SendFailed
        );
    }

    #[test]
    fn test_double_tap_needs_messages() {
        let state = DisplayState::Browsing.transition(Event::DoubleTap {
            has_messages: false,
        });
        assert_eq!(state, DisplayState::Browsing);
    }

    #[test]
    fn test_double_tap_ignored_outside_browsing() {
        for state in ALL {
            if state == DisplayState::Browsing {
                continue;
            }
            assert_eq!(
                state.transition(Event::DoubleTap { has_messages: true }),
                state
            );
        }
    }

    #[test]
    fn test_send_results_ignored_outside_sending() {
        assert_eq!(
            DisplayState::Browsing.transition(Event::SendSucceeded),
            DisplayState::Browsing
        );
        assert_eq!(
            DisplayState::SendFailed.transition(Event::SendSucceeded),
            DisplayState::SendFailed
        );
    }

    #[test]
    fn test_notification_flow() {
        let banner = DisplayState::Browsing.transition(Event::NewMessage);
        assert_eq!(banner, DisplayState::NewNotification);
        assert_eq!(banner.transition(Event::Tap), DisplayState::Browsing);

        // Only shown from Browsing
        assert_eq!(
            DisplayState::Sending.transition(Event::NewMessage),
            DisplayState::Sending
        );
        assert_eq!(
            DisplayState::AccountError.transition(Event::NewMessage),
            DisplayState::AccountError
        );
    }

    #[test]
    fn test_transient_states() {
        assert!(DisplayState::Sending.is_transient());
        assert!(DisplayState::NewNotification.is_transient());
        assert!(DisplayState::SendSucceeded.is_transient());
        assert!(DisplayState::SendFailed.is_transient());
        assert!(!DisplayState::Browsing.is_transient());
        assert!(!DisplayState::AccountError.is_transient());
    }
}
