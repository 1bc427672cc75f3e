//! Pane controller
//!
//! The pane is the single owner of the display state, browse cursor,
//! debounce state, and both timers. Every input (gesture sample, timer
//! expiry, send outcome, inbox poll result) is a method call taking the
//! current time, so the runtime can serialise them through one task.

use crate::config::{Delivery, MessageId, MessageList, PaneTimings};
use crate::cursor::BrowseCursor;
use crate::gesture::{GestureClassifier, GestureSample};
use crate::send::{SendOutcome, SendRequest};
use crate::state::{DisplayState, Event};
use crate::timer::OneShot;
use crate::traits::{ConfigStore, InboundMessage};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaneView {
    pub state: DisplayState,
    pub cursor: BrowseCursor,
    pub message_count: usize,
    /// Delivery kind of the message under the cursor
    pub delivery: Option<Delivery>,
}

impl PaneView {
    /// View shown before the first refresh
    pub const fn blank() -> Self {
        Self {
            state: DisplayState::AccountError,
            cursor: BrowseCursor::Empty,
            message_count: 0,
            delivery: None,
        }
    }
}

impl Default for PaneView {
    fn default() -> Self {
        Self::blank()
    }
}

/// Display state machine with its inputs and timers
pub struct Pane<S: ConfigStore> {
    store: S,
    timings: PaneTimings,
    state: DisplayState,
    cursor: BrowseCursor,
    /// List snapshot taken at the last refresh
    messages: MessageList,
    classifier: GestureClassifier,
    /// Status refresh, re-armed with the transient period after a send
    refresh_timer: OneShot,
    /// Deferred cursor move of the last tap
    tap_timer: OneShot,
    /// Message of the send in flight
    in_flight: Option<MessageId>,
    /// Newest inbound message already shown (unix seconds)
    inbox_mark: u64,
}

impl<S: ConfigStore> Pane<S> {
    /// Create a pane and run the first status refresh
    pub fn new(store: S, timings: PaneTimings, now_ms: u64) -> Self {
        let account_ready = store.account().initialized;
        let mut pane = Self {
            store,
            timings,
            state: DisplayState::initial(account_ready),
            cursor: BrowseCursor::Empty,
            messages: MessageList::new(),
            classifier: GestureClassifier::new(timings.debounce_ms),
            refresh_timer: OneShot::new(),
            tap_timer: OneShot::new(),
            in_flight: None,
            inbox_mark: 0,
        };
        pane.refresh_status(now_ms);
        pane
    }

    /// Start from a known inbox high-water mark
    pub fn with_inbox_mark(mut self, mark: u64) -> Self {
        self.inbox_mark = mark;
        self
    }

    /// Current state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Current cursor
    pub fn cursor(&self) -> BrowseCursor {
        self.cursor
    }

    /// Newest inbound timestamp already shown
    pub fn inbox_mark(&self) -> u64 {
        self.inbox_mark
    }

    /// Configuration store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable configuration store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> PaneView {
        PaneView {
            state: self.state,
            cursor: self.cursor,
            message_count: self.messages.len(),
            delivery: self
                .cursor
                .index()
                .and_then(|i| self.messages.at(i))
                .map(|e| e.delivery()),
        }
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.refresh_timer.deadline(), self.tap_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Process one gesture sample
    ///
    /// Returns the send to start when a double tap selects a message.
    pub fn gesture(&mut self, sample: &GestureSample, now_ms: u64) -> Option<SendRequest> {
        let classified = self.classifier.classify(sample, now_ms);

        if classified.tap.is_some() {
            self.handle_tap(now_ms);
        }

        if classified.double_tap {
            return self.handle_double_tap();
        }

        None
    }

    /// Run any timers that are due
    ///
    /// Returns true if the view changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = self.view();

        if self.tap_timer.fire(now_ms) {
            self.deferred_tap();
        }

        if self.refresh_timer.fire(now_ms) {
            if self.state.is_transient() {
                self.expire_transient(now_ms);
            } else {
                self.refresh(now_ms);
            }
        }

        self.view() != before
    }

    /// Re-read account and list status
    ///
    /// No-op in a transient state. Those are left only when the refresh
    /// timer fires in [`Pane::tick`], after their full display period.
    pub fn refresh_status(&mut self, now_ms: u64) {
        if self.state.is_transient() {
            return;
        }
        self.refresh(now_ms);
    }

    /// Handle the result of a send
    ///
    /// Returns false if the outcome does not belong to the send in flight.
    pub fn send_complete(&mut self, outcome: &SendOutcome, now_ms: u64) -> bool {
        if self.state != DisplayState::Sending || self.in_flight.as_ref() != Some(&outcome.id) {
            return false;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(_) => {
                self.apply(Event::SendSucceeded);
                if self.store.increment_send_count(&outcome.id).is_ok() {
                    self.store.persist();
                }
            }
            Err(_) => {
                self.apply(Event::SendFailed);
            }
        }

        // Result stays up for one full refresh period
        self.refresh_timer
            .reset(now_ms, self.timings.refresh_period());
        true
    }

    /// Handle the newest inbound message from the inbox poller
    ///
    /// Returns true if the new-message banner was raised. The mark only
    /// advances when the banner is shown, so a message arriving mid-send
    /// is announced once the pane is back to browsing.
    pub fn inbox_result(&mut self, message: &InboundMessage, now_ms: u64) -> bool {
        if message.created_at <= self.inbox_mark || self.state != DisplayState::Browsing {
            return false;
        }

        self.inbox_mark = message.created_at;
        self.apply(Event::NewMessage);
        self.tap_timer.cancel();
        self.classifier.clear_pending_direction();
        self.refresh_timer
            .reset(now_ms, self.timings.notification_ms());
        true
    }

    fn refresh(&mut self, now_ms: u64) {
        let account_ready = self.store.account().initialized;
        self.apply(Event::StatusRefresh { account_ready });

        if account_ready {
            self.messages = self.store.messages();
            self.cursor = self.cursor.fit(self.messages.len());
        }

        self.refresh_timer
            .reset(now_ms, self.timings.refresh_period());
    }

    /// Display period of a result or banner ran out
    fn expire_transient(&mut self, now_ms: u64) {
        self.apply(Event::TransientExpired);
        if !self.state.is_transient() {
            self.refresh(now_ms);
        }
    }

    fn handle_tap(&mut self, now_ms: u64) {
        match self.state {
            DisplayState::Browsing if !self.messages.is_empty() => {
                // Held back so the first tap of a double tap can be dropped
                self.tap_timer
                    .reset(now_ms, self.timings.debounce_period());
            }
            DisplayState::NewNotification => {
                self.classifier.clear_pending_direction();
                self.apply(Event::Tap);
                self.refresh_timer
                    .reset(now_ms, self.timings.refresh_period());
            }
            _ => self.classifier.clear_pending_direction(),
        }
    }

    fn handle_double_tap(&mut self) -> Option<SendRequest> {
        let request = self
            .cursor
            .index()
            .and_then(|i| self.messages.at(i))
            .map(SendRequest::from_entry);

        let next = self.apply(Event::DoubleTap {
            has_messages: request.is_some(),
        });
        if next != DisplayState::Sending {
            return None;
        }

        self.tap_timer.cancel();
        self.classifier.clear_pending_direction();
        self.refresh_timer.cancel();

        let request = request?;
        self.in_flight = Some(request.id.clone());
        Some(request)
    }

    fn deferred_tap(&mut self) {
        let direction = self.classifier.take_pending_direction();
        let has_messages = !self.messages.is_empty();
        let next = self.apply(Event::DeferredTap { has_messages });

        if let (DisplayState::Browsing, true, Some(direction)) = (next, has_messages, direction) {
            self.cursor = self
                .cursor
                .step(direction.delta() as i32, self.messages.len());
        }
    }

    fn apply(&mut self, event: Event) -> DisplayState {
        self.state = self.state.transition(event);
        self.state
    }
}
