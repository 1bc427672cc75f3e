//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! The console thread also pushes into these, which is fine because the
//! critical-section implementation is a process-wide lock.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use chirp_core::gesture::GestureSample;
use chirp_core::pane::PaneView;
use chirp_core::send::{SendOutcome, SendRequest};
use chirp_core::traits::InboundMessage;

/// Channel capacity for raw samples from the sensor side
const SAMPLE_CHANNEL_SIZE: usize = 16;

/// Channel capacity for samples forwarded to the controller
const GESTURE_CHANNEL_SIZE: usize = 16;

/// Raw gesture samples as the LED controller receives them
pub static SENSOR_CHANNEL: Channel<CriticalSectionRawMutex, GestureSample, SAMPLE_CHANNEL_SIZE> =
    Channel::new();

/// Gesture samples forwarded by the pane handle to the controller
pub static GESTURE_CHANNEL: Channel<CriticalSectionRawMutex, GestureSample, GESTURE_CHANNEL_SIZE> =
    Channel::new();

/// Send to perform (at most one in flight)
pub static SEND_REQUEST: Channel<CriticalSectionRawMutex, SendRequest, 1> = Channel::new();

/// Result of the send, back to the controller
pub static SEND_OUTCOME: Channel<CriticalSectionRawMutex, SendOutcome, 2> = Channel::new();

/// Newest inbound message from the inbox poller
pub static INBOX_CHANNEL: Channel<CriticalSectionRawMutex, InboundMessage, 2> = Channel::new();

/// Signal that the store should be written to disk
pub static PERSIST_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the published view changed
pub static VIEW_CHANGED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest view published by the controller
pub static PANE_VIEW: Mutex<CriticalSectionRawMutex, Cell<PaneView>> =
    Mutex::new(Cell::new(PaneView::blank()));

/// Publish a new view and wake the display
pub fn publish_view(view: PaneView) {
    let changed = PANE_VIEW.lock(|cell| cell.replace(view) != view);
    if changed {
        VIEW_CHANGED.signal(());
    }
}

/// Latest published view
pub fn current_view() -> PaneView {
    PANE_VIEW.lock(|cell| cell.get())
}
