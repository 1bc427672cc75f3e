//! Main controller task
//!
//! Sole owner of the pane. Receives gestures, send outcomes, and inbox
//! results, sleeps until the pane's next deadline otherwise, and publishes
//! the view after every step.

use embassy_futures::select::{select4, Either4};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_time::{Instant, Timer};
use log::{debug, info, warn};

use chirp_core::pane::Pane;
use chirp_core::send::{SendOutcome, SendRequest};
use chirp_core::traits::ApiError;

use crate::channels::{
    publish_view, GESTURE_CHANNEL, INBOX_CHANNEL, PERSIST_REQUEST, SEND_OUTCOME, SEND_REQUEST,
};
use crate::store::SharedStore;

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Hand a send to the send task
///
/// A full queue means the send task is still busy; the send is reported
/// back to the pane as failed.
fn dispatch<const N: usize>(
    pane: &mut Pane<SharedStore>,
    request: SendRequest,
    queue: &Channel<CriticalSectionRawMutex, SendRequest, N>,
    now: u64,
) {
    if let Err(TrySendError::Full(request)) = queue.try_send(request) {
        warn!("Send queue full, dropping {}", request.id);
        let outcome = SendOutcome {
            id: request.id,
            result: Err(ApiError::Unavailable),
        };
        pane.send_complete(&outcome, now);
    }
}

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(pane: &'static mut Pane<SharedStore>) {
    info!("Controller task started in {:?}", pane.state());
    publish_view(pane.view());

    loop {
        let wake_at = pane
            .next_deadline()
            .map(Instant::from_millis)
            .unwrap_or(Instant::MAX);

        let before = pane.state();

        match select4(
            GESTURE_CHANNEL.receive(),
            SEND_OUTCOME.receive(),
            INBOX_CHANNEL.receive(),
            Timer::at(wake_at),
        )
        .await
        {
            Either4::First(sample) => {
                let now = now_ms();
                if let Some(request) = pane.gesture(&sample, now) {
                    info!("Sending message {}", request.id);
                    dispatch(pane, request, &SEND_REQUEST, now);
                }
            }

            Either4::Second(outcome) => {
                match &outcome.result {
                    Ok(ack) => info!("Message {} sent (id {})", outcome.id, ack.message_id),
                    Err(e) => warn!("Message {} failed: {:?}", outcome.id, e),
                }
                if !pane.send_complete(&outcome, now_ms()) {
                    debug!("Ignoring stale send outcome for {}", outcome.id);
                }
            }

            Either4::Third(message) => {
                if pane.inbox_result(&message, now_ms()) {
                    info!(
                        "New message from {}: {:?}",
                        message.sender_id, message.text
                    );
                    pane.store().set_inbox_mark(pane.inbox_mark());
                    PERSIST_REQUEST.signal(());
                }
            }

            Either4::Fourth(()) => {
                pane.tick(now_ms());
            }
        }

        if pane.state() != before {
            info!("State: {:?} -> {:?}", before, pane.state());
        }

        publish_view(pane.view());
    }
}
