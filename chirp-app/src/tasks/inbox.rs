//! Inbox poll task
//!
//! Periodically fetches the newest inbound message. The controller decides
//! whether it is new; this task only fetches and forwards.

use embassy_time::{Duration, Ticker};
use log::{info, trace, warn};

use chirp_core::traits::{ConfigStore, MessagingApi};

use crate::api::DryRunApi;
use crate::channels::INBOX_CHANNEL;
use crate::store::SharedStore;

/// Inbox poll task - forwards the newest inbound message
#[embassy_executor::task]
pub async fn inbox_task(api: &'static DryRunApi, store: SharedStore, poll_ms: u32) {
    info!("Inbox task started (every {} ms)", poll_ms);

    let mut ticker = Ticker::every(Duration::from_millis(poll_ms as u64));

    loop {
        ticker.next().await;

        if !store.account().initialized {
            trace!("Account not set up, inbox poll skipped");
            continue;
        }

        match api.fetch_latest_inbound().await {
            Ok(Some(message)) => {
                trace!("Newest inbound at {}", message.created_at);
                INBOX_CHANNEL.send(message).await;
            }
            Ok(None) => {}
            Err(e) => warn!("Inbox poll failed: {:?}", e),
        }
    }
}
