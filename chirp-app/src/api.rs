//! Dry-run messaging backend
//!
//! Logs outbound messages instead of sending them and serves inbound
//! messages typed into the console. Latency and failures can be toggled
//! at runtime to exercise the send path.

use core::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Timer;
use log::info;

use chirp_core::config::truncated;
use chirp_core::traits::{Ack, ApiError, InboundMessage, MessagingApi};

/// Simulated round trip
pub const DEFAULT_LATENCY_MS: u32 = 300;

/// Messaging backend that never leaves the process
pub struct DryRunApi {
    account: String,
    latency_ms: AtomicU32,
    failing: AtomicBool,
    next_id: AtomicU64,
    inbox: Mutex<CriticalSectionRawMutex, RefCell<Option<InboundMessage>>>,
}

impl DryRunApi {
    pub fn new(account: &str) -> Self {
        Self {
            account: account.into(),
            latency_ms: AtomicU32::new(DEFAULT_LATENCY_MS),
            failing: AtomicBool::new(false),
            next_id: AtomicU64::new(1),
            inbox: Mutex::new(RefCell::new(None)),
        }
    }

    /// Make every following send fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Simulated round trip for sends
    pub fn set_latency_ms(&self, ms: u32) {
        self.latency_ms.store(ms, Ordering::Relaxed);
    }

    /// Deliver an inbound private message
    ///
    /// Timestamps are unix seconds, bumped if needed so each injected
    /// message is strictly newer than the previous one.
    pub fn inject_inbound(&self, sender: &str, text: &str) -> InboundMessage {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.inbox.lock(|inbox| {
            let mut inbox = inbox.borrow_mut();
            let created_at = match inbox.as_ref() {
                Some(prev) if prev.created_at >= now => prev.created_at + 1,
                _ => now,
            };
            let message = InboundMessage {
                sender_id: truncated(sender),
                text: truncated(text),
                created_at,
            };
            *inbox = Some(message.clone());
            message
        })
    }

    async fn deliver(&self, kind: &str, text: &str, destination: &str) -> Result<Ack, ApiError> {
        Timer::after_millis(self.latency_ms.load(Ordering::Relaxed) as u64).await;

        if self.failing.load(Ordering::Relaxed) {
            info!("[dry-run] {} rejected: {:?}", kind, text);
            return Err(ApiError::Rejected);
        }

        let message_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        info!(
            "[dry-run] {} #{} from {} to {}: {:?}",
            kind, message_id, self.account, destination, text
        );
        Ok(Ack { message_id })
    }
}

impl MessagingApi for DryRunApi {
    async fn post(&self, text: &str) -> Result<Ack, ApiError> {
        self.deliver("post", text, "followers").await
    }

    async fn send_direct(&self, text: &str, destination: &str) -> Result<Ack, ApiError> {
        self.deliver("direct", text, destination).await
    }

    async fn fetch_latest_inbound(&self) -> Result<Option<InboundMessage>, ApiError> {
        Ok(self.inbox.lock(|inbox| inbox.borrow().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_messages_strictly_newer() {
        let api = DryRunApi::new("@me");
        let first = api.inject_inbound("@a", "one");
        let second = api.inject_inbound("@b", "two");
        let third = api.inject_inbound("@c", "three");
        assert!(second.created_at > first.created_at);
        assert!(third.created_at > second.created_at);
        assert_eq!(third.sender_id.as_str(), "@c");
    }

    #[test]
    fn test_long_inbound_truncated() {
        let api = DryRunApi::new("@me");
        let text = "z".repeat(500);
        let message = api.inject_inbound("@a", &text);
        assert_eq!(message.text.len(), chirp_core::traits::MAX_INBOUND_LEN);
    }
}
