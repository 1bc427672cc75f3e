//! Outbound send operation
//!
//! A send works on a snapshot of one message and reports the result. It
//! never touches the configuration; the pane bumps the counter when the
//! result comes back.

use core::fmt::Write;

use heapless::String;

use crate::config::{Delivery, MessageEntry, MessageId, MAX_BODY_LEN, MAX_DESTINATION_LEN};
use crate::traits::{Ack, ApiError, MessagingApi};

/// Outbound text capacity: counter digits, a space, and the body
pub const MAX_OUTBOUND_LEN: usize = MAX_BODY_LEN + 11;

/// Snapshot of the message being sent
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendRequest {
    pub id: MessageId,
    pub body: String<MAX_BODY_LEN>,
    pub destination: String<MAX_DESTINATION_LEN>,
    pub send_count: u32,
}

impl SendRequest {
    /// Snapshot an entry
    pub fn from_entry(entry: &MessageEntry) -> Self {
        Self {
            id: entry.id.clone(),
            body: entry.body.clone(),
            destination: entry.destination.clone(),
            send_count: entry.send_count,
        }
    }

    /// Delivery kind
    pub fn delivery(&self) -> Delivery {
        if self.destination.is_empty() {
            Delivery::Broadcast
        } else {
            Delivery::Direct
        }
    }

    /// Text handed to the service, send counter first
    pub fn outbound_text(&self) -> String<MAX_OUTBOUND_LEN> {
        let mut text = String::new();
        // u32 plus separator plus body always fits
        let _ = write!(text, "{} {}", self.send_count, self.body);
        text
    }
}

/// Result of one send, routed back to the pane
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendOutcome {
    /// Message the send was for
    pub id: MessageId,
    pub result: Result<Ack, ApiError>,
}

/// Perform one send
pub async fn perform<A: MessagingApi>(api: &A, request: &SendRequest) -> SendOutcome {
    let text = request.outbound_text();
    let result = match request.delivery() {
        Delivery::Broadcast => api.post(&text).await,
        Delivery::Direct => api.send_direct(&text, &request.destination).await,
    };
    SendOutcome {
        id: request.id.clone(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InboundMessage;
    use core::cell::RefCell;
    use core::future::Future;
    use core::pin::pin;
    use core::task::{Context, Poll, Waker};

    /// Drive a future that never pends
    fn block_on<F: Future>(fut: F) -> F::Output {
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(fut);
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[derive(Default)]
    struct RecordingApi {
        posts: RefCell<std::vec::Vec<std::string::String>>,
        directs: RefCell<std::vec::Vec<(std::string::String, std::string::String)>>,
        fail: bool,
    }

    impl MessagingApi for RecordingApi {
        async fn post(&self, text: &str) -> Result<Ack, ApiError> {
            self.posts.borrow_mut().push(text.into());
            if self.fail {
                Err(ApiError::Rejected)
            } else {
                Ok(Ack { message_id: 1 })
            }
        }

        async fn send_direct(&self, text: &str, destination: &str) -> Result<Ack, ApiError> {
            self.directs
                .borrow_mut()
                .push((text.into(), destination.into()));
            if self.fail {
                Err(ApiError::Unavailable)
            } else {
                Ok(Ack { message_id: 2 })
            }
        }

        async fn fetch_latest_inbound(&self) -> Result<Option<InboundMessage>, ApiError> {
            Ok(None)
        }
    }

    #[test]
    fn test_outbound_text_prefixes_counter() {
        let mut entry = MessageEntry::new("coffee", "Coffee?", "");
        entry.send_count = 7;
        let req = SendRequest::from_entry(&entry);
        assert_eq!(req.outbound_text().as_str(), "7 Coffee?");
    }

    #[test]
    fn test_outbound_text_fits_full_body() {
        let mut entry = MessageEntry::new("long", &"y".repeat(MAX_BODY_LEN), "");
        entry.send_count = u32::MAX;
        let text = SendRequest::from_entry(&entry).outbound_text();
        assert!(text.ends_with(entry.body.as_str()));
    }

    #[test]
    fn test_broadcast_uses_post() {
        let api = RecordingApi::default();
        let req = SendRequest::from_entry(&MessageEntry::new("a", "hi", ""));
        let outcome = block_on(perform(&api, &req));
        assert_eq!(outcome.result, Ok(Ack { message_id: 1 }));
        assert_eq!(outcome.id.as_str(), "a");
        assert_eq!(api.posts.borrow().as_slice(), ["0 hi"]);
        assert!(api.directs.borrow().is_empty());
    }

    #[test]
    fn test_direct_uses_send_direct() {
        let api = RecordingApi::default();
        let req = SendRequest::from_entry(&MessageEntry::new("a", "hi", "@friend"));
        let outcome = block_on(perform(&api, &req));
        assert!(outcome.result.is_ok());
        assert_eq!(
            api.directs.borrow().as_slice(),
            [(
                std::string::String::from("0 hi"),
                std::string::String::from("@friend")
            )]
        );
        assert!(api.posts.borrow().is_empty());
    }

    #[test]
    fn test_failure_reported() {
        let api = RecordingApi {
            fail: true,
            ..Default::default()
        };
        let req = SendRequest::from_entry(&MessageEntry::new("a", "hi", "@friend"));
        let outcome = block_on(perform(&api, &req));
        assert_eq!(outcome.result, Err(ApiError::Unavailable));
    }
}
