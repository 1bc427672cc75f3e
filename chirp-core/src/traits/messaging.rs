//! Messaging service trait
//!
//! Abstracts the remote messaging API. Transport and authentication live
//! entirely in implementations.

use heapless::String;

use crate::config::MAX_DESTINATION_LEN;

/// Maximum inbound text kept for logging
pub const MAX_INBOUND_LEN: usize = 140;

/// Errors from the messaging service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApiError {
    /// Account credentials missing or rejected
    NotAuthorized,
    /// Service refused the message (duplicate, too long, unknown recipient)
    Rejected,
    /// Network or service unavailable
    Unavailable,
    /// No answer within the send timeout
    Timeout,
}

/// Service acknowledgement of an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ack {
    /// Service-assigned message id
    pub message_id: u64,
}

/// Most recent private message received by the account
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboundMessage {
    pub sender_id: String<MAX_DESTINATION_LEN>,
    pub text: String<MAX_INBOUND_LEN>,
    /// Creation time, unix seconds
    pub created_at: u64,
}

/// Remote messaging service
///
/// Methods take `&self` so the send task and the inbox poller can share
/// one client.
pub trait MessagingApi {
    /// Publish a public post
    fn post(&self, text: &str) -> impl core::future::Future<Output = Result<Ack, ApiError>>;

    /// Send a private message to one account
    fn send_direct(
        &self,
        text: &str,
        destination: &str,
    ) -> impl core::future::Future<Output = Result<Ack, ApiError>>;

    /// Fetch at most one, the newest, inbound private message
    fn fetch_latest_inbound(
        &self,
    ) -> impl core::future::Future<Output = Result<Option<InboundMessage>, ApiError>>;
}
