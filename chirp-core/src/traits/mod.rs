//! Collaborator traits
//!
//! These traits define the interface between the pane logic and the
//! services it depends on.

pub mod messaging;
pub mod store;

pub use messaging::{Ack, ApiError, InboundMessage, MessagingApi, MAX_INBOUND_LEN};
pub use store::{AccountStatus, ConfigStore};
