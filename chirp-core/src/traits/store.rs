//! Configuration store trait
//!
//! The store owns the message list and the account status. The pane reads
//! snapshots and is allowed exactly one kind of write: bumping a send
//! counter after a confirmed send.

use crate::config::{ListError, MessageList};

/// Messaging account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccountStatus {
    /// Credentials were accepted by the service
    pub initialized: bool,
}

/// Configuration store seen by the pane
pub trait ConfigStore {
    /// Current account status
    fn account(&self) -> AccountStatus;

    /// Snapshot of the message list
    ///
    /// Valid for one pane step only; the store may change between calls.
    fn messages(&self) -> MessageList;

    /// Bump the send counter of one message, returning the new value
    fn increment_send_count(&mut self, id: &str) -> Result<u32, ListError>;

    /// Ask the store to save its current contents
    ///
    /// Fire-and-forget: the pane does not wait for completion.
    fn persist(&mut self);
}
