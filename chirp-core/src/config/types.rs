//! Message list type definitions
//!
//! The list of sendable messages belongs to the configuration store. The
//! pane only ever holds a snapshot of it for the duration of one step.

use heapless::{FnvIndexMap, String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of stored messages (power of two for the index map)
pub const MAX_MESSAGES: usize = 16;

/// Maximum message id length
pub const MAX_ID_LEN: usize = 24;

/// Maximum message body length
pub const MAX_BODY_LEN: usize = 140;

/// Maximum destination (screen name) length
pub const MAX_DESTINATION_LEN: usize = 32;

/// Stable message identifier
pub type MessageId = String<MAX_ID_LEN>;

/// How a message is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delivery {
    /// Public post visible to all followers
    Broadcast,
    /// Private message to one account
    Direct,
}

/// One pre-configured message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageEntry {
    /// Unique name, used as the list key
    pub id: MessageId,
    /// Text to send
    pub body: String<MAX_BODY_LEN>,
    /// Recipient; empty means a public post
    pub destination: String<MAX_DESTINATION_LEN>,
    /// Number of confirmed sends
    ///
    /// Prefixed to the outbound text so the messaging service does not
    /// reject a repeat of the same body as a duplicate.
    pub send_count: u32,
}

impl MessageEntry {
    /// Build an entry, truncating fields that exceed their capacity
    pub fn new(id: &str, body: &str, destination: &str) -> Self {
        Self {
            id: truncated(id),
            body: truncated(body),
            destination: truncated(destination),
            send_count: 0,
        }
    }

    /// Delivery kind derived from the destination
    pub fn delivery(&self) -> Delivery {
        if self.destination.is_empty() {
            Delivery::Broadcast
        } else {
            Delivery::Direct
        }
    }
}

/// Copy as much of `text` as fits, never splitting a character
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Errors from list mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListError {
    /// An entry with the same id already exists
    DuplicateId,
    /// The list is at capacity
    Full,
    /// No entry with that id
    NotFound,
}

/// Ordered message list
///
/// `order` defines browse order; `entries` is the backing map. Both are
/// only changed together, so every ordered id has an entry and vice versa.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    order: Vec<MessageId, MAX_MESSAGES>,
    entries: FnvIndexMap<MessageId, MessageEntry, MAX_MESSAGES>,
}

impl MessageList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: FnvIndexMap::new(),
        }
    }

    /// Append an entry at the end of the browse order
    pub fn insert(&mut self, entry: MessageEntry) -> Result<(), ListError> {
        if self.entries.contains_key(&entry.id) {
            return Err(ListError::DuplicateId);
        }
        if self.order.is_full() {
            return Err(ListError::Full);
        }
        let id = entry.id.clone();
        self.entries
            .insert(id.clone(), entry)
            .map_err(|_| ListError::Full)?;
        // Capacity checked above, both collections share it
        let _ = self.order.push(id);
        Ok(())
    }

    /// Remove an entry by id
    pub fn remove(&mut self, id: &str) -> Result<MessageEntry, ListError> {
        let pos = self
            .order
            .iter()
            .position(|k| k.as_str() == id)
            .ok_or(ListError::NotFound)?;
        let key = self.order.remove(pos);
        self.entries.remove(&key).ok_or(ListError::NotFound)
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&MessageEntry> {
        self.entries.get(&Self::key(id)?)
    }

    /// Entry at a browse position
    pub fn at(&self, index: usize) -> Option<&MessageEntry> {
        self.order.get(index).and_then(|id| self.entries.get(id))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when there is nothing to browse
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in browse order
    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Bump the send counter of one entry, returning the new value
    pub fn increment_send_count(&mut self, id: &str) -> Result<u32, ListError> {
        let key = Self::key(id).ok_or(ListError::NotFound)?;
        let entry = self.entries.get_mut(&key).ok_or(ListError::NotFound)?;
        entry.send_count = entry.send_count.saturating_add(1);
        Ok(entry.send_count)
    }

    /// Map key for an id; ids too long to be stored have none
    fn key(id: &str) -> Option<MessageId> {
        MessageId::try_from(id).ok()
    }
}
