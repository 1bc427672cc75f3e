//! Persisted runtime state
//!
//! Send counters and the inbox high-water mark change while the pane runs.
//! They are kept apart from the hand-edited message config and stored as
//! postcard binary data.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use super::types::{MessageId, MessageList, MAX_MESSAGES};

/// Current state format version
pub const STATE_VERSION: u8 = 1;

/// Upper bound on the encoded size
pub const MAX_STATE_SIZE: usize = 1024;

/// Errors loading or saving state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// Serialization failed (usually buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// State version mismatch
    VersionMismatch,
}

/// Send counter for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendCountRecord {
    pub id: MessageId,
    pub send_count: u32,
}

/// Snapshot of the mutable runtime state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistedState {
    /// Format version
    pub version: u8,
    /// Timestamp (unix seconds) of the newest inbound message already shown
    pub inbox_mark: u64,
    /// Send counters by message id
    pub send_counts: Vec<SendCountRecord, MAX_MESSAGES>,
}

impl PersistedState {
    /// Capture counters from a list
    pub fn capture(list: &MessageList, inbox_mark: u64) -> Self {
        let mut send_counts = Vec::new();
        for entry in list.iter() {
            let _ = send_counts.push(SendCountRecord {
                id: entry.id.clone(),
                send_count: entry.send_count,
            });
        }
        Self {
            version: STATE_VERSION,
            inbox_mark,
            send_counts,
        }
    }

    /// Restore counters into a freshly loaded list
    ///
    /// Counters never go backwards; ids no longer in the list are skipped.
    pub fn apply(&self, list: &mut MessageList) {
        for record in &self.send_counts {
            let current = match list.get(&record.id) {
                Some(entry) => entry.send_count,
                None => continue,
            };
            for _ in current..record.send_count {
                let _ = list.increment_send_count(&record.id);
            }
        }
    }

    /// Encode into `buf`, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], StateError> {
        postcard::to_slice(self, buf).map_err(|_| StateError::Serialize)
    }

    /// Decode and version-check
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        let state: PersistedState =
            postcard::from_bytes(bytes).map_err(|_| StateError::Deserialize)?;
        if state.version != STATE_VERSION {
            return Err(StateError::VersionMismatch);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageEntry;

    fn make_list() -> MessageList {
        let mut list = MessageList::new();
        list.insert(MessageEntry::new("coffee", "Coffee?", "")).unwrap();
        list.insert(MessageEntry::new("home", "On my way", "@partner"))
            .unwrap();
        list
    }

    #[test]
    fn test_restore_counters() {
        let mut list = make_list();
        list.increment_send_count("home").unwrap();
        list.increment_send_count("home").unwrap();
        let state = PersistedState::capture(&list, 1_700_000_000);

        let mut buf = [0u8; MAX_STATE_SIZE];
        let bytes = state.encode(&mut buf).unwrap();
        let decoded = PersistedState::decode(bytes).unwrap();
        assert_eq!(decoded.inbox_mark, 1_700_000_000);

        let mut fresh = make_list();
        decoded.apply(&mut fresh);
        assert_eq!(fresh.get("home").unwrap().send_count, 2);
        assert_eq!(fresh.get("coffee").unwrap().send_count, 0);
    }

    #[test]
    fn test_version_mismatch() {
        let mut state = PersistedState::capture(&make_list(), 0);
        state.version = STATE_VERSION + 1;
        let mut buf = [0u8; MAX_STATE_SIZE];
        let bytes = state.encode(&mut buf).unwrap();
        assert_eq!(
            PersistedState::decode(bytes),
            Err(StateError::VersionMismatch)
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            PersistedState::decode(&[0xFF, 0xFF, 0xFF]),
            Err(StateError::Deserialize)
        );
    }
}
