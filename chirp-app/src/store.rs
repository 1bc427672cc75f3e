//! Shared configuration store
//!
//! The controller reads the store through its `ConfigStore` impl, the
//! persist task snapshots it, and the console flips the account flag.
//! All access goes through one blocking mutex and never spans an await.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use chirp_core::config::{ListError, MessageList, PersistedState};
use chirp_core::traits::{AccountStatus, ConfigStore};

use crate::channels::PERSIST_REQUEST;

/// Store contents
#[derive(Debug, Clone)]
pub struct StoreData {
    pub account: AccountStatus,
    pub messages: MessageList,
    /// Newest inbound timestamp already shown
    pub inbox_mark: u64,
}

/// Storage for the shared store
pub type StoreCell = Mutex<CriticalSectionRawMutex, RefCell<StoreData>>;

/// Cheap handle to the shared store
#[derive(Clone, Copy)]
pub struct SharedStore {
    cell: &'static StoreCell,
}

impl SharedStore {
    pub fn new(cell: &'static StoreCell) -> Self {
        Self { cell }
    }

    /// Mark the account as set up (or not)
    pub fn set_account(&self, initialized: bool) {
        self.cell
            .lock(|data| data.borrow_mut().account = AccountStatus { initialized });
    }

    /// Record the inbox mark for the next save
    pub fn set_inbox_mark(&self, mark: u64) {
        self.cell.lock(|data| data.borrow_mut().inbox_mark = mark);
    }

    /// State to write to the state file
    pub fn snapshot(&self) -> PersistedState {
        self.cell.lock(|data| {
            let data = data.borrow();
            PersistedState::capture(&data.messages, data.inbox_mark)
        })
    }
}

impl ConfigStore for SharedStore {
    fn account(&self) -> AccountStatus {
        self.cell.lock(|data| data.borrow().account)
    }

    fn messages(&self) -> MessageList {
        self.cell.lock(|data| data.borrow().messages.clone())
    }

    fn increment_send_count(&mut self, id: &str) -> Result<u32, ListError> {
        self.cell
            .lock(|data| data.borrow_mut().messages.increment_send_count(id))
    }

    fn persist(&mut self) {
        PERSIST_REQUEST.signal(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_core::config::MessageEntry;

    fn make_store() -> SharedStore {
        let mut messages = MessageList::new();
        messages.insert(MessageEntry::new("a", "hi", "")).unwrap();
        let cell: &'static StoreCell = Box::leak(Box::new(Mutex::new(RefCell::new(StoreData {
            account: AccountStatus { initialized: false },
            messages,
            inbox_mark: 0,
        }))));
        SharedStore::new(cell)
    }

    #[test]
    fn test_account_flip() {
        let store = make_store();
        assert!(!store.account().initialized);
        store.set_account(true);
        assert!(store.account().initialized);
    }

    #[test]
    fn test_increment_visible_in_snapshot() {
        let mut store = make_store();
        let before = store.messages();
        assert_eq!(store.increment_send_count("a"), Ok(1));
        assert_eq!(store.increment_send_count("zz"), Err(ListError::NotFound));
        store.set_inbox_mark(77);

        // Earlier snapshots are not affected
        assert_eq!(before.get("a").unwrap().send_count, 0);

        let state = store.snapshot();
        assert_eq!(state.inbox_mark, 77);
        assert_eq!(state.send_counts[0].send_count, 1);
    }
}
