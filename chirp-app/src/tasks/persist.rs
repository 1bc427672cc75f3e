//! Persistence task
//!
//! Writes the runtime state file whenever the store asks for it. Requests
//! that arrive while a write is running coalesce into one more write.

use log::{info, warn};

use crate::channels::PERSIST_REQUEST;
use crate::config::StatePersistence;
use crate::store::SharedStore;

/// Persistence task - saves send counters and the inbox mark
#[embassy_executor::task]
pub async fn persist_task(store: SharedStore, persistence: StatePersistence) {
    info!(
        "Persist task started ({})",
        persistence.path().display()
    );

    loop {
        PERSIST_REQUEST.wait().await;

        let state = store.snapshot();
        if let Err(e) = persistence.save(&state) {
            warn!("Failed to save state: {}", e);
        }
    }
}
