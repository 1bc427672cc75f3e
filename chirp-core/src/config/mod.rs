//! Configuration types
//!
//! Message list, timer periods, and the persisted runtime state.

#[cfg(feature = "serde")]
pub mod state;
pub mod timings;
pub mod types;

#[cfg(feature = "serde")]
pub use state::{PersistedState, SendCountRecord, StateError, MAX_STATE_SIZE, STATE_VERSION};
pub use timings::*;
pub use types::*;
