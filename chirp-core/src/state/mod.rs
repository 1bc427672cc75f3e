//! Display state machine
//!
//! Explicit, finite, and deterministic: one [`DisplayState`] is current and
//! [`DisplayState::transition`] is the whole transition table.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::DisplayState;
