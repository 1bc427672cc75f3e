//! Board-agnostic core logic for the chirp message pane
//!
//! This crate contains everything that does not depend on a runtime,
//! a messaging service, or a physical display:
//!
//! - Message list and timing configuration types
//! - Gesture classification with tap debounce
//! - Display state machine and browse cursor
//! - Pane controller driving both from gestures, timers, and send results
//! - Traits for the messaging service and configuration store

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod gesture;
pub mod pane;
pub mod send;
pub mod state;
pub mod timer;
pub mod traits;
