//! Gesture input
//!
//! Turns raw sensor samples into debounced tap / double-tap actions.

pub mod classifier;
pub mod sample;

pub use classifier::{Classified, GestureClassifier, TapDirection};
pub use sample::{GestureSample, Location};
