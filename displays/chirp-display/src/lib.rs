//! Frame rendering for the Chirp 16×16 LED pane
//!
//! This crate provides:
//! - `Frame` RGBA buffer with source-over compositing
//! - `Sprite` animations and the immutable `SpriteRegistry`
//! - A 3×5 bitmap font for counters and short markers
//! - `Renderer` turning a [`chirp_core::pane::PaneView`] into a frame
//! - `LedPane` / `FrameSink` traits facing the LED controller
//!
//! # Architecture
//!
//! The renderer never reads pane internals. The controller publishes a
//! `PaneView` after every step and the display side composes layers for
//! that view, so rendering cannot fail and never waits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod art;
pub mod backend;
pub mod font;
pub mod frame;
pub mod registry;
pub mod renderer;
pub mod sprite;

// Re-export key types
pub use backend::{DisplayError, FrameSink, LedPane};
pub use frame::{Frame, Rgba, FRAME_BYTES, PANE_HEIGHT, PANE_WIDTH};
pub use registry::{SpriteKind, SpriteRegistry};
pub use renderer::Renderer;
pub use sprite::{Sprite, SpriteError, MAX_SPRITE_FRAMES};
