//! Terminal preview of the LED matrix
//!
//! Draws each frame with ANSI true-colour half blocks, two pixel rows per
//! text line. Logs go to stderr, so redirecting them keeps the preview
//! steady.

use std::io::Write;

use log::warn;

use chirp_core::gesture::GestureSample;
use chirp_display::{
    DisplayError, Frame, FrameSink, LedPane, Renderer, Rgba, PANE_HEIGHT, PANE_WIDTH,
};

use crate::channels::{current_view, GESTURE_CHANNEL};

/// Text lines per frame
const PREVIEW_LINES: usize = PANE_HEIGHT / 2;

/// Background used for transparent pixels
const OFF: Rgba = Rgba::opaque(0, 0, 0);

/// Pane as seen by the LED controller
///
/// Gestures go to the controller task; frames are rendered from the last
/// published view.
pub struct PaneHandle {
    renderer: Renderer,
    keep_awake: bool,
}

impl PaneHandle {
    pub fn new(renderer: Renderer, keep_awake: bool) -> Self {
        Self {
            renderer,
            keep_awake,
        }
    }
}

impl LedPane for PaneHandle {
    fn gesture(&mut self, sample: &GestureSample) {
        if GESTURE_CHANNEL.try_send(*sample).is_err() {
            warn!("Gesture channel full, sample dropped");
        }
    }

    fn render(&mut self) -> Frame {
        self.renderer.render(&current_view())
    }

    fn keep_awake(&self) -> bool {
        self.keep_awake
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Frame sink writing to the terminal
pub struct TerminalSink<W: Write> {
    out: W,
    last: Option<Frame>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }

        let mut text = String::new();
        if self.last.is_some() {
            // Redraw over the previous frame
            text.push_str(&format!("\x1b[{}A", PREVIEW_LINES));
        }
        text.push_str(&to_ansi(frame));

        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|_| DisplayError::Communication)?;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Frame as ANSI text, one line per two pixel rows
pub fn to_ansi(frame: &Frame) -> String {
    let mut text = String::new();
    for row in 0..PREVIEW_LINES {
        for x in 0..PANE_WIDTH {
            let top = shade(frame, x, row * 2);
            let bottom = shade(frame, x, row * 2 + 1);
            text.push_str(&format!(
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
            ));
        }
        text.push_str("\x1b[0m\n");
    }
    text
}

fn shade(frame: &Frame, x: usize, y: usize) -> Rgba {
    frame.get(x, y).map(|px| px.over(OFF)).unwrap_or(OFF)
}
