//! LED controller traits
//!
//! Defines the interface between the pane and whatever drives the
//! physical matrix.

use chirp_core::gesture::GestureSample;

use crate::frame::Frame;

/// Frame sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the matrix
    Communication,
}

/// Pane as seen by the LED controller
///
/// The controller forwards every gesture sample and pulls frames at its
/// own rate. `render` must be cheap and never block.
pub trait LedPane {
    /// Feed one gesture sample
    fn gesture(&mut self, sample: &GestureSample);

    /// Current frame
    fn render(&mut self) -> Frame;

    /// Keep the matrix lit instead of fading after inactivity
    fn keep_awake(&self) -> bool;

    /// Whether the controller should show this pane
    fn is_enabled(&self) -> bool;
}

/// Destination for rendered frames
pub trait FrameSink {
    /// Push one frame to the matrix
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError>;

    /// Check if the sink is ready
    fn is_ready(&self) -> bool;
}
