//! Animated sprites
//!
//! A sprite is an immutable list of frames. The animation phase lives
//! with whoever draws it, so one sprite can be shared.

use heapless::Vec;

use crate::frame::Frame;

/// Maximum frames per sprite
pub const MAX_SPRITE_FRAMES: usize = 4;

/// Errors building a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteError {
    /// A sprite needs at least one frame
    NoFrames,
    /// More than [`MAX_SPRITE_FRAMES`] frames
    TooManyFrames,
}

/// Image with one or more animation frames
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Never empty
    frames: Vec<Frame, MAX_SPRITE_FRAMES>,
}

impl Sprite {
    /// Single-frame sprite
    pub fn still(frame: Frame) -> Self {
        let mut frames = Vec::new();
        let _ = frames.push(frame);
        Self { frames }
    }

    /// Animated sprite cycling through `frames` in order
    pub fn animated(frames: &[Frame]) -> Result<Self, SpriteError> {
        if frames.is_empty() {
            return Err(SpriteError::NoFrames);
        }
        let frames = Vec::from_slice(frames).map_err(|_| SpriteError::TooManyFrames)?;
        Ok(Self { frames })
    }

    /// Number of animation frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame for an animation phase, wrapping
    pub fn frame(&self, phase: usize) -> &Frame {
        &self.frames[phase % self.frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Rgba;

    fn dot(x: usize) -> Frame {
        let mut f = Frame::new();
        f.set(x, 0, Rgba::WHITE);
        f
    }

    #[test]
    fn test_animation_wraps() {
        let sprite = Sprite::animated(&[dot(0), dot(1)]).unwrap();
        assert_eq!(sprite.frame_count(), 2);
        assert_eq!(sprite.frame(0), &dot(0));
        assert_eq!(sprite.frame(1), &dot(1));
        assert_eq!(sprite.frame(2), &dot(0));
    }

    #[test]
    fn test_still_has_one_frame() {
        let sprite = Sprite::still(dot(3));
        assert_eq!(sprite.frame_count(), 1);
        assert_eq!(sprite.frame(7), &dot(3));
    }

    #[test]
    fn test_frame_limits() {
        assert_eq!(Sprite::animated(&[]).unwrap_err(), SpriteError::NoFrames);
        let too_many = [dot(0), dot(1), dot(2), dot(3), dot(4)];
        assert_eq!(
            Sprite::animated(&too_many).unwrap_err(),
            SpriteError::TooManyFrames
        );
    }
}
