//! Sprite registry
//!
//! Built once at construction and read-only afterwards.

use crate::art;
use crate::frame::Frame;
use crate::sprite::Sprite;

/// Sprites the renderer composes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteKind {
    /// Dimmed bird behind most screens
    Logo,
    /// Flapping bird while a send is in flight
    Sending,
    /// Blinking cross
    Error,
    /// "@" shown when the account is not set up
    Account,
    /// Check mark after a successful send
    Success,
}

impl SpriteKind {
    /// Number of sprite kinds
    pub const COUNT: usize = 5;

    /// Slot in per-kind tables
    pub const fn index(self) -> usize {
        match self {
            SpriteKind::Logo => 0,
            SpriteKind::Sending => 1,
            SpriteKind::Error => 2,
            SpriteKind::Account => 3,
            SpriteKind::Success => 4,
        }
    }
}

/// Immutable set of sprites
#[derive(Debug, Clone)]
pub struct SpriteRegistry {
    sprites: [Sprite; SpriteKind::COUNT],
}

impl SpriteRegistry {
    /// Registry from caller-supplied sprites
    pub fn new(
        logo: Sprite,
        sending: Sprite,
        error: Sprite,
        account: Sprite,
        success: Sprite,
    ) -> Self {
        Self {
            sprites: [logo, sending, error, account, success],
        }
    }

    /// Registry with the built-in art
    pub fn builtin() -> Self {
        Self::new(
            still(&art::LOGO),
            animated(&art::SENDING_0, &art::SENDING_1),
            animated(&art::ERROR_0, &art::ERROR_1),
            still(&art::ACCOUNT),
            animated(&art::TICK_0, &art::TICK_1),
        )
    }

    /// Sprite of one kind
    pub fn get(&self, kind: SpriteKind) -> &Sprite {
        &self.sprites[kind.index()]
    }
}

fn still(rows: &art::Art) -> Sprite {
    Sprite::still(Frame::from_art(rows, &art::PALETTE))
}

fn animated(first: &art::Art, second: &art::Art) -> Sprite {
    let frames = [
        Frame::from_art(first, &art::PALETTE),
        Frame::from_art(second, &art::PALETTE),
    ];
    // Two frames always fit
    Sprite::animated(&frames).unwrap_or_else(|_| still(first))
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Rgba;

    #[test]
    fn test_builtin_sprites_drawn() {
        let registry = SpriteRegistry::builtin();
        for kind in [
            SpriteKind::Logo,
            SpriteKind::Sending,
            SpriteKind::Error,
            SpriteKind::Account,
            SpriteKind::Success,
        ] {
            assert!(registry.get(kind).frame(0).lit_pixels() > 0, "{:?}", kind);
        }
        assert_eq!(registry.get(SpriteKind::Sending).frame_count(), 2);
        assert_eq!(registry.get(SpriteKind::Logo).frame_count(), 1);
    }

    #[test]
    fn test_error_blinks() {
        let registry = SpriteRegistry::builtin();
        let error = registry.get(SpriteKind::Error);
        assert_eq!(error.frame(1).lit_pixels(), 0);
        assert_eq!(error.frame(0).get(0, 0), Some(art::RED));
    }

    #[test]
    fn test_custom_registry() {
        let mut marked = Frame::new();
        marked.set(5, 5, Rgba::WHITE);
        let registry = SpriteRegistry::new(
            Sprite::still(marked.clone()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
        );
        assert_eq!(registry.get(SpriteKind::Logo).frame(0), &marked);
        assert_eq!(registry.get(SpriteKind::Success).frame(0).lit_pixels(), 0);
    }
}
