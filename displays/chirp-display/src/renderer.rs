//! Frame rendering
//!
//! Builds the frame for each display state. Layers are composited in
//! order, so later layers cover earlier ones where they are opaque.

use core::fmt::Write;

use chirp_core::config::Delivery;
use chirp_core::pane::PaneView;
use chirp_core::state::DisplayState;
use heapless::String;

use crate::art;
use crate::font;
use crate::frame::{Frame, Rgba};
use crate::registry::{SpriteKind, SpriteRegistry};

/// Message number while browsing
const BROWSE_COLOR: Rgba = Rgba::opaque(255, 250, 0);
/// Message number while sending
const SENDING_COLOR: Rgba = art::BLUE;
/// Message number next to a send result
const RESULT_COLOR: Rgba = Rgba::WHITE;
/// "NO" on an empty list
const EMPTY_COLOR: Rgba = Rgba::opaque(255, 0, 0);
/// Broadcast marker
const BROADCAST_COLOR: Rgba = Rgba::opaque(20, 255, 20);
/// Direct marker and new-message banner
const DIRECT_COLOR: Rgba = Rgba::opaque(20, 255, 250);

const POSITION_AT: (usize, usize) = (6, 3);
const EMPTY_AT: (usize, usize) = (4, 5);
const BROADCAST_AT: (usize, usize) = (2, 10);
const DIRECT_AT: (usize, usize) = (3, 10);
const NEW_AT: (usize, usize) = (1, 3);

/// Renderer for pane views
///
/// Only the animation phases change between calls; the same view always
/// composes the same layers.
pub struct Renderer {
    registry: SpriteRegistry,
    phases: [usize; SpriteKind::COUNT],
}

impl Renderer {
    /// Create a renderer over a sprite registry
    pub fn new(registry: SpriteRegistry) -> Self {
        Self {
            registry,
            phases: [0; SpriteKind::COUNT],
        }
    }

    /// Render one frame for `view`
    pub fn render(&mut self, view: &PaneView) -> Frame {
        let mut frame = Frame::new();

        match view.state {
            DisplayState::AccountError => {
                self.layer(&mut frame, SpriteKind::Account);
                self.layer(&mut frame, SpriteKind::Error);
            }
            DisplayState::Browsing => {
                self.layer(&mut frame, SpriteKind::Logo);
                if view.cursor.position().is_none() {
                    text(&mut frame, EMPTY_AT, "NO", EMPTY_COLOR);
                } else {
                    position(&mut frame, view, BROWSE_COLOR);
                    match view.delivery {
                        Some(Delivery::Broadcast) => {
                            text(&mut frame, BROADCAST_AT, "TWT", BROADCAST_COLOR)
                        }
                        Some(Delivery::Direct) => text(&mut frame, DIRECT_AT, "DM", DIRECT_COLOR),
                        None => {}
                    }
                }
            }
            DisplayState::Sending => {
                self.layer(&mut frame, SpriteKind::Sending);
                position(&mut frame, view, SENDING_COLOR);
            }
            DisplayState::SendSucceeded => {
                self.layer(&mut frame, SpriteKind::Logo);
                self.layer(&mut frame, SpriteKind::Success);
                position(&mut frame, view, RESULT_COLOR);
            }
            DisplayState::SendFailed => {
                self.layer(&mut frame, SpriteKind::Logo);
                self.layer(&mut frame, SpriteKind::Error);
                position(&mut frame, view, RESULT_COLOR);
            }
            DisplayState::NewNotification => {
                self.layer(&mut frame, SpriteKind::Logo);
                text(&mut frame, NEW_AT, "NEW", DIRECT_COLOR);
                text(&mut frame, DIRECT_AT, "DM", DIRECT_COLOR);
            }
        }

        frame
    }

    /// Draw the next animation frame of a sprite
    fn layer(&mut self, frame: &mut Frame, kind: SpriteKind) {
        let sprite = self.registry.get(kind);
        let phase = &mut self.phases[kind.index()];
        frame.draw_over(sprite.frame(*phase));
        *phase = (*phase + 1) % sprite.frame_count();
    }
}

fn text(frame: &mut Frame, (x, y): (usize, usize), s: &str, color: Rgba) {
    font::draw_str(frame, x, y, s, color);
}

/// 1-based message number
fn position(frame: &mut Frame, view: &PaneView, color: Rgba) {
    if let Some(pos) = view.cursor.position() {
        let mut digits: String<20> = String::new();
        let _ = write!(digits, "{}", pos);
        text(frame, POSITION_AT, &digits, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::Sprite;
    use chirp_core::cursor::BrowseCursor;

    fn view(state: DisplayState, cursor: BrowseCursor, delivery: Option<Delivery>) -> PaneView {
        PaneView {
            state,
            cursor,
            message_count: 3,
            delivery,
        }
    }

    /// Expected frame built layer by layer
    fn layers(sprites: &[&Frame], texts: &[((usize, usize), &str, Rgba)]) -> Frame {
        let mut frame = Frame::new();
        for sprite in sprites {
            frame.draw_over(sprite);
        }
        for (at, s, color) in texts {
            text(&mut frame, *at, s, *color);
        }
        frame
    }

    #[test]
    fn test_account_error_composition() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let frame = renderer.render(&PaneView::blank());

        let expected = layers(
            &[
                registry.get(SpriteKind::Account).frame(0),
                registry.get(SpriteKind::Error).frame(0),
            ],
            &[],
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_browsing_broadcast() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let frame = renderer.render(&view(
            DisplayState::Browsing,
            BrowseCursor::At(1),
            Some(Delivery::Broadcast),
        ));

        let expected = layers(
            &[registry.get(SpriteKind::Logo).frame(0)],
            &[
                (POSITION_AT, "2", BROWSE_COLOR),
                (BROADCAST_AT, "TWT", BROADCAST_COLOR),
            ],
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_browsing_direct() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let frame = renderer.render(&view(
            DisplayState::Browsing,
            BrowseCursor::At(9),
            Some(Delivery::Direct),
        ));

        let expected = layers(
            &[registry.get(SpriteKind::Logo).frame(0)],
            &[
                (POSITION_AT, "10", BROWSE_COLOR),
                (DIRECT_AT, "DM", DIRECT_COLOR),
            ],
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_browsing_empty_shows_no() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let frame = renderer.render(&view(DisplayState::Browsing, BrowseCursor::Empty, None));

        let expected = layers(
            &[registry.get(SpriteKind::Logo).frame(0)],
            &[(EMPTY_AT, "NO", EMPTY_COLOR)],
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_send_results() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());

        let ok = renderer.render(&view(DisplayState::SendSucceeded, BrowseCursor::At(0), None));
        let expected = layers(
            &[
                registry.get(SpriteKind::Logo).frame(0),
                registry.get(SpriteKind::Success).frame(0),
            ],
            &[(POSITION_AT, "1", RESULT_COLOR)],
        );
        assert_eq!(ok, expected);

        let failed = renderer.render(&view(DisplayState::SendFailed, BrowseCursor::At(0), None));
        let expected = layers(
            &[
                registry.get(SpriteKind::Logo).frame(0),
                registry.get(SpriteKind::Error).frame(0),
            ],
            &[(POSITION_AT, "1", RESULT_COLOR)],
        );
        assert_eq!(failed, expected);
    }

    #[test]
    fn test_notification() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let frame = renderer.render(&view(
            DisplayState::NewNotification,
            BrowseCursor::At(0),
            Some(Delivery::Broadcast),
        ));

        let expected = layers(
            &[registry.get(SpriteKind::Logo).frame(0)],
            &[(NEW_AT, "NEW", DIRECT_COLOR), (DIRECT_AT, "DM", DIRECT_COLOR)],
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_sending_animates() {
        let registry = SpriteRegistry::builtin();
        let mut renderer = Renderer::new(registry.clone());
        let sending = view(DisplayState::Sending, BrowseCursor::At(2), None);

        let first = renderer.render(&sending);
        let second = renderer.render(&sending);
        let third = renderer.render(&sending);

        let sprite = registry.get(SpriteKind::Sending);
        let expect = |phase| layers(&[sprite.frame(phase)], &[(POSITION_AT, "3", SENDING_COLOR)]);
        assert_eq!(first, expect(0));
        assert_eq!(second, expect(1));
        assert_eq!(third, first);
    }

    #[test]
    fn test_custom_sprites() {
        let mut dot = Frame::new();
        dot.set(15, 15, Rgba::WHITE);
        let registry = SpriteRegistry::new(
            Sprite::still(dot.clone()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
            Sprite::still(Frame::new()),
        );
        let mut renderer = Renderer::new(registry);
        let frame = renderer.render(&view(DisplayState::Browsing, BrowseCursor::Empty, None));
        assert_eq!(frame.get(15, 15), Some(Rgba::WHITE));
    }
}
