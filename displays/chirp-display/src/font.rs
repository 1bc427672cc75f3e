//! 3×5 bitmap font
//!
//! Upper-case letters and digits. Each glyph row is three bits, most
//! significant bit on the left. Glyphs advance four pixels.

use crate::frame::{Frame, Rgba};

/// Glyph width in pixels
pub const GLYPH_WIDTH: usize = 3;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 5;

/// Horizontal advance per character
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const LETTERS: [Glyph; 26] = [
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b011, 0b100, 0b100, 0b100, 0b011], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b100, 0b110, 0b100, 0b100], // F
    [0b011, 0b100, 0b101, 0b101, 0b011], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b001, 0b001, 0b001, 0b101, 0b010], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b110, 0b101, 0b101, 0b101, 0b101], // N
    [0b010, 0b101, 0b101, 0b101, 0b010], // O
    [0b110, 0b101, 0b110, 0b100, 0b100], // P
    [0b010, 0b101, 0b101, 0b110, 0b011], // Q
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b011, 0b100, 0b010, 0b001, 0b110], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b111], // U
    [0b101, 0b101, 0b101, 0b101, 0b010], // V
    [0b101, 0b101, 0b111, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b010, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
];

fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        c @ '0'..='9' => DIGITS.get(c as usize - '0' as usize),
        c @ 'A'..='Z' => LETTERS.get(c as usize - 'A' as usize),
        _ => None,
    }
}

/// Draw `text` with its top-left corner at (x, y)
///
/// Unknown characters leave a blank cell. Pixels past the pane edge are
/// clipped. Returns the x position after the last character.
pub fn draw_str(frame: &mut Frame, x: usize, y: usize, text: &str, color: Rgba) -> usize {
    let mut cx = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (dy, bits) in rows.iter().enumerate() {
                for dx in 0..GLYPH_WIDTH {
                    if bits & (0b100 >> dx) != 0 {
                        frame.blend(cx + dx, y + dy, color);
                    }
                }
            }
        }
        cx += ADVANCE;
    }
    cx
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);

    fn lit(frame: &Frame) -> std::vec::Vec<(usize, usize)> {
        let mut out = std::vec::Vec::new();
        for y in 0..16 {
            for x in 0..16 {
                if frame.get(x, y).is_some_and(|p| p.a != 0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_digit_one() {
        let mut frame = Frame::new();
        draw_str(&mut frame, 0, 0, "1", RED);
        assert_eq!(
            lit(&frame),
            [(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn test_advance() {
        let mut frame = Frame::new();
        assert_eq!(draw_str(&mut frame, 2, 10, "TWT", RED), 14);
        assert_eq!(draw_str(&mut frame, 0, 0, "", RED), 0);
    }

    #[test]
    fn test_lowercase_and_unknown() {
        let mut upper = Frame::new();
        let mut lower = Frame::new();
        draw_str(&mut upper, 0, 0, "DM", RED);
        draw_str(&mut lower, 0, 0, "dm", RED);
        assert_eq!(upper, lower);

        let mut blank = Frame::new();
        assert_eq!(draw_str(&mut blank, 0, 0, "?!", RED), 8);
        assert_eq!(blank.lit_pixels(), 0);
    }

    #[test]
    fn test_clipped_at_edge() {
        let mut frame = Frame::new();
        draw_str(&mut frame, 14, 13, "8", RED);
        // Only the left two columns and top three rows are on the pane
        assert!(lit(&frame).iter().all(|&(x, y)| x < 16 && y < 16));
        assert_eq!(frame.lit_pixels(), 5);
    }

    #[test]
    fn test_every_glyph_has_pixels() {
        for ch in ('0'..='9').chain('A'..='Z') {
            let mut frame = Frame::new();
            draw_str(&mut frame, 0, 0, ch.encode_utf8(&mut [0; 4]), RED);
            assert!(frame.lit_pixels() > 0, "{}", ch);
        }
    }
}
