//! RGBA frame buffer
//!
//! 16×16 pixels, row-major, four bytes per pixel.

/// Pane width in pixels
pub const PANE_WIDTH: usize = 16;

/// Pane height in pixels
pub const PANE_HEIGHT: usize = 16;

/// Size of a frame on the wire
pub const FRAME_BYTES: usize = PANE_WIDTH * PANE_HEIGHT * 4;

/// One pixel, straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Composite `self` over `dst`
    pub fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u16;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * inv) / 255) as u8;
                Rgba {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (a + dst.a as u16 * inv / 255) as u8,
                }
            }
        }
    }
}

/// One frame for the LED matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [Rgba; PANE_WIDTH * PANE_HEIGHT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Fully transparent frame
    pub const fn new() -> Self {
        Self {
            pixels: [Rgba::TRANSPARENT; PANE_WIDTH * PANE_HEIGHT],
        }
    }

    /// Build a frame from character art, one string per row
    ///
    /// Characters missing from `palette` are transparent; rows and
    /// columns past the pane edge are ignored.
    pub fn from_art(rows: &[&str], palette: &[(char, Rgba)]) -> Self {
        let mut frame = Self::new();
        for (y, row) in rows.iter().enumerate().take(PANE_HEIGHT) {
            for (x, ch) in row.chars().enumerate().take(PANE_WIDTH) {
                if let Some((_, color)) = palette.iter().find(|(key, _)| *key == ch) {
                    frame.set(x, y, *color);
                }
            }
        }
        frame
    }

    /// Pixel at (x, y), if inside the pane
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < PANE_WIDTH && y < PANE_HEIGHT {
            Some(self.pixels[y * PANE_WIDTH + x])
        } else {
            None
        }
    }

    /// Overwrite one pixel; out-of-range coordinates are clipped
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < PANE_WIDTH && y < PANE_HEIGHT {
            self.pixels[y * PANE_WIDTH + x] = color;
        }
    }

    /// Composite one pixel over the current content
    pub fn blend(&mut self, x: usize, y: usize, color: Rgba) {
        if let Some(dst) = self.get(x, y) {
            self.set(x, y, color.over(dst));
        }
    }

    /// Composite a whole layer over this frame
    pub fn draw_over(&mut self, layer: &Frame) {
        for (dst, src) in self.pixels.iter_mut().zip(layer.pixels.iter()) {
            *dst = src.over(*dst);
        }
    }

    /// Count of pixels that are not fully transparent
    #[cfg(test)]
    pub(crate) fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.a != 0).count()
    }

    /// Wire format: row-major RGBA bytes
    pub fn to_bytes(&self) -> [u8; FRAME_BYTES] {
        let mut out = [0u8; FRAME_BYTES];
        for (chunk, px) in out.chunks_exact_mut(4).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }
}
