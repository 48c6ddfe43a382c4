//! Character output: [`Color`], [`Glyph`], the [`Screen`] buffer, and the
//! [`Frame`] diff handed to drivers.

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0).
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// A character with a foreground colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
        }
    }
}

/// A fixed-size, row-major buffer of glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    width: i32,
    height: i32,
    glyphs: Vec<Glyph>,
}

impl Screen {
    /// Create a blank screen. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Glyph at (x, y), or the blank glyph when out of bounds.
    pub fn at(&self, x: i32, y: i32) -> Glyph {
        self.idx(x, y).map_or_else(Glyph::default, |i| self.glyphs[i])
    }

    /// Set the glyph at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, g: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = g;
        }
    }

    /// Fill every position with `g`.
    pub fn fill(&mut self, g: Glyph) {
        self.glyphs.fill(g);
    }

    /// Write `s` left to right starting at (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Glyph::new(ch, fg));
        }
    }

    /// Copy contents from a screen of the same size, otherwise replace self.
    pub fn copy_from(&mut self, other: &Screen) {
        if self.width == other.width && self.height == other.height {
            self.glyphs.copy_from_slice(&other.glyphs);
        } else {
            *self = other.clone();
        }
    }
}

/// A glyph that changed between two screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGlyph {
    pub x: i32,
    pub y: i32,
    pub glyph: Glyph,
}

/// The set of changes between two screens.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
    pub width: i32,
    pub height: i32,
}

/// Compute the glyphs of `curr` that differ from `prev`.
///
/// If the sizes differ every glyph of `curr` is included.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let full = prev.width != curr.width || prev.height != curr.height;
    let mut glyphs = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let g = curr.at(x, y);
            if full || prev.at(x, y) != g {
                glyphs.push(FrameGlyph { x, y, glyph: g });
            }
        }
    }
    Frame {
        glyphs,
        width: curr.width,
        height: curr.height,
    }
}
