//! Geometry primitives: grid-aligned [`Cell`], continuous [`Pos`], and
//! rectangular [`Obstacle`].
//!
//! All three share one coordinate space. A cell is not an index into a grid
//! but a position whose coordinates are multiples of the cell size, so a
//! 40-unit grid has cells at `(0, 0)`, `(40, 0)`, `(80, 0)` and so on.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid-aligned position. X grows right, Y grows down.
///
/// Equality and hashing are structural, so cells can key maps and sets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Snap a continuous position to the nearest grid-aligned cell.
    ///
    /// Each axis is rounded to the nearest multiple of `cell_size`, with
    /// halves rounding up (towards positive infinity).
    #[inline]
    pub fn snap(pos: Pos, cell_size: i32) -> Self {
        let c = cell_size as f32;
        Self {
            x: ((pos.x / c + 0.5).floor() as i32) * cell_size,
            y: ((pos.y / c + 0.5).floor() as i32) * cell_size,
        }
    }

    /// The continuous position of this cell.
    #[inline]
    pub fn to_pos(self) -> Pos {
        Pos::new(self.x as f32, self.y as f32)
    }

    /// Whether `other` is exactly one `step` away on exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Cell, step: i32) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx == step && dy == 0) || (dx == 0 && dy == step)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Cell {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A continuous position, used for the centre of moving bodies.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Pos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Obstacle
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle covering \[x, x+width) × \[y, y+height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Obstacle {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `c` lies inside the half-open rectangle.
    #[inline]
    pub const fn contains(&self, c: Cell) -> bool {
        c.x >= self.x && c.x < self.x + self.width && c.y >= self.y && c.y < self.y + self.height
    }

    /// Centre of the rectangle.
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Whether a square of side `size` centred on `center` strictly overlaps
    /// this rectangle. Touching edges do not count.
    pub fn overlaps(&self, center: Pos, size: f32) -> bool {
        let half = size / 2.0;
        center.x + half > self.x as f32
            && center.x - half < (self.x + self.width) as f32
            && center.y + half > self.y as f32
            && center.y - half < (self.y + self.height) as f32
    }
}

/// Whether any obstacle in `obstacles` contains `c`.
#[inline]
pub fn blocked(c: Cell, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| o.contains(c))
}
