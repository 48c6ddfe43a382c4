use chase_core::Cell;

/// Manhattan (L1) distance between two cells, in coordinate units.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
