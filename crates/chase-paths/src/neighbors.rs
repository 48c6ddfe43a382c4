use chase_core::{Cell, Obstacle, blocked};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

/// Unit directions in enumeration order: up, right, down, left.
///
/// The order decides which of several equally promising cells the search
/// discovers first, so it must not change.
const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Cell-level view of an arena blocked by rectangular obstacles.
///
/// Bounds are expressed in coordinate units, not cell counts: a cell is in
/// bounds when `0 <= x < max_width` and `0 <= y < max_height`.
#[derive(Clone, Copy, Debug)]
pub struct GridModel<'a> {
    pub obstacles: &'a [Obstacle],
    pub max_width: i32,
    pub max_height: i32,
    pub cell_size: i32,
}

impl<'a> GridModel<'a> {
    pub fn new(obstacles: &'a [Obstacle], max_width: i32, max_height: i32, cell_size: i32) -> Self {
        Self {
            obstacles,
            max_width,
            max_height,
            cell_size,
        }
    }

    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.max_width && c.y >= 0 && c.y < self.max_height
    }

    /// Whether `c` is in bounds and not covered by any obstacle.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.in_bounds(c) && !blocked(c, self.obstacles)
    }
}

impl Pather for GridModel<'_> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for (dx, dy) in DIRS {
            let n = c.shift(dx * self.cell_size, dy * self.cell_size);
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for GridModel<'_> {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

/// Passable axis neighbours of `c`, in up, right, down, left order.
pub fn neighbors(
    c: Cell,
    obstacles: &[Obstacle],
    max_width: i32,
    max_height: i32,
    cell_size: i32,
) -> Vec<Cell> {
    let mut buf = Vec::with_capacity(4);
    GridModel::new(obstacles, max_width, max_height, cell_size).neighbors(c, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_cell_has_four_neighbors_in_order() {
        let ns = neighbors(Cell::new(40, 40), &[], 120, 120, 40);
        assert_eq!(
            ns,
            vec![
                Cell::new(40, 0),
                Cell::new(80, 40),
                Cell::new(40, 80),
                Cell::new(0, 40),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_by_bounds() {
        assert_eq!(
            neighbors(Cell::ZERO, &[], 400, 400, 40),
            vec![Cell::new(40, 0), Cell::new(0, 40)]
        );
    }

    #[test]
    fn bound_equal_to_coordinate_is_excluded() {
        // 120 wide: x = 120 is out, x = 80 is the last column.
        let ns = neighbors(Cell::new(80, 0), &[], 120, 40, 40);
        assert_eq!(ns, vec![Cell::new(40, 0)]);
    }

    #[test]
    fn bound_not_multiple_of_cell_size() {
        // 100 wide: 80 is still in bounds, 120 is not.
        let ns = neighbors(Cell::new(40, 0), &[], 100, 40, 40);
        assert_eq!(ns, vec![Cell::new(80, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn obstacles_remove_neighbors() {
        let walls = [Obstacle::new(80, 0, 40, 120), Obstacle::new(0, 40, 40, 40)];
        let ns = neighbors(Cell::new(40, 40), &walls, 200, 200, 40);
        assert_eq!(ns, vec![Cell::new(40, 0), Cell::new(40, 80)]);
    }

    #[test]
    fn passable_ignores_nothing_but_bounds_and_walls() {
        let walls = [Obstacle::new(40, 0, 40, 40)];
        let g = GridModel::new(&walls, 120, 120, 40);
        assert!(g.passable(Cell::ZERO));
        assert!(!g.passable(Cell::new(40, 0)));
        assert!(!g.passable(Cell::new(-40, 0)));
        assert!(!g.passable(Cell::new(0, 120)));
    }

    #[test]
    fn estimate_is_manhattan() {
        let g = GridModel::new(&[], 400, 400, 40);
        assert_eq!(g.estimate(Cell::ZERO, Cell::new(120, 80)), 200);
    }
}
