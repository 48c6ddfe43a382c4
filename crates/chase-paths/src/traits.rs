use chase_core::Cell;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append the passable neighbours of `c` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with a heuristic for A*. Every step costs 1.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}
