use chase_core::Cell;

/// Rebuild the route ending at `goal` by following predecessors.
///
/// `came_from` returns the recorded predecessor of a cell, or `None` for the
/// cell the search started from. The result runs from start to goal, and is
/// `[goal]` alone when the goal has no predecessor.
pub fn reconstruct_path(goal: Cell, came_from: impl Fn(Cell) -> Option<Cell>) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from(current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// The cell to move towards next, if the path has one beyond its start.
///
/// Empty paths (no route) and single-cell paths (already at the goal) both
/// yield `None`.
#[inline]
pub fn next_step(path: &[Cell]) -> Option<Cell> {
    if path.len() > 1 { Some(path[1]) } else { None }
}
