//! Random wall layout.

use chase_core::Obstacle;
use rand::{Rng, RngExt};

/// Scatter single-cell walls over the arena.
///
/// Every grid cell whose top-left corner lies inside `width × height`
/// independently becomes a wall with probability `density`. Cells are
/// visited column by column, so a given seed always yields the same layout.
pub fn generate_walls(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    cell_size: i32,
    density: f64,
) -> Vec<Obstacle> {
    let mut walls = Vec::new();
    if cell_size <= 0 {
        return walls;
    }
    let step = cell_size as usize;
    for x in (0..width).step_by(step) {
        for y in (0..height).step_by(step) {
            if rng.random_bool(density) {
                walls.push(Obstacle::new(x, y, cell_size, cell_size));
            }
        }
    }
    walls
}
