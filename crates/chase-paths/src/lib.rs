//! Grid pathfinding for the chase game.
//!
//! Walkability is derived on the fly from axis-aligned rectangular
//! obstacles; there is no stored grid. Cells are coordinate pairs aligned to
//! multiples of the cell size, and each step between axis neighbours costs 1.
//!
//! - **Grid model**: [`neighbors`] / [`GridModel`] enumerate the passable
//!   up, right, down, left neighbours of a cell.
//! - **A\***: [`find_path`] / [`astar_path`] search with the [`manhattan`]
//!   heuristic and deterministic tie-breaking.
//! - **Reconstruction**: [`reconstruct_path`] and [`next_step`].
//!
//! Every search owns its own state and nothing survives between calls, so
//! calls for different agents are independent.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod distance;
mod neighbors;
mod path;
mod traits;

pub use astar::{SearchNode, astar_path, find_path};
pub use distance::manhattan;
pub use neighbors::{GridModel, neighbors};
pub use path::{next_step, reconstruct_path};
pub use traits::{AstarPather, Pather};
