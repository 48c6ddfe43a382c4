//! Chase: evade pathfinding pursuers on a walled grid.

pub mod colors;
pub mod config;
pub mod entity;
pub mod game;
pub mod model;
pub mod walls;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use model::ChaseModel;
