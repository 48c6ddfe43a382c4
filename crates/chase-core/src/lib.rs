//! **chase-core**: shared types for the chase game.
//!
//! This crate provides geometry primitives used by the pathfinder and the
//! simulation, input messages, a character screen with frame diffing, and
//! the fixed-tick application loop that drivers plug into.

pub mod app;
pub mod geom;
pub mod messages;
pub mod screen;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use geom::{Cell, Obstacle, Pos, blocked};
pub use messages::{Key, Msg};
pub use screen::{Color, Frame, FrameGlyph, Glyph, Screen, compute_frame};
