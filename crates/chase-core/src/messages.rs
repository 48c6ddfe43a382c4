//! Input and timing events: [`Msg`] and [`Key`].

use std::time::Duration;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

/// A message delivered to [`Model::update`](crate::app::Model::update).
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// Sent once before the first tick.
    Init,
    /// A key was pressed.
    KeyDown(Key),
    /// Simulation time advanced by the given amount.
    Tick(Duration),
    /// The output surface changed size (in characters).
    Resize { width: i32, height: i32 },
}
