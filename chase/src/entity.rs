//! Moving bodies: the [`Player`] and its [`Pursuer`]s.
//!
//! Both are squares described by their centre and side length.

use chase_core::{Cell, Obstacle, Pos};

/// A movement direction for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player-controlled avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Pos,
    pub size: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Pos, size: f32, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Move one `speed` increment, keeping the whole body inside the
    /// `max_width × max_height` arena along the axis of movement.
    pub fn step(&mut self, dir: Direction, max_width: f32, max_height: f32) {
        let half = self.size / 2.0;
        match dir {
            Direction::Up => self.pos.y = (self.pos.y - self.speed).max(half),
            Direction::Down => self.pos.y = (self.pos.y + self.speed).min(max_height - half),
            Direction::Left => self.pos.x = (self.pos.x - self.speed).max(half),
            Direction::Right => self.pos.x = (self.pos.x + self.speed).min(max_width - half),
        }
    }

    /// Whether the player strictly overlaps a square of side `size` centred
    /// on `center`.
    pub fn collides_with(&self, center: Pos, size: f32) -> bool {
        let reach = (self.size + size) / 2.0;
        (self.pos.x - center.x).abs() < reach && (self.pos.y - center.y).abs() < reach
    }

    pub fn touches(&self, wall: &Obstacle) -> bool {
        wall.overlaps(self.pos, self.size)
    }

    /// Push the player out of `wall` on each axis where its centre lies
    /// outside the wall's extent. A centre inside the wall is left alone.
    pub fn resolve_wall(&mut self, wall: &Obstacle) {
        let half = self.size / 2.0;
        let (left, right) = (wall.x as f32, (wall.x + wall.width) as f32);
        let (top, bottom) = (wall.y as f32, (wall.y + wall.height) as f32);
        if self.pos.x < left {
            self.pos.x = left - half;
        }
        if self.pos.x > right {
            self.pos.x = right + half;
        }
        if self.pos.y < top {
            self.pos.y = top - half;
        }
        if self.pos.y > bottom {
            self.pos.y = bottom + half;
        }
    }
}

/// A pathfinding chaser.
#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    pub pos: Pos,
    pub size: f32,
    pub speed: f32,
    /// Route computed on the last tick, kept for the debug overlay.
    pub path: Vec<Cell>,
}

impl Pursuer {
    pub fn new(pos: Pos, size: f32, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            path: Vec::new(),
        }
    }

    /// Advance by `speed` towards `target`, landing on it when closer than
    /// one increment.
    pub fn move_to(&mut self, target: Pos) {
        let dist = self.pos.distance(target);
        if dist > self.speed {
            self.pos.x += (target.x - self.pos.x) / dist * self.speed;
            self.pos.y += (target.y - self.pos.y) / dist * self.speed;
        } else {
            self.pos = target;
        }
    }
}
