//! Game configuration, loadable from a RON file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game parameters. Distances are in arena units, times in
/// milliseconds. Fields missing from a config file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width.
    pub width: i32,
    /// Arena height.
    pub height: i32,
    /// Grid cell size; walls and path cells are aligned to it.
    pub cell_size: i32,
    /// Pursuers present when the game starts.
    pub initial_pursuers: usize,
    /// A new pursuer appears every this many milliseconds.
    pub spawn_interval_ms: u64,
    /// The player counts as chased while a pursuer is this close.
    pub chase_radius: f32,
    /// Probability that any given cell holds a wall.
    pub wall_density: f64,
    pub player_size: f32,
    pub player_speed: f32,
    pub pursuer_size: f32,
    pub pursuer_speed: f32,
    /// Simulation tick period.
    pub tick_ms: u64,
    /// Fixed RNG seed; a time-derived seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 880,
            cell_size: 40,
            initial_pursuers: 6,
            spawn_interval_ms: 3000,
            chase_radius: 200.0,
            wall_density: 0.3,
            player_size: 40.0,
            player_speed: 10.0,
            pursuer_size: 20.0,
            pursuer_speed: 1.0,
            tick_ms: 16,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = ron::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_ron_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::Invalid(
                "arena must be at least one cell in each direction".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(ConfigError::Invalid(format!(
                "wall_density {} outside [0, 1]",
                self.wall_density
            )));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be non-zero".into()));
        }
        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Number of grid columns and rows covering the arena.
    pub fn grid_size(&self) -> (i32, i32) {
        let cols = (self.width + self.cell_size - 1) / self.cell_size;
        let rows = (self.height + self.cell_size - 1) / self.cell_size;
        (cols, rows)
    }
}
