//! Core game state and per-tick simulation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chase_core::{Cell, Obstacle, Pos};
use chase_paths::{find_path, next_step};
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use crate::config::GameConfig;
use crate::entity::{Direction, Player, Pursuer};
use crate::walls::generate_walls;

/// Core game state (separate from UI model).
pub struct Game {
    pub config: GameConfig,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub walls: Vec<Obstacle>,
    rng: SmallRng,
    /// Time spent chased and outside walls; the score is its whole seconds.
    chased: Duration,
    /// Time accumulated towards the next spawn.
    spawn_timer: Duration,
    over: bool,
}

impl Game {
    /// Start a game with a random wall layout and the initial pursuers.
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(time_seed);
        log::info!("starting game with seed {seed}");
        let mut rng = SmallRng::seed_from_u64(seed);
        let walls = generate_walls(
            &mut rng,
            config.width,
            config.height,
            config.cell_size,
            config.wall_density,
        );
        Self::with_rng(config, walls, rng)
    }

    /// Start a game with a fixed wall layout.
    pub fn with_walls(config: GameConfig, walls: Vec<Obstacle>) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed.unwrap_or_else(time_seed));
        Self::with_rng(config, walls, rng)
    }

    fn with_rng(config: GameConfig, mut walls: Vec<Obstacle>, rng: SmallRng) -> Self {
        let player = Player::new(
            Pos::new(config.width as f32 / 2.0, config.height as f32 / 2.0),
            config.player_size,
            config.player_speed,
        );
        // Never start the player stuck inside a wall.
        walls.retain(|w| !player.touches(w));

        let mut game = Self {
            player,
            pursuers: Vec::new(),
            walls,
            rng,
            chased: Duration::ZERO,
            spawn_timer: Duration::ZERO,
            over: false,
            config,
        };
        for _ in 0..game.config.initial_pursuers {
            game.spawn_pursuer();
        }
        game
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Whole seconds survived while being chased.
    pub fn score(&self) -> u64 {
        self.chased.as_secs()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether any pursuer is within the chase radius of the player.
    pub fn is_chased(&self) -> bool {
        let r = self.config.chase_radius;
        self.pursuers
            .iter()
            .any(|p| p.pos.distance(self.player.pos) <= r)
    }

    pub fn player_in_wall(&self) -> bool {
        self.walls.iter().any(|w| self.player.touches(w))
    }

    /// Grid cell the player currently occupies.
    pub fn player_cell(&self) -> Cell {
        Cell::snap(self.player.pos, self.config.cell_size)
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Move the player one step. Ignored once the game is over.
    pub fn move_player(&mut self, dir: Direction) {
        if self.over {
            return;
        }
        self.player
            .step(dir, self.config.width as f32, self.config.height as f32);
    }

    /// Add a pursuer at a uniformly random position in the arena.
    pub fn spawn_pursuer(&mut self) {
        let x = self.rng.random_range(0.0..self.config.width as f32);
        let y = self.rng.random_range(0.0..self.config.height as f32);
        self.add_pursuer(Pos::new(x, y));
    }

    /// Add a pursuer at `pos`.
    pub fn add_pursuer(&mut self, pos: Pos) {
        log::debug!("pursuer spawned at {pos}");
        self.pursuers.push(Pursuer::new(
            pos,
            self.config.pursuer_size,
            self.config.pursuer_speed,
        ));
    }

    /// Advance the simulation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.over {
            return;
        }
        self.update_pursuers();
        self.update_score(dt);
        self.update_spawner(dt);
        self.check_collisions();
    }

    /// Re-plan every pursuer towards the player and move it one increment
    /// along the first step of its route.
    fn update_pursuers(&mut self) {
        let cs = self.config.cell_size;
        let goal = self.player_cell();
        for p in &mut self.pursuers {
            let start = Cell::snap(p.pos, cs);
            p.path = find_path(
                start,
                goal,
                &self.walls,
                self.config.width,
                self.config.height,
                cs,
            );
            if let Some(next) = next_step(&p.path) {
                p.move_to(next.to_pos());
            }
        }
    }

    fn update_score(&mut self, dt: Duration) {
        if !self.player_in_wall() && self.is_chased() {
            self.chased += dt;
        }
    }

    fn update_spawner(&mut self, dt: Duration) {
        let interval = self.config.spawn_interval();
        if interval.is_zero() {
            return;
        }
        self.spawn_timer += dt;
        while self.spawn_timer >= interval {
            self.spawn_timer -= interval;
            self.spawn_pursuer();
        }
    }

    fn check_collisions(&mut self) {
        if self
            .pursuers
            .iter()
            .any(|p| self.player.collides_with(p.pos, p.size))
        {
            self.over = true;
            log::info!("caught! final score {}", self.score());
            return;
        }

        for w in &self.walls {
            if self.player.touches(w) {
                self.player.resolve_wall(w);
            }
        }
    }
}

/// Seed derived from the wall clock, for unseeded games.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    fn config() -> GameConfig {
        GameConfig {
            width: 400,
            height: 400,
            initial_pursuers: 0,
            seed: Some(1),
            ..GameConfig::default()
        }
    }

    #[test]
    fn player_starts_in_the_centre() {
        let g = Game::with_walls(config(), Vec::new());
        assert_eq!(g.player.pos, Pos::new(200.0, 200.0));
        assert_eq!(g.player_cell(), Cell::new(200, 200));
        assert!(g.pursuers.is_empty());
    }

    #[test]
    fn initial_pursuers_are_spawned() {
        let g = Game::new(GameConfig {
            initial_pursuers: 6,
            ..config()
        });
        assert_eq!(g.pursuers.len(), 6);
        for p in &g.pursuers {
            assert!(p.pos.x >= 0.0 && p.pos.x < 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 400.0);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let cfg = GameConfig {
            initial_pursuers: 4,
            ..config()
        };
        let a = Game::new(cfg.clone());
        let b = Game::new(cfg);
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.pursuers, b.pursuers);
    }

    #[test]
    fn start_area_is_cleared_of_walls() {
        let g = Game::new(GameConfig {
            wall_density: 1.0,
            ..config()
        });
        assert!(!g.walls.is_empty());
        assert!(!g.player_in_wall());
    }

    #[test]
    fn pursuer_follows_first_step() {
        let mut g = Game::with_walls(config(), Vec::new());
        g.add_pursuer(Pos::new(0.0, 200.0));
        g.tick(TICK);
        let p = &g.pursuers[0];
        assert_eq!(p.path.first(), Some(&Cell::new(0, 200)));
        assert_eq!(p.path.last(), Some(&Cell::new(200, 200)));
        assert_eq!(p.pos, Pos::new(1.0, 200.0));
    }

    #[test]
    fn pursuer_routes_around_walls() {
        let walls = vec![Obstacle::new(40, 120, 40, 160)];
        let mut g = Game::with_walls(config(), walls.clone());
        g.add_pursuer(Pos::new(0.0, 200.0));
        g.tick(TICK);
        let path = &g.pursuers[0].path;
        assert!(!path.is_empty());
        for c in path {
            assert!(!walls.iter().any(|w| w.contains(*c)));
        }
        // blocked to the right, so it leaves vertically
        assert_eq!(g.pursuers[0].pos.x, 0.0);
    }

    #[test]
    fn boxed_in_pursuer_stays_put() {
        let walls = vec![
            Obstacle::new(40, 0, 40, 40),
            Obstacle::new(0, 40, 40, 40),
        ];
        let mut g = Game::with_walls(config(), walls);
        g.add_pursuer(Pos::new(0.0, 0.0));
        g.tick(TICK);
        assert!(g.pursuers[0].path.is_empty());
        assert_eq!(g.pursuers[0].pos, Pos::new(0.0, 0.0));
    }

    #[test]
    fn score_counts_only_chased_time() {
        let cfg = GameConfig {
            pursuer_speed: 0.0,
            ..config()
        };
        let mut far = Game::with_walls(cfg.clone(), Vec::new());
        far.add_pursuer(Pos::new(0.0, 0.0));
        far.tick(Duration::from_millis(2500));
        assert!(!far.is_chased());
        assert_eq!(far.score(), 0);

        let mut near = Game::with_walls(cfg, Vec::new());
        near.add_pursuer(Pos::new(200.0, 50.0));
        assert!(near.is_chased());
        near.tick(Duration::from_millis(1500));
        near.tick(Duration::from_millis(1000));
        assert_eq!(near.score(), 2);
    }

    #[test]
    fn no_score_inside_a_wall() {
        let cfg = GameConfig {
            pursuer_speed: 0.0,
            ..config()
        };
        let mut g = Game::with_walls(cfg, Vec::new());
        g.walls.push(Obstacle::new(160, 160, 80, 80));
        g.add_pursuer(Pos::new(200.0, 50.0));
        g.tick(Duration::from_secs(2));
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn spawner_adds_pursuers_on_interval() {
        // Zero-sized bodies never collide, wherever the spawns land.
        let cfg = GameConfig {
            player_size: 0.0,
            pursuer_size: 0.0,
            ..config()
        };
        let mut g = Game::with_walls(cfg, Vec::new());
        g.tick(Duration::from_millis(2999));
        assert_eq!(g.pursuers.len(), 0);
        g.tick(Duration::from_millis(1));
        assert_eq!(g.pursuers.len(), 1);
        g.tick(Duration::from_secs(6));
        assert_eq!(g.pursuers.len(), 3);
    }

    #[test]
    fn touching_a_pursuer_ends_the_game() {
        let mut g = Game::with_walls(config(), Vec::new());
        g.add_pursuer(Pos::new(210.0, 200.0));
        g.tick(TICK);
        assert!(g.is_over());

        let before = g.player.pos;
        g.move_player(Direction::Left);
        assert_eq!(g.player.pos, before);
        let n = g.pursuers.len();
        g.tick(Duration::from_secs(10));
        assert_eq!(g.pursuers.len(), n);
    }

    #[test]
    fn walls_push_the_player_out() {
        let mut g = Game::with_walls(config(), Vec::new());
        g.walls.push(Obstacle::new(220, 160, 40, 80));
        g.tick(TICK);
        assert_eq!(g.player.pos, Pos::new(200.0, 200.0));
        g.move_player(Direction::Right);
        assert!(g.player_in_wall());
        g.tick(TICK);
        assert_eq!(g.player.pos.x, 200.0);
        assert!(!g.player_in_wall());
    }
}
