//! UI model: input handling and drawing on top of [`Game`].

use chase_core::{Cell, Effect, Glyph, Key, Model, Msg, Screen};

use crate::colors::*;
use crate::entity::Direction;
use crate::game::Game;

/// Row where the arena starts; row 0 is the status line.
const MAP_TOP: i32 = 1;
/// Enough columns for the status line on tiny arenas.
const MIN_WIDTH: i32 = 40;

const HELP: &str = "arrows/hjkl move  p paths  q quit";

/// The chase game model.
pub struct ChaseModel {
    game: Game,
    show_paths: bool,
}

impl ChaseModel {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            show_paths: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Screen size needed to show the whole arena plus the status line.
    pub fn screen_size(&self) -> (i32, i32) {
        let (cols, rows) = self.game.config.grid_size();
        (cols.max(MIN_WIDTH), rows + MAP_TOP)
    }

    fn screen_pos(&self, c: Cell) -> (i32, i32) {
        let cs = self.game.config.cell_size;
        (c.x.div_euclid(cs), c.y.div_euclid(cs) + MAP_TOP)
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        let dir = match key {
            Key::ArrowUp | Key::Char('k') => Direction::Up,
            Key::ArrowDown | Key::Char('j') => Direction::Down,
            Key::ArrowLeft | Key::Char('h') => Direction::Left,
            Key::ArrowRight | Key::Char('l') => Direction::Right,
            Key::Char('p') => {
                self.show_paths = !self.show_paths;
                return None;
            }
            Key::Char('q') | Key::Escape => return Some(Effect::End),
            _ => return None,
        };
        self.game.move_player(dir);
        None
    }

    fn draw_map(&self, screen: &mut Screen) {
        let cs = self.game.config.cell_size;
        for w in &self.game.walls {
            for x in (w.x..w.x + w.width).step_by(cs as usize) {
                for y in (w.y..w.y + w.height).step_by(cs as usize) {
                    let (sx, sy) = self.screen_pos(Cell::new(x, y));
                    screen.set(sx, sy, Glyph::new('#', FG_WALL));
                }
            }
        }

        if self.show_paths {
            for p in &self.game.pursuers {
                for &c in p.path.iter().skip(1) {
                    let (sx, sy) = self.screen_pos(c);
                    screen.set(sx, sy, Glyph::new('.', FG_PATH));
                }
            }
        }

        for p in &self.game.pursuers {
            let (sx, sy) = self.screen_pos(Cell::snap(p.pos, cs));
            screen.set(sx, sy, Glyph::new('x', FG_PURSUER));
        }

        let (sx, sy) = self.screen_pos(self.game.player_cell());
        screen.set(sx, sy, Glyph::new('@', FG_PLAYER));
    }

    fn draw_status(&self, screen: &mut Screen) {
        let mut status = format!(
            " Score: {}  Pursuers: {} ",
            self.game.score(),
            self.game.pursuers.len()
        );
        if self.game.is_chased() {
            status.push_str(" CHASED ");
        }
        screen.put_str(0, 0, &status, FG_STATUS);
        let help_x = screen.width() - HELP.len() as i32 - 1;
        if help_x > status.len() as i32 {
            screen.put_str(help_x, 0, HELP, FG_STATUS);
        }
    }

    fn draw_game_over(&self, screen: &mut Screen) {
        let banner = format!(" CAUGHT! Final score: {}  (q to quit) ", self.game.score());
        let x = ((screen.width() - banner.len() as i32) / 2).max(0);
        let y = screen.height() / 2;
        screen.put_str(x, y, &banner, FG_ALERT);
    }
}

impl Model for ChaseModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                log::info!(
                    "arena {}x{}, {} walls, {} pursuers",
                    self.game.config.width,
                    self.game.config.height,
                    self.game.walls.len(),
                    self.game.pursuers.len()
                );
                None
            }
            Msg::Tick(dt) => {
                self.game.tick(dt);
                None
            }
            Msg::KeyDown(Key::Char('q') | Key::Escape | Key::Space) if self.game.is_over() => {
                Some(Effect::End)
            }
            Msg::KeyDown(_) if self.game.is_over() => None,
            Msg::KeyDown(key) => self.handle_key(key),
            Msg::Resize { .. } => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Glyph::new(' ', FG));
        self.draw_map(screen);
        self.draw_status(screen);
        if self.game.is_over() {
            self.draw_game_over(screen);
        }
    }
}
