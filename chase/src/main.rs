//! Terminal front-end. Usage: `chase [config.ron]`.
//!
//! Logging goes to stderr and is off unless `RUST_LOG` is set; redirect it
//! (`2>chase.log`) to keep it off the game screen.

use chase_core::{App, AppConfig};
use chase_crossterm::CrosstermDriver;
use chase_lib::{ChaseModel, Game, GameConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let tick_rate = config.tick_rate();

    let model = ChaseModel::new(Game::new(config));
    let (width, height) = model.screen_size();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        width,
        height,
        tick_rate,
    });
    app.run()?;

    println!("Final score: {}", app.model().game().score());
    Ok(())
}
