//! The fixed-tick application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! Unlike a purely event-driven loop, the game advances on a clock: the
//! driver is polled for input until the next tick is due, then the model
//! receives a [`Msg::Tick`] carrying the measured elapsed time.

use std::time::{Duration, Instant};

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

/// Back-end driver (terminal, headless test harness, ...).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait up to `timeout` for input and append any messages to `out`.
    fn poll_msgs(
        &mut self,
        timeout: Duration,
        out: &mut Vec<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the output.
    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the output. Called exactly once, even on error.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
    /// Simulation period between [`Msg::Tick`] deliveries.
    pub tick_rate: Duration,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
    tick_rate: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
            tick_rate: config.tick_rate,
        }
    }

    /// Access the model (e.g. to read a final score after `run`).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run until the model returns [`Effect::End`] or the driver fails.
    ///
    /// The driver is always closed before returning.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        let res = self.main_loop();
        self.driver.close();
        if let Err(e) = &res {
            log::error!("application loop failed: {e}");
        }
        res
    }

    fn main_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);
        let mut msgs = Vec::new();

        if self.model.update(Msg::Init) == Some(Effect::End) {
            return Ok(());
        }
        self.render(&mut prev, &mut curr)?;

        let mut last_tick = Instant::now();
        loop {
            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            self.driver.poll_msgs(timeout, &mut msgs)?;

            for msg in msgs.drain(..) {
                if let Msg::Resize { .. } = msg {
                    // Output was likely cleared; force a full redraw.
                    prev = Screen::new(0, 0);
                }
                if self.model.update(msg) == Some(Effect::End) {
                    log::debug!("model requested end");
                    return Ok(());
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick_rate {
                last_tick = Instant::now();
                if self.model.update(Msg::Tick(elapsed)) == Some(Effect::End) {
                    log::debug!("model requested end on tick");
                    return Ok(());
                }
            }

            self.render(&mut prev, &mut curr)?;
        }
    }

    /// Draw, diff against the previous screen, and flush any changes.
    fn render(
        &mut self,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.model.draw(curr);
        let frame = compute_frame(prev, curr);
        if !frame.glyphs.is_empty() {
            self.driver.flush(&frame)?;
        }
        prev.copy_from(curr);
        Ok(())
    }
}
