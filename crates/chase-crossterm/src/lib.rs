//! Crossterm terminal driver for the chase game.
//!
//! Provides a [`CrosstermDriver`] that implements [`chase_core::Driver`],
//! drawing changed glyphs to the terminal and turning key presses and
//! resizes into [`Msg`]s.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use chase_core::{Color, Driver, Frame, Key, Msg};

/// Maps a [`chase_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one crossterm event. Ctrl+C maps to Escape since raw mode
/// swallows the signal.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::KeyDown(Key::Escape)),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => to_key(code).map(Msg::KeyDown),
        Event::Resize(w, h) => Some(Msg::Resize {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    out: Stdout,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        timeout: Duration,
        out: &mut Vec<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(m) = to_msg(event::read()?) {
                out.push(m);
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if frame.glyphs.len() == (frame.width * frame.height) as usize {
            queue!(self.out, terminal::Clear(ClearType::All))?;
        }
        let mut fg = None;
        for fc in &frame.glyphs {
            if fc.x < 0 || fc.y < 0 {
                continue;
            }
            queue!(self.out, cursor::MoveTo(fc.x as u16, fc.y as u16))?;
            let g = fc.glyph;
            if fg != Some(g.fg) {
                queue!(self.out, SetForegroundColor(to_ct_color(g.fg)))?;
                fg = Some(g.fg);
            }
            queue!(self.out, Print(g.ch))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
