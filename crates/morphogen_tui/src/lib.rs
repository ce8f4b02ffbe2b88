//! Terminal front end for the morphogenesis playground.

pub mod renderer;
pub mod views;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};

pub use renderer::{draw, PlaygroundView};

/// A playground drawing session.
///
/// Sessions opened with [`Tui::enter`] own the real terminal's raw mode and
/// alternate screen until [`Tui::leave`] or drop; sessions built with
/// [`Tui::with_backend`] never touch terminal modes.
pub struct Tui<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    owns_terminal: bool,
}

impl Tui {
    /// Switches stdout to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            owns_terminal: true,
        })
    }
}

impl<B: Backend> Tui<B> {
    /// Wraps an existing backend, e.g. a `TestBackend`.
    pub fn with_backend(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            owns_terminal: false,
        })
    }

    /// Draws one frame of the playground.
    pub fn render(&mut self, view: &PlaygroundView) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, view))?;
        Ok(())
    }

    /// The underlying backend, for inspecting rendered buffers.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Restores the terminal if this session changed it. Safe to call twice.
    pub fn leave(&mut self) -> Result<()> {
        if !self.owns_terminal {
            return Ok(());
        }
        self.owns_terminal = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
