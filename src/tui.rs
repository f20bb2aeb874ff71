use crate::event::AppEvent;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend};
use std::{fmt, io, time::Duration};

const TICK_RATE: Duration = Duration::from_millis(250);

pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> fmt::Debug for Tui<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tui")
            .field("terminal", &"Terminal<...>")
            .finish_non_exhaustive()
    }
}

impl<B: Backend> Tui<B> {
    pub const fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Enters the terminal interface mode with mouse reporting on.
    ///
    /// # Errors
    /// Returns an error if raw mode execution fails.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Exits the terminal interface mode.
    ///
    /// # Errors
    /// Returns an error if raw mode disable fails.
    pub fn exit(&mut self) -> Result<()> {
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.terminal
            .show_cursor()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(())
    }

    /// Current terminal width in columns.
    ///
    /// # Errors
    /// Returns an error if the backend cannot report its size.
    pub fn width(&self) -> Result<u16> {
        Ok(self.terminal.size()?.width)
    }

    /// Draws the page.
    ///
    /// # Errors
    /// Returns an error if the terminal draw operation fails.
    pub fn draw(&mut self, app: &crate::app::App) -> Result<()> {
        self.terminal
            .draw(|frame| crate::ui::render(app, frame))
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(())
    }

    /// Waits up to one tick for input.
    ///
    /// # Errors
    /// Returns an error if polling or reading the terminal fails.
    pub fn next_event(&mut self) -> Result<AppEvent> {
        if event::poll(TICK_RATE)? {
            return Ok(AppEvent::Input(event::read()?));
        }
        Ok(AppEvent::Tick)
    }
}
