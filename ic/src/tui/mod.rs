//! Terminal User Interface for the intention form
//!
//! Draws on stderr in the alternate screen so stdout stays free for pasting:
//! - Task and Reason text fields
//! - Mood tag picker with type-to-filter
//! - Live preview of the sentence
//! - Ctrl+P / Ctrl+Y to paste or copy

mod app;
mod events;
mod input;
mod runner;
pub mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::TextInput;
pub use runner::TuiRunner;
pub use state::{AppState, Field, FormPhase};

use std::io::{self, Stderr};

use async_trait::async_trait;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::composer::{Composer, Submission};
use crate::host::{Clipboard, Notifier, Window, WindowError};

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// The form's window: the alternate screen while open, gone once closed
pub struct TerminalWindow {
    terminal: Option<Tui>,
}

impl TerminalWindow {
    /// Enter raw mode and the alternate screen
    pub fn open() -> Result<Self> {
        debug!("TerminalWindow::open: called");
        Ok(Self { terminal: Some(init()?) })
    }

    /// Draw a frame; a closed window draws nothing
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.draw(render)?;
        }
        Ok(())
    }

    /// Leave the alternate screen; closing twice is a no-op
    pub fn close_now(&mut self) -> Result<(), WindowError> {
        if self.terminal.take().is_some() {
            debug!("TerminalWindow::close_now: restoring terminal");
            restore()?;
        }
        Ok(())
    }
}

#[async_trait]
impl Window for TerminalWindow {
    async fn close(&mut self) -> Result<(), WindowError> {
        self.close_now()
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        // Restore even on early return/error
        let _ = self.close_now();
    }
}

/// Open the form, run it to completion, and always restore the terminal
pub async fn run(
    composer: Composer,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
) -> Result<Option<Submission>> {
    let window = TerminalWindow::open()?;
    let mut runner = TuiRunner::new(window, composer, clipboard, notifier);
    runner.run().await
}
