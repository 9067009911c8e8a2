//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::paths::InvestPaths;
use crate::config::settings::Settings;
use crate::error::InvestError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| tui_error("enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| tui_error("enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| tui_error("create terminal", e))?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| tui_error("disable raw mode", e))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| tui_error("leave alternate screen", e))?;
    Ok(())
}

fn tui_error(action: &str, e: io::Error) -> InvestError {
    InvestError::Tui(format!("Failed to {}: {}", action, e))
}

/// Run the TUI application
pub fn run_tui(paths: &InvestPaths, settings: &Settings) -> Result<()> {
    tracing::info!(data_dir = %paths.base_dir().display(), "starting TUI");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    let events = EventHandler::new(settings.tick_rate());

    let result = (|| -> Result<()> {
        while !app.should_quit {
            terminal.draw(|frame| {
                super::views::render(frame, &mut app);
            })?;
            handle_event(&mut app, events.next()?);
        }
        Ok(())
    })();

    restore_terminal()?;
    tracing::info!("TUI closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_errors_are_tui_errors() {
        let err = tui_error("enable raw mode", io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert!(matches!(err, InvestError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: Failed to enable raw mode: not a tty");
    }
}
