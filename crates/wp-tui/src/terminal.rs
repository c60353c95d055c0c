//! Terminal setup and teardown around the menu loop.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::info;

use wp_core::Roster;
use wp_roulette::{App, RouletteConfig};

use crate::keys::CrosstermKeys;
use crate::presenter::TuiPresenter;

/// Launch the TUI over `roster` and run it until the user quits.
pub fn run(roster: &Roster, config: &RouletteConfig) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;
    let mut presenter = TuiPresenter::new(terminal, CrosstermKeys, config.modes.clone());

    info!(characters = roster.len(), "starting terminal UI");
    let result = App::new(roster, config)
        .run(&mut presenter)
        .map_err(|e| format!("terminal error: {e}"));

    disable_raw_mode().ok();
    execute!(presenter.terminal_mut().backend_mut(), LeaveAlternateScreen).ok();
    presenter.terminal_mut().show_cursor().ok();

    result
}
