use std::io;

use wp_roulette::{RouletteSession, SessionEnd, run_session};

use crate::console::LinePresenter;

pub fn run(file: &str, seed: Option<u64>) -> Result<(), String> {
    let roster = super::load(file)?;
    let config = super::config(seed);

    let stdin = io::stdin();
    let mut presenter = LinePresenter::new(stdin.lock(), io::stdout(), config.modes.clone());

    let mut session = RouletteSession::new(&roster, &config);
    let outcome = run_session(&mut session, &mut presenter).map_err(|e| e.to_string())?;

    if outcome.end == SessionEnd::PoolExhausted && outcome.teams.is_empty() {
        return Ok(());
    }
    let teams: Vec<_> = outcome.teams.iter().map(|t| t.resolve(&roster)).collect();
    presenter.print_summary(&teams).map_err(|e| e.to_string())
}
