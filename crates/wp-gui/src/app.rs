//! Application state shared across all screens.

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;

use wp_core::Roster;
use wp_roulette::{ModeNames, RouletteConfig, RouletteSession};

/// Value following `flag` on the command line.
pub fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

/// Parse a `--seed` value, warning when it is not a number.
pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    let value = value?;
    match value.parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::warn!("ignoring invalid --seed value {value:?}: {e}");
            None
        }
    }
}

/// Shared application state accessible by all screens.
pub struct AppState<'r> {
    /// The loaded roster. Empty when loading failed.
    pub roster: &'r Roster,
    /// Display names of the two modes.
    pub modes: ModeNames,
    /// Random source for picks and new sessions.
    pub rng: StdRng,
    /// Roster loading error shown on the menu.
    pub error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<'r> AppState<'r> {
    /// Create the app state over a loaded roster.
    pub fn new(roster: &'r Roster, config: &RouletteConfig) -> Self {
        Self {
            roster,
            modes: config.modes.clone(),
            rng: config.rng(),
            error: None,
            should_quit: false,
        }
    }

    /// Start a roulette session whose randomness derives from the app's.
    pub fn new_session(&mut self) -> RouletteSession<'r> {
        RouletteSession::with_rng(self.roster, StdRng::from_rng(&mut self.rng))
    }
}
