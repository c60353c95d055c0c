pub mod check;
pub mod list;
pub mod pick;
pub mod play;
pub mod roulette;
pub mod tui;

use tracing::debug;

use wp_core::Roster;
use wp_core::loader::{expand_home, load_roster};
use wp_roulette::RouletteConfig;

/// Load the roster at `file`, expanding a leading `~`.
fn load(file: &str) -> Result<Roster, String> {
    let path = expand_home(file);
    debug!(path = %path.display(), "resolved roster path");
    load_roster(&path).map_err(|e| e.to_string())
}

/// Build the session configuration from the command line flags.
fn config(seed: Option<u64>) -> RouletteConfig {
    match seed {
        Some(seed) => RouletteConfig::default().with_seed(seed),
        None => RouletteConfig::default(),
    }
}
