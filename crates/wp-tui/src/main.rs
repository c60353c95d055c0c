//! Standalone TUI binary for WuWa Picker.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wp_core::loader::{DEFAULT_ROSTER_PATH, expand_home, load_roster};
use wp_roulette::RouletteConfig;

#[derive(Parser)]
#[command(
    name = "wp-tui",
    about = "Terminal UI for picking Wuthering Waves characters",
    version
)]
struct Args {
    /// Roster CSV file
    #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
    file: String,

    /// RNG seed for reproducible picks
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    // Logs go to stderr and stay quiet by default so they do not tear the
    // alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let roster = match load_roster(&expand_home(&args.file)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut config = RouletteConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if let Err(e) = wp_tui::terminal::run(&roster, &config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
