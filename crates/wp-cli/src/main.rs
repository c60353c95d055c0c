//! CLI frontend for WuWa Picker.

mod commands;
mod console;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wp_core::loader::DEFAULT_ROSTER_PATH;

#[derive(Parser)]
#[command(
    name = "wp",
    about = "WuWa Picker: random characters and team roulette from your Wuthering Waves roster",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu and play either mode in the console
    Play {
        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Build teams of three without repeats, round by round
    Roulette {
        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Pick random characters and print their cards
    Pick {
        /// Number of independent picks
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the characters in the roster
    List {
        /// Print the roster as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,
    },

    /// Validate the roster file
    Check {
        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,
    },

    /// Launch the full-screen terminal UI
    Tui {
        /// Path to character data csv
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        file: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { file, seed } => commands::play::run(&file, seed),
        Commands::Roulette { file, seed } => commands::roulette::run(&file, seed),
        Commands::Pick { count, file, seed } => commands::pick::run(&file, count, seed),
        Commands::List { json, file } => commands::list::run(&file, json),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Tui { file, seed } => commands::tui::run(&file, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
