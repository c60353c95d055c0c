use colored::Colorize;

use wp_roulette::team::{MIN_POOL_FOR_TEAM, TEAM_SIZE};

pub fn run(file: &str) -> Result<(), String> {
    let roster = super::load(file)?;

    println!("  Roster OK: {} characters", roster.len());

    if roster.is_empty() {
        println!("  {}", "warning: random pick needs at least one character".yellow());
    }
    if roster.len() < MIN_POOL_FOR_TEAM {
        println!(
            "  {}",
            format!("warning: roulette needs at least {MIN_POOL_FOR_TEAM} characters").yellow()
        );
    } else {
        println!(
            "  Roulette can build up to {} teams",
            (roster.len() - MIN_POOL_FOR_TEAM) / TEAM_SIZE + 1
        );
    }

    Ok(())
}
