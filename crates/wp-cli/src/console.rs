//! Line-oriented presenter: prints cards to a writer and reads one answer
//! per line.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use wp_core::Character;
use wp_core::character::CARD_RULE_WIDTH;
use wp_roulette::{
    Frontend, MenuChoice, ModeNames, Presenter, RandomChoice, RoundContext, UserChoice,
};

/// Horizontal distance between side-by-side cards.
const CARD_COLUMN_WIDTH: usize = 35;

/// Presenter that talks to the user through plain text lines.
///
/// End of input counts as `q`, so every prompt terminates.
pub struct LinePresenter<R, W> {
    input: R,
    output: W,
    modes: ModeNames,
}

impl<R: BufRead, W: Write> LinePresenter<R, W> {
    pub fn new(input: R, output: W, modes: ModeNames) -> Self {
        Self {
            input,
            output,
            modes,
        }
    }

    /// Print the closing summary of a finished roulette session.
    pub fn print_summary(&mut self, teams: &[Vec<&Character>]) -> io::Result<()> {
        let noun = if teams.len() == 1 { "team" } else { "teams" };
        writeln!(self.output, "{}", format!("{} {noun} built.", teams.len()).bold())?;
        self.print_teams(teams)
    }

    /// Print a card row for standalone output such as `wp pick`.
    pub fn print_cards(&mut self, characters: &[&Character]) -> io::Result<()> {
        for line in card_columns(characters) {
            writeln!(self.output, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn read_key(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{} ", prompt.cyan())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok("q".to_string());
        }
        Ok(line.trim().to_string())
    }

    fn top_bar(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(CARD_RULE_WIDTH);
        writeln!(self.output)?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{}", title.bold())?;
        writeln!(self.output, "{rule}")
    }

    fn print_teams(&mut self, teams: &[Vec<&Character>]) -> io::Result<()> {
        for (i, team) in teams.iter().enumerate() {
            writeln!(self.output)?;
            writeln!(self.output, "{}", format!("Team {}", i + 1).green().bold())?;
            self.print_cards(team)?;
        }
        Ok(())
    }
}

/// Lay cards out side by side, one output line per card line.
fn card_columns(characters: &[&Character]) -> Vec<String> {
    let cards: Vec<Vec<String>> = characters.iter().map(|c| c.card_lines()).collect();
    let height = cards.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            cards
                .iter()
                .map(|card| {
                    let cell = card.get(row).map(String::as_str).unwrap_or("");
                    format!("{cell:<width$}", width = CARD_COLUMN_WIDTH)
                })
                .collect::<String>()
        })
        .collect()
}

/// Option labels aligned above each candidate card.
fn option_labels(count: usize) -> String {
    (1..=count)
        .map(|n| format!("{:<width$}", format!("[{n}]"), width = CARD_COLUMN_WIDTH))
        .collect::<String>()
        .trim_end()
        .to_string()
}

impl<R: BufRead, W: Write> Presenter for LinePresenter<R, W> {
    type Error = io::Error;

    fn choose_among(
        &mut self,
        candidates: &[&Character],
        context: &RoundContext<'_>,
    ) -> io::Result<UserChoice> {
        let title = format!("{}: Round {}/3", self.modes.roulette, context.round + 1);
        self.top_bar(&title)?;
        self.print_teams(&context.prior_teams)?;
        if !context.in_progress.is_empty() {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "{}",
                format!("Team {} so far", context.team_index + 1).green()
            )?;
            self.print_cards(&context.in_progress)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", option_labels(candidates.len()).yellow())?;
        self.print_cards(candidates)?;
        writeln!(self.output)?;

        let prompt = format!(
            "Select a character (1-{}) or 'q' to return to the menu:",
            candidates.len()
        );
        let key = self.read_key(&prompt)?;
        Ok(UserChoice::from_key(&key))
    }

    fn confirm_continue(&mut self, teams: &[Vec<&Character>]) -> io::Result<bool> {
        let title = format!("{}: Your Teams", self.modes.roulette);
        self.top_bar(&title)?;
        self.print_teams(teams)?;
        writeln!(self.output)?;
        let key = self.read_key(
            "Press 'n' to create another team or any other key to return to the menu:",
        )?;
        Ok(key.eq_ignore_ascii_case("n"))
    }

    fn notify_pool_exhausted(&mut self, remaining: usize) -> io::Result<()> {
        let title = self.modes.roulette.clone();
        self.top_bar(&title)?;
        let warning = format!(
            "Warning: Not enough characters left for {} ({remaining} remaining)!",
            self.modes.roulette
        );
        writeln!(self.output, "{}", warning.yellow())?;
        writeln!(self.output, "Returning to the main menu.")?;
        self.read_key("Press Enter to continue.")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for LinePresenter<R, W> {
    fn choose_mode(&mut self) -> io::Result<MenuChoice> {
        self.top_bar("Wuthering Waves Character Picker")?;
        writeln!(self.output, "1. {}", self.modes.random)?;
        writeln!(self.output, "2. {}", self.modes.roulette)?;
        writeln!(self.output)?;
        writeln!(self.output, "Press 'q' to quit.")?;
        let key = self.read_key("Select an option (1-2):")?;
        Ok(MenuChoice::from_key(&key))
    }

    fn show_random(&mut self, character: &Character) -> io::Result<RandomChoice> {
        let title = self.modes.random.clone();
        self.top_bar(&title)?;
        self.print_cards(&[character])?;
        writeln!(self.output)?;
        let key =
            self.read_key("Press 'n' to pick another character or 'q' to return to the menu:")?;
        Ok(RandomChoice::from_key(&key))
    }

    fn notify_empty_roster(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            "Warning: The roster has no characters to pick from.".yellow()
        )?;
        self.read_key("Press Enter to continue.")?;
        Ok(())
    }
}
