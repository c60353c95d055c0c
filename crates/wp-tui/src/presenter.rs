//! Presenter that draws each prompt as a full screen and answers it with a
//! single key press.

use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use wp_core::Character;
use wp_roulette::{
    Frontend, MenuChoice, ModeNames, Presenter, RandomChoice, RoundContext, UserChoice,
};

use crate::keys::{KeySource, key_text};
use crate::views;

/// Full-screen presenter over any ratatui backend.
pub struct TuiPresenter<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    modes: ModeNames,
}

impl<B: Backend, K: KeySource> TuiPresenter<B, K> {
    /// Create a presenter drawing to `terminal` and reading from `keys`.
    pub fn new(terminal: Terminal<B>, keys: K, modes: ModeNames) -> Self {
        Self {
            terminal,
            keys,
            modes,
        }
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the terminal, for teardown.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn read_key(&mut self) -> io::Result<String> {
        let key = key_text(self.keys.next_key()?);
        debug!(key = %key, "key pressed");
        Ok(key)
    }
}

impl<B: Backend, K: KeySource> Presenter for TuiPresenter<B, K> {
    type Error = io::Error;

    fn choose_among(
        &mut self,
        candidates: &[&Character],
        context: &RoundContext<'_>,
    ) -> io::Result<UserChoice> {
        let title = format!("{}: Round {}/3", self.modes.roulette, context.round + 1);
        let prompt = format!(
            "Press 1-{} to select a character or 'q' to return to the menu",
            candidates.len()
        );
        self.terminal
            .draw(|frame| views::draw_round(frame, &title, candidates, context, &prompt))?;
        let key = self.read_key()?;
        Ok(UserChoice::from_key(&key))
    }

    fn confirm_continue(&mut self, teams: &[Vec<&Character>]) -> io::Result<bool> {
        let title = format!("{}: Your Teams", self.modes.roulette);
        let prompt = "Press 'n' to create another team or any other key to return to the menu";
        self.terminal
            .draw(|frame| views::draw_teams(frame, &title, teams, prompt))?;
        let key = self.read_key()?;
        Ok(key.eq_ignore_ascii_case("n"))
    }

    fn notify_pool_exhausted(&mut self, remaining: usize) -> io::Result<()> {
        let title = self.modes.roulette.clone();
        let lines = [
            format!(
                "Warning: Not enough characters left for {} ({remaining} remaining)!",
                self.modes.roulette
            ),
            "Returning to the main menu.".to_string(),
        ];
        self.terminal.draw(|frame| {
            views::draw_notice(frame, &title, &lines, "Press any key to continue")
        })?;
        self.read_key()?;
        Ok(())
    }
}

impl<B: Backend, K: KeySource> Frontend for TuiPresenter<B, K> {
    fn choose_mode(&mut self) -> io::Result<MenuChoice> {
        let modes = &self.modes;
        self.terminal
            .draw(|frame| views::draw_menu(frame, modes, "Select an option (1-2)"))?;
        let key = self.read_key()?;
        Ok(MenuChoice::from_key(&key))
    }

    fn show_random(&mut self, character: &Character) -> io::Result<RandomChoice> {
        let title = self.modes.random.clone();
        let prompt = "Press 'n' to pick another character or 'q' to return to the menu";
        self.terminal
            .draw(|frame| views::draw_random(frame, &title, character, prompt))?;
        let key = self.read_key()?;
        Ok(RandomChoice::from_key(&key))
    }

    fn notify_empty_roster(&mut self) -> io::Result<()> {
        let title = self.modes.random.clone();
        let lines = ["Warning: The roster has no characters to pick from.".to_string()];
        self.terminal.draw(|frame| {
            views::draw_notice(frame, &title, &lines, "Press any key to continue")
        })?;
        self.read_key()?;
        Ok(())
    }
}
