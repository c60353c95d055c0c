//! Outer menu loop dispatching between the random pick and team roulette.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use wp_core::{Character, Roster};

use crate::config::RouletteConfig;
use crate::picker::pick_one;
use crate::presenter::{Presenter, run_session};
use crate::session::{RouletteSession, SessionOutcome};

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Enter the random pick mode.
    Random,
    /// Start a team roulette session.
    Roulette,
    /// Leave the application.
    Quit,
    /// Unrecognized input; the menu is shown again.
    Other,
}

impl MenuChoice {
    /// Interpret a key press: `1` random, `2` roulette, `q` quit.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "1" => Self::Random,
            "2" => Self::Roulette,
            "q" | "Q" => Self::Quit,
            _ => Self::Other,
        }
    }
}

/// What to do after a random pick was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomChoice {
    /// Pick another character.
    Again,
    /// Return to the menu.
    Back,
}

impl RandomChoice {
    /// Interpret a key press: `q` goes back, anything else picks again.
    pub fn from_key(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case("q") {
            Self::Back
        } else {
            Self::Again
        }
    }
}

/// A presenter that can also host the menu and the random pick mode.
pub trait Frontend: Presenter {
    /// Show the mode menu and read the user's selection.
    fn choose_mode(&mut self) -> Result<MenuChoice, Self::Error>;

    /// Show a randomly picked character and read what to do next.
    fn show_random(&mut self, character: &Character) -> Result<RandomChoice, Self::Error>;

    /// Tell the user the roster has nothing to pick from.
    fn notify_empty_roster(&mut self) -> Result<(), Self::Error>;
}

/// The menu loop over one roster.
pub struct App<'r> {
    roster: &'r Roster,
    rng: StdRng,
}

impl<'r> App<'r> {
    /// Create the app. Sessions it starts derive their randomness from the
    /// configured source, so a seeded config replays the same draws.
    pub fn new(roster: &'r Roster, config: &RouletteConfig) -> Self {
        Self {
            roster,
            rng: config.rng(),
        }
    }

    /// Run the menu until the user quits.
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<(), F::Error> {
        loop {
            match frontend.choose_mode()? {
                MenuChoice::Random => self.random_mode(frontend)?,
                MenuChoice::Roulette => {
                    self.roulette_mode(frontend)?;
                }
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Other => {}
            }
        }
    }

    /// Show random picks until the user goes back.
    pub fn random_mode<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<(), F::Error> {
        loop {
            match pick_one(self.roster, &mut self.rng) {
                Ok(character) => {
                    debug!(character = %character, "random pick");
                    if frontend.show_random(character)? == RandomChoice::Back {
                        return Ok(());
                    }
                }
                Err(e) => {
                    info!("random pick unavailable: {e}");
                    return frontend.notify_empty_roster();
                }
            }
        }
    }

    /// Run one roulette session to its end.
    pub fn roulette_mode<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<SessionOutcome, P::Error> {
        let mut session = RouletteSession::with_rng(self.roster, StdRng::from_rng(&mut self.rng));
        let outcome = run_session(&mut session, presenter)?;
        debug!(end = ?outcome.end, teams = outcome.teams.len(), "roulette session ended");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::convert::Infallible;

    use super::*;
    use crate::presenter::RoundContext;
    use crate::session::UserChoice;

    #[derive(Default)]
    struct Scripted {
        menu: VecDeque<MenuChoice>,
        random: VecDeque<RandomChoice>,
        choices: VecDeque<UserChoice>,
        continues: VecDeque<bool>,
        shown: Vec<String>,
        empty_notices: usize,
        exhausted_notices: usize,
    }

    impl Presenter for Scripted {
        type Error = Infallible;

        fn choose_among(
            &mut self,
            _candidates: &[&Character],
            _context: &RoundContext<'_>,
        ) -> Result<UserChoice, Infallible> {
            Ok(self.choices.pop_front().unwrap_or(UserChoice::Quit))
        }

        fn confirm_continue(&mut self, _teams: &[Vec<&Character>]) -> Result<bool, Infallible> {
            Ok(self.continues.pop_front().unwrap_or(false))
        }

        fn notify_pool_exhausted(&mut self, _remaining: usize) -> Result<(), Infallible> {
            self.exhausted_notices += 1;
            Ok(())
        }
    }

    impl Frontend for Scripted {
        fn choose_mode(&mut self) -> Result<MenuChoice, Infallible> {
            Ok(self.menu.pop_front().unwrap_or(MenuChoice::Quit))
        }

        fn show_random(&mut self, character: &Character) -> Result<RandomChoice, Infallible> {
            self.shown.push(character.name.clone());
            Ok(self.random.pop_front().unwrap_or(RandomChoice::Back))
        }

        fn notify_empty_roster(&mut self) -> Result<(), Infallible> {
            self.empty_notices += 1;
            Ok(())
        }
    }

    fn roster(n: usize) -> Roster {
        (0..n)
            .map(|i| Character::new(format!("C{i}"), "Aero"))
            .collect()
    }

    fn config() -> RouletteConfig {
        RouletteConfig::default().with_seed(5)
    }

    #[test]
    fn menu_keys() {
        assert_eq!(MenuChoice::from_key("1"), MenuChoice::Random);
        assert_eq!(MenuChoice::from_key("2"), MenuChoice::Roulette);
        assert_eq!(MenuChoice::from_key("q"), MenuChoice::Quit);
        assert_eq!(MenuChoice::from_key("3"), MenuChoice::Other);
        assert_eq!(RandomChoice::from_key("q"), RandomChoice::Back);
        assert_eq!(RandomChoice::from_key("n"), RandomChoice::Again);
        assert_eq!(RandomChoice::from_key(""), RandomChoice::Again);
    }

    #[test]
    fn random_mode_repeats_until_back() {
        let r = roster(5);
        let mut f = Scripted {
            menu: [MenuChoice::Random, MenuChoice::Quit].into(),
            random: [RandomChoice::Again, RandomChoice::Again, RandomChoice::Back].into(),
            ..Default::default()
        };
        let Ok(()) = App::new(&r, &config()).run(&mut f);
        assert_eq!(f.shown.len(), 3);
        assert!(f.menu.is_empty());
    }

    #[test]
    fn random_mode_on_empty_roster_returns_to_menu() {
        let r = Roster::default();
        let mut f = Scripted {
            menu: [MenuChoice::Random, MenuChoice::Other, MenuChoice::Quit].into(),
            ..Default::default()
        };
        let Ok(()) = App::new(&r, &config()).run(&mut f);
        assert_eq!(f.empty_notices, 1);
        assert!(f.shown.is_empty());
    }

    #[test]
    fn roulette_mode_returns_to_menu() {
        let r = roster(9);
        let mut f = Scripted {
            menu: [MenuChoice::Roulette, MenuChoice::Roulette, MenuChoice::Quit].into(),
            choices: [UserChoice::Select(1); 3].into(),
            continues: [true].into(),
            ..Default::default()
        };
        let Ok(()) = App::new(&r, &config()).run(&mut f);
        // The first session exhausts after one team; the second session
        // starts over with a full pool and is quit at its first prompt.
        assert_eq!(f.exhausted_notices, 1);
        assert!(f.menu.is_empty());
    }

    #[test]
    fn seeded_apps_replay_the_same_picks() {
        let r = roster(20);
        let script = || Scripted {
            menu: [MenuChoice::Random].into(),
            random: [RandomChoice::Again; 5].into(),
            ..Default::default()
        };
        let mut a = script();
        let mut b = script();
        let Ok(()) = App::new(&r, &config()).run(&mut a);
        let Ok(()) = App::new(&r, &config()).run(&mut b);
        assert_eq!(a.shown, b.shown);
        assert_eq!(a.shown.len(), 6);
    }
}
