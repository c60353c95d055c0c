//! Team roulette session state machine.
//!
//! A `RouletteSession` starts with the whole roster in its pool. Each team
//! is built over three rounds: every round draws three distinct candidates
//! from the pool, and the picked one leaves the pool for good. A new team
//! may only start while the pool still holds enough characters for a full
//! draw in every round.
//!
//! The session does no I/O. Frame-driven frontends call [`RouletteSession::choose`]
//! and [`RouletteSession::answer_continue`] directly; prompt-driven ones use
//! [`crate::presenter::run_session`].

use rand::rngs::StdRng;
use tracing::debug;

use wp_core::{Character, CharacterId, Roster};

use crate::config::RouletteConfig;
use crate::pool::Pool;
use crate::team::{CANDIDATES_PER_ROUND, MIN_POOL_FOR_TEAM, TEAM_SIZE, Team};

/// Where a roulette session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the user to pick one of the drawn candidates.
    AwaitingRoundChoice {
        /// Zero-based round within the current team (0, 1 or 2).
        round: usize,
    },
    /// A team was just finished; waiting for "continue or stop".
    TeamComplete,
    /// Too few characters remain to start another team.
    PoolExhausted,
    /// The user ended the session.
    Quit,
}

impl SessionState {
    /// Whether the session has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::PoolExhausted | Self::Quit)
    }
}

/// A user's answer to a round prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    /// Pick the candidate at this 1-based position.
    Select(usize),
    /// Abandon the session.
    Quit,
    /// Anything else; ignored.
    Other,
}

impl UserChoice {
    /// Interpret a key press: digits select, `q` quits.
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        if key.eq_ignore_ascii_case("q") {
            return Self::Quit;
        }
        match key.parse::<usize>() {
            Ok(n) if n >= 1 => Self::Select(n),
            _ => Self::Other,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The pool ran too low to start another team.
    PoolExhausted,
    /// The user quit or declined another team.
    Quit,
}

/// The teams a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Why the session ended.
    pub end: SessionEnd,
    /// Every completed team, in the order they were built.
    pub teams: Vec<Team>,
}

/// A single run of team roulette over one roster.
pub struct RouletteSession<'r> {
    roster: &'r Roster,
    pool: Pool,
    in_progress: Team,
    teams: Vec<Team>,
    candidates: Vec<CharacterId>,
    state: SessionState,
    rng: StdRng,
}

impl<'r> RouletteSession<'r> {
    /// Start a session over `roster` with a random source built from `config`.
    pub fn new(roster: &'r Roster, config: &RouletteConfig) -> Self {
        Self::with_rng(roster, config.rng())
    }

    /// Start a session with an explicit random source.
    ///
    /// The first team is started immediately, so a roster that is already
    /// too small reports [`SessionState::PoolExhausted`] right away.
    pub fn with_rng(roster: &'r Roster, rng: StdRng) -> Self {
        let mut session = Self {
            roster,
            pool: Pool::from_roster(roster),
            in_progress: Team::new(),
            teams: Vec::new(),
            candidates: Vec::new(),
            state: SessionState::AwaitingRoundChoice { round: 0 },
            rng,
        };
        session.begin_team();
        session
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current zero-based round, if a round is awaiting a choice.
    pub fn round(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingRoundChoice { round } => Some(round),
            _ => None,
        }
    }

    /// Zero-based index of the team being built (equals the number of
    /// completed teams).
    pub fn team_index(&self) -> usize {
        self.teams.len()
    }

    /// The roster this session draws from.
    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    /// Characters still eligible for a team.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// The team currently being built.
    pub fn in_progress(&self) -> &Team {
        &self.in_progress
    }

    /// Completed teams in the order they were built.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Ids of this round's candidates. Empty outside of a round.
    pub fn candidate_ids(&self) -> &[CharacterId] {
        &self.candidates
    }

    /// This round's candidates, in the order they are offered (1, 2, 3).
    pub fn candidates(&self) -> Vec<&'r Character> {
        self.roster.resolve(&self.candidates)
    }

    /// Completed teams resolved to characters.
    pub fn resolved_teams(&self) -> Vec<Vec<&'r Character>> {
        self.teams.iter().map(|t| t.resolve(self.roster)).collect()
    }

    /// The in-progress team resolved to characters.
    pub fn resolved_in_progress(&self) -> Vec<&'r Character> {
        self.in_progress.resolve(self.roster)
    }

    /// Apply the user's answer to the current round.
    ///
    /// Ignored unless a round is awaiting a choice. A selection outside the
    /// offered candidates, and [`UserChoice::Other`], leave every part of
    /// the state untouched, including the drawn candidates.
    pub fn choose(&mut self, choice: UserChoice) -> SessionState {
        let SessionState::AwaitingRoundChoice { round } = self.state else {
            return self.state;
        };

        match choice {
            UserChoice::Select(n) => {
                let Some(&id) = n.checked_sub(1).and_then(|i| self.candidates.get(i)) else {
                    return self.state;
                };
                let taken = self.pool.take(id);
                debug_assert!(taken, "candidate {id} was not in the pool");
                self.in_progress.push(id);
                debug!(
                    team = self.teams.len(),
                    round,
                    character = %id,
                    remaining = self.pool.len(),
                    "pick committed"
                );

                if round + 1 == TEAM_SIZE {
                    self.complete_team();
                } else {
                    self.state = SessionState::AwaitingRoundChoice { round: round + 1 };
                    self.draw_candidates();
                }
            }
            UserChoice::Quit => {
                debug!(team = self.teams.len(), round, "session quit mid-team");
                self.in_progress = Team::new();
                self.candidates.clear();
                self.state = SessionState::Quit;
            }
            UserChoice::Other => {}
        }
        self.state
    }

    /// Answer the "build another team?" prompt.
    ///
    /// Ignored unless a team was just completed.
    pub fn answer_continue(&mut self, another: bool) -> SessionState {
        if self.state != SessionState::TeamComplete {
            return self.state;
        }
        if another {
            self.begin_team();
        } else {
            debug!(teams = self.teams.len(), "session stopped after team");
            self.state = SessionState::Quit;
        }
        self.state
    }

    /// Snapshot of the result so far. Meaningful once the state is terminal.
    pub fn outcome(&self) -> SessionOutcome {
        let end = match self.state {
            SessionState::PoolExhausted => SessionEnd::PoolExhausted,
            _ => SessionEnd::Quit,
        };
        SessionOutcome {
            end,
            teams: self.teams.clone(),
        }
    }

    fn begin_team(&mut self) {
        self.in_progress = Team::new();
        if self.pool.len() < MIN_POOL_FOR_TEAM {
            debug!(remaining = self.pool.len(), "pool exhausted");
            self.candidates.clear();
            self.state = SessionState::PoolExhausted;
            return;
        }
        debug!(team = self.teams.len(), remaining = self.pool.len(), "team started");
        self.state = SessionState::AwaitingRoundChoice { round: 0 };
        self.draw_candidates();
    }

    fn complete_team(&mut self) {
        let team = std::mem::take(&mut self.in_progress);
        self.teams.push(team);
        self.candidates.clear();
        self.state = SessionState::TeamComplete;
        debug!(
            teams = self.teams.len(),
            remaining = self.pool.len(),
            "team completed"
        );
    }

    fn draw_candidates(&mut self) {
        self.candidates = self.pool.draw(&mut self.rng, CANDIDATES_PER_ROUND);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;

    use super::*;

    fn roster(n: usize) -> Roster {
        (0..n)
            .map(|i| Character::new(format!("C{}", i + 1), "Spectro"))
            .collect()
    }

    fn session(roster: &Roster) -> RouletteSession<'_> {
        RouletteSession::with_rng(roster, StdRng::seed_from_u64(42))
    }

    /// Pool and all assigned characters never overlap, and every team
    /// has distinct members.
    fn assert_invariants(s: &RouletteSession<'_>) {
        let mut assigned: Vec<CharacterId> =
            s.teams().iter().flat_map(|t| t.members().to_vec()).collect();
        assigned.extend_from_slice(s.in_progress().members());
        for id in &assigned {
            assert!(!s.pool().contains(*id), "{id} is both assigned and pooled");
        }
        let unique: HashSet<_> = assigned.iter().collect();
        assert_eq!(unique.len(), assigned.len());
        for team in s.teams() {
            assert!(team.is_complete());
        }
        assert!(s.pool().ids().iter().all(|id| s.roster().get(*id).is_some()));
    }

    fn build_team_choosing_first(s: &mut RouletteSession<'_>) {
        for round in 0..3 {
            assert_eq!(s.state(), SessionState::AwaitingRoundChoice { round });
            assert_eq!(s.candidates().len(), 3);
            s.choose(UserChoice::Select(1));
            assert_invariants(s);
        }
        assert_eq!(s.state(), SessionState::TeamComplete);
    }

    #[test]
    fn starts_awaiting_first_round() {
        let r = roster(9);
        let s = session(&r);
        assert_eq!(s.state(), SessionState::AwaitingRoundChoice { round: 0 });
        assert_eq!(s.round(), Some(0));
        assert_eq!(s.pool().len(), 9);
        assert_eq!(s.team_index(), 0);
        assert!(s.teams().is_empty());
    }

    #[test]
    fn small_roster_is_exhausted_immediately() {
        let r = roster(8);
        let s = session(&r);
        assert_eq!(s.state(), SessionState::PoolExhausted);
        assert!(s.candidates().is_empty());
        assert_eq!(s.outcome().end, SessionEnd::PoolExhausted);
    }

    #[test]
    fn empty_roster_is_exhausted_immediately() {
        let r = Roster::default();
        assert_eq!(session(&r).state(), SessionState::PoolExhausted);
    }

    #[test]
    fn candidates_are_distinct_pool_members() {
        let r = roster(15);
        let s = session(&r);
        let ids = s.candidate_ids();
        assert_eq!(ids.len(), 3);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(ids.iter().all(|id| s.pool().contains(*id)));
    }

    #[test]
    fn selection_moves_candidate_from_pool_to_team() {
        let r = roster(10);
        let mut s = session(&r);
        let second = s.candidate_ids()[1];
        s.choose(UserChoice::Select(2));
        assert_eq!(s.in_progress().members(), &[second]);
        assert!(!s.pool().contains(second));
        assert_eq!(s.pool().len(), 9);
        assert_eq!(s.round(), Some(1));
    }

    #[test]
    fn every_pick_takes_exactly_one_from_pool() {
        let r = roster(18);
        let mut s = session(&r);
        let mut expected = 18;
        for pick in [3, 1, 2, 2, 3, 1] {
            if s.state() == SessionState::TeamComplete {
                s.answer_continue(true);
            }
            let chosen = s.candidate_ids()[pick - 1];
            s.choose(UserChoice::Select(pick));
            expected -= 1;
            assert_eq!(s.pool().len(), expected);
            assert!(!s.pool().contains(chosen));
        }
        assert_eq!(s.teams().len(), 2);
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let r = roster(12);
        let mut s = session(&r);
        s.choose(UserChoice::Select(3));
        let before_pool = s.pool().clone();
        let before_team = s.in_progress().clone();
        let before_candidates = s.candidate_ids().to_vec();

        for choice in [UserChoice::Other, UserChoice::Select(0), UserChoice::Select(4)] {
            assert_eq!(
                s.choose(choice),
                SessionState::AwaitingRoundChoice { round: 1 }
            );
            assert_eq!(s.pool(), &before_pool);
            assert_eq!(s.in_progress(), &before_team);
            assert_eq!(s.candidate_ids(), before_candidates.as_slice());
        }
    }

    #[test]
    fn continue_ignored_mid_round() {
        let r = roster(9);
        let mut s = session(&r);
        assert_eq!(
            s.answer_continue(false),
            SessionState::AwaitingRoundChoice { round: 0 }
        );
    }

    #[test]
    fn choose_ignored_at_team_complete() {
        let r = roster(12);
        let mut s = session(&r);
        build_team_choosing_first(&mut s);
        let pool = s.pool().clone();
        assert_eq!(s.choose(UserChoice::Select(1)), SessionState::TeamComplete);
        assert_eq!(s.pool(), &pool);
    }

    #[test]
    fn scenario_nine_characters_one_team() {
        let r = roster(9);
        let mut s = session(&r);
        build_team_choosing_first(&mut s);
        assert_eq!(s.teams().len(), 1);
        assert_eq!(s.team_index(), 1);
        assert_eq!(s.pool().len(), 6);

        assert_eq!(s.answer_continue(true), SessionState::PoolExhausted);
        let outcome = s.outcome();
        assert_eq!(outcome.end, SessionEnd::PoolExhausted);
        assert_eq!(outcome.teams.len(), 1);
    }

    #[test]
    fn scenario_eighteen_characters_two_teams() {
        let r = roster(18);
        let mut s = session(&r);
        build_team_choosing_first(&mut s);
        assert_eq!(s.answer_continue(true), SessionState::AwaitingRoundChoice { round: 0 });
        assert_eq!(s.pool().len(), 15);
        build_team_choosing_first(&mut s);
        assert_eq!(s.teams().len(), 2);
        assert_eq!(s.pool().len(), 12);

        // Keep going until the pool can no longer seat a team.
        assert_eq!(s.answer_continue(true), SessionState::AwaitingRoundChoice { round: 0 });
        build_team_choosing_first(&mut s);
        assert_eq!(s.answer_continue(true), SessionState::AwaitingRoundChoice { round: 0 });
        build_team_choosing_first(&mut s);
        assert_eq!(s.pool().len(), 6);
        assert_eq!(s.answer_continue(true), SessionState::PoolExhausted);
        assert_eq!(s.teams().len(), 4);
    }

    #[test]
    fn scenario_decline_after_first_team() {
        let r = roster(12);
        let mut s = session(&r);
        build_team_choosing_first(&mut s);
        assert_eq!(s.answer_continue(false), SessionState::Quit);
        assert_eq!(s.teams().len(), 1);
        assert_eq!(s.pool().len(), 9);
        assert_eq!(s.outcome().end, SessionEnd::Quit);
    }

    #[test]
    fn scenario_quit_mid_round() {
        let r = roster(12);
        let mut s = session(&r);
        s.choose(UserChoice::Select(1));
        let offered = s.candidate_ids().to_vec();
        assert_eq!(s.choose(UserChoice::Quit), SessionState::Quit);
        assert!(s.teams().is_empty());
        assert!(s.in_progress().is_empty());
        assert_eq!(s.pool().len(), 11);
        assert!(offered.iter().all(|id| s.pool().contains(*id)));
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn terminal_states_ignore_input() {
        let r = roster(12);
        let mut s = session(&r);
        s.choose(UserChoice::Quit);
        assert_eq!(s.choose(UserChoice::Select(1)), SessionState::Quit);
        assert_eq!(s.answer_continue(true), SessionState::Quit);
        assert!(s.state().is_terminal());
    }

    #[test]
    fn duplicate_rows_are_independent() {
        let r: Roster = std::iter::repeat_n(Character::new("Rover", "Havoc"), 9).collect();
        let mut s = session(&r);
        build_team_choosing_first(&mut s);
        let members = s.teams()[0].members();
        let unique: HashSet<_> = members.iter().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(s.pool().len(), 6);
    }

    #[test]
    fn resolved_views_match_ids() {
        let r = roster(9);
        let mut s = session(&r);
        let first = s.candidates()[0].name.clone();
        s.choose(UserChoice::Select(1));
        assert_eq!(s.resolved_in_progress()[0].name, first);
        s.choose(UserChoice::Select(1));
        s.choose(UserChoice::Select(1));
        let teams = s.resolved_teams();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0][0].name, first);
    }

    #[test]
    fn user_choice_from_key() {
        assert_eq!(UserChoice::from_key("1"), UserChoice::Select(1));
        assert_eq!(UserChoice::from_key(" 3 "), UserChoice::Select(3));
        assert_eq!(UserChoice::from_key("7"), UserChoice::Select(7));
        assert_eq!(UserChoice::from_key("q"), UserChoice::Quit);
        assert_eq!(UserChoice::from_key("Q"), UserChoice::Quit);
        assert_eq!(UserChoice::from_key("0"), UserChoice::Other);
        assert_eq!(UserChoice::from_key("x"), UserChoice::Other);
        assert_eq!(UserChoice::from_key(""), UserChoice::Other);
    }

    fn step_strategy() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..8, 0..80)
    }

    proptest! {
        #[test]
        fn invariants_hold_under_random_input(
            size in 0usize..40,
            seed in any::<u64>(),
            steps in step_strategy(),
        ) {
            let r = roster(size);
            let mut s = RouletteSession::with_rng(&r, StdRng::seed_from_u64(seed));
            let mut pool_at_round = s.pool().clone();

            for step in steps {
                if s.state().is_terminal() {
                    break;
                }
                match s.state() {
                    SessionState::AwaitingRoundChoice { .. } => {
                        let choice = match step {
                            0..=2 => UserChoice::Select(step as usize + 1),
                            3..=5 => UserChoice::Select(1),
                            6 => UserChoice::Other,
                            _ => UserChoice::Select(9),
                        };
                        let offered = s.candidate_ids().to_vec();
                        prop_assert!(offered.iter().all(|id| pool_at_round.contains(*id)));
                        s.choose(choice);
                    }
                    SessionState::TeamComplete => {
                        s.answer_continue(step != 7);
                    }
                    _ => unreachable!(),
                }
                assert_invariants(&s);
                pool_at_round = s.pool().clone();
            }
        }

        #[test]
        fn large_roster_never_exhausts_before_first_team(
            size in 9usize..60,
            seed in any::<u64>(),
        ) {
            let r = roster(size);
            let mut s = RouletteSession::with_rng(&r, StdRng::seed_from_u64(seed));
            for _ in 0..3 {
                prop_assert_ne!(s.state(), SessionState::PoolExhausted);
                s.choose(UserChoice::Select(2));
            }
            prop_assert_eq!(s.state(), SessionState::TeamComplete);
            prop_assert_eq!(s.pool().len(), size - 3);
        }
    }
}
