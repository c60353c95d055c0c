//! The contract between the roulette session and whatever renders it.

use wp_core::Character;

use crate::session::{RouletteSession, SessionOutcome, SessionState, UserChoice};

/// What a presenter needs to draw a round prompt.
#[derive(Debug, Clone)]
pub struct RoundContext<'a> {
    /// Zero-based round within the current team.
    pub round: usize,
    /// Zero-based index of the team being built.
    pub team_index: usize,
    /// Teams completed earlier in this session.
    pub prior_teams: Vec<Vec<&'a Character>>,
    /// Members picked so far for the current team.
    pub in_progress: Vec<&'a Character>,
}

/// A frontend able to show roulette prompts and read the user's answers.
///
/// Every method blocks until the user has answered. Errors are the
/// frontend's own (terminal I/O and the like); the session never fails.
pub trait Presenter {
    /// Error raised by the frontend.
    type Error;

    /// Show the candidates of a round and read which one the user wants.
    fn choose_among(
        &mut self,
        candidates: &[&Character],
        context: &RoundContext<'_>,
    ) -> Result<UserChoice, Self::Error>;

    /// Show the completed teams and ask whether to build another one.
    fn confirm_continue(&mut self, teams: &[Vec<&Character>]) -> Result<bool, Self::Error>;

    /// Tell the user that too few characters remain for another team.
    fn notify_pool_exhausted(&mut self, remaining: usize) -> Result<(), Self::Error>;
}

/// Drive a session to a terminal state by prompting through `presenter`.
pub fn run_session<P: Presenter + ?Sized>(
    session: &mut RouletteSession<'_>,
    presenter: &mut P,
) -> Result<SessionOutcome, P::Error> {
    loop {
        match session.state() {
            SessionState::AwaitingRoundChoice { round } => {
                let context = RoundContext {
                    round,
                    team_index: session.team_index(),
                    prior_teams: session.resolved_teams(),
                    in_progress: session.resolved_in_progress(),
                };
                let candidates = session.candidates();
                let choice = presenter.choose_among(&candidates, &context)?;
                session.choose(choice);
            }
            SessionState::TeamComplete => {
                let teams = session.resolved_teams();
                let another = presenter.confirm_continue(&teams)?;
                session.answer_continue(another);
            }
            SessionState::PoolExhausted => {
                presenter.notify_pool_exhausted(session.pool().len())?;
                return Ok(session.outcome());
            }
            SessionState::Quit => return Ok(session.outcome()),
        }
    }
}
