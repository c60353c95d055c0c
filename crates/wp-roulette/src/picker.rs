//! Single uniform pick from the whole roster.

use rand::Rng;
use rand::rngs::StdRng;

use wp_core::{Character, Roster};

use crate::error::{RouletteError, RouletteResult};

/// Pick one character uniformly at random.
///
/// Picks are independent: the same character may come up on consecutive
/// calls.
pub fn pick_one<'r>(roster: &'r Roster, rng: &mut StdRng) -> RouletteResult<&'r Character> {
    if roster.is_empty() {
        return Err(RouletteError::EmptyRoster);
    }
    let index = rng.random_range(0..roster.len());
    Ok(&roster.characters()[index])
}
