//! The shrinking set of characters still eligible for a roulette session.

use rand::rngs::StdRng;
use rand::seq::index;

use wp_core::{CharacterId, Roster};

/// Characters not yet assigned to any team, tracked by id.
///
/// Removal is by id, so rosters with duplicate-valued rows lose exactly the
/// instance that was picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    ids: Vec<CharacterId>,
}

impl Pool {
    /// A pool holding every character of the roster.
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            ids: roster.ids().collect(),
        }
    }

    /// Number of characters left.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the given character is still in the pool.
    pub fn contains(&self, id: CharacterId) -> bool {
        self.ids.contains(&id)
    }

    /// Remaining ids in roster order.
    pub fn ids(&self) -> &[CharacterId] {
        &self.ids
    }

    /// Draw up to `amount` pairwise-distinct ids uniformly at random.
    ///
    /// The pool itself is not modified.
    pub fn draw(&self, rng: &mut StdRng, amount: usize) -> Vec<CharacterId> {
        let amount = amount.min(self.ids.len());
        index::sample(rng, self.ids.len(), amount)
            .into_iter()
            .map(|i| self.ids[i])
            .collect()
    }

    /// Remove a character permanently. Returns `false` if it was not present.
    pub fn take(&mut self, id: CharacterId) -> bool {
        match self.ids.iter().position(|&p| p == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }
}
