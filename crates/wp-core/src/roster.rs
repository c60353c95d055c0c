use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId};

/// The ordered set of characters available to the selection modes.
///
/// A roster is fixed after load. Sessions borrow it read-only, so one
/// roster can back any number of sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Build a roster, assigning ids in iteration order.
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up a character by id.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    /// All ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        (0..self.characters.len()).map(CharacterId)
    }

    /// Iterate over `(id, character)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (CharacterId(i), c))
    }

    /// The characters as a slice, in roster order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Resolve a list of ids, skipping any that are not in this roster.
    pub fn resolve<'a>(&'a self, ids: &[CharacterId]) -> Vec<&'a Character> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// Serialize the roster as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<Character> for Roster {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
