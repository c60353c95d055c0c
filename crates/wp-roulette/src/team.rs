//! Teams of characters built across roulette rounds.

use wp_core::{Character, CharacterId, Roster};

/// Number of members in a finished team.
pub const TEAM_SIZE: usize = 3;

/// Number of candidates offered in each round.
pub const CANDIDATES_PER_ROUND: usize = 3;

/// Smallest pool that can seat a whole team with a full draw every round.
pub const MIN_POOL_FOR_TEAM: usize = TEAM_SIZE * CANDIDATES_PER_ROUND;

/// An ordered group of characters, complete once it has [`TEAM_SIZE`] members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    members: Vec<CharacterId>,
}

impl Team {
    /// Create an empty team.
    pub fn new() -> Self {
        Self::default()
    }

    /// Member ids in pick order.
    pub fn members(&self) -> &[CharacterId] {
        &self.members
    }

    /// Number of members so far.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no member has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the team has all of its members.
    pub fn is_complete(&self) -> bool {
        self.members.len() == TEAM_SIZE
    }

    /// Whether the given character is on this team.
    pub fn contains(&self, id: CharacterId) -> bool {
        self.members.contains(&id)
    }

    /// Resolve the members against the roster they were drawn from.
    pub fn resolve<'r>(&self, roster: &'r Roster) -> Vec<&'r Character> {
        roster.resolve(&self.members)
    }

    pub(crate) fn push(&mut self, id: CharacterId) {
        debug_assert!(!self.is_complete(), "team is already full");
        self.members.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_pool_is_nine() {
        assert_eq!(MIN_POOL_FOR_TEAM, 9);
    }

    #[test]
    fn fills_up_to_team_size() {
        let mut team = Team::new();
        assert!(team.is_empty());
        team.push(CharacterId(4));
        team.push(CharacterId(2));
        assert!(!team.is_complete());
        team.push(CharacterId(7));
        assert!(team.is_complete());
        assert_eq!(team.len(), 3);
        assert_eq!(
            team.members(),
            &[CharacterId(4), CharacterId(2), CharacterId(7)]
        );
        assert!(team.contains(CharacterId(2)));
        assert!(!team.contains(CharacterId(0)));
    }

    #[test]
    fn resolves_names() {
        let roster: Roster = ["Jiyan", "Mortefi", "Verina"]
            .into_iter()
            .map(|n| Character::new(n, "Aero"))
            .collect();
        let mut team = Team::new();
        team.push(CharacterId(2));
        team.push(CharacterId(0));
        let names: Vec<_> = team.resolve(&roster).iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Verina", "Jiyan"]);
    }
}
