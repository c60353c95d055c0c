use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a character within its roster.
///
/// Ids are assigned at load time from the row position, so two rows with
/// identical values still have distinct ids. All pool bookkeeping goes
/// through ids rather than value comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

impl CharacterId {
    /// The position of this character in its roster.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playable character as exported from the player's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Character level.
    pub level: i32,
    /// Ascension rank.
    pub ascension: i32,
    /// Basic attack talent level.
    pub talent_basic_atk: i32,
    /// Resonance skill talent level.
    pub talent_skill: i32,
    /// Forte circuit talent level.
    pub talent_forte: i32,
    /// Resonance liberation talent level.
    pub talent_liberation: i32,
    /// Intro skill talent level.
    pub talent_intro: i32,
    /// Resonance chain (sequence) count.
    pub sequence: i32,
    /// Element name, e.g. "Spectro".
    pub element: String,
    /// Rarity in stars.
    pub quality: i32,
}

/// Width of the `=` rules framing a character card.
pub const CARD_RULE_WIDTH: usize = 30;

impl Character {
    /// Create a character with the given name and element and all numeric
    /// fields set to one.
    pub fn new(name: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            ascension: 1,
            talent_basic_atk: 1,
            talent_skill: 1,
            talent_forte: 1,
            talent_liberation: 1,
            talent_intro: 1,
            sequence: 0,
            element: element.into(),
            quality: 4,
        }
    }

    /// The text lines of this character's card, shared by every frontend.
    pub fn card_lines(&self) -> Vec<String> {
        let rule = "=".repeat(CARD_RULE_WIDTH);
        vec![
            rule.clone(),
            format!("Character: {}", self.name),
            rule.clone(),
            format!("Level: {}", self.level),
            format!("Ascension: {}", self.ascension),
            "Talents:".to_string(),
            format!("  - Basic Atk: {}", self.talent_basic_atk),
            format!("  - Skill: {}", self.talent_skill),
            format!("  - Forte: {}", self.talent_forte),
            format!("  - Liberation: {}", self.talent_liberation),
            format!("  - Intro: {}", self.talent_intro),
            format!("Sequence: {}", self.sequence),
            format!("Element: {}", self.element),
            rule,
        ]
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, S{})", self.name, self.element, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_compact() {
        let mut c = Character::new("Jinhsi", "Spectro");
        c.sequence = 2;
        assert_eq!(c.to_string(), "Jinhsi (Spectro, S2)");
    }

    #[test]
    fn id_display() {
        assert_eq!(CharacterId(7).to_string(), "#7");
        assert_eq!(CharacterId(7).index(), 7);
    }

    #[test]
    fn card_lines_snapshot() {
        let c = Character {
            name: "Calcharo".to_string(),
            level: 90,
            ascension: 6,
            talent_basic_atk: 8,
            talent_skill: 9,
            talent_forte: 10,
            talent_liberation: 9,
            talent_intro: 6,
            sequence: 1,
            element: "Electro".to_string(),
            quality: 5,
        };
        insta::assert_snapshot!(c.card_lines().join("\n"), @r"
        ==============================
        Character: Calcharo
        ==============================
        Level: 90
        Ascension: 6
        Talents:
          - Basic Atk: 8
          - Skill: 9
          - Forte: 10
          - Liberation: 9
          - Intro: 6
        Sequence: 1
        Element: Electro
        ==============================
        ");
    }

    #[test]
    fn equal_values_compare_equal() {
        let a = Character::new("Rover", "Havoc");
        let b = Character::new("Rover", "Havoc");
        assert_eq!(a, b);
    }
}
