//! The six ability keys and the score block built on them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six abilities underlying every character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "CON")]
    Constitution,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "WIS")]
    Wisdom,
    #[serde(rename = "CHA")]
    Charisma,
}

impl Ability {
    /// All six abilities in sheet order
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// The classic three-letter key used on sheets and in serialized records
    pub fn abbrev(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for Ability {
    type Err = String;

    /// Accepts the short key or the full name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Ability::Strength),
            "DEX" | "DEXTERITY" => Ok(Ability::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Ability::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Ability::Intelligence),
            "WIS" | "WISDOM" => Ok(Ability::Wisdom),
            "CHA" | "CHARISMA" => Ok(Ability::Charisma),
            other => Err(format!("unknown ability: {other}")),
        }
    }
}

/// A full block of six ability scores
///
/// Two instances exist per character: the base block entered by the player,
/// and the final block derived from it by the stat engine. Only the base
/// block is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }
}

impl Default for AbilityScores {
    /// The standard array, highest-first
    fn default() -> Self {
        Self {
            strength: 15,
            dexterity: 14,
            constitution: 13,
            intelligence: 12,
            wisdom: 10,
            charisma: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_keys_and_full_names() {
        assert_eq!("DEX".parse::<Ability>().unwrap(), Ability::Dexterity);
        assert_eq!("wisdom".parse::<Ability>().unwrap(), Ability::Wisdom);
        assert_eq!(" cha ".parse::<Ability>().unwrap(), Ability::Charisma);
        assert!("LUCK".parse::<Ability>().is_err());
    }

    #[test]
    fn serializes_as_short_keys() {
        let json = serde_json::to_string(&Ability::Strength).unwrap();
        assert_eq!(json, "\"STR\"");
        let back: Ability = serde_json::from_str("\"CON\"").unwrap();
        assert_eq!(back, Ability::Constitution);
    }

    #[test]
    fn default_scores_are_the_standard_array() {
        let scores = AbilityScores::default();
        let expected = [15, 14, 13, 12, 10, 8];
        for (ability, want) in Ability::ALL.iter().zip(expected) {
            assert_eq!(scores.get(*ability), want);
        }
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut scores = AbilityScores::default();
        scores.set(Ability::Intelligence, 18);
        assert_eq!(scores.get(Ability::Intelligence), 18);
    }
}
