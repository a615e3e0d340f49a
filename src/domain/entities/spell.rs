//! Spell entity - owned exclusively by a character's spell list

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SpellId;

/// A known or prepared spell
///
/// Created when added to a character, removed on explicit delete, otherwise
/// immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    /// 0 for cantrips, up to 9
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casting_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        level: i32,
        casting_time: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: SpellId::new(),
            name: name.into(),
            level: level.clamp(0, 9),
            casting_time: casting_time.filter(|t| !t.trim().is_empty()),
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_clamped_to_spell_range() {
        assert_eq!(Spell::new("Wish", 12, None, None).level, 9);
        assert_eq!(Spell::new("Prestidigitation", -3, None, None).level, 0);
        assert_eq!(Spell::new("Fireball", 3, None, None).level, 3);
    }

    #[test]
    fn blank_optional_text_is_dropped() {
        let spell = Spell::new("Shield", 1, Some("  ".into()), Some("".into()));
        assert!(spell.casting_time.is_none());
        assert!(spell.description.is_none());
    }
}
