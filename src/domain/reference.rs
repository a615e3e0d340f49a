//! Static reference data: races, classes, and skills (5e 2014)

use crate::domain::value_objects::Ability;
use crate::domain::value_objects::Ability::{
    Charisma as CHA, Constitution as CON, Dexterity as DEX, Intelligence as INT, Strength as STR,
    Wisdom as WIS,
};

/// A playable race with its fixed ability bonuses
///
/// `flex` is the number of *different* abilities the player may additionally
/// bump by +1 (Variant Human and Half-Elf); 0 for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub name: &'static str,
    pub bonuses: &'static [(Ability, i32)],
    pub flex: usize,
}

/// A character class with its hit die and primary ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    pub name: &'static str,
    pub hit_die: u8,
    pub primary: Ability,
}

/// A skill and the ability that governs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDef {
    pub name: &'static str,
    pub ability: Ability,
}

pub const RACES: &[Race] = &[
    Race { name: "Human", bonuses: &[(STR, 1), (DEX, 1), (CON, 1), (INT, 1), (WIS, 1), (CHA, 1)], flex: 0 },
    Race { name: "Variant Human", bonuses: &[], flex: 2 },
    Race { name: "Hill Dwarf", bonuses: &[(CON, 2), (WIS, 1)], flex: 0 },
    Race { name: "Mountain Dwarf", bonuses: &[(CON, 2), (STR, 2)], flex: 0 },
    Race { name: "High Elf", bonuses: &[(DEX, 2), (INT, 1)], flex: 0 },
    Race { name: "Wood Elf", bonuses: &[(DEX, 2), (WIS, 1)], flex: 0 },
    Race { name: "Drow (Dark Elf)", bonuses: &[(DEX, 2), (CHA, 1)], flex: 0 },
    Race { name: "Lightfoot Halfling", bonuses: &[(DEX, 2), (CHA, 1)], flex: 0 },
    Race { name: "Stout Halfling", bonuses: &[(DEX, 2), (CON, 1)], flex: 0 },
    Race { name: "Rock Gnome", bonuses: &[(INT, 2), (CON, 1)], flex: 0 },
    Race { name: "Deep Gnome (Svirfneblin)", bonuses: &[(INT, 2), (DEX, 1)], flex: 0 },
    Race { name: "Half-Elf", bonuses: &[(CHA, 2)], flex: 2 },
    Race { name: "Half-Orc", bonuses: &[(STR, 2), (CON, 1)], flex: 0 },
    Race { name: "Dragonborn", bonuses: &[(STR, 2), (CHA, 1)], flex: 0 },
    Race { name: "Tiefling", bonuses: &[(CHA, 2), (INT, 1)], flex: 0 },
];

pub const CLASSES: &[CharacterClass] = &[
    CharacterClass { name: "Barbarian", hit_die: 12, primary: STR },
    CharacterClass { name: "Bard", hit_die: 8, primary: CHA },
    CharacterClass { name: "Cleric", hit_die: 8, primary: WIS },
    CharacterClass { name: "Druid", hit_die: 8, primary: WIS },
    CharacterClass { name: "Fighter", hit_die: 10, primary: STR },
    CharacterClass { name: "Monk", hit_die: 8, primary: DEX },
    CharacterClass { name: "Paladin", hit_die: 10, primary: CHA },
    CharacterClass { name: "Ranger", hit_die: 10, primary: DEX },
    CharacterClass { name: "Rogue", hit_die: 8, primary: DEX },
    CharacterClass { name: "Sorcerer", hit_die: 6, primary: CHA },
    CharacterClass { name: "Warlock", hit_die: 8, primary: CHA },
    CharacterClass { name: "Wizard", hit_die: 6, primary: INT },
];

pub const SKILLS: &[SkillDef] = &[
    SkillDef { name: "Acrobatics", ability: DEX },
    SkillDef { name: "Animal Handling", ability: WIS },
    SkillDef { name: "Arcana", ability: INT },
    SkillDef { name: "Athletics", ability: STR },
    SkillDef { name: "Deception", ability: CHA },
    SkillDef { name: "History", ability: INT },
    SkillDef { name: "Insight", ability: WIS },
    SkillDef { name: "Intimidation", ability: CHA },
    SkillDef { name: "Investigation", ability: INT },
    SkillDef { name: "Medicine", ability: WIS },
    SkillDef { name: "Nature", ability: INT },
    SkillDef { name: "Perception", ability: WIS },
    SkillDef { name: "Performance", ability: CHA },
    SkillDef { name: "Persuasion", ability: CHA },
    SkillDef { name: "Religion", ability: INT },
    SkillDef { name: "Sleight of Hand", ability: DEX },
    SkillDef { name: "Stealth", ability: DEX },
    SkillDef { name: "Survival", ability: WIS },
];

pub fn race_by_name(name: &str) -> Option<&'static Race> {
    RACES.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

pub fn class_by_name(name: &str) -> Option<&'static CharacterClass> {
    CLASSES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn skill_by_name(name: &str) -> Option<&'static SkillDef> {
    SKILLS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Fallback for a record whose stored race name no longer matches the table
pub fn default_race() -> &'static Race {
    &RACES[0]
}

pub fn default_class() -> &'static CharacterClass {
    &CLASSES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(RACES.len(), 15);
        assert_eq!(CLASSES.len(), 12);
        assert_eq!(SKILLS.len(), 18);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(race_by_name("half-elf").unwrap().name, "Half-Elf");
        assert_eq!(class_by_name("WIZARD").unwrap().hit_die, 6);
        assert_eq!(skill_by_name("stealth").unwrap().ability, DEX);
        assert!(race_by_name("Owlbear").is_none());
    }

    #[test]
    fn flex_races_are_the_expected_two() {
        let flex: Vec<_> = RACES.iter().filter(|r| r.flex > 0).map(|r| r.name).collect();
        assert_eq!(flex, vec!["Variant Human", "Half-Elf"]);
    }

    #[test]
    fn defaults_are_the_first_table_entries() {
        assert_eq!(default_race().name, "Human");
        assert_eq!(default_class().name, "Barbarian");
    }
}
