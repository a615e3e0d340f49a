//! Character entity - the single live sheet record

use serde::{Deserialize, Serialize};

use crate::domain::entities::Spell;
use crate::domain::reference::{self, CharacterClass, Race, SkillDef};
use crate::domain::stats;
use crate::domain::value_objects::{Ability, AbilityScores, SpellId};

/// The full mutable character record
///
/// Every field carries a serde default so a partially-valid persisted record
/// degrades field-by-field; a record that fails to parse at all is replaced
/// wholesale by `Character::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    // Identity
    pub name: String,
    pub alignment: String,
    pub background_title: String,
    pub xp: u32,
    pub level: i32,

    // Choices
    pub race_name: String,
    pub class_name: String,

    // Raw scores and racial flex picks
    pub base_scores: AbilityScores,
    pub flex_picks: Vec<Ability>,

    // Combat stats
    pub armor_class: i32,
    pub initiative: i32,
    /// True once the player sets initiative by hand; while false the
    /// effective initiative tracks the final DEX modifier.
    pub initiative_overridden: bool,
    pub speed: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub temp_hp: i32,

    // Skills
    pub skill_proficiencies: Vec<String>,

    // Spellcasting
    pub spell_slots: [u32; 9],
    pub spells: Vec<Spell>,

    // Portrait reference and free-text notes
    pub portrait: Option<String>,
    pub background_notes: String,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: String::new(),
            alignment: "Neutral".to_string(),
            background_title: "Acolyte".to_string(),
            xp: 0,
            level: 1,
            race_name: reference::default_race().name.to_string(),
            class_name: reference::default_class().name.to_string(),
            base_scores: AbilityScores::default(),
            flex_picks: Vec::new(),
            armor_class: 0,
            initiative: 0,
            initiative_overridden: false,
            speed: 0,
            max_hp: 10,
            current_hp: 10,
            temp_hp: 0,
            skill_proficiencies: Vec::new(),
            spell_slots: [0; 9],
            spells: Vec::new(),
            portrait: None,
            background_notes: String::new(),
        }
    }
}

impl Character {
    /// The selected race, falling back to the first table entry when the
    /// stored name no longer matches the reference table
    pub fn race(&self) -> &'static Race {
        reference::race_by_name(&self.race_name).unwrap_or_else(reference::default_race)
    }

    pub fn class(&self) -> &'static CharacterClass {
        reference::class_by_name(&self.class_name).unwrap_or_else(reference::default_class)
    }

    /// Select a race by name; resets flex picks since the allowance changed
    pub fn set_race(&mut self, name: &str) -> bool {
        match reference::race_by_name(name) {
            Some(race) => {
                self.race_name = race.name.to_string();
                self.flex_picks.clear();
                true
            }
            None => false,
        }
    }

    pub fn set_class(&mut self, name: &str) -> bool {
        match reference::class_by_name(name) {
            Some(class) => {
                self.class_name = class.name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(1, 20);
    }

    pub fn set_base_score(&mut self, ability: Ability, score: i32) {
        self.base_scores.set(ability, score);
    }

    /// Toggle one flexible +1 pick, mirroring a checkbox: picking again
    /// removes it, and a new pick is ignored once the allowance is spent.
    /// Returns whether anything changed.
    pub fn toggle_flex_pick(&mut self, ability: Ability) -> bool {
        if let Some(pos) = self.flex_picks.iter().position(|&a| a == ability) {
            self.flex_picks.remove(pos);
            true
        } else if self.flex_picks.len() < self.race().flex {
            self.flex_picks.push(ability);
            true
        } else {
            false
        }
    }

    /// Replace the flex picks wholesale; duplicates collapse, and the result
    /// must fit the race's allowance
    pub fn set_flex_picks(&mut self, picks: &[Ability]) -> Result<(), String> {
        let mut deduped: Vec<Ability> = Vec::with_capacity(picks.len());
        for &pick in picks {
            if !deduped.contains(&pick) {
                deduped.push(pick);
            }
        }
        let allowance = self.race().flex;
        if deduped.len() > allowance {
            return Err(format!(
                "{} allows {} flexible +1 pick(s), got {}",
                self.race().name,
                allowance,
                deduped.len()
            ));
        }
        self.flex_picks = deduped;
        Ok(())
    }

    pub fn is_proficient(&self, skill: &str) -> bool {
        self.skill_proficiencies.iter().any(|s| s == skill)
    }

    /// Toggle proficiency in a skill; `None` when the name is not in the
    /// reference table. Returns the new proficiency state otherwise.
    pub fn toggle_skill(&mut self, name: &str) -> Option<bool> {
        let skill = reference::skill_by_name(name)?;
        if let Some(pos) = self.skill_proficiencies.iter().position(|s| s == skill.name) {
            self.skill_proficiencies.remove(pos);
            Some(false)
        } else {
            self.skill_proficiencies.push(skill.name.to_string());
            Some(true)
        }
    }

    /// Set the slot count for a spell level (1-9), floored at zero.
    /// Returns false for a level outside the slot range.
    pub fn set_spell_slot(&mut self, level: usize, count: i64) -> bool {
        if !(1..=9).contains(&level) {
            return false;
        }
        self.spell_slots[level - 1] = count.max(0) as u32;
        true
    }

    /// Add a spell at the head of the list, mirroring the sheet's
    /// newest-first ordering
    pub fn add_spell(&mut self, spell: Spell) -> SpellId {
        let id = spell.id;
        self.spells.insert(0, spell);
        id
    }

    pub fn remove_spell(&mut self, id: SpellId) -> bool {
        let before = self.spells.len();
        self.spells.retain(|s| s.id != id);
        self.spells.len() != before
    }

    /// Set initiative by hand, marking it overridden
    pub fn set_initiative(&mut self, value: i32) {
        self.initiative = value;
        self.initiative_overridden = true;
    }

    /// Drop the manual override; effective initiative reverts to the final
    /// DEX modifier
    pub fn clear_initiative_override(&mut self) {
        self.initiative = 0;
        self.initiative_overridden = false;
    }

    // ---- Derived ----

    pub fn final_scores(&self) -> AbilityScores {
        stats::final_ability_scores(&self.base_scores, self.race(), &self.flex_picks)
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        stats::modifier(self.final_scores().get(ability))
    }

    pub fn proficiency_bonus(&self) -> i32 {
        stats::proficiency_bonus(self.level)
    }

    pub fn skill_total(&self, skill: &SkillDef) -> i32 {
        stats::skill_total(
            self.ability_modifier(skill.ability),
            self.is_proficient(skill.name),
            self.proficiency_bonus(),
        )
    }

    /// Initiative as shown on the sheet: the manual value when overridden,
    /// the final DEX modifier otherwise
    pub fn effective_initiative(&self) -> i32 {
        if self.initiative_overridden {
            self.initiative
        } else {
            self.ability_modifier(Ability::Dexterity)
        }
    }
}
