//! Derived stat engine - pure functions over scores, levels, and race bonuses

use crate::domain::reference::Race;
use crate::domain::value_objects::{Ability, AbilityScores};

/// The modifier derived from an ability score: floor((score - 10) / 2)
///
/// Defined for any integer, including scores outside [1,30]; the caller
/// range-constrains input where that matters.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus by character level: 2 at 1-4 up to 6 at 17-20
///
/// Levels outside [1,20] are not validated here.
pub fn proficiency_bonus(level: i32) -> i32 {
    match level {
        l if l >= 17 => 6,
        l if l >= 13 => 5,
        l if l >= 9 => 4,
        l if l >= 5 => 3,
        _ => 2,
    }
}

/// Final ability scores: base + race fixed bonuses + flexible +1 picks
///
/// Each distinct ability in `flex_picks` receives exactly one +1; later
/// duplicates are ignored, so re-applying the same picks never compounds.
pub fn final_ability_scores(
    base: &AbilityScores,
    race: &Race,
    flex_picks: &[Ability],
) -> AbilityScores {
    let mut out = *base;
    for &(ability, bonus) in race.bonuses {
        out.set(ability, out.get(ability) + bonus);
    }
    let mut used: Vec<Ability> = Vec::with_capacity(flex_picks.len());
    for &pick in flex_picks {
        if !used.contains(&pick) {
            out.set(pick, out.get(pick) + 1);
            used.push(pick);
        }
    }
    out
}

/// Skill total: ability modifier, plus the proficiency bonus when trained
pub fn skill_total(ability_modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    if proficient {
        ability_modifier + proficiency_bonus
    } else {
        ability_modifier
    }
}
