//! Value objects - Immutable objects defined by their attributes

mod ability;
mod ids;

pub use ability::{Ability, AbilityScores};
pub use ids::SpellId;
