//! Domain layer - entities, value objects, reference tables, and the
//! derived stat engine. No I/O lives here.

pub mod entities;
pub mod reference;
pub mod stats;
pub mod value_objects;
