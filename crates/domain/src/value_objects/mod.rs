//! Value objects - Immutable objects defined by their attributes

mod ability_cost;
mod characteristic;
mod damage;
mod feature_field;
mod power_roll;
mod size;

pub use ability_cost::AbilityCost;
pub use characteristic::Characteristic;
pub use damage::{DamageModifier, DamageModifierType};
pub use feature_field::{FeatureField, Modifier};
pub use power_roll::PowerRoll;
pub use size::{Size, SizeMod};
