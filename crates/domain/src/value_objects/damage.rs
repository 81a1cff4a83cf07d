use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a damage modifier reduces or increases incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageModifierType {
    Immunity,
    Weakness,
}

impl fmt::Display for DamageModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageModifierType::Immunity => write!(f, "immunity"),
            DamageModifierType::Weakness => write!(f, "weakness"),
        }
    }
}

/// Immunity or weakness to a damage type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageModifier {
    /// Damage type (e.g. "fire", "corruption", "damage" for all types)
    pub damage_type: String,
    #[serde(rename = "type")]
    pub modifier_type: DamageModifierType,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub value_per_level: i32,
}

impl DamageModifier {
    pub fn immunity(damage_type: impl Into<String>, value: i32) -> Self {
        Self {
            damage_type: damage_type.into(),
            modifier_type: DamageModifierType::Immunity,
            value,
            value_per_level: 0,
        }
    }

    pub fn weakness(damage_type: impl Into<String>, value: i32) -> Self {
        Self {
            damage_type: damage_type.into(),
            modifier_type: DamageModifierType::Weakness,
            value,
            value_per_level: 0,
        }
    }
}
