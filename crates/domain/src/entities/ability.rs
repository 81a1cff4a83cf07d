//! Ability entity: an action a hero can take in combat or play.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AbilityCost, PowerRoll};

fn default_min_level() -> u32 {
    1
}

/// A class, kit or ancestry ability.
///
/// Simple data struct: any combination of field values is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Heroic resource cost (or signature)
    #[serde(default)]
    pub cost: AbilityCost,
    /// Lowest class level at which the ability may be chosen
    #[serde(default = "default_min_level")]
    pub min_level: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub power_roll: Option<PowerRoll>,
    #[serde(default)]
    pub effect: String,
}

impl Ability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: AbilityCost,
        min_level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost,
            min_level,
            keywords: Vec::new(),
            power_roll: None,
            effect: String::new(),
        }
    }
}
