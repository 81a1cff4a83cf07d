//! Three-tier power roll outcomes.

use serde::{Deserialize, Serialize};

use super::Characteristic;

/// A power roll: 2d10 plus a characteristic, resolved on three tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRoll {
    /// Characteristics the roller may add (highest applies)
    #[serde(default)]
    pub characteristic: Vec<Characteristic>,
    /// Flat bonus used instead of a characteristic (monster and malice rolls)
    #[serde(default)]
    pub bonus: i32,
    /// Outcome on 11 or lower
    pub tier1: String,
    /// Outcome on 12-16
    pub tier2: String,
    /// Outcome on 17 or higher
    pub tier3: String,
}

impl PowerRoll {
    pub fn new(
        characteristic: Vec<Characteristic>,
        tier1: impl Into<String>,
        tier2: impl Into<String>,
        tier3: impl Into<String>,
    ) -> Self {
        Self {
            characteristic,
            bonus: 0,
            tier1: tier1.into(),
            tier2: tier2.into(),
            tier3: tier3.into(),
        }
    }
}
