use std::fmt;

use serde::{Deserialize, Serialize};

use super::Characteristic;

/// A hero statistic that a Bonus feature can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureField {
    Stamina,
    Recoveries,
    RecoveryValue,
    Stability,
    Speed,
    Disengage,
    Renown,
    Wealth,
    ProjectPoints,
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FeatureField::Stamina => "Stamina",
            FeatureField::Recoveries => "Recoveries",
            FeatureField::RecoveryValue => "Recovery Value",
            FeatureField::Stability => "Stability",
            FeatureField::Speed => "Speed",
            FeatureField::Disengage => "Disengage",
            FeatureField::Renown => "Renown",
            FeatureField::Wealth => "Wealth",
            FeatureField::ProjectPoints => "Project Points",
        };
        write!(f, "{}", label)
    }
}

/// How much a Bonus feature adds, possibly scaling with level or echelon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    #[serde(default)]
    pub value: i32,
    /// Characteristics whose score is added on top of `value`
    #[serde(default)]
    pub value_characteristics: Vec<Characteristic>,
    /// Added for each level after 1st
    #[serde(default)]
    pub value_per_level: i32,
    /// Added for each echelon after the first
    #[serde(default)]
    pub value_per_echelon: i32,
}

impl Modifier {
    pub fn flat(value: i32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}
