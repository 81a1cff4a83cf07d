use serde::{Deserialize, Serialize};

use super::FeaturesAtLevel;

/// A divine domain (for conduits and censors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// How the hero earns piety from this domain
    #[serde(default)]
    pub piety: String,
    #[serde(default)]
    pub features_by_level: Vec<FeaturesAtLevel>,
}

impl Domain {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            piety: String::new(),
            features_by_level: Vec::new(),
        }
    }
}
