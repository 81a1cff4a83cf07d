//! Monster entity, used for companions, mounts and retainers.

use serde::{Deserialize, Serialize};

use super::Feature;

/// A feature a retainer gains at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetainerLevelFeature {
    pub level: u32,
    pub feature: Feature,
}

/// Retainer progression attached to a monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retainer {
    /// Current level; kept in step with the owning hero
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub features_by_level: Vec<RetainerLevelFeature>,
}

impl Retainer {
    /// Level grants the retainer has reached.
    pub fn features_to_level(&self) -> impl Iterator<Item = &RetainerLevelFeature> {
        let level = self.level;
        self.features_by_level.iter().filter(move |lvl| lvl.level <= level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub retainer: Option<Retainer>,
}

impl Monster {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            level,
            keywords: Vec::new(),
            features: Vec::new(),
            retainer: None,
        }
    }
}
