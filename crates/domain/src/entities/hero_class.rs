//! Hero class entity with level-gated features and an ability list.

use serde::{Deserialize, Serialize};

use super::{Ability, Feature};

fn default_level() -> u32 {
    1
}

/// Features granted together at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesAtLevel {
    pub level: u32,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeaturesAtLevel {
    pub fn new(level: u32, features: Vec<Feature>) -> Self {
        Self { level, features }
    }
}

/// A subclass; only subclasses flagged `selected` contribute features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubClass {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features_by_level: Vec<FeaturesAtLevel>,
    #[serde(default)]
    pub selected: bool,
}

/// A hero class as chosen on a hero, or as listed in a sourcebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroClass {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub heroic_resource: String,
    /// Current class level on a hero (1 in catalogue entries)
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub features_by_level: Vec<FeaturesAtLevel>,
    #[serde(default)]
    pub subclasses: Vec<SubClass>,
}

impl HeroClass {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            heroic_resource: String::new(),
            level,
            abilities: Vec::new(),
            features_by_level: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    /// Features the class (and its selected subclasses) grant up to the
    /// current level, in level order.
    pub fn features_to_level(&self) -> impl Iterator<Item = &Feature> {
        let level = self.level;
        self.features_by_level
            .iter()
            .chain(
                self.subclasses
                    .iter()
                    .filter(|sc| sc.selected)
                    .flat_map(|sc| sc.features_by_level.iter()),
            )
            .filter(move |lvl| lvl.level <= level)
            .flat_map(|lvl| lvl.features.iter())
    }
}
