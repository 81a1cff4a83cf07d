use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Feature, FeatureData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerkList {
    Crafting,
    Exploration,
    Interpersonal,
    Intrigue,
    Lore,
    Supernatural,
}

impl fmt::Display for PerkList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A perk: a feature that belongs to one perk list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub list: PerkList,
    #[serde(flatten)]
    pub feature: Feature,
}

impl Perk {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        list: PerkList,
        data: FeatureData,
    ) -> Self {
        Self {
            list,
            feature: Feature::new(id, name, "", data),
        }
    }

    pub fn id(&self) -> &str {
        &self.feature.id
    }

    pub fn name(&self) -> &str {
        &self.feature.name
    }
}
