use std::fmt;

use serde::{Deserialize, Serialize};

use super::Feature;

/// Kind of kit; heroes can use Standard kits unless a feature allows more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KitType {
    Standard,
    Stormwight,
    Augmentation,
    Enchantment,
    Prayer,
    Ward,
}

impl fmt::Display for KitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kit_type: KitType,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Kit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kit_type: KitType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kit_type,
            features: Vec::new(),
        }
    }
}
