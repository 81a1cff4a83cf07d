use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Artifact,
    Consumable,
    Leveled,
    Trinket,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A treasure item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            item_type,
            keywords: Vec::new(),
        }
    }
}
