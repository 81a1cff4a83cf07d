use serde::{Deserialize, Serialize};

use super::Feature;

/// A hero ancestry and the features it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ancestry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Ancestry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            features,
        }
    }
}
