//! Culture, career and complication: the non-class parts of a hero's story.

use serde::{Deserialize, Serialize};

use super::Feature;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Languages every member of the culture speaks
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Culture {
    pub fn new(id: impl Into<String>, name: impl Into<String>, languages: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            languages,
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complication {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}
