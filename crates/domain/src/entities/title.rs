use serde::{Deserialize, Serialize};

use super::Feature;

/// A title earned through play, gated by echelon.
///
/// A hero who takes a title also picks one of its features; the pick lives
/// on the title copy stored in the owning feature's selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub echelon: u32,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(rename = "selectedFeatureID", default)]
    pub selected_feature_id: Option<String>,
}

impl Title {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        echelon: u32,
        features: Vec<Feature>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            echelon,
            features,
            selected_feature_id: None,
        }
    }

    /// The chosen sub-feature, if one is chosen and still exists.
    pub fn selected_feature(&self) -> Option<&Feature> {
        let id = self.selected_feature_id.as_deref().filter(|id| !id.is_empty())?;
        self.features.iter().find(|f| f.id == id)
    }
}
