//! Selection views and change requests.

use std::fmt;

use herobldr_domain::{CompanionType, Feature, FeatureType, Monster};
use serde::Serialize;

/// Shown when a choice feature has an empty eligible pool.
pub const NO_OPTIONS: &str = "There are no options to choose for this feature.";

/// Shown when a DomainFeature has nothing to offer until a domain is picked.
pub const CHOOSE_DOMAIN_FIRST: &str = "Choose a domain to enable this feature.";

/// Outcome of resolving a feature's selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "camelCase")]
pub enum Resolution {
    /// The kind needs a hero and none was supplied; nothing is offered.
    Unavailable,
    /// The eligible pool is empty.
    NoOptions(Notice),
    Ready(SelectionView),
    /// The kind carries no selection state.
    NotSelectable,
}

impl Resolution {
    pub fn view(&self) -> Option<&SelectionView> {
        match self {
            Resolution::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Unavailable => "unavailable",
            Resolution::NoOptions(_) => "no_options",
            Resolution::Ready(_) => "ready",
            Resolution::NotSelectable => "not_selectable",
        }
    }
}

/// A non-fatal message attached to a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "camelCase")]
pub enum Notice {
    Warning(String),
    Info(String),
}

/// One entry of an eligible pool as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOption {
    /// Value sent back in [`SelectionChange::Ids`]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Point cost, shown for point-buy choices only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    /// Visible but not newly selectable
    pub disabled: bool,
}

impl SelectionOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cost: None,
            disabled: false,
        }
    }
}

/// Point-buy bookkeeping. `used + left == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBudget {
    pub total: i64,
    pub used: i64,
    pub left: i64,
}

impl PointBudget {
    pub fn new(total: u32, used: i64) -> Self {
        let total = i64::from(total);
        Self {
            total,
            used,
            left: total - used,
        }
    }
}

/// A problem with the committed selection that is reported, never fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectionWarning {
    /// A selected skill or language is also granted by another feature.
    AlreadyChosen { name: String },
    /// A selected entry is also held by another feature on the hero.
    HeldElsewhere { id: String, name: String },
    /// A selected entry is no longer in the eligible pool.
    Stale { id: String, name: String },
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWarning::AlreadyChosen { name } => write!(f, "You have already chosen {}.", name),
            SelectionWarning::HeldElsewhere { name, .. } => {
                write!(f, "{} is already chosen by another feature.", name)
            }
            SelectionWarning::Stale { name, .. } => write!(f, "{} is no longer available.", name),
        }
    }
}

/// The single sub-feature pick of one selected title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFeaturePick {
    pub slot: usize,
    pub title_id: String,
    pub title_name: String,
    pub placeholder: String,
    pub options: Vec<SelectionOption>,
    pub selected_feature_id: Option<String>,
}

/// A choice feature granted by a retainer at some level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionFeatureSlot {
    pub level: u32,
    pub feature: Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionView {
    pub companion_type: CompanionType,
    pub selected: Option<Monster>,
    /// "Select" before a companion is picked, "Change" after
    pub action: String,
    pub features: Vec<CompanionFeatureSlot>,
}

/// Everything needed to present one choice feature for editing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub feature_id: String,
    pub kind: FeatureType,
    /// Lead-in text such as "Choose 2:"
    pub prompt: Option<String>,
    pub placeholder: String,
    pub options: Vec<SelectionOption>,
    /// Ids of the committed selection, in committed order
    pub selected: Vec<String>,
    pub max_selections: usize,
    pub points: Option<PointBudget>,
    pub warnings: Vec<SelectionWarning>,
    /// Set when the view is usable despite an empty pool
    pub notice: Option<Notice>,
    pub title_picks: Vec<TitleFeaturePick>,
    pub companion: Option<CompanionView>,
}

impl SelectionView {
    pub fn new(feature: &Feature, placeholder: impl Into<String>, max_selections: usize) -> Self {
        Self {
            feature_id: feature.id.clone(),
            kind: feature.feature_type(),
            prompt: None,
            placeholder: placeholder.into(),
            options: Vec::new(),
            selected: Vec::new(),
            max_selections,
            points: None,
            warnings: Vec::new(),
            notice: None,
            title_picks: Vec::new(),
            companion: None,
        }
    }

    /// No selection made yet; presenters flag the control as empty.
    pub fn is_empty(&self) -> bool {
        match &self.companion {
            Some(companion) => companion.selected.is_none(),
            None => self.selected.is_empty(),
        }
    }

    pub fn option(&self, id: &str) -> Option<&SelectionOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// One user action against a choice feature.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    /// Replace the whole selection with these ids (names for skills and
    /// languages). Single-pick kinds take zero or one id.
    Ids(Vec<String>),
    /// Pick (or clear) the sub-feature of the title in `slot`.
    TitleFeature {
        slot: usize,
        feature_id: Option<String>,
    },
    /// Commit a companion picked from the monster catalogue.
    Companion(Box<Monster>),
    CompanionName(String),
    /// Apply `change` to the retainer feature granted at `level`.
    CompanionFeature {
        level: u32,
        feature_id: String,
        change: Box<SelectionChange>,
    },
}

impl SelectionChange {
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectionChange::Ids(ids.into_iter().map(Into::into).collect())
    }

    pub fn clear() -> Self {
        SelectionChange::Ids(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_budget_balances() {
        let budget = PointBudget::new(3, 2);
        assert_eq!(budget.left, 1);
        assert_eq!(budget.used + budget.left, budget.total);

        let over = PointBudget::new(2, 3);
        assert_eq!(over.left, -1);
        assert_eq!(over.used + over.left, over.total);
    }

    #[test]
    fn warnings_read_as_sentences() {
        let warning = SelectionWarning::AlreadyChosen {
            name: "Stealth".to_string(),
        };
        assert_eq!(warning.to_string(), "You have already chosen Stealth.");

        let stale = SelectionWarning::Stale {
            id: "t1".to_string(),
            name: "Knight".to_string(),
        };
        assert_eq!(stale.to_string(), "Knight is no longer available.");
    }

    #[test]
    fn resolution_serializes_with_status_tag() {
        let json = serde_json::to_value(Resolution::NoOptions(Notice::Info(
            CHOOSE_DOMAIN_FIRST.to_string(),
        )))
        .unwrap();
        assert_eq!(json["status"], "noOptions");
        assert_eq!(json["view"]["level"], "info");
        assert_eq!(json["view"]["message"], CHOOSE_DOMAIN_FIRST);

        let json = serde_json::to_value(Resolution::Unavailable).unwrap();
        assert_eq!(json["status"], "unavailable");
    }
}
