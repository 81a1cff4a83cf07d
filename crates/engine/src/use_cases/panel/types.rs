use herobldr_domain::{Ability, AbilityCost, Feature};
use serde::Serialize;

use crate::use_cases::information::InfoBlock;
use crate::use_cases::selection::Resolution;

/// How much of a feature a panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PanelMode {
    /// Header and description only
    #[default]
    Compact,
    /// Header, description and body
    Full,
}

/// Ribbon shown in the panel header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CostBadge {
    Signature,
    Points { value: u32, repeatable: bool },
}

impl CostBadge {
    pub fn points(value: u32) -> Self {
        CostBadge::Points {
            value,
            repeatable: false,
        }
    }

    pub fn repeatable(value: u32) -> Self {
        CostBadge::Points {
            value,
            repeatable: true,
        }
    }
}

impl From<AbilityCost> for CostBadge {
    fn from(cost: AbilityCost) -> Self {
        if cost.is_signature() {
            CostBadge::Signature
        } else {
            CostBadge::points(cost.points())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum PanelBody {
    None,
    Ability(Box<Ability>),
    /// What may be picked, followed by what already has been
    Selection {
        resolution: Resolution,
        committed: Vec<InfoBlock>,
    },
    Information(Vec<InfoBlock>),
}

/// Everything a presentation layer needs to draw one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePanelView {
    pub feature_id: String,
    /// Anchor for in-page links; only full panels carry one
    pub anchor_id: Option<String>,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ribbon: Option<CostBadge>,
    pub mode: PanelMode,
    pub body: PanelBody,
}

impl FeaturePanelView {
    pub(super) fn header(feature: &Feature, mode: PanelMode, tags: Vec<String>, ribbon: Option<CostBadge>) -> Self {
        Self {
            feature_id: feature.id.clone(),
            anchor_id: (mode == PanelMode::Full).then(|| feature.id.clone()),
            name: feature.name.clone(),
            description: feature.description.clone(),
            tags,
            ribbon,
            mode,
            body: PanelBody::None,
        }
    }

    pub fn information(&self) -> Option<&[InfoBlock]> {
        match &self.body {
            PanelBody::Information(blocks) => Some(blocks),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Resolution> {
        match &self.body {
            PanelBody::Selection { resolution, .. } => Some(resolution),
            _ => None,
        }
    }

    /// Committed picks shown beneath the selection controls.
    pub fn committed(&self) -> Option<&[InfoBlock]> {
        match &self.body {
            PanelBody::Selection { committed, .. } => Some(committed),
            _ => None,
        }
    }
}
