//! The feature panel: one feature's header, ribbon and body.
//!
//! A panel either shows what the player may pick (editing) or what has been
//! committed (display). Changes leave through a [`FeatureDataSink`], and a
//! fault while rendering logs an error and yields no panel at all.

mod types;


use herobldr_domain::{
    Feature, FeatureAncestryFeatureChoiceData, FeatureData, Hero, Perk, Sourcebook,
    MAX_FEATURE_DEPTH,
};

use crate::infrastructure::ports::FeatureDataSink;
use crate::use_cases::information::RenderError;
use crate::use_cases::selection::{FeatureResolver, SelectionChange, SelectionError};

pub use types::{CostBadge, FeaturePanelView, PanelBody, PanelMode};

/// Renders and commits a single feature.
#[derive(Debug, Clone)]
pub struct FeaturePanel<'a> {
    hero: Option<&'a Hero>,
    sourcebooks: &'a [Sourcebook],
    mode: PanelMode,
    editable: bool,
    cost: Option<CostBadge>,
    max_depth: usize,
}

/// Per-panel presentation, which nested panels do not inherit.
#[derive(Debug, Clone, Default)]
struct Frame {
    mode: PanelMode,
    editing: bool,
    cost: Option<CostBadge>,
    tags: Vec<String>,
}

impl<'a> FeaturePanel<'a> {
    pub fn new(sourcebooks: &'a [Sourcebook]) -> Self {
        Self {
            hero: None,
            sourcebooks,
            mode: PanelMode::default(),
            editable: false,
            cost: None,
            max_depth: MAX_FEATURE_DEPTH,
        }
    }

    pub fn with_hero(mut self, hero: &'a Hero) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn with_mode(mut self, mode: PanelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Show the selection view instead of committed information.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_cost(mut self, cost: CostBadge) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn hero(&self) -> Option<&'a Hero> {
        self.hero
    }

    pub fn sourcebooks(&self) -> &'a [Sourcebook] {
        self.sourcebooks
    }

    pub fn resolver(&self) -> FeatureResolver<'a> {
        FeatureResolver::new(self.hero, self.sourcebooks)
    }

    /// Render the panel, or nothing if the feature cannot be shown.
    pub fn render(&self, feature: &Feature) -> Option<FeaturePanelView> {
        let frame = self.top_frame(Vec::new());
        self.guard(feature, self.build(feature, frame, 0))
    }

    /// Render a perk's feature tagged with its perk list.
    pub fn render_perk(&self, perk: &Perk) -> Option<FeaturePanelView> {
        let frame = self.top_frame(vec![perk.list.to_string()]);
        self.guard(&perk.feature, self.build(&perk.feature, frame, 0))
    }

    /// Apply `change` and hand the new payload to `sink`. The sink is not
    /// called when the change is rejected.
    pub fn commit(
        &self,
        feature: &Feature,
        change: SelectionChange,
        sink: &mut dyn FeatureDataSink,
    ) -> Result<(), SelectionError> {
        let data = self.resolver().apply(feature, change)?;
        sink.set_data(&feature.id, data);
        Ok(())
    }

    /// Select or deselect one option and commit the result.
    pub fn commit_toggle(
        &self,
        feature: &Feature,
        option_id: &str,
        sink: &mut dyn FeatureDataSink,
    ) -> Result<(), SelectionError> {
        let data = self.resolver().toggle(feature, option_id)?;
        sink.set_data(&feature.id, data);
        Ok(())
    }

    pub(crate) fn nested(
        &self,
        feature: &Feature,
        cost: Option<CostBadge>,
        depth: usize,
    ) -> Result<FeaturePanelView, RenderError> {
        let frame = Frame {
            mode: PanelMode::Full,
            cost,
            ..Frame::default()
        };
        self.build(feature, frame, depth)
    }

    pub(crate) fn nested_perk(&self, perk: &Perk, depth: usize) -> Result<FeaturePanelView, RenderError> {
        let frame = Frame {
            mode: PanelMode::Full,
            tags: vec![perk.list.to_string()],
            ..Frame::default()
        };
        self.build(&perk.feature, frame, depth)
    }

    fn top_frame(&self, tags: Vec<String>) -> Frame {
        Frame {
            mode: self.mode,
            editing: self.editable,
            cost: self.cost,
            tags,
        }
    }

    fn guard(&self, feature: &Feature, result: Result<FeaturePanelView, RenderError>) -> Option<FeaturePanelView> {
        match result {
            Ok(view) => Some(view),
            Err(e) => {
                tracing::error!(
                    feature_id = %feature.id,
                    kind = ?feature.feature_type(),
                    error = %e,
                    "Failed to render feature panel"
                );
                None
            }
        }
    }

    fn build(&self, feature: &Feature, frame: Frame, depth: usize) -> Result<FeaturePanelView, RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::TooDeep {
                feature_id: feature.id.clone(),
                depth,
            });
        }

        let mut tags = frame.tags;
        match &feature.data {
            FeatureData::AddOn(data) => tags.push(data.category.clone()),
            FeatureData::Ability(data) => {
                let ribbon = frame.cost.or_else(|| Some(data.ability.cost.into()));
                let mut view = FeaturePanelView::header(feature, frame.mode, tags, ribbon);
                view.body = PanelBody::Ability(Box::new(data.ability.clone()));
                return Ok(view);
            }
            // A picked ancestry feature stands in for the choice
            FeatureData::AncestryFeatureChoice(FeatureAncestryFeatureChoiceData {
                selected: Some(selected),
                ..
            }) => {
                let frame = Frame {
                    mode: frame.mode,
                    ..Frame::default()
                };
                return self.build(selected, frame, depth + 1);
            }
            _ => {}
        }

        let mut view = FeaturePanelView::header(feature, frame.mode, tags, frame.cost);
        view.body = match frame.mode {
            PanelMode::Compact => PanelBody::None,
            PanelMode::Full if frame.editing && feature.is_choice() => PanelBody::Selection {
                resolution: self.resolver().resolve(feature),
                committed: self.committed_at(feature, depth)?,
            },
            PanelMode::Full if frame.editing => PanelBody::None,
            PanelMode::Full => PanelBody::Information(self.information_at(feature, depth)?),
        };
        Ok(view)
    }
}
