//! Companions, mounts and retainers.
//!
//! The monster itself is picked outside this crate; here we commit it, keep a
//! retainer's level in step with the hero, and route edits to the choice
//! features a retainer grants.

use herobldr_domain::{Feature, FeatureCompanionData, FeatureData, FeatureType, Hero};

use super::error::SelectionError;
use super::types::{CompanionFeatureSlot, CompanionView, Resolution, SelectionChange, SelectionView};
use super::FeatureResolver;

impl<'a> FeatureResolver<'a> {
    pub(super) fn resolve_companion(&self, feature: &Feature, data: &FeatureCompanionData) -> Resolution {
        let mut view = SelectionView::new(feature, "Select", 1);
        view.selected = data.selected.iter().map(|m| m.id.clone()).collect();
        view.companion = Some(CompanionView {
            companion_type: data.companion_type,
            selected: data.selected.clone(),
            action: if data.selected.is_some() { "Change" } else { "Select" }.to_string(),
            features: companion_features(data),
        });
        Resolution::Ready(view)
    }

    pub(super) fn apply_companion(
        &self,
        feature: &Feature,
        data: &FeatureCompanionData,
        change: SelectionChange,
    ) -> Result<FeatureData, SelectionError> {
        let mut copy = data.clone();
        match change {
            SelectionChange::Companion(monster) => {
                let mut monster = *monster;
                if let Some(retainer) = monster.retainer.as_mut() {
                    // Retainers match hero level
                    let hero_level = self.hero.map(Hero::class_level).unwrap_or(1);
                    retainer.level = monster.level.max(hero_level);
                }
                copy.selected = Some(monster);
            }
            SelectionChange::CompanionName(name) => {
                copy.selected.as_mut().ok_or(SelectionError::NoCompanion)?.name = name;
            }
            SelectionChange::CompanionFeature {
                level,
                feature_id,
                change,
            } => {
                let monster = copy.selected.as_mut().ok_or(SelectionError::NoCompanion)?;
                let slot = monster
                    .retainer
                    .as_mut()
                    .and_then(|r| {
                        r.features_by_level
                            .iter_mut()
                            .find(|lvl| lvl.level == level && lvl.feature.id == feature_id)
                    })
                    .ok_or_else(|| SelectionError::NoCompanionFeature {
                        level,
                        feature_id: feature_id.clone(),
                    })?;
                let updated = self.apply(&slot.feature, *change)?;
                slot.feature.data = updated;
            }
            _ => {
                return Err(SelectionError::UnsupportedChange {
                    kind: FeatureType::Companion,
                })
            }
        }

        tracing::debug!(
            feature_id = %feature.id,
            companion = ?copy.selected.as_ref().map(|m| m.name.as_str()),
            "Updated companion"
        );
        Ok(FeatureData::Companion(copy))
    }
}

/// Choice features the selected retainer has reached, in level order.
fn companion_features(data: &FeatureCompanionData) -> Vec<CompanionFeatureSlot> {
    data.selected
        .iter()
        .filter_map(|monster| monster.retainer.as_ref())
        .flat_map(|retainer| retainer.features_to_level())
        .filter(|lvl| lvl.feature.is_choice())
        .map(|lvl| CompanionFeatureSlot {
            level: lvl.level,
            feature: lvl.feature.clone(),
        })
        .collect()
}
