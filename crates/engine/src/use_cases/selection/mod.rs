//! Feature selection rules.
//!
//! [`FeatureResolver`] answers two questions for a choice feature: what may
//! the player pick right now ([`FeatureResolver::resolve`]), and what does the
//! feature's payload become after one pick ([`FeatureResolver::apply`]).
//!
//! Inputs are only borrowed. A successful `apply` returns a fresh payload and
//! leaves persisting it to the caller; a rejected one returns an error and
//! nothing else happens.

mod companion;
mod error;
mod menu;
mod pools;
mod types;


use herobldr_domain::{Catalog, Feature, FeatureData, FeatureTitleChoiceData, Hero, Sourcebook};

use menu::Menu;

pub use error::SelectionError;
pub use types::{
    CompanionFeatureSlot, CompanionView, Notice, PointBudget, Resolution, SelectionChange,
    SelectionOption, SelectionView, SelectionWarning, TitleFeaturePick, CHOOSE_DOMAIN_FIRST,
    NO_OPTIONS,
};

/// Resolves and applies selections against an optional hero and the active
/// sourcebooks.
#[derive(Debug, Clone, Copy)]
pub struct FeatureResolver<'a> {
    hero: Option<&'a Hero>,
    catalog: Catalog<'a>,
}

impl<'a> FeatureResolver<'a> {
    pub fn new(hero: Option<&'a Hero>, sourcebooks: &'a [Sourcebook]) -> Self {
        Self {
            hero,
            catalog: Catalog::new(sourcebooks),
        }
    }

    pub fn hero(&self) -> Option<&'a Hero> {
        self.hero
    }

    pub fn sourcebooks(&self) -> &'a [Sourcebook] {
        self.catalog.sourcebooks()
    }

    /// Compute what the player may currently choose for `feature`.
    pub fn resolve(&self, feature: &Feature) -> Resolution {
        let resolution = self.resolve_kind(feature);

        if let Resolution::Ready(view) = &resolution {
            if !view.warnings.is_empty() {
                let warnings: Vec<String> = view.warnings.iter().map(ToString::to_string).collect();
                tracing::warn!(
                    feature_id = %feature.id,
                    kind = ?feature.feature_type(),
                    ?warnings,
                    "Committed selection has stale or duplicated entries"
                );
            }
        }
        tracing::debug!(
            feature_id = %feature.id,
            kind = ?feature.feature_type(),
            outcome = resolution.label(),
            "Resolved feature selection"
        );

        resolution
    }

    fn resolve_kind(&self, feature: &Feature) -> Resolution {
        match &feature.data {
            FeatureData::AncestryChoice(data) => offer(feature, Ok(self.ancestry_choice_menu(data))),
            FeatureData::AncestryFeatureChoice(data) => {
                offer(feature, self.ancestry_feature_menu(feature, data))
            }
            FeatureData::Choice(data) => offer(feature, Ok(self.choice_menu(data))),
            FeatureData::ClassAbility(data) => offer(feature, self.class_ability_menu(feature, data)),
            FeatureData::Companion(data) => self.resolve_companion(feature, data),
            FeatureData::Domain(data) => offer(feature, self.domain_menu(feature, data)),
            FeatureData::DomainFeature(data) => match self.domain_feature_menu(feature, data) {
                Err(_) => Resolution::Unavailable,
                Ok(menu) if menu.is_empty() => {
                    Resolution::NoOptions(Notice::Info(CHOOSE_DOMAIN_FIRST.to_string()))
                }
                Ok(menu) => Resolution::Ready(menu.view(feature)),
            },
            FeatureData::ItemChoice(data) => offer(feature, self.item_menu(feature, data)),
            FeatureData::Kit(data) => offer(feature, self.kit_menu(feature, data)),
            FeatureData::LanguageChoice(data) => offer(feature, Ok(self.language_menu(feature, data))),
            FeatureData::Perk(data) => offer(feature, self.perk_menu(feature, data)),
            FeatureData::SkillChoice(data) => offer(feature, Ok(self.skill_menu(feature, data))),
            FeatureData::TitleChoice(data) => match self.title_menu(feature, data) {
                Err(_) => Resolution::Unavailable,
                Ok(menu) => {
                    // Titles already held keep their sub-picks even when
                    // nothing new is on offer.
                    let mut view = menu.view(feature);
                    if menu.is_empty() {
                        view.notice = Some(Notice::Warning(NO_OPTIONS.to_string()));
                    }
                    view.title_picks = title_picks(data);
                    Resolution::Ready(view)
                }
            },
            FeatureData::Ability(_)
            | FeatureData::AbilityCost(_)
            | FeatureData::AddOn(_)
            | FeatureData::Bonus(_)
            | FeatureData::CharacteristicBonus(_)
            | FeatureData::DamageModifier(_)
            | FeatureData::KitType(_)
            | FeatureData::Language(_)
            | FeatureData::Malice(_)
            | FeatureData::Multiple(_)
            | FeatureData::Package(_)
            | FeatureData::Size(_)
            | FeatureData::Skill(_)
            | FeatureData::Speed(_)
            | FeatureData::Text(_) => Resolution::NotSelectable,
        }
    }

    /// Produce the payload that results from one user action.
    pub fn apply(&self, feature: &Feature, change: SelectionChange) -> Result<FeatureData, SelectionError> {
        let result = self.apply_kind(feature, change);
        match &result {
            Ok(_) => tracing::debug!(
                feature_id = %feature.id,
                kind = ?feature.feature_type(),
                "Applied selection change"
            ),
            Err(e) => tracing::warn!(
                feature_id = %feature.id,
                kind = ?feature.feature_type(),
                error = %e,
                "Rejected selection change"
            ),
        }
        result
    }

    fn apply_kind(&self, feature: &Feature, change: SelectionChange) -> Result<FeatureData, SelectionError> {
        let kind = feature.feature_type();
        match (&feature.data, change) {
            (FeatureData::Companion(data), change) => self.apply_companion(feature, data, change),
            (FeatureData::TitleChoice(data), SelectionChange::TitleFeature { slot, feature_id }) => {
                self.require_hero(feature)?;
                let mut copy = data.clone();
                let title = copy
                    .selected
                    .get_mut(slot)
                    .ok_or(SelectionError::NoSuchSlot(slot))?;
                if let Some(id) = &feature_id {
                    if !title.features.iter().any(|f| &f.id == id) {
                        return Err(SelectionError::UnknownOption(id.clone()));
                    }
                }
                title.selected_feature_id = feature_id;
                Ok(FeatureData::TitleChoice(copy))
            }
            (data, SelectionChange::Ids(ids)) => self.apply_ids(feature, data, ids),
            _ if kind.is_choice() => Err(SelectionError::UnsupportedChange { kind }),
            _ => Err(SelectionError::NotSelectable { kind }),
        }
    }

    fn apply_ids(&self, feature: &Feature, data: &FeatureData, ids: Vec<String>) -> Result<FeatureData, SelectionError> {
        match data {
            FeatureData::AncestryChoice(data) => {
                let picked = self.ancestry_choice_menu(data).pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked.into_iter().next();
                Ok(FeatureData::AncestryChoice(copy))
            }
            FeatureData::AncestryFeatureChoice(data) => {
                let picked = self.ancestry_feature_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked.into_iter().next().map(Box::new);
                Ok(FeatureData::AncestryFeatureChoice(copy))
            }
            FeatureData::Choice(data) => {
                let picked = self.choice_menu(data).pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::Choice(copy))
            }
            FeatureData::ClassAbility(data) => {
                let picked = self.class_ability_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected_ids = picked;
                Ok(FeatureData::ClassAbility(copy))
            }
            FeatureData::Domain(data) => {
                let picked = self.domain_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::Domain(copy))
            }
            FeatureData::DomainFeature(data) => {
                let picked = self.domain_feature_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::DomainFeature(copy))
            }
            FeatureData::ItemChoice(data) => {
                let picked = self.item_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::ItemChoice(copy))
            }
            FeatureData::Kit(data) => {
                let picked = self.kit_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::Kit(copy))
            }
            FeatureData::LanguageChoice(data) => {
                let picked = self.language_menu(feature, data).pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::LanguageChoice(copy))
            }
            FeatureData::Perk(data) => {
                let picked = self.perk_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::Perk(copy))
            }
            FeatureData::SkillChoice(data) => {
                let picked = self.skill_menu(feature, data).pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::SkillChoice(copy))
            }
            FeatureData::TitleChoice(data) => {
                let picked = self.title_menu(feature, data)?.pick(ids)?;
                let mut copy = data.clone();
                copy.selected = picked;
                Ok(FeatureData::TitleChoice(copy))
            }
            other => {
                let kind = other.feature_type();
                if kind.is_choice() {
                    Err(SelectionError::UnsupportedChange { kind })
                } else {
                    Err(SelectionError::NotSelectable { kind })
                }
            }
        }
    }

    /// Add `id` to the selection, or remove it if already selected.
    ///
    /// Single-pick features swap their pick instead of growing.
    pub fn toggle(&self, feature: &Feature, id: &str) -> Result<FeatureData, SelectionError> {
        let kind = feature.feature_type();
        let (mut ids, single): (Vec<String>, bool) = match &feature.data {
            FeatureData::AncestryChoice(data) => (data.selected.iter().map(|a| a.id.clone()).collect(), true),
            FeatureData::AncestryFeatureChoice(data) => {
                (data.selected.iter().map(|f| f.id.clone()).collect(), true)
            }
            FeatureData::Choice(data) => (
                feature_ids(&data.selected),
                !data.is_point_buy() && data.count == 1,
            ),
            FeatureData::ClassAbility(data) => (data.selected_ids.clone(), data.count == 1),
            FeatureData::Domain(data) => (
                data.selected.iter().map(|d| d.id.clone()).collect(),
                data.count == 1,
            ),
            FeatureData::DomainFeature(data) => (feature_ids(&data.selected), data.count == 1),
            FeatureData::ItemChoice(data) => (
                data.selected.iter().map(|i| i.id.clone()).collect(),
                data.count == 1,
            ),
            FeatureData::Kit(data) => (
                data.selected.iter().map(|k| k.id.clone()).collect(),
                data.count == 1,
            ),
            FeatureData::LanguageChoice(data) => (data.selected.clone(), data.count == 1),
            FeatureData::Perk(data) => (
                data.selected.iter().map(|p| p.id().to_string()).collect(),
                data.count == 1,
            ),
            FeatureData::SkillChoice(data) => (data.selected.clone(), data.count == 1),
            FeatureData::TitleChoice(data) => (
                data.selected.iter().map(|t| t.id.clone()).collect(),
                data.count == 1,
            ),
            _ if kind.is_choice() => return Err(SelectionError::UnsupportedChange { kind }),
            _ => return Err(SelectionError::NotSelectable { kind }),
        };

        if let Some(position) = ids.iter().position(|existing| existing == id) {
            ids.remove(position);
        } else if single {
            ids = vec![id.to_string()];
        } else {
            ids.push(id.to_string());
        }
        self.apply(feature, SelectionChange::Ids(ids))
    }
}

fn offer<T: Clone>(feature: &Feature, menu: Result<Menu<'_, T>, SelectionError>) -> Resolution {
    match menu {
        Err(_) => Resolution::Unavailable,
        Ok(menu) if menu.is_empty() => Resolution::NoOptions(Notice::Warning(NO_OPTIONS.to_string())),
        Ok(menu) => Resolution::Ready(menu.view(feature)),
    }
}

fn feature_ids(features: &[Feature]) -> Vec<String> {
    features.iter().map(|f| f.id.clone()).collect()
}

fn title_picks(data: &FeatureTitleChoiceData) -> Vec<TitleFeaturePick> {
    data.selected
        .iter()
        .enumerate()
        .map(|(slot, title)| TitleFeaturePick {
            slot,
            title_id: title.id.clone(),
            title_name: title.name.clone(),
            placeholder: "Select a title feature".to_string(),
            options: title
                .features
                .iter()
                .map(|f| SelectionOption::new(&f.id, &f.name, &f.description))
                .collect(),
            selected_feature_id: title.selected_feature().map(|f| f.id.clone()),
        })
        .collect()
}
