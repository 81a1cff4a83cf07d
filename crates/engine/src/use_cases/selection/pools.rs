//! Eligible pools per feature kind.

use std::collections::HashSet;

use herobldr_domain::{
    Ability, Ancestry, ChoiceOption, Domain, Feature, FeatureAncestryChoiceData,
    FeatureAncestryFeatureChoiceData, FeatureChoiceData, FeatureClassAbilityData, FeatureData,
    FeatureDomainData, FeatureDomainFeatureData, FeatureItemChoiceData, FeatureKitData,
    FeatureLanguageChoiceData, FeaturePerkData, FeatureSkillChoiceData, FeatureTitleChoiceData,
    FeatureType, Hero, Item, Kit, Perk, Title,
};

use super::error::SelectionError;
use super::menu::{Candidate, Committed, Limit, Menu, Overlap};
use super::types::SelectionOption;
use super::FeatureResolver;
use crate::use_cases::collections::{distinct_by, sort_by_name};

fn count_prompt(count: u32) -> Option<String> {
    (count > 1).then(|| format!("Choose {}:", count))
}

fn placeholder(count: u32, one: &str, many: &str) -> String {
    if count == 1 { one } else { many }.to_string()
}

/// Option entries of every Choice feature in `features`.
pub(crate) fn choice_options(features: &[Feature]) -> impl Iterator<Item = &ChoiceOption> {
    features
        .iter()
        .filter_map(|f| match &f.data {
            FeatureData::Choice(choice) => Some(choice.options.iter()),
            _ => None,
        })
        .flatten()
}

fn option_for_feature(feature: &Feature) -> SelectionOption {
    SelectionOption::new(&feature.id, &feature.name, &feature.description)
}

impl<'a> FeatureResolver<'a> {
    pub(super) fn require_hero(&self, feature: &Feature) -> Result<&'a Hero, SelectionError> {
        self.hero.ok_or(SelectionError::Unavailable {
            kind: feature.feature_type(),
        })
    }

    /// Features held elsewhere on the hero; empty without a hero.
    fn elsewhere(&self, feature: &Feature) -> Vec<&'a Feature> {
        self.hero
            .map(|hero| hero.other_features(&feature.id))
            .unwrap_or_default()
    }

    pub(super) fn ancestry_choice_menu<'v>(
        &'v self,
        data: &'v FeatureAncestryChoiceData,
    ) -> Menu<'v, Ancestry> {
        let mut ancestries = self.catalog.ancestries();
        sort_by_name(&mut ancestries, |a| a.name.as_str());

        let mut menu = Menu::new(Limit::Count(1), "Select an ancestry");
        menu.candidates = ancestries
            .into_iter()
            .map(|a| Candidate::new(SelectionOption::new(&a.id, &a.name, &a.description), a))
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|a| Committed::new(&a.id, &a.name, a))
            .collect();
        menu
    }

    pub(super) fn ancestry_feature_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureAncestryFeatureChoiceData,
    ) -> Result<Menu<'v, Feature>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let held: HashSet<&str> = hero
            .other_features(&feature.id)
            .into_iter()
            .map(|f| f.id.as_str())
            .collect();

        let mut ancestries: Vec<&Ancestry> = Vec::new();
        if data.source.current {
            ancestries.extend(hero.ancestry.as_ref());
        }
        if data.source.former {
            ancestries.extend(hero.former_ancestries());
        }

        let mut features: Vec<&Feature> = ancestries
            .into_iter()
            .flat_map(|a| choice_options(&a.features))
            .filter(|option| option.value == data.value)
            .map(|option| &option.feature)
            .filter(|f| f.feature_type() != FeatureType::AncestryFeatureChoice)
            .collect();
        sort_by_name(&mut features, |f| f.name.as_str());

        let mut menu = Menu::new(Limit::Count(1), "Select an ability from an ancestry");
        menu.candidates = features
            .into_iter()
            .map(|f| Candidate::new(option_for_feature(f), f).excluded(held.contains(f.id.as_str())))
            .collect();
        menu.committed = data
            .selected
            .as_deref()
            .map(|f| Committed::new(&f.id, &f.name, f))
            .into_iter()
            .collect();
        Ok(menu)
    }

    pub(super) fn choice_menu<'v>(&'v self, data: &'v FeatureChoiceData) -> Menu<'v, Feature> {
        let is_ancestry_pick =
            |option: &&ChoiceOption| option.feature.feature_type() == FeatureType::AncestryFeatureChoice;

        let mut options: Vec<&ChoiceOption> = data.options.iter().filter(|o| !is_ancestry_pick(o)).collect();
        if data.options.iter().any(|o| is_ancestry_pick(&o)) {
            // Stand-ins for "a feature from a former ancestry"
            if let Some(hero) = self.hero {
                options.extend(
                    hero.former_ancestries()
                        .into_iter()
                        .flat_map(|a| choice_options(&a.features))
                        .filter(|o| !is_ancestry_pick(o)),
                );
            }
        }
        sort_by_name(&mut options, |o| o.feature.name.as_str());

        let point_buy = data.is_point_buy();
        let (limit, prompt) = if point_buy {
            (
                Limit::Points(data.count),
                format!("You have {} points to spend on the following options:", data.count),
            )
        } else {
            (
                Limit::Count(data.count),
                format!("Choose {} of the following options:", data.count),
            )
        };

        let mut menu = Menu::new(limit, placeholder(data.count, "Select an option", "Select options"))
            .with_prompt(Some(prompt));
        menu.candidates = options
            .into_iter()
            .map(|o| {
                let mut option = option_for_feature(&o.feature);
                option.cost = point_buy.then_some(o.value);
                Candidate::new(option, &o.feature)
            })
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|f| Committed::new(&f.id, &f.name, f))
            .collect();
        menu
    }

    pub(super) fn class_ability_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureClassAbilityData,
    ) -> Result<Menu<'v, String>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let class = match &data.class_id {
            Some(class_id) => self.catalog.class(class_id),
            None => hero.class.as_ref(),
        };

        let abilities: Vec<&Ability> = class
            .map(|c| {
                c.abilities
                    .iter()
                    .filter(|a| a.cost == data.cost && a.min_level <= data.min_level)
                    .collect()
            })
            .unwrap_or_default();
        let mut abilities = distinct_by(abilities, |a| a.name.clone());
        sort_by_name(&mut abilities, |a| a.name.as_str());

        let held: HashSet<&str> = hero
            .other_features(&feature.id)
            .into_iter()
            .filter_map(|f| match &f.data {
                FeatureData::ClassAbility(other) => Some(other.selected_ids.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
            .collect();

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select an ability", "Select abilities"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = abilities
            .into_iter()
            .map(|a| {
                Candidate::new(SelectionOption::new(&a.id, &a.name, &a.description), &a.id)
                    .excluded(held.contains(a.id.as_str()))
            })
            .collect();
        menu.committed = data
            .selected_ids
            .iter()
            .map(|id| {
                let name = class
                    .and_then(|c| c.abilities.iter().find(|a| &a.id == id))
                    .map(|a| a.name.as_str())
                    .unwrap_or(id.as_str());
                Committed::new(id, name, id)
            })
            .collect();
        Ok(menu)
    }

    pub(super) fn domain_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureDomainData,
    ) -> Result<Menu<'v, Domain>, SelectionError> {
        self.require_hero(feature)?;
        let mut domains = self.catalog.domains();
        sort_by_name(&mut domains, |d| d.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a domain", "Select domains"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = domains
            .into_iter()
            .map(|d| Candidate::new(SelectionOption::new(&d.id, &d.name, &d.description), d))
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|d| Committed::new(&d.id, &d.name, d))
            .collect();
        Ok(menu)
    }

    pub(super) fn domain_feature_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureDomainFeatureData,
    ) -> Result<Menu<'v, Feature>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let features: Vec<&Feature> = hero
            .domains()
            .into_iter()
            .flat_map(|d| d.features_by_level.iter())
            .filter(|lvl| lvl.level == data.level)
            .flat_map(|lvl| lvl.features.iter())
            .collect();

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select an option", "Select options"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = features
            .into_iter()
            .map(|f| Candidate::new(option_for_feature(f), f))
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|f| Committed::new(&f.id, &f.name, f))
            .collect();
        Ok(menu)
    }

    pub(super) fn item_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureItemChoiceData,
    ) -> Result<Menu<'v, Item>, SelectionError> {
        self.require_hero(feature)?;
        let mut items: Vec<&Item> = self
            .catalog
            .items()
            .into_iter()
            .filter(|i| data.types.contains(&i.item_type))
            .collect();
        sort_by_name(&mut items, |i| i.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select an item", "Select items"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = items
            .into_iter()
            .map(|i| Candidate::new(SelectionOption::new(&i.id, &i.name, &i.description), i))
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|i| Committed::new(&i.id, &i.name, i))
            .collect();
        Ok(menu)
    }

    pub(super) fn kit_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureKitData,
    ) -> Result<Menu<'v, Kit>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let types = if data.types.is_empty() {
            hero.kit_types()
        } else {
            data.types.clone()
        };
        let mut kits: Vec<&Kit> = self
            .catalog
            .kits()
            .into_iter()
            .filter(|k| types.contains(&k.kit_type))
            .collect();
        sort_by_name(&mut kits, |k| k.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a kit", "Select kits"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = kits
            .into_iter()
            .map(|k| Candidate::new(SelectionOption::new(&k.id, &k.name, &k.description), k))
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|k| Committed::new(&k.id, &k.name, k))
            .collect();
        Ok(menu)
    }

    pub(super) fn language_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureLanguageChoiceData,
    ) -> Menu<'v, String> {
        let mut held: HashSet<&str> = self
            .elsewhere(feature)
            .into_iter()
            .flat_map(|f| match &f.data {
                FeatureData::Language(language) => vec![language.language.as_str()],
                FeatureData::LanguageChoice(choice) => choice.selected.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            })
            .collect();
        if let Some(culture) = self.hero.and_then(|hero| hero.culture.as_ref()) {
            held.extend(culture.languages.iter().map(String::as_str));
        }

        let mut languages = self.catalog.languages();
        sort_by_name(&mut languages, |l| l.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a language", "Select languages"),
        )
        .with_prompt(count_prompt(data.count))
        .with_overlap(Overlap::AlreadyChosen);
        menu.candidates = languages
            .into_iter()
            .map(|l| {
                Candidate::new(SelectionOption::new(&l.name, &l.name, &l.description), &l.name)
                    .excluded(held.contains(l.name.as_str()))
            })
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|name| Committed::new(name, name, name))
            .collect();
        menu
    }

    pub(super) fn perk_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeaturePerkData,
    ) -> Result<Menu<'v, Perk>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let held: HashSet<&str> = hero
            .other_features(&feature.id)
            .into_iter()
            .filter_map(|f| match &f.data {
                FeatureData::Perk(other) => Some(other.selected.iter().map(Perk::id)),
                _ => None,
            })
            .flatten()
            .collect();

        let mut perks: Vec<&Perk> = self
            .catalog
            .perks()
            .into_iter()
            .filter(|p| data.lists.contains(&p.list))
            .collect();
        sort_by_name(&mut perks, |p| p.name());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a perk", "Select perks"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = perks
            .into_iter()
            .map(|p| {
                Candidate::new(
                    SelectionOption::new(p.id(), p.name(), &p.feature.description),
                    p,
                )
                .excluded(held.contains(p.id()))
            })
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|p| Committed::new(p.id(), p.name(), p))
            .collect();
        Ok(menu)
    }

    pub(super) fn skill_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureSkillChoiceData,
    ) -> Menu<'v, String> {
        let held: HashSet<&str> = self
            .elsewhere(feature)
            .into_iter()
            .flat_map(|f| match &f.data {
                FeatureData::Skill(skill) => vec![skill.skill.as_str()],
                FeatureData::SkillChoice(choice) => choice.selected.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            })
            .collect();

        let mut skills: Vec<_> = self
            .catalog
            .skills()
            .into_iter()
            .filter(|s| data.options.contains(&s.name) || data.list_options.contains(&s.list))
            .collect();
        sort_by_name(&mut skills, |s| s.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a skill", "Select skills"),
        )
        .with_prompt(count_prompt(data.count))
        .with_overlap(Overlap::AlreadyChosen);
        menu.candidates = skills
            .into_iter()
            .map(|s| {
                Candidate::new(SelectionOption::new(&s.name, &s.name, &s.description), &s.name)
                    .excluded(held.contains(s.name.as_str()))
            })
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|name| Committed::new(name, name, name))
            .collect();
        menu
    }

    pub(super) fn title_menu<'v>(
        &'v self,
        feature: &Feature,
        data: &'v FeatureTitleChoiceData,
    ) -> Result<Menu<'v, Title>, SelectionError> {
        let hero = self.require_hero(feature)?;
        let held: HashSet<&str> = hero
            .other_features(&feature.id)
            .into_iter()
            .filter_map(|f| match &f.data {
                FeatureData::TitleChoice(other) => Some(other.selected.iter().map(|t| t.id.as_str())),
                _ => None,
            })
            .flatten()
            .collect();

        let mut titles: Vec<&Title> = self
            .catalog
            .titles()
            .into_iter()
            .filter(|t| t.echelon == data.echelon)
            .collect();
        sort_by_name(&mut titles, |t| t.name.as_str());

        let mut menu = Menu::new(
            Limit::Count(data.count),
            placeholder(data.count, "Select a title", "Select titles"),
        )
        .with_prompt(count_prompt(data.count));
        menu.candidates = titles
            .into_iter()
            .map(|t| {
                Candidate::new(SelectionOption::new(&t.id, &t.name, &t.description), t)
                    .excluded(held.contains(t.id.as_str()))
            })
            .collect();
        menu.committed = data
            .selected
            .iter()
            .map(|t| Committed::new(&t.id, &t.name, t))
            .collect();
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_only_for_multiple_picks() {
        assert_eq!(count_prompt(1), None);
        assert_eq!(count_prompt(3), Some("Choose 3:".to_string()));
    }
}
