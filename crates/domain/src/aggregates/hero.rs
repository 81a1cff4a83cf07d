//! Hero aggregate - the character document the builder edits.
//!
//! The hero owns its ancestry, culture, career, class and complication
//! (each a copy of the catalogue entry, carrying the hero's selections).
//! Query helpers borrow; nothing here mutates the hero.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{
    Ancestry, Career, Complication, Culture, Domain, Feature, FeatureData, HeroClass, KitType,
};

/// Maximum nesting followed when walking committed sub-features.
///
/// Feature data is tree-shaped by construction; the bound only protects
/// against a malformed document that nests a feature inside itself.
pub const MAX_FEATURE_DEPTH: usize = 16;

/// A player hero.
///
/// Simple data struct: the hero is a document edited one feature payload at
/// a time, so all fields are public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ancestry: Option<Ancestry>,
    #[serde(default)]
    pub culture: Option<Culture>,
    #[serde(default)]
    pub career: Option<Career>,
    #[serde(default)]
    pub class: Option<HeroClass>,
    #[serde(default)]
    pub complication: Option<Complication>,
    /// Features added directly to the hero
    #[serde(default)]
    pub custom_features: Vec<Feature>,
}

impl Hero {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ancestry: None,
            culture: None,
            career: None,
            class: None,
            complication: None,
            custom_features: Vec::new(),
        }
    }

    /// Class level, or 1 for a hero without a class.
    pub fn class_level(&self) -> u32 {
        self.class.as_ref().map(|c| c.level).unwrap_or(1)
    }

    /// Every feature the hero has, depth-first.
    pub fn features(&self) -> Vec<&Feature> {
        self.features_with_depth(MAX_FEATURE_DEPTH)
    }

    /// Every feature the hero has, following committed sub-features at most
    /// `max_depth` levels deep.
    pub fn features_with_depth(&self, max_depth: usize) -> Vec<&Feature> {
        self.collect(None, max_depth)
    }

    /// Every feature except `feature_id` and whatever is committed inside it.
    ///
    /// This is the "elsewhere on the hero" set used to stop one feature from
    /// picking what another feature already holds.
    pub fn other_features(&self, feature_id: &str) -> Vec<&Feature> {
        self.collect(Some(feature_id), MAX_FEATURE_DEPTH)
    }

    fn collect(&self, skip: Option<&str>, max_depth: usize) -> Vec<&Feature> {
        let mut roots: Vec<&Feature> = Vec::new();
        if let Some(ancestry) = &self.ancestry {
            roots.extend(ancestry.features.iter());
        }
        if let Some(culture) = &self.culture {
            roots.extend(culture.features.iter());
        }
        if let Some(career) = &self.career {
            roots.extend(career.features.iter());
        }
        if let Some(class) = &self.class {
            roots.extend(class.features_to_level());
        }
        if let Some(complication) = &self.complication {
            roots.extend(complication.features.iter());
        }
        roots.extend(self.custom_features.iter());

        let walk = Walk { skip, max_depth };
        let mut features = Vec::new();
        for feature in roots {
            walk.visit(feature, 0, &mut features);
        }

        // Chosen domains grant their own features up to the class level
        let level = self.class_level();
        let domain_features: Vec<&Feature> = domains_in(&features)
            .into_iter()
            .flat_map(|d| d.features_by_level.iter())
            .filter(|lvl| lvl.level <= level)
            .flat_map(|lvl| lvl.features.iter())
            .collect();
        for feature in domain_features {
            walk.visit(feature, 0, &mut features);
        }

        features
    }

    /// Ancestries picked by the hero's AncestryChoice features (e.g. a
    /// revenant's former life).
    pub fn former_ancestries(&self) -> Vec<&Ancestry> {
        self.features()
            .into_iter()
            .filter_map(|f| match &f.data {
                FeatureData::AncestryChoice(data) => data.selected.as_ref(),
                _ => None,
            })
            .collect()
    }

    /// Domains picked by the hero's Domain features.
    pub fn domains(&self) -> Vec<&Domain> {
        domains_in(&self.features())
    }

    /// Kit types the hero may use: Standard, plus any a KitType feature allows.
    pub fn kit_types(&self) -> Vec<KitType> {
        let mut types = vec![KitType::Standard];
        for feature in self.features() {
            if let FeatureData::KitType(data) = &feature.data {
                for kit_type in &data.types {
                    if !types.contains(kit_type) {
                        types.push(*kit_type);
                    }
                }
            }
        }
        types
    }
}

struct Walk<'s> {
    skip: Option<&'s str>,
    max_depth: usize,
}

impl Walk<'_> {
    fn visit<'a>(&self, feature: &'a Feature, depth: usize, out: &mut Vec<&'a Feature>) {
        if depth > self.max_depth || self.skip == Some(feature.id.as_str()) {
            return;
        }
        out.push(feature);
        for child in feature.sub_features() {
            self.visit(child, depth + 1, out);
        }
    }
}

fn domains_in<'a>(features: &[&'a Feature]) -> Vec<&'a Domain> {
    features
        .iter()
        .filter_map(|f| match &f.data {
            FeatureData::Domain(data) => Some(data.selected.iter()),
            _ => None,
        })
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ChoiceOption, FeatureAncestryChoiceData, FeatureChoiceData, FeatureDomainData,
        FeatureKitTypeData, FeatureMultipleData, FeatureSkillData, FeatureTextData,
        FeaturesAtLevel, SubClass,
    };

    fn text(id: &str) -> Feature {
        Feature::new(id, id, "", FeatureData::Text(FeatureTextData {}))
    }

    fn skill(id: &str, skill: &str) -> Feature {
        Feature::new(
            id,
            skill,
            "",
            FeatureData::Skill(FeatureSkillData {
                skill: skill.to_string(),
            }),
        )
    }

    fn hero_with_class(level: u32) -> Hero {
        let mut class = HeroClass::new("tactician", "Tactician", level);
        class.features_by_level = vec![
            FeaturesAtLevel::new(1, vec![text("lvl1")]),
            FeaturesAtLevel::new(4, vec![text("lvl4")]),
        ];
        class.subclasses = vec![
            SubClass {
                id: "insurgent".to_string(),
                name: "Insurgent".to_string(),
                description: String::new(),
                features_by_level: vec![FeaturesAtLevel::new(1, vec![text("insurgent1")])],
                selected: true,
            },
            SubClass {
                id: "vanguard".to_string(),
                name: "Vanguard".to_string(),
                description: String::new(),
                features_by_level: vec![FeaturesAtLevel::new(1, vec![text("vanguard1")])],
                selected: false,
            },
        ];
        let mut hero = Hero::new("Ajax");
        hero.class = Some(class);
        hero
    }

    fn ids(features: &[&Feature]) -> Vec<String> {
        features.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn class_features_respect_level_and_selected_subclass() {
        let hero = hero_with_class(3);
        let found = ids(&hero.features());
        assert!(found.contains(&"lvl1".to_string()));
        assert!(!found.contains(&"lvl4".to_string()));
        assert!(found.contains(&"insurgent1".to_string()));
        assert!(!found.contains(&"vanguard1".to_string()));
    }

    #[test]
    fn features_include_committed_choice_selections() {
        let mut hero = Hero::new("Kess");
        hero.custom_features.push(Feature::new(
            "choice",
            "Choice",
            "",
            FeatureData::Choice(FeatureChoiceData {
                options: vec![ChoiceOption::new(skill("opt", "Sneak"), 1)],
                count: 1,
                selected: vec![Feature::new(
                    "picked",
                    "Picked",
                    "",
                    FeatureData::Multiple(FeatureMultipleData {
                        features: vec![skill("nested", "Climb")],
                    }),
                )],
            }),
        ));

        let found = ids(&hero.features());
        assert_eq!(found, vec!["choice", "picked", "nested"]);
    }

    #[test]
    fn depth_guard_stops_runaway_nesting() {
        let mut feature = text("leaf");
        for n in 0..40 {
            feature = Feature::new(
                format!("wrap{}", n),
                "Wrap",
                "",
                FeatureData::Multiple(FeatureMultipleData {
                    features: vec![feature],
                }),
            );
        }
        let mut hero = Hero::new("Deep");
        hero.custom_features.push(feature);

        assert_eq!(hero.features_with_depth(4).len(), 5);
        assert_eq!(hero.features().len(), MAX_FEATURE_DEPTH + 1);
    }

    #[test]
    fn domains_and_domain_features() {
        let mut domain = Domain::new("storm", "Storm");
        domain.features_by_level = vec![
            FeaturesAtLevel::new(1, vec![text("storm1")]),
            FeaturesAtLevel::new(5, vec![text("storm5")]),
        ];
        let mut hero = hero_with_class(2);
        hero.custom_features.push(Feature::new(
            "domain-pick",
            "Domain",
            "",
            FeatureData::Domain(FeatureDomainData {
                count: 1,
                selected: vec![domain],
            }),
        ));

        assert_eq!(hero.domains().len(), 1);
        let found = ids(&hero.features());
        assert!(found.contains(&"storm1".to_string()));
        assert!(!found.contains(&"storm5".to_string()));
    }

    #[test]
    fn former_ancestries_come_from_ancestry_choices() {
        let mut hero = Hero::new("Revenant");
        hero.custom_features.push(Feature::new(
            "former-life",
            "Former Life",
            "",
            FeatureData::AncestryChoice(FeatureAncestryChoiceData {
                selected: Some(Ancestry::new("dwarf", "Dwarf", vec![])),
            }),
        ));
        let former = hero.former_ancestries();
        assert_eq!(former.len(), 1);
        assert_eq!(former[0].id, "dwarf");
    }

    #[test]
    fn kit_types_default_to_standard() {
        let mut hero = Hero::new("Fury");
        assert_eq!(hero.kit_types(), vec![KitType::Standard]);

        hero.custom_features.push(Feature::new(
            "stormwight",
            "Stormwight Kits",
            "",
            FeatureData::KitType(FeatureKitTypeData {
                types: vec![KitType::Stormwight, KitType::Standard],
            }),
        ));
        assert_eq!(hero.kit_types(), vec![KitType::Standard, KitType::Stormwight]);
    }

    #[test]
    fn other_features_skip_the_whole_subtree() {
        let mut hero = Hero::new("Kess");
        hero.custom_features.push(skill("fixed", "Stealth"));
        hero.custom_features.push(Feature::new(
            "bundle",
            "Bundle",
            "",
            FeatureData::Multiple(FeatureMultipleData {
                features: vec![skill("inner", "Climb")],
            }),
        ));

        let found = ids(&hero.other_features("bundle"));
        assert_eq!(found, vec!["fixed"]);
    }

    #[test]
    fn class_level_defaults_to_one() {
        assert_eq!(Hero::new("Nobody").class_level(), 1);
        assert_eq!(hero_with_class(7).class_level(), 7);
    }
}
