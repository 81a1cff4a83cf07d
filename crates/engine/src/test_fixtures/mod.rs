//! Test fixtures: JSON fixture loading plus builders for features, heroes and
//! sourcebooks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{features, heroes, sourcebooks};
//!
//! #[test]
//! fn fury_can_pick_signature_abilities() {
//!     let books = vec![sourcebooks::core()];
//!     let hero = heroes::fury(1);
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

// =============================================================================
// Fixture Loading
// =============================================================================

/// Path of a file under the crate's `test_data/` directory.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Load a JSON fixture from the test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = fixture_path(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Feature Builders
// =============================================================================

/// Features of every kind, with empty selections.
pub mod features {
    use herobldr_domain::*;

    pub fn text(id: &str, name: &str) -> Feature {
        Feature::new(id, name, "", FeatureData::Text(FeatureTextData {}))
    }

    pub fn skill(id: &str, skill: &str) -> Feature {
        Feature::new(
            id,
            "Skill",
            "",
            FeatureData::Skill(FeatureSkillData {
                skill: skill.to_string(),
            }),
        )
    }

    pub fn skill_choice(id: &str, options: &[&str], lists: &[SkillList], count: u32) -> Feature {
        Feature::new(
            id,
            "Skill Choice",
            "",
            FeatureData::SkillChoice(FeatureSkillChoiceData {
                options: options.iter().map(|o| o.to_string()).collect(),
                list_options: lists.to_vec(),
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn language(id: &str, language: &str) -> Feature {
        Feature::new(
            id,
            "Language",
            "",
            FeatureData::Language(FeatureLanguageData {
                language: language.to_string(),
            }),
        )
    }

    pub fn language_choice(id: &str, count: u32) -> Feature {
        Feature::new(
            id,
            "Language Choice",
            "",
            FeatureData::LanguageChoice(FeatureLanguageChoiceData {
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn choice(id: &str, options: Vec<(Feature, u32)>, count: u32) -> Feature {
        Feature::new(
            id,
            "Choice",
            "",
            FeatureData::Choice(FeatureChoiceData {
                options: options
                    .into_iter()
                    .map(|(feature, value)| ChoiceOption::new(feature, value))
                    .collect(),
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn class_ability(id: &str, cost: AbilityCost, min_level: u32, count: u32) -> Feature {
        Feature::new(
            id,
            "Class Ability",
            "",
            FeatureData::ClassAbility(FeatureClassAbilityData {
                class_id: None,
                cost,
                min_level,
                count,
                selected_ids: Vec::new(),
            }),
        )
    }

    pub fn ancestry_choice(id: &str) -> Feature {
        Feature::new(
            id,
            "Former Life",
            "",
            FeatureData::AncestryChoice(FeatureAncestryChoiceData { selected: None }),
        )
    }

    pub fn ancestry_feature_choice(id: &str, current: bool, former: bool, value: u32) -> Feature {
        Feature::new(
            id,
            "Previous Life",
            "",
            FeatureData::AncestryFeatureChoice(FeatureAncestryFeatureChoiceData {
                source: AncestryFeatureSource { current, former },
                value,
                selected: None,
            }),
        )
    }

    pub fn domain_choice(id: &str, count: u32) -> Feature {
        Feature::new(
            id,
            "Domain",
            "",
            FeatureData::Domain(FeatureDomainData {
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn domain_feature(id: &str, level: u32) -> Feature {
        Feature::new(
            id,
            "Domain Feature",
            "",
            FeatureData::DomainFeature(FeatureDomainFeatureData {
                level,
                count: 1,
                selected: Vec::new(),
            }),
        )
    }

    pub fn item_choice(id: &str, types: &[ItemType], count: u32) -> Feature {
        Feature::new(
            id,
            "Item",
            "",
            FeatureData::ItemChoice(FeatureItemChoiceData {
                types: types.to_vec(),
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn kit_choice(id: &str, types: &[KitType]) -> Feature {
        Feature::new(
            id,
            "Kit",
            "",
            FeatureData::Kit(FeatureKitData {
                types: types.to_vec(),
                count: 1,
                selected: Vec::new(),
            }),
        )
    }

    pub fn kit_type(id: &str, types: &[KitType]) -> Feature {
        Feature::new(
            id,
            "Kit Type",
            "",
            FeatureData::KitType(FeatureKitTypeData {
                types: types.to_vec(),
            }),
        )
    }

    pub fn perk_choice(id: &str, lists: &[PerkList], count: u32) -> Feature {
        Feature::new(
            id,
            "Perk",
            "",
            FeatureData::Perk(FeaturePerkData {
                lists: lists.to_vec(),
                count,
                selected: Vec::new(),
            }),
        )
    }

    pub fn title_choice(id: &str, echelon: u32) -> Feature {
        Feature::new(
            id,
            "Title",
            "",
            FeatureData::TitleChoice(FeatureTitleChoiceData {
                echelon,
                count: 1,
                selected: Vec::new(),
            }),
        )
    }

    pub fn companion(id: &str, companion_type: CompanionType) -> Feature {
        Feature::new(
            id,
            "Companion",
            "",
            FeatureData::Companion(FeatureCompanionData {
                companion_type,
                selected: None,
            }),
        )
    }

    pub fn multiple(id: &str, features: Vec<Feature>) -> Feature {
        Feature::new(
            id,
            "Multiple",
            "",
            FeatureData::Multiple(FeatureMultipleData { features }),
        )
    }

    /// Same feature with its payload replaced, as a sink would store it.
    pub fn with_data(feature: &Feature, data: FeatureData) -> Feature {
        let mut updated = feature.clone();
        updated.data = data;
        updated
    }
}

// =============================================================================
// Sourcebook Fixtures
// =============================================================================

/// Pre-built sourcebook fixtures for testing.
pub mod sourcebooks {
    use herobldr_domain::*;

    use super::features;

    pub fn fury_class(level: u32) -> HeroClass {
        let mut class = HeroClass::new("fury", "Fury", level);
        class.heroic_resource = "Ferocity".to_string();
        class.abilities = vec![
            Ability::new("brutal-slam", "Brutal Slam", AbilityCost::Signature, 1),
            Ability::new("hit-and-run", "Hit and Run", AbilityCost::Signature, 1),
            Ability::new("back", "Back!", AbilityCost::Points(3), 1),
            Ability::new("to-the-death", "To the Death!", AbilityCost::Points(3), 1),
            Ability::new("blood-for-blood", "Blood for Blood!", AbilityCost::Points(5), 1),
            Ability::new("rebounding-storm", "Rebounding Storm", AbilityCost::Points(5), 1),
        ];
        class.features_by_level = vec![FeaturesAtLevel::new(
            1,
            vec![features::class_ability("fury-signature", AbilityCost::Signature, 1, 1)],
        )];
        class
    }

    pub fn dwarf() -> Ancestry {
        Ancestry::new(
            "dwarf",
            "Dwarf",
            vec![features::choice(
                "dwarf-traits",
                vec![
                    (features::text("dwarf-runic", "Runic Carving"), 1),
                    (features::text("dwarf-grounded", "Grounded"), 1),
                    (features::text("dwarf-spark", "Spark Off Your Skin"), 2),
                ],
                3,
            )],
        )
    }

    pub fn human() -> Ancestry {
        Ancestry::new(
            "human",
            "Human",
            vec![features::choice(
                "human-traits",
                vec![
                    (features::text("human-staying", "Staying Power"), 2),
                    (features::text("human-perseverance", "Perseverance"), 1),
                ],
                3,
            )],
        )
    }

    pub fn revenant() -> Ancestry {
        Ancestry::new(
            "revenant",
            "Revenant",
            vec![
                features::ancestry_choice("revenant-former"),
                features::choice(
                    "revenant-traits",
                    vec![
                        (
                            features::ancestry_feature_choice("revenant-previous-1", false, true, 1),
                            1,
                        ),
                        (features::text("revenant-bloodless", "Bloodless"), 2),
                    ],
                    2,
                ),
            ],
        )
    }

    fn domain(id: &str, name: &str, feature: Feature) -> Domain {
        let mut domain = Domain::new(id, name);
        domain.piety = format!("Pray to the {} domain.", name);
        domain.features_by_level = vec![FeaturesAtLevel::new(1, vec![feature])];
        domain
    }

    fn title(id: &str, name: &str, echelon: u32, feature_names: &[(&str, &str)]) -> Title {
        Title::new(
            id,
            name,
            echelon,
            feature_names
                .iter()
                .map(|(fid, fname)| features::text(fid, fname))
                .collect(),
        )
    }

    /// The core rules content used across tests.
    pub fn core() -> Sourcebook {
        let mut book = Sourcebook::new("core", "Draw Steel");
        book.ancestries = vec![revenant(), human(), dwarf()];
        book.classes = vec![fury_class(1)];
        book.domains = vec![
            domain("war", "War", features::text("war-1", "Battle Cry")),
            domain("storm", "Storm", features::text("storm-1", "Stormsight")),
        ];
        book.items = vec![
            Item::new("thunderhead", "Thunderhead Bident", ItemType::Artifact),
            Item::new("healing-potion", "Healing Potion", ItemType::Consumable),
            Item::new("lightning-treads", "Lightning Treads", ItemType::Leveled),
            Item::new("blade-of-quintessence", "Blade of Quintessence", ItemType::Artifact),
        ];
        book.kits = vec![
            Kit::new("panther", "Panther", KitType::Standard),
            Kit::new("boren", "Boren", KitType::Stormwight),
            Kit::new("mountain", "Mountain", KitType::Standard),
        ];
        book.perks = vec![
            Perk::new("lucky", "Lucky", PerkList::Exploration, FeatureData::Text(FeatureTextData {})),
            Perk::new(
                "friend-catapult",
                "Friend Catapult",
                PerkList::Exploration,
                FeatureData::Text(FeatureTextData {}),
            ),
            Perk::new(
                "linguist",
                "Linguist",
                PerkList::Interpersonal,
                FeatureData::Text(FeatureTextData {}),
            ),
        ];
        book.titles = vec![
            title(
                "knight",
                "Knight",
                1,
                &[("knight-challenge", "Knightly Challenge"), ("knight-fame", "Heraldic Fame")],
            ),
            title("zombie-slayer", "Zombie Slayer", 1, &[("zs-blessed", "Blessed Weapons")]),
            title("master-librarian", "Master Librarian", 2, &[("ml-lore", "Library Lore")]),
        ];
        book.skills = vec![
            Skill::new("Alertness", SkillList::Intrigue),
            Skill::new("Athletics", SkillList::Exploration),
            Skill::new("Climb", SkillList::Exploration),
            Skill::new("Stealth", SkillList::Intrigue),
            Skill::new("Magic", SkillList::Lore),
            Skill::new("History", SkillList::Lore),
        ];
        book.languages = vec![
            Language::new("Vaslorian"),
            Language::new("Caelian"),
            Language::new("Khelt"),
            Language::new("Zaliac"),
        ];
        book
    }
}

// =============================================================================
// Hero Fixtures
// =============================================================================

/// Pre-built hero fixtures for testing.
pub mod heroes {
    use herobldr_domain::*;

    use super::sourcebooks;

    /// A human Fury raised in a Caelian-speaking culture.
    pub fn fury(level: u32) -> Hero {
        let mut hero = Hero::new("Korva");
        hero.ancestry = Some(sourcebooks::human());
        hero.culture = Some(Culture::new("wanderer", "Wanderer", vec!["Caelian".to_string()]));
        hero.class = Some(sourcebooks::fury_class(level));
        hero
    }

    /// The same hero carrying `features` as free features.
    pub fn fury_with(level: u32, features: Vec<Feature>) -> Hero {
        let mut hero = fury(level);
        hero.custom_features = features;
        hero
    }
}
