//! Feature entity: a grantable trait or choice attached to a hero.
//!
//! A feature carries a stable id, display text, and a kind-specific payload
//! (`FeatureData`). Choice kinds keep both their configuration (how many to
//! pick, from which pool, under what cost model) and their selection state
//! in the payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Ability, Ancestry, Domain, Item, ItemType, Kit, KitType, Monster, Perk, PerkList, SkillList, Title};
use crate::value_objects::{
    Characteristic, DamageModifier, FeatureField, Modifier, PowerRoll, Size,
};

fn default_one() -> u32 {
    1
}

/// A feature granted to a hero by an ancestry, class, culture, kit, title...
///
/// Serialized as `{ "id", "name", "description", "type", "data" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Unique identifier for this feature
    pub id: String,
    /// Display name of the feature
    pub name: String,
    /// Authored description (markdown); may be empty
    #[serde(default)]
    pub description: String,
    /// Kind tag and kind-specific payload
    #[serde(flatten)]
    pub data: FeatureData,
}

impl Feature {
    /// Create a feature with a known id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        data: FeatureData,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            data,
        }
    }

    /// Create a feature with a freshly generated id.
    pub fn create(name: impl Into<String>, description: impl Into<String>, data: FeatureData) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, description, data)
    }

    pub fn feature_type(&self) -> FeatureType {
        self.data.feature_type()
    }

    /// Whether the feature asks the player to pick something.
    pub fn is_choice(&self) -> bool {
        self.feature_type().is_choice()
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Features committed inside this one: choice selections, the children
    /// of a Multiple, the chosen feature of each selected title, and the
    /// features of selected kits and perks.
    pub fn sub_features(&self) -> Vec<&Feature> {
        match &self.data {
            FeatureData::Choice(data) => data.selected.iter().collect(),
            FeatureData::Multiple(data) => data.features.iter().collect(),
            FeatureData::AncestryFeatureChoice(data) => {
                data.selected.iter().map(|f| f.as_ref()).collect()
            }
            FeatureData::DomainFeature(data) => data.selected.iter().collect(),
            FeatureData::TitleChoice(data) => {
                data.selected.iter().filter_map(Title::selected_feature).collect()
            }
            FeatureData::Kit(data) => data.selected.iter().flat_map(|k| k.features.iter()).collect(),
            FeatureData::Perk(data) => data.selected.iter().map(|p| &p.feature).collect(),
            _ => Vec::new(),
        }
    }
}

/// The closed set of feature kinds, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureType {
    Ability,
    AbilityCost,
    AddOn,
    AncestryChoice,
    AncestryFeatureChoice,
    Bonus,
    CharacteristicBonus,
    Choice,
    ClassAbility,
    Companion,
    DamageModifier,
    Domain,
    DomainFeature,
    ItemChoice,
    Kit,
    KitType,
    Language,
    LanguageChoice,
    Malice,
    Multiple,
    Package,
    Perk,
    Size,
    Skill,
    SkillChoice,
    Speed,
    Text,
    TitleChoice,
}

impl FeatureType {
    /// Kinds whose payload holds a player selection.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FeatureType::AncestryChoice
                | FeatureType::AncestryFeatureChoice
                | FeatureType::Choice
                | FeatureType::ClassAbility
                | FeatureType::Companion
                | FeatureType::Domain
                | FeatureType::DomainFeature
                | FeatureType::ItemChoice
                | FeatureType::Kit
                | FeatureType::LanguageChoice
                | FeatureType::Perk
                | FeatureType::SkillChoice
                | FeatureType::TitleChoice
        )
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Kind-specific feature payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FeatureData {
    Ability(FeatureAbilityData),
    AbilityCost(FeatureAbilityCostData),
    AddOn(FeatureAddOnData),
    AncestryChoice(FeatureAncestryChoiceData),
    AncestryFeatureChoice(FeatureAncestryFeatureChoiceData),
    Bonus(FeatureBonusData),
    CharacteristicBonus(FeatureCharacteristicBonusData),
    Choice(FeatureChoiceData),
    ClassAbility(FeatureClassAbilityData),
    Companion(FeatureCompanionData),
    DamageModifier(FeatureDamageModifierData),
    Domain(FeatureDomainData),
    DomainFeature(FeatureDomainFeatureData),
    ItemChoice(FeatureItemChoiceData),
    Kit(FeatureKitData),
    KitType(FeatureKitTypeData),
    Language(FeatureLanguageData),
    LanguageChoice(FeatureLanguageChoiceData),
    Malice(FeatureMaliceData),
    Multiple(FeatureMultipleData),
    Package(FeaturePackageData),
    Perk(FeaturePerkData),
    Size(FeatureSizeData),
    Skill(FeatureSkillData),
    SkillChoice(FeatureSkillChoiceData),
    Speed(FeatureSpeedData),
    Text(FeatureTextData),
    TitleChoice(FeatureTitleChoiceData),
}

impl FeatureData {
    pub fn feature_type(&self) -> FeatureType {
        match self {
            FeatureData::Ability(_) => FeatureType::Ability,
            FeatureData::AbilityCost(_) => FeatureType::AbilityCost,
            FeatureData::AddOn(_) => FeatureType::AddOn,
            FeatureData::AncestryChoice(_) => FeatureType::AncestryChoice,
            FeatureData::AncestryFeatureChoice(_) => FeatureType::AncestryFeatureChoice,
            FeatureData::Bonus(_) => FeatureType::Bonus,
            FeatureData::CharacteristicBonus(_) => FeatureType::CharacteristicBonus,
            FeatureData::Choice(_) => FeatureType::Choice,
            FeatureData::ClassAbility(_) => FeatureType::ClassAbility,
            FeatureData::Companion(_) => FeatureType::Companion,
            FeatureData::DamageModifier(_) => FeatureType::DamageModifier,
            FeatureData::Domain(_) => FeatureType::Domain,
            FeatureData::DomainFeature(_) => FeatureType::DomainFeature,
            FeatureData::ItemChoice(_) => FeatureType::ItemChoice,
            FeatureData::Kit(_) => FeatureType::Kit,
            FeatureData::KitType(_) => FeatureType::KitType,
            FeatureData::Language(_) => FeatureType::Language,
            FeatureData::LanguageChoice(_) => FeatureType::LanguageChoice,
            FeatureData::Malice(_) => FeatureType::Malice,
            FeatureData::Multiple(_) => FeatureType::Multiple,
            FeatureData::Package(_) => FeatureType::Package,
            FeatureData::Perk(_) => FeatureType::Perk,
            FeatureData::Size(_) => FeatureType::Size,
            FeatureData::Skill(_) => FeatureType::Skill,
            FeatureData::SkillChoice(_) => FeatureType::SkillChoice,
            FeatureData::Speed(_) => FeatureType::Speed,
            FeatureData::Text(_) => FeatureType::Text,
            FeatureData::TitleChoice(_) => FeatureType::TitleChoice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAbilityData {
    pub ability: Ability,
}

/// Changes the heroic resource cost of abilities with the given keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAbilityCostData {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub modifier: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAddOnData {
    pub category: String,
    #[serde(default)]
    pub cost: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAncestryChoiceData {
    #[serde(default)]
    pub selected: Option<Ancestry>,
}

/// Which of the hero's ancestries an ancestry-feature choice draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestryFeatureSource {
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub former: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAncestryFeatureChoiceData {
    pub source: AncestryFeatureSource,
    /// Point value of the ancestry option to pick
    pub value: u32,
    #[serde(default)]
    pub selected: Option<Box<Feature>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBonusData {
    pub field: FeatureField,
    #[serde(flatten)]
    pub modifier: Modifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCharacteristicBonusData {
    pub characteristic: Characteristic,
    pub value: i32,
}

/// One pickable option of a generic Choice feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub feature: Feature,
    /// Cost weight; any option above 1 switches the choice to point-buy
    #[serde(default = "default_one")]
    pub value: u32,
}

impl ChoiceOption {
    pub fn new(feature: Feature, value: u32) -> Self {
        Self { feature, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureChoiceData {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// Number of picks, or the point budget in point-buy mode
    #[serde(default = "default_one")]
    pub count: u32,
    /// Deep copies of the chosen option features
    #[serde(default)]
    pub selected: Vec<Feature>,
}

impl FeatureChoiceData {
    pub fn is_point_buy(&self) -> bool {
        self.options.iter().any(|option| option.value > 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureClassAbilityData {
    /// Draw from this class instead of the hero's own
    #[serde(rename = "classID", default)]
    pub class_id: Option<String>,
    pub cost: crate::value_objects::AbilityCost,
    #[serde(default = "default_one")]
    pub min_level: u32,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(rename = "selectedIDs", default)]
    pub selected_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionType {
    Companion,
    Mount,
    Retainer,
}

impl fmt::Display for CompanionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanionType::Companion => write!(f, "companion"),
            CompanionType::Mount => write!(f, "mount"),
            CompanionType::Retainer => write!(f, "retainer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCompanionData {
    #[serde(rename = "type")]
    pub companion_type: CompanionType,
    #[serde(default)]
    pub selected: Option<Monster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDamageModifierData {
    #[serde(default)]
    pub modifiers: Vec<DamageModifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDomainData {
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub selected: Vec<Domain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDomainFeatureData {
    /// Domain level whose features are offered
    pub level: u32,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub selected: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItemChoiceData {
    #[serde(default)]
    pub types: Vec<ItemType>,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub selected: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureKitData {
    /// Allowed kit types; empty means "whatever the hero can use"
    #[serde(default)]
    pub types: Vec<KitType>,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub selected: Vec<Kit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureKitTypeData {
    #[serde(default)]
    pub types: Vec<KitType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLanguageData {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLanguageChoiceData {
    #[serde(default = "default_one")]
    pub count: u32,
    /// Chosen language names
    #[serde(default)]
    pub selected: Vec<String>,
}

/// A block of malice text: plain markdown or a power roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaliceSection {
    Text(String),
    PowerRoll(PowerRoll),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMaliceData {
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub sections: Vec<MaliceSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMultipleData {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePackageData {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePerkData {
    #[serde(default)]
    pub lists: Vec<PerkList>,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub selected: Vec<Perk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSizeData {
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSkillData {
    pub skill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSkillChoiceData {
    /// Skills offered by name
    #[serde(default)]
    pub options: Vec<String>,
    /// Skill lists whose every skill is offered
    #[serde(default)]
    pub list_options: Vec<SkillList>,
    #[serde(default = "default_one")]
    pub count: u32,
    /// Chosen skill names
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSpeedData {
    pub speed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTextData {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTitleChoiceData {
    pub echelon: u32,
    #[serde(default = "default_one")]
    pub count: u32,
    /// Chosen titles; each carries its own `selected_feature_id`
    #[serde(default)]
    pub selected: Vec<Title>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_wire_shape_uses_type_and_data() {
        let feature = Feature::new(
            "skill-choice",
            "Skills",
            "",
            FeatureData::SkillChoice(FeatureSkillChoiceData {
                options: vec!["Stealth".to_string()],
                list_options: vec![SkillList::Lore],
                count: 2,
                selected: vec![],
            }),
        );

        let json = serde_json::to_value(&feature).expect("serialize");
        assert_eq!(json["type"], "SkillChoice");
        assert_eq!(json["data"]["listOptions"][0], "Lore");
        assert_eq!(json["data"]["count"], 2);

        let back: Feature = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, feature);
    }

    #[test]
    fn choice_payload_defaults() {
        let json = serde_json::json!({
            "id": "f1",
            "name": "Pick One",
            "type": "Choice",
            "data": { "options": [] }
        });
        let feature: Feature = serde_json::from_value(json).expect("deserialize");
        match &feature.data {
            FeatureData::Choice(data) => {
                assert_eq!(data.count, 1);
                assert!(data.selected.is_empty());
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert!(!feature.has_description());
    }

    #[test]
    fn class_ability_reads_upper_case_id_fields() {
        let json = serde_json::json!({
            "id": "f2",
            "name": "Signature Ability",
            "type": "ClassAbility",
            "data": { "cost": "signature", "classID": "fury", "selectedIDs": ["a1"] }
        });
        let feature: Feature = serde_json::from_value(json).expect("deserialize");
        let FeatureData::ClassAbility(data) = feature.data else {
            panic!("expected class ability");
        };
        assert_eq!(data.class_id.as_deref(), Some("fury"));
        assert_eq!(data.selected_ids, vec!["a1".to_string()]);
        assert_eq!(data.min_level, 1);
    }

    #[test]
    fn choice_kinds() {
        assert!(FeatureType::Choice.is_choice());
        assert!(FeatureType::TitleChoice.is_choice());
        assert!(FeatureType::Companion.is_choice());
        assert!(!FeatureType::Skill.is_choice());
        assert!(!FeatureType::Multiple.is_choice());
        assert!(!FeatureType::Text.is_choice());
    }

    #[test]
    fn created_features_get_distinct_ids() {
        let a = Feature::create("A", "", FeatureData::Text(FeatureTextData {}));
        let b = Feature::create("A", "", FeatureData::Text(FeatureTextData {}));
        assert_ne!(a.id, b.id);
    }
}
