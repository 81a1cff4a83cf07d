//! HeroBldr domain model: features, heroes, sourcebooks and conditions.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use aggregates::{Hero, MAX_FEATURE_DEPTH};

pub use entities::{
    Ability, Ancestry, AncestryFeatureSource, Career, Catalog, ChoiceOption, CompanionType,
    Complication, Condition, ConditionEndType, ConditionType, Culture, Domain, Feature,
    FeatureAbilityCostData, FeatureAbilityData, FeatureAddOnData, FeatureAncestryChoiceData,
    FeatureAncestryFeatureChoiceData, FeatureBonusData, FeatureCharacteristicBonusData,
    FeatureChoiceData, FeatureClassAbilityData, FeatureCompanionData, FeatureDamageModifierData,
    FeatureData, FeatureDomainData, FeatureDomainFeatureData, FeatureItemChoiceData,
    FeatureKitData, FeatureKitTypeData, FeatureLanguageChoiceData, FeatureLanguageData,
    FeatureMaliceData, FeatureMultipleData, FeaturePackageData, FeaturePerkData,
    FeatureSizeData, FeatureSkillChoiceData, FeatureSkillData, FeatureSpeedData,
    FeatureTextData, FeatureTitleChoiceData, FeatureType, FeaturesAtLevel, HeroClass, Item,
    ItemType, Kit, KitType, Language, MaliceSection, Monster, Perk, PerkList, Retainer,
    RetainerLevelFeature, Skill, SkillList, Sourcebook, SubClass, Title,
};

pub use error::DomainError;

pub use value_objects::{
    AbilityCost, Characteristic, DamageModifier, DamageModifierType, FeatureField, Modifier,
    PowerRoll, Size, SizeMod,
};
