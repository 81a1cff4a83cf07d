//! Domain entities - catalogue content and the features it grants

mod ability;
mod ancestry;
mod background;
mod condition;
mod domain;
mod feature;
mod hero_class;
mod item;
mod kit;
mod monster;
mod perk;
mod skill;
mod sourcebook;
mod title;

pub use ability::Ability;
pub use ancestry::Ancestry;
pub use background::{Career, Complication, Culture};
pub use condition::{Condition, ConditionEndType, ConditionType};
pub use domain::Domain;
pub use feature::{
    AncestryFeatureSource, ChoiceOption, CompanionType, Feature, FeatureAbilityCostData,
    FeatureAbilityData, FeatureAddOnData, FeatureAncestryChoiceData,
    FeatureAncestryFeatureChoiceData, FeatureBonusData, FeatureCharacteristicBonusData,
    FeatureChoiceData, FeatureClassAbilityData, FeatureCompanionData, FeatureDamageModifierData,
    FeatureData, FeatureDomainData, FeatureDomainFeatureData, FeatureItemChoiceData,
    FeatureKitData, FeatureKitTypeData, FeatureLanguageChoiceData, FeatureLanguageData,
    FeatureMaliceData, FeatureMultipleData, FeaturePackageData, FeaturePerkData,
    FeatureSizeData, FeatureSkillChoiceData, FeatureSkillData, FeatureSpeedData,
    FeatureTextData, FeatureTitleChoiceData, FeatureType, MaliceSection,
};
pub use hero_class::{FeaturesAtLevel, HeroClass, SubClass};
pub use item::{Item, ItemType};
pub use kit::{Kit, KitType};
pub use monster::{Monster, Retainer, RetainerLevelFeature};
pub use perk::{Perk, PerkList};
pub use skill::{Language, Skill, SkillList};
pub use sourcebook::{Catalog, Sourcebook};
pub use title::Title;
