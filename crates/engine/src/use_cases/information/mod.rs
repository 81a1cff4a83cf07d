//! Display content for committed feature state.
//!
//! Nothing here changes a feature. When a feature has an authored
//! description, the synthesized "Choose a ..." style text is left out.

mod error;


use herobldr_domain::{
    Ability, Ancestry, Catalog, Domain, Feature, FeatureClassAbilityData, FeatureData, Item, Kit,
    MaliceSection, Monster, PowerRoll, Title,
};
use serde::Serialize;

use crate::use_cases::collections::sort_by_name;
use crate::use_cases::format;
use crate::use_cases::panel::{CostBadge, FeaturePanel, FeaturePanelView};

pub use error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Ancestry,
    Domain,
    Item,
    Kit,
    Monster,
    Title,
}

/// A catalogue entry shown by reference (the caller owns the full layout).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    pub description: String,
}

impl EntitySummary {
    fn new(kind: EntityKind, id: &str, name: &str, description: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

impl From<&Ancestry> for EntitySummary {
    fn from(a: &Ancestry) -> Self {
        Self::new(EntityKind::Ancestry, &a.id, &a.name, &a.description)
    }
}

impl From<&Domain> for EntitySummary {
    fn from(d: &Domain) -> Self {
        Self::new(EntityKind::Domain, &d.id, &d.name, &d.description)
    }
}

impl From<&Item> for EntitySummary {
    fn from(i: &Item) -> Self {
        Self::new(EntityKind::Item, &i.id, &i.name, &i.description)
    }
}

impl From<&Kit> for EntitySummary {
    fn from(k: &Kit) -> Self {
        Self::new(EntityKind::Kit, &k.id, &k.name, &k.description)
    }
}

impl From<&Monster> for EntitySummary {
    fn from(m: &Monster) -> Self {
        Self::new(EntityKind::Monster, &m.id, &m.name, &m.description)
    }
}

impl From<&Title> for EntitySummary {
    fn from(t: &Title) -> Self {
        Self::new(EntityKind::Title, &t.id, &t.name, &t.description)
    }
}

/// One piece of display content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum InfoBlock {
    Field { label: String, value: String },
    Heading(String),
    Text(String),
    Markdown(String),
    PowerRoll(PowerRoll),
    Ability(Box<Ability>),
    Entity(EntitySummary),
    /// Nested feature panels, always in full mode
    Features(Vec<FeaturePanelView>),
}

impl InfoBlock {
    pub fn field(label: impl Into<String>, value: impl ToString) -> Self {
        InfoBlock::Field {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        InfoBlock::Text(text.into())
    }

    fn entities<'e, T: 'e>(items: impl IntoIterator<Item = &'e T>) -> Vec<InfoBlock>
    where
        EntitySummary: From<&'e T>,
    {
        items
            .into_iter()
            .map(|item| InfoBlock::Entity(EntitySummary::from(item)))
            .collect()
    }
}

impl<'a> FeaturePanel<'a> {
    /// Project a feature's committed state into display blocks.
    pub fn information(&self, feature: &Feature) -> Result<Vec<InfoBlock>, RenderError> {
        self.information_at(feature, 0)
    }

    pub(crate) fn information_at(&self, feature: &Feature, depth: usize) -> Result<Vec<InfoBlock>, RenderError> {
        let authored = feature.has_description();
        let fallback = |block: InfoBlock| if authored { Vec::new() } else { vec![block] };

        let blocks: Vec<InfoBlock> = match &feature.data {
            FeatureData::Ability(_) | FeatureData::AddOn(_) | FeatureData::Text(_) => Vec::new(),
            FeatureData::AbilityCost(data) => vec![InfoBlock::field(
                data.keywords.join(", "),
                format!("Heroic resource cost {}", format::signed(data.modifier)),
            )],
            FeatureData::AncestryChoice(data) => InfoBlock::entities(data.selected.iter()),
            FeatureData::AncestryFeatureChoice(data) => match &data.selected {
                Some(selected) => vec![InfoBlock::Features(vec![self.nested(selected, None, depth + 1)?])],
                None => fallback(InfoBlock::text(format!("A {}pt ancestry feature.", data.value))),
            },
            FeatureData::Bonus(data) => vec![InfoBlock::field(
                data.field.to_string(),
                format::modifier(&data.modifier),
            )],
            FeatureData::CharacteristicBonus(data) => {
                vec![InfoBlock::field(data.characteristic.to_string(), data.value)]
            }
            FeatureData::Choice(data) => {
                if !data.selected.is_empty() {
                    vec![InfoBlock::Features(self.nested_all(data.selected.iter(), depth)?)]
                } else if data.options.is_empty() {
                    Vec::new()
                } else {
                    let point_buy = data.is_point_buy();
                    let prompt = if point_buy {
                        format!("You have {} points to spend on the following options:", data.count)
                    } else {
                        format!("Choose {} of the following options:", data.count)
                    };
                    let options = data
                        .options
                        .iter()
                        .map(|o| {
                            let cost = point_buy.then(|| CostBadge::points(o.value));
                            self.nested(&o.feature, cost, depth + 1)
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    vec![InfoBlock::text(prompt), InfoBlock::Features(options)]
                }
            }
            FeatureData::ClassAbility(data) => self.class_ability_blocks(feature, data)?,
            FeatureData::Companion(data) => match &data.selected {
                Some(monster) => vec![InfoBlock::Entity(EntitySummary::from(monster))],
                None => fallback(InfoBlock::text(format!(
                    "Choose {}.",
                    format::with_article(&data.companion_type.to_string())
                ))),
            },
            FeatureData::DamageModifier(data) if !data.modifiers.is_empty() => {
                let text: Vec<String> = data.modifiers.iter().map(format::damage_modifier).collect();
                fallback(InfoBlock::text(text.join(", ")))
            }
            FeatureData::DamageModifier(_) => Vec::new(),
            FeatureData::Domain(data) if !data.selected.is_empty() => InfoBlock::entities(data.selected.iter()),
            FeatureData::Domain(data) => fallback(InfoBlock::text(format!(
                "Choose {}.",
                format::count_phrase(data.count, "domain", "domains")
            ))),
            FeatureData::DomainFeature(data) if !data.selected.is_empty() && !authored => {
                vec![InfoBlock::Features(self.nested_all(data.selected.iter(), depth)?)]
            }
            FeatureData::DomainFeature(_) => Vec::new(),
            FeatureData::ItemChoice(data) if !data.selected.is_empty() => InfoBlock::entities(data.selected.iter()),
            FeatureData::ItemChoice(data) => {
                let types: Vec<String> = data.types.iter().map(ToString::to_string).collect();
                let mut noun = types.join(", ");
                if noun.is_empty() {
                    noun = "item".to_string();
                }
                let phrase = if data.count > 1 {
                    format!("{} {}s", data.count, noun)
                } else {
                    format::with_article(&noun)
                };
                fallback(InfoBlock::text(format!("Choose {}.", phrase)))
            }
            FeatureData::Kit(data) if !data.selected.is_empty() => InfoBlock::entities(data.selected.iter()),
            FeatureData::Kit(data) => {
                let types: Vec<String> = data.types.iter().map(ToString::to_string).collect();
                let mut words = vec![if data.count > 1 {
                    data.count.to_string()
                } else {
                    "a".to_string()
                }];
                if !types.is_empty() {
                    words.push(types.join(", "));
                }
                words.push(if data.count > 1 { "kits" } else { "kit" }.to_string());
                fallback(InfoBlock::text(format!("Choose {}.", words.join(" "))))
            }
            FeatureData::KitType(data) => {
                let types: Vec<String> = data.types.iter().map(ToString::to_string).collect();
                fallback(InfoBlock::text(format!("Allow {} kits.", types.join(", "))))
            }
            FeatureData::Language(data) => fallback(InfoBlock::field("Language", &data.language)),
            FeatureData::LanguageChoice(data) if !data.selected.is_empty() => {
                vec![InfoBlock::field("Language", data.selected.join(", "))]
            }
            FeatureData::LanguageChoice(data) => fallback(InfoBlock::text(format!(
                "Choose {}.",
                format::count_phrase(data.count, "language", "languages")
            ))),
            FeatureData::Malice(data) => data
                .sections
                .iter()
                .map(|section| match section {
                    MaliceSection::Text(text) => InfoBlock::Markdown(text.clone()),
                    MaliceSection::PowerRoll(roll) => InfoBlock::PowerRoll(roll.clone()),
                })
                .collect(),
            FeatureData::Multiple(data) if !data.features.is_empty() => {
                vec![InfoBlock::Features(self.nested_all(data.features.iter(), depth)?)]
            }
            FeatureData::Multiple(_) => Vec::new(),
            FeatureData::Package(_) => self
                .hero()
                .map(|hero| {
                    hero.domains()
                        .into_iter()
                        .flat_map(|d| [InfoBlock::Heading(d.name.clone()), InfoBlock::Markdown(d.piety.clone())])
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            FeatureData::Perk(data) if !data.selected.is_empty() => {
                let perks = data
                    .selected
                    .iter()
                    .map(|perk| self.nested_perk(perk, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                vec![InfoBlock::Features(perks)]
            }
            FeatureData::Perk(data) => fallback(InfoBlock::text(format!(
                "Choose {}.",
                format::count_phrase(data.count, "perk", "perks")
            ))),
            FeatureData::Size(data) => fallback(InfoBlock::field("Size", data.size)),
            FeatureData::Skill(data) => fallback(InfoBlock::field("Skill", &data.skill)),
            FeatureData::SkillChoice(data) if !data.selected.is_empty() => {
                vec![InfoBlock::field("Skill", data.selected.join(", "))]
            }
            FeatureData::SkillChoice(data) => {
                let mut names = data.options.clone();
                sort_by_name(&mut names, |n| n.as_str());
                let mut lists: Vec<String> = data.list_options.iter().map(ToString::to_string).collect();
                sort_by_name(&mut lists, |l| l.as_str());
                names.extend(lists.into_iter().map(|l| format!("the {} list", l)));

                let text = if data.count > 1 {
                    format!("Choose {} skills from {}.", data.count, names.join(", "))
                } else {
                    format!("Choose a skill from {}.", names.join(", "))
                };
                fallback(InfoBlock::text(text))
            }
            FeatureData::Speed(data) => fallback(InfoBlock::field("Speed", data.speed)),
            FeatureData::TitleChoice(data) if !data.selected.is_empty() => InfoBlock::entities(data.selected.iter()),
            FeatureData::TitleChoice(data) => fallback(InfoBlock::text(format!(
                "Choose {}.",
                format::count_phrase(data.count, "title", "titles")
            ))),
        };

        Ok(blocks)
    }

    /// The picks a choice feature already holds, shown beneath its selection
    /// controls while editing. Empty when nothing is picked.
    pub(crate) fn committed_at(&self, feature: &Feature, depth: usize) -> Result<Vec<InfoBlock>, RenderError> {
        let blocks = match &feature.data {
            FeatureData::AncestryChoice(data) => InfoBlock::entities(data.selected.iter()),
            FeatureData::AncestryFeatureChoice(data) => match &data.selected {
                Some(selected) => vec![InfoBlock::Features(vec![self.nested(selected, None, depth + 1)?])],
                None => Vec::new(),
            },
            FeatureData::Choice(data) if !data.selected.is_empty() => {
                vec![InfoBlock::Features(self.nested_all(data.selected.iter(), depth)?)]
            }
            FeatureData::ClassAbility(data) => self.selected_abilities(feature, data)?,
            FeatureData::Companion(data) => InfoBlock::entities(data.selected.iter()),
            FeatureData::DomainFeature(data) if !data.selected.is_empty() => {
                vec![InfoBlock::Features(self.nested_all(data.selected.iter(), depth)?)]
            }
            FeatureData::ItemChoice(data) => InfoBlock::entities(data.selected.iter()),
            FeatureData::Kit(data) => InfoBlock::entities(data.selected.iter()),
            FeatureData::Perk(data) if !data.selected.is_empty() => {
                let perks = data
                    .selected
                    .iter()
                    .map(|perk| self.nested_perk(perk, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                vec![InfoBlock::Features(perks)]
            }
            FeatureData::TitleChoice(data) => {
                let picked: Vec<&Feature> = data.selected.iter().filter_map(|t| t.selected_feature()).collect();
                if picked.is_empty() {
                    Vec::new()
                } else {
                    vec![InfoBlock::Features(self.nested_all(picked.into_iter(), depth)?)]
                }
            }
            _ => Vec::new(),
        };
        Ok(blocks)
    }

    fn nested_all<'f>(
        &self,
        features: impl Iterator<Item = &'f Feature>,
        depth: usize,
    ) -> Result<Vec<FeaturePanelView>, RenderError> {
        features.map(|f| self.nested(f, None, depth + 1)).collect()
    }

    fn class_ability_blocks(
        &self,
        feature: &Feature,
        data: &FeatureClassAbilityData,
    ) -> Result<Vec<InfoBlock>, RenderError> {
        let abilities = self.selected_abilities(feature, data)?;
        if !abilities.is_empty() {
            return Ok(abilities);
        }

        if feature.has_description() {
            return Ok(Vec::new());
        }
        let (count, noun) = if data.count > 1 {
            (data.count.to_string(), "abilities")
        } else {
            ("a".to_string(), "ability")
        };
        Ok(vec![InfoBlock::text(format!("Choose {} {} {}.", count, data.cost, noun))])
    }

    /// Abilities picked from the class, or nothing when there is no class or
    /// no pick. A pick the class does not offer at this cost is a fault.
    fn selected_abilities(
        &self,
        feature: &Feature,
        data: &FeatureClassAbilityData,
    ) -> Result<Vec<InfoBlock>, RenderError> {
        let class = match &data.class_id {
            Some(class_id) => Catalog::new(self.sourcebooks()).class(class_id),
            None => self.hero().and_then(|hero| hero.class.as_ref()),
        };
        let Some(class) = class else {
            return Ok(Vec::new());
        };

        data.selected_ids
            .iter()
            .map(|id| {
                class
                    .abilities
                    .iter()
                    .find(|a| &a.id == id && a.cost == data.cost)
                    .map(|a| InfoBlock::Ability(Box::new(a.clone())))
                    .ok_or_else(|| RenderError::MissingAbility {
                        feature_id: feature.id.clone(),
                        ability_id: id.clone(),
                    })
            })
            .collect()
    }
}
