use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillList {
    Crafting,
    Exploration,
    Interpersonal,
    Intrigue,
    Lore,
}

impl fmt::Display for SkillList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A skill; skills are identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub list: SkillList,
}

impl Skill {
    pub fn new(name: impl Into<String>, list: SkillList) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            list,
        }
    }
}

/// A language; languages are identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}
