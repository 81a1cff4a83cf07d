//! Sourcebooks and the read-only catalog view over the active ones.

use serde::{Deserialize, Serialize};

use super::{Ancestry, Domain, HeroClass, Item, Kit, Language, Perk, Skill, Title};

/// A published or homebrew collection of game content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sourcebook {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ancestries: Vec<Ancestry>,
    #[serde(default)]
    pub classes: Vec<HeroClass>,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub kits: Vec<Kit>,
    #[serde(default)]
    pub perks: Vec<Perk>,
    #[serde(default)]
    pub titles: Vec<Title>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Sourcebook {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Flattened, borrow-only view over the active sourcebooks.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    sourcebooks: &'a [Sourcebook],
}

impl<'a> Catalog<'a> {
    pub fn new(sourcebooks: &'a [Sourcebook]) -> Self {
        Self { sourcebooks }
    }

    pub fn sourcebooks(&self) -> &'a [Sourcebook] {
        self.sourcebooks
    }

    pub fn ancestries(&self) -> Vec<&'a Ancestry> {
        self.sourcebooks.iter().flat_map(|sb| sb.ancestries.iter()).collect()
    }

    pub fn classes(&self) -> Vec<&'a HeroClass> {
        self.sourcebooks.iter().flat_map(|sb| sb.classes.iter()).collect()
    }

    pub fn class(&self, class_id: &str) -> Option<&'a HeroClass> {
        self.sourcebooks
            .iter()
            .flat_map(|sb| sb.classes.iter())
            .find(|c| c.id == class_id)
    }

    pub fn domains(&self) -> Vec<&'a Domain> {
        self.sourcebooks.iter().flat_map(|sb| sb.domains.iter()).collect()
    }

    pub fn items(&self) -> Vec<&'a Item> {
        self.sourcebooks.iter().flat_map(|sb| sb.items.iter()).collect()
    }

    pub fn kits(&self) -> Vec<&'a Kit> {
        self.sourcebooks.iter().flat_map(|sb| sb.kits.iter()).collect()
    }

    pub fn perks(&self) -> Vec<&'a Perk> {
        self.sourcebooks.iter().flat_map(|sb| sb.perks.iter()).collect()
    }

    pub fn titles(&self) -> Vec<&'a Title> {
        self.sourcebooks.iter().flat_map(|sb| sb.titles.iter()).collect()
    }

    pub fn skills(&self) -> Vec<&'a Skill> {
        self.sourcebooks.iter().flat_map(|sb| sb.skills.iter()).collect()
    }

    pub fn languages(&self) -> Vec<&'a Language> {
        self.sourcebooks.iter().flat_map(|sb| sb.languages.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Language, SkillList};

    #[test]
    fn catalog_flattens_in_sourcebook_order() {
        let mut core = Sourcebook::new("core", "Core Rules");
        core.skills.push(Skill::new("Stealth", SkillList::Intrigue));
        core.languages.push(Language::new("Caelian"));

        let mut homebrew = Sourcebook::new("hb", "Homebrew");
        homebrew.skills.push(Skill::new("Alchemy", SkillList::Crafting));

        let books = vec![core, homebrew];
        let catalog = Catalog::new(&books);

        let names: Vec<&str> = catalog.skills().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Stealth", "Alchemy"]);
        assert_eq!(catalog.languages().len(), 1);
        assert!(catalog.class("fury").is_none());
    }

    #[test]
    fn sourcebook_lists_default_to_empty() {
        let json = serde_json::json!({ "id": "sb", "name": "Empty" });
        let sourcebook: Sourcebook = serde_json::from_value(json).expect("deserialize");
        assert!(sourcebook.ancestries.is_empty());
        assert!(sourcebook.perks.is_empty());
    }
}
