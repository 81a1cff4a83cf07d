//! Combat conditions applied to heroes and monsters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    Bleeding,
    Dazed,
    Frightened,
    Grabbed,
    Prone,
    Restrained,
    Slowed,
    Taunted,
    Weakened,
    Custom,
}

impl ConditionType {
    pub const ALL: [ConditionType; 10] = [
        ConditionType::Bleeding,
        ConditionType::Dazed,
        ConditionType::Frightened,
        ConditionType::Grabbed,
        ConditionType::Prone,
        ConditionType::Restrained,
        ConditionType::Slowed,
        ConditionType::Taunted,
        ConditionType::Weakened,
        ConditionType::Custom,
    ];

    /// Rules text for the condition. Custom conditions have none; their text
    /// lives on the condition itself.
    pub fn description(&self) -> &'static str {
        match self {
            ConditionType::Bleeding => "Whenever a bleeding creature uses a main action or a triggered action, or makes a test or ability roll using Might or Agility, they lose Stamina equal to 1d6 + their level after it is resolved. This Stamina loss can't be prevented.",
            ConditionType::Dazed => "A dazed creature can use only one of a main action, a maneuver, or a move action on their turn, and can't use triggered actions or free triggered actions.",
            ConditionType::Frightened => "Ability rolls a frightened creature makes against the source of their fear take a bane, and that source's ability rolls against them gain an edge. They can't willingly move closer to the source of their fear.",
            ConditionType::Grabbed => "A grabbed creature has speed 0, can't be force moved except by whatever has them grabbed, can't use the Knockback maneuver, and takes a bane on abilities that don't target whatever has them grabbed.",
            ConditionType::Prone => "A prone creature is flat on the ground. Their strikes take a bane, melee abilities used against them gain an edge, and they must crawl to move.",
            ConditionType::Restrained => "A restrained creature has speed 0, can't use the Stand Up maneuver, and can't be force moved. Their ability rolls and Might and Agility tests take a bane, and abilities used against them gain an edge.",
            ConditionType::Slowed => "A slowed creature has speed 2 unless their speed is already lower, and they can't shift.",
            ConditionType::Taunted => "A taunted creature has a double bane on ability rolls for abilities that don't target the creature who taunted them, while they have line of effect to that creature.",
            ConditionType::Weakened => "A weakened creature takes a bane on power rolls.",
            ConditionType::Custom => "",
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for ConditionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionType::ALL
            .iter()
            .copied()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown condition: {}", s)))
    }
}

/// When a condition stops applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionEndType {
    EndOfTurn,
    SaveEnds,
}

impl ConditionEndType {
    pub const ALL: [ConditionEndType; 2] = [ConditionEndType::EndOfTurn, ConditionEndType::SaveEnds];
}

impl fmt::Display for ConditionEndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionEndType::EndOfTurn => write!(f, "End of Turn"),
            ConditionEndType::SaveEnds => write!(f, "Save Ends"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    /// Free text, used by Custom conditions
    #[serde(default)]
    pub text: String,
    pub ends: ConditionEndType,
}

impl Condition {
    pub fn new(condition_type: ConditionType, ends: ConditionEndType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            condition_type,
            text: String::new(),
            ends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_condition_names() {
        assert_eq!("prone".parse::<ConditionType>(), Ok(ConditionType::Prone));
        assert_eq!(" Weakened ".parse::<ConditionType>(), Ok(ConditionType::Weakened));
        assert!("sleepy".parse::<ConditionType>().is_err());
    }

    #[test]
    fn only_custom_lacks_rules_text() {
        for condition_type in ConditionType::ALL {
            assert_eq!(
                condition_type.description().is_empty(),
                condition_type == ConditionType::Custom
            );
        }
    }

    #[test]
    fn end_type_labels() {
        assert_eq!(ConditionEndType::EndOfTurn.to_string(), "End of Turn");
        assert_eq!(ConditionEndType::SaveEnds.to_string(), "Save Ends");
    }
}
