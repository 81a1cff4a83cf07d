//! Heroic resource cost of an ability.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// What an ability costs to use: a number of heroic resource points, or
/// nothing at all for a signature ability.
///
/// Serialized the way sourcebook documents write it: either a number or the
/// keyword `"signature"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AbilityCostRepr", into = "AbilityCostRepr")]
pub enum AbilityCost {
    #[default]
    Signature,
    Points(u32),
}

impl AbilityCost {
    /// A zero-point ability reads as a signature ability.
    pub fn is_signature(&self) -> bool {
        matches!(self, AbilityCost::Signature | AbilityCost::Points(0))
    }

    pub fn points(&self) -> u32 {
        match self {
            AbilityCost::Signature => 0,
            AbilityCost::Points(points) => *points,
        }
    }
}

impl fmt::Display for AbilityCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_signature() {
            write!(f, "signature")
        } else {
            write!(f, "{}pt", self.points())
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AbilityCostRepr {
    Points(u32),
    Keyword(String),
}

impl TryFrom<AbilityCostRepr> for AbilityCost {
    type Error = DomainError;

    fn try_from(value: AbilityCostRepr) -> Result<Self, Self::Error> {
        match value {
            AbilityCostRepr::Points(points) => Ok(AbilityCost::Points(points)),
            AbilityCostRepr::Keyword(keyword) if keyword.eq_ignore_ascii_case("signature") => {
                Ok(AbilityCost::Signature)
            }
            AbilityCostRepr::Keyword(keyword) => Err(DomainError::parse(format!(
                "Unknown ability cost: {}",
                keyword
            ))),
        }
    }
}

impl From<AbilityCost> for AbilityCostRepr {
    fn from(value: AbilityCost) -> Self {
        match value {
            AbilityCost::Signature => AbilityCostRepr::Keyword("signature".to_string()),
            AbilityCost::Points(points) => AbilityCostRepr::Points(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_keyword() {
        let cost: AbilityCost = serde_json::from_str("3").expect("points");
        assert_eq!(cost, AbilityCost::Points(3));

        let cost: AbilityCost = serde_json::from_str("\"signature\"").expect("keyword");
        assert_eq!(cost, AbilityCost::Signature);
    }

    #[test]
    fn rejects_unknown_keyword() {
        let result: Result<AbilityCost, _> = serde_json::from_str("\"heroic\"");
        assert!(result.is_err());
    }

    #[test]
    fn zero_points_is_signature() {
        assert!(AbilityCost::Points(0).is_signature());
        assert!(!AbilityCost::Points(5).is_signature());
        assert_eq!(AbilityCost::Points(0).to_string(), "signature");
        assert_eq!(AbilityCost::Points(5).to_string(), "5pt");
    }
}
