use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five hero characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    Might,
    Agility,
    Reason,
    Intuition,
    Presence,
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Characteristic::Might => "Might",
            Characteristic::Agility => "Agility",
            Characteristic::Reason => "Reason",
            Characteristic::Intuition => "Intuition",
            Characteristic::Presence => "Presence",
        };
        write!(f, "{}", name)
    }
}
