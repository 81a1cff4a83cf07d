use std::fmt;

use serde::{Deserialize, Serialize};

/// Sub-size letter for size 1 creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeMod {
    T,
    S,
    M,
    L,
}

/// Creature size, e.g. `1M` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub value: u32,
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<SizeMod>,
}

impl Size {
    pub fn new(value: u32, modifier: Option<SizeMod>) -> Self {
        Self { value, modifier }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.modifier) {
            (1, Some(modifier)) => write!(f, "1{:?}", modifier),
            (value, _) => write!(f, "{}", value),
        }
    }
}
