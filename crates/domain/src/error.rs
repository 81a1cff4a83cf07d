//! Unified error types for the domain layer
//!
//! Catalogue and hero documents are parsed into typed values here, so the
//! engine never has to fall back to `String` errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` and `TryFrom` implementations when the input
    /// doesn't match any known variant or format:
    /// - Unknown enum variant names
    /// - Unknown cost keywords
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for ConditionType {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Bleeding" => Ok(Self::Bleeding),
    ///             _ => Err(DomainError::parse(format!("Unknown condition: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown ability cost: heroic");
        assert_eq!(err.to_string(), "Parse error: Unknown ability cost: heroic");
    }
}
