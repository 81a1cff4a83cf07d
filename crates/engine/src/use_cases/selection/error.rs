//! Selection errors.

use herobldr_domain::FeatureType;

/// Reasons a selection change is rejected.
///
/// A rejected change never produces data, so the caller's sink is not
/// invoked and the committed selection stays as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("{kind} features need a hero to choose from")]
    Unavailable { kind: FeatureType },
    #[error("{kind} features have nothing to select")]
    NotSelectable { kind: FeatureType },
    #[error("This change does not apply to {kind} features")]
    UnsupportedChange { kind: FeatureType },
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Option is not available: {0}")]
    OptionDisabled(String),
    #[error("Too many selections: {selected} chosen, at most {max} allowed")]
    TooManySelections { selected: usize, max: usize },
    #[error("Point budget exceeded: {used} of {total} points")]
    BudgetExceeded { used: i64, total: i64 },
    #[error("No selected title in slot {0}")]
    NoSuchSlot(usize),
    #[error("No companion selected")]
    NoCompanion,
    #[error("Companion has no feature {feature_id} at level {level}")]
    NoCompanionFeature { level: u32, feature_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_kind() {
        let err = SelectionError::Unavailable {
            kind: FeatureType::ClassAbility,
        };
        assert_eq!(
            err.to_string(),
            "ClassAbility features need a hero to choose from"
        );
    }

    #[test]
    fn budget_message_shows_both_sides() {
        let err = SelectionError::BudgetExceeded { used: 3, total: 2 };
        assert_eq!(err.to_string(), "Point budget exceeded: 3 of 2 points");
    }
}
