/// Faults found while projecting a feature for display.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("Feature {feature_id} selects ability {ability_id}, which its class does not have")]
    MissingAbility {
        feature_id: String,
        ability_id: String,
    },
    #[error("Feature {feature_id} is nested {depth} levels deep")]
    TooDeep { feature_id: String, depth: usize },
}
