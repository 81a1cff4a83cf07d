//! HeroBldr Engine library.
//!
//! The rules core behind a hero's choice features.
//!
//! ## Structure
//!
//! - `use_cases/` - Selection rules, information views, the feature panel
//!   and the condition editor
//! - `infrastructure/` - Sinks, configuration and catalogue file loading

pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit testing.
#[cfg(test)]
pub mod test_fixtures;

pub use infrastructure::config::EngineConfig;
pub use use_cases::{
    ConditionEditor, FeaturePanel, FeaturePanelView, FeatureResolver, InfoBlock, PanelMode,
    RenderError, Resolution, SelectionChange, SelectionError,
};
