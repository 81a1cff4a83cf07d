//! Use cases - what a character builder does with a hero's features.
//!
//! Resolving choices, showing committed state, and editing conditions.

pub mod collections;
pub mod condition;
pub mod format;
pub mod information;
pub mod panel;
pub mod selection;

// Re-export main types
pub use condition::{ConditionBody, ConditionEditor, ConditionView, EndTypeOption};
pub use information::{EntityKind, EntitySummary, InfoBlock, RenderError};
pub use panel::{CostBadge, FeaturePanel, FeaturePanelView, PanelBody, PanelMode};
pub use selection::{
    FeatureResolver, Notice, PointBudget, Resolution, SelectionChange, SelectionError,
    SelectionOption, SelectionView, SelectionWarning,
};
