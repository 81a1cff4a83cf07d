//! Port traits for the engine's outer boundaries.
//!
//! The engine never persists anything itself. Finished values leave through
//! these sinks and the caller decides what to do with them.

mod sinks;

pub use sinks::{ConditionSink, FeatureDataSink};

#[cfg(test)]
pub use sinks::{MockConditionSink, MockFeatureDataSink};
