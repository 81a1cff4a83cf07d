//! Aggregate roots - domain objects that own their related data

pub mod hero;

pub use hero::{Hero, MAX_FEATURE_DEPTH};
