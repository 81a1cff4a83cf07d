//! Infrastructure implementations.
//!
//! Port traits for the engine's outer boundaries, configuration, and reading
//! hero and sourcebook documents from disk.

pub mod catalog_loader;
pub mod config;
pub mod ports;
