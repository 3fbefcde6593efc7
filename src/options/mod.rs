//! Dependency option snapshot for depparams.
//!
//! This module defines the DependencyOptions struct holding the raw option
//! strings a resolution run was invoked with. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of the scalar values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::DependencyOptions;
