//! Typed dependency model.
//!
//! Everything past the validation boundary works on these types: module
//! coordinates, dependencies with their exclusion sets, and the maps used to
//! carry exclusions and per-dependency metadata.

mod dependency;
mod module;

#[cfg(test)]
mod tests;

// Re-export public API
pub use dependency::{Configuration, Dependency, DependencyEntry, ParameterMap};
pub use module::{
    Attributes, ExclusionPair, GlobalExclusionSet, Module, ModuleName, Organization,
    PerModuleExclusionMap,
};
