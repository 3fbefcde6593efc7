//! Validation of dependency options into a [`DependencyParams`] bundle.
//!
//! The option groups are checked as follows:
//! - Global exclusions and the local exclusion file are independent; errors
//!   from both are reported together
//! - Both feed the module requirements, which the intransitive and sbt plugin
//!   dependency builders need before they can run
//! - The final bundle accumulates every error from all four branches
//!
//! Error handling:
//! - Grammar and parser failures are validation errors (exit 2), all reported at once
//! - A local exclusion file that cannot be read is fatal (exit 3)

mod bundle;
mod exclusions;
mod intransitive;
mod local_excludes;
mod plugins;
mod requirements;


// Re-export public API
pub use bundle::{DependencyParams, lookup_strings};
pub use exclusions::validate_exclusions;
pub use intransitive::intransitive_dependencies;
pub use local_excludes::{load_local_exclusions, parse_local_exclusions};
pub use plugins::{default_plugin_attributes, sbt_binary_version, sbt_plugin_dependencies};
pub use requirements::{ModuleRequirements, module_requirements};
