//! DependencyOptions struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw dependency options for one validation run.
///
/// Every string is kept exactly as the user supplied it; nothing here has been
/// parsed yet. Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyOptions {
    // =========================================================================
    // Exclusions
    // =========================================================================
    /// Modules excluded from every dependency (`org:name`).
    pub exclude: Vec<String>,

    /// File of `parent--org:name` rules excluding modules below one parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_exclude_file: Option<PathBuf>,

    // =========================================================================
    // Extra dependencies
    // =========================================================================
    /// Dependencies added without their own transitive dependencies.
    pub intransitive: Vec<String>,

    /// sbt plugin dependencies.
    pub sbt_plugin: Vec<String>,

    /// Scaladex lookup strings.
    pub scaladex: Vec<String>,

    // =========================================================================
    // Versions and configurations
    // =========================================================================
    /// Scala version used for cross-built names and plugin attributes.
    #[serde(default = "default_scala_version")]
    pub scala_version: String,

    /// sbt version used for plugin attributes.
    #[serde(default = "default_sbt_version")]
    pub sbt_version: String,

    /// Configuration handed to the resolution engine.
    #[serde(default = "default_configuration")]
    pub default_configuration: String,

    /// Configuration given to dependencies that do not name one.
    #[serde(default = "default_dependency_configuration")]
    pub dependency_configuration: String,
}

impl Default for DependencyOptions {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            local_exclude_file: None,
            intransitive: Vec::new(),
            sbt_plugin: Vec::new(),
            scaladex: Vec::new(),
            scala_version: default_scala_version(),
            sbt_version: default_sbt_version(),
            default_configuration: default_configuration(),
            dependency_configuration: default_dependency_configuration(),
        }
    }
}
