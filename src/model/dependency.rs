//! Dependencies and the metadata attached to them.

use super::module::{ExclusionPair, Module};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A named configuration bucket such as `compile` or `default(runtime)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(String);

impl Configuration {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form metadata attached to a parsed dependency (e.g. `url`).
pub type ParameterMap = BTreeMap<String, String>;

/// A reference to an external library plus the metadata resolution needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub module: Module,
    pub version: String,
    pub configuration: Configuration,

    /// Modules never pulled in below this dependency.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exclusions: BTreeSet<ExclusionPair>,

    /// Whether the dependency's own dependencies are resolved too.
    pub transitive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
}

impl Dependency {
    /// Create a transitive dependency with no exclusions.
    pub fn new(module: Module, version: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            module,
            version: version.into(),
            configuration,
            exclusions: BTreeSet::new(),
            transitive: true,
            classifier: None,
            artifact_type: None,
        }
    }

    pub fn with_transitive(self, transitive: bool) -> Self {
        Self { transitive, ..self }
    }

    /// Add exclusions on top of the ones already present.
    pub fn with_added_exclusions<'a, I>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = &'a ExclusionPair>,
    {
        self.exclusions.extend(exclusions.into_iter().cloned());
        self
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.module, self.version, self.configuration)
    }
}

/// A parsed dependency together with its parameters.
pub type DependencyEntry = (Dependency, ParameterMap);
