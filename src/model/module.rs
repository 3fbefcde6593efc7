//! Module coordinates and exclusion collections.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Namespace part of a module coordinate (e.g. `org.typelevel`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Organization(String);

impl Organization {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Artifact name part of a module coordinate (e.g. `cats-core_2.13`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A module excluded from a dependency graph.
pub type ExclusionPair = (Organization, ModuleName);

/// Exclusions applied to every dependency.
pub type GlobalExclusionSet = BTreeSet<ExclusionPair>;

/// Exclusions applied only below a given parent module.
///
/// Keys are the parent rendered as `org:name`, kept as free-form strings exactly
/// as they appear in the local exclusion file.
pub type PerModuleExclusionMap = BTreeMap<String, BTreeSet<ExclusionPair>>;

/// Module attributes such as `scalaVersion` or `sbtVersion`.
pub type Attributes = BTreeMap<String, String>;

/// An organization/name coordinate plus optional attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub organization: Organization,
    pub name: ModuleName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

impl Module {
    /// Create a module without attributes.
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: Organization::new(organization),
            name: ModuleName::new(name),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(self, attributes: Attributes) -> Self {
        Self { attributes, ..self }
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// The `org:name` form used to key per-module exclusions.
    pub fn org_name(&self) -> String {
        format!("{}:{}", self.organization, self.name)
    }

    pub fn exclusion_pair(&self) -> ExclusionPair {
        (self.organization.clone(), self.name.clone())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.organization, self.name)?;
        for (key, value) in &self.attributes {
            write!(f, ";{}={}", key, value)?;
        }
        Ok(())
    }
}
