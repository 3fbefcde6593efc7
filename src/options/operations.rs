//! Options loading and validation.

use super::model::DependencyOptions;
use crate::error::{ParamsError, Result};
use std::path::Path;

impl DependencyOptions {
    /// Load options from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(DependencyOptions)` - Successfully loaded and validated options
    /// * `Err(ParamsError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ParamsError::UserError(format!(
                "failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty document: all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: DependencyOptions = serde_yaml::from_str(yaml)
            .map_err(|e| ParamsError::UserError(format!("failed to parse options YAML: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Serialize options to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ParamsError::UserError(format!("failed to serialize options to YAML: {}", e))
        })
    }

    /// Validate scalar values.
    ///
    /// Version and configuration strings must be non-blank; the list options are
    /// validated later, all at once, when the parameter bundle is built.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("scala_version", &self.scala_version),
            ("sbt_version", &self.sbt_version),
            ("default_configuration", &self.default_configuration),
            ("dependency_configuration", &self.dependency_configuration),
        ];

        for (field, value) in scalars {
            if value.trim().is_empty() {
                return Err(ParamsError::UserError(format!(
                    "options validation failed: {} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
