//! sbt plugin dependencies and their default attributes.

use super::requirements::ModuleRequirements;
use crate::coords::DependencyParser;
use crate::model::{Attributes, Configuration, Dependency, DependencyEntry};
use crate::validated::{ErrorList, Validated};
use tracing::debug;

fn first_two_components(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// The `sbtVersion` attribute plugins are published under.
///
/// Every sbt 1.x release uses `1.0`; older series use their major.minor.
pub fn sbt_binary_version(sbt_version: &str) -> String {
    if sbt_version.split('.').next() == Some("1") {
        "1.0".to_string()
    } else {
        first_two_components(sbt_version)
    }
}

/// Attributes every plugin dependency gets unless it sets them itself.
///
/// Returns a fresh map on each call.
pub fn default_plugin_attributes(scala_version: &str, sbt_version: &str) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("scalaVersion".to_string(), first_two_components(scala_version));
    attributes.insert("sbtVersion".to_string(), sbt_binary_version(sbt_version));
    attributes
}

/// Overlay the dependency's own attributes on the defaults; its values win.
fn with_default_attributes(mut dependency: Dependency, defaults: &Attributes) -> Dependency {
    let explicit = std::mem::take(&mut dependency.module.attributes);
    let mut attributes = defaults.clone();
    attributes.extend(explicit);
    dependency.module.attributes = attributes;
    dependency
}

/// Parse sbt plugin dependencies.
///
/// Only runs once the module requirements are valid. An empty input list gives
/// an empty result without calling the parser.
pub fn sbt_plugin_dependencies<P: DependencyParser + ?Sized>(
    parser: &P,
    requirements: &Validated<ModuleRequirements>,
    inputs: &[String],
    default_configuration: &Configuration,
    scala_version: &str,
    sbt_version: &str,
) -> Validated<Vec<DependencyEntry>> {
    requirements
        .as_ref()
        .map_err(ErrorList::clone)
        .and_then(|requirements| {
            if inputs.is_empty() {
                return Ok(Vec::new());
            }

            let entries = parser
                .parse_dependencies(inputs, default_configuration, scala_version)
                .map_err(|errors| errors.with_heading("Cannot parse sbt plugin dependencies:"))?;

            let defaults = default_plugin_attributes(scala_version, sbt_version);
            debug!(
                count = entries.len(),
                ?defaults,
                "parsed sbt plugin dependencies"
            );

            let entries = entries
                .into_iter()
                .map(|(dependency, params)| (with_default_attributes(dependency, &defaults), params))
                .collect();

            Ok(requirements.apply(entries))
        })
}
