//! Intransitive dependencies.

use super::requirements::ModuleRequirements;
use crate::coords::DependencyParser;
use crate::model::{Configuration, DependencyEntry};
use crate::validated::{ErrorList, Validated};
use tracing::debug;

/// Parse dependencies that must be resolved without their own dependencies.
///
/// Only runs once the module requirements are valid; otherwise their errors are
/// returned unchanged. Every parsed dependency is made intransitive, whatever
/// the parser produced, before exclusions are applied.
pub fn intransitive_dependencies<P: DependencyParser + ?Sized>(
    parser: &P,
    requirements: &Validated<ModuleRequirements>,
    inputs: &[String],
    default_configuration: &Configuration,
    scala_version: &str,
) -> Validated<Vec<DependencyEntry>> {
    requirements
        .as_ref()
        .map_err(ErrorList::clone)
        .and_then(|requirements| {
            let entries = parser
                .parse_dependencies(inputs, default_configuration, scala_version)
                .map_err(|errors| errors.with_heading("Cannot parse intransitive dependencies:"))?;

            let entries = entries
                .into_iter()
                .map(|(dependency, params)| (dependency.with_transitive(false), params))
                .collect();

            debug!(count = inputs.len(), "parsed intransitive dependencies");
            Ok(requirements.apply(entries))
        })
}
