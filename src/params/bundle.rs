//! The validated parameter bundle.

use super::exclusions::validate_exclusions;
use super::intransitive::intransitive_dependencies;
use super::local_excludes::load_local_exclusions;
use super::plugins::sbt_plugin_dependencies;
use super::requirements::module_requirements;
use crate::coords::{CoordinateParser, DependencyParser, ModuleParser};
use crate::error::{ParamsError, Result};
use crate::model::{Configuration, DependencyEntry, GlobalExclusionSet, PerModuleExclusionMap};
use crate::options::DependencyOptions;
use crate::validated::{Validated, zip4};
use serde::Serialize;
use tracing::{info, warn};

/// Validated dependency parameters handed to the resolution engine.
///
/// Built once from a [`DependencyOptions`] snapshot and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyParams {
    /// Modules excluded from every dependency.
    pub exclude: GlobalExclusionSet,

    /// Modules excluded below a given parent (`org:name`).
    pub per_module_exclude: PerModuleExclusionMap,

    /// Dependencies resolved without their own dependencies.
    pub intransitive_dependencies: Vec<DependencyEntry>,

    /// sbt plugin dependencies, with `scalaVersion`/`sbtVersion` attributes set.
    pub sbt_plugin_dependencies: Vec<DependencyEntry>,

    /// Trimmed, non-empty scaladex lookups.
    pub scaladex_lookups: Vec<String>,

    pub default_configuration: Configuration,
}

/// Trim lookup strings and drop the empty ones.
pub fn lookup_strings(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl DependencyParams {
    /// Validate options with the built-in coordinate parsers.
    ///
    /// # Returns
    ///
    /// * `Ok(DependencyParams)` - Every option group is valid
    /// * `Err(ParamsError::Invalid)` - Every validation error, in reporting order
    /// * `Err(ParamsError::ExcludeFileRead)` - The local exclusion file could not be read
    pub fn from_options(options: &DependencyOptions) -> Result<Self> {
        Self::from_options_with(options, &CoordinateParser, &CoordinateParser)
    }

    /// Validate options with custom parsers.
    pub fn from_options_with<M, D>(
        options: &DependencyOptions,
        module_parser: &M,
        dependency_parser: &D,
    ) -> Result<Self>
    where
        M: ModuleParser + ?Sized,
        D: DependencyParser + ?Sized,
    {
        Self::validate_with(options, module_parser, dependency_parser)?.map_err(ParamsError::from)
    }

    /// Run every branch and accumulate their results.
    ///
    /// The outer `Result` only fails when the local exclusion file cannot be
    /// read. The inner [`Validated`] carries every validation error, ordered by
    /// branch: global exclusions, local exclusions, intransitive dependencies,
    /// sbt plugin dependencies. A prerequisite failure propagated to the
    /// dependency branches is reported once.
    pub fn validate_with<M, D>(
        options: &DependencyOptions,
        module_parser: &M,
        dependency_parser: &D,
    ) -> Result<Validated<Self>>
    where
        M: ModuleParser + ?Sized,
        D: DependencyParser + ?Sized,
    {
        let scala_version = options.scala_version.as_str();
        let dependency_configuration = Configuration::new(&options.dependency_configuration);

        let exclusions = validate_exclusions(module_parser, &options.exclude, scala_version);
        let per_module = load_local_exclusions(options.local_exclude_file.as_deref())?;

        let requirements = module_requirements(&exclusions, &per_module);

        let intransitive = intransitive_dependencies(
            dependency_parser,
            &requirements,
            &options.intransitive,
            &dependency_configuration,
            scala_version,
        );
        let plugins = sbt_plugin_dependencies(
            dependency_parser,
            &requirements,
            &options.sbt_plugin,
            &dependency_configuration,
            scala_version,
            &options.sbt_version,
        );

        let default_configuration = Configuration::new(&options.default_configuration);
        let scaladex_lookups = lookup_strings(&options.scaladex);

        let params = zip4(exclusions, per_module, intransitive, plugins).map(
            |(exclude, per_module_exclude, intransitive_dependencies, sbt_plugin_dependencies)| {
                Self {
                    exclude,
                    per_module_exclude,
                    intransitive_dependencies,
                    sbt_plugin_dependencies,
                    scaladex_lookups,
                    default_configuration,
                }
            },
        );

        match &params {
            Ok(params) => info!(
                exclusions = params.exclude.len(),
                intransitive = params.intransitive_dependencies.len(),
                sbt_plugins = params.sbt_plugin_dependencies.len(),
                "dependency options validated"
            ),
            Err(errors) => warn!(errors = errors.len(), "dependency options rejected"),
        }

        Ok(params)
    }
}
