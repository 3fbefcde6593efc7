//! Module and dependency string parsers.
//!
//! Validation of option groups delegates string grammar to the [`ModuleParser`]
//! and [`DependencyParser`] traits. [`CoordinateParser`] is the built-in
//! implementation of both:
//!
//! ```text
//! org:name                      plain module
//! org::name                     name suffixed with the scala binary version
//! org:::name                    name suffixed with the full scala version
//! org:name;key=value            module attributes
//! org:name:1.0[:config]         dependency
//! org:name:1.0,exclude=o%n      dependency parameters (exclude, classifier, type, url)
//! ```

mod dependency;
mod module;

#[cfg(test)]
mod tests;

use crate::model::{Configuration, DependencyEntry, Module};
use crate::validated::{Validated, traverse};

pub use dependency::parse_dependency;
pub use module::{parse_module, scala_binary_version};

/// Parses module strings (used for exclusions).
pub trait ModuleParser {
    /// Parse every input, returning all modules or one error per bad input.
    fn parse_modules(&self, inputs: &[String], scala_version: &str) -> Validated<Vec<Module>>;
}

/// Parses dependency strings.
pub trait DependencyParser {
    /// Parse every input, returning all entries or one error per bad input.
    fn parse_dependencies(
        &self,
        inputs: &[String],
        default_configuration: &Configuration,
        scala_version: &str,
    ) -> Validated<Vec<DependencyEntry>>;
}

/// The built-in coordinate grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateParser;

impl ModuleParser for CoordinateParser {
    fn parse_modules(&self, inputs: &[String], scala_version: &str) -> Validated<Vec<Module>> {
        traverse(inputs, |input| parse_module(input, scala_version))
    }
}

impl DependencyParser for CoordinateParser {
    fn parse_dependencies(
        &self,
        inputs: &[String],
        default_configuration: &Configuration,
        scala_version: &str,
    ) -> Validated<Vec<DependencyEntry>> {
        traverse(inputs, |input| {
            parse_dependency(input, default_configuration, scala_version)
        })
    }
}
