//! Dependency string grammar.

use super::module::{is_token, parse_module};
use crate::model::{
    Configuration, Dependency, DependencyEntry, ModuleName, Organization, ParameterMap,
};

/// Parse `<module>:<version>[:<configuration>]` followed by `,key=value` parameters.
///
/// Recognised parameters:
/// - `exclude=org%name` adds to the dependency's exclusion set
/// - `classifier=...` and `type=...` set the artifact fields
/// - `url=...` is kept in the returned [`ParameterMap`]
pub fn parse_dependency(
    input: &str,
    default_configuration: &Configuration,
    scala_version: &str,
) -> Result<DependencyEntry, String> {
    let malformed = || format!("Malformed dependency: {}", input);

    let mut parts = input.split(',');
    let coordinates = parts.next().unwrap_or_default();

    let (organization, rest) = coordinates.split_once(':').ok_or_else(malformed)?;
    let extra_colons = rest.len() - rest.trim_start_matches(':').len();
    let mut segments = rest[extra_colons..].split(':');

    let name = segments.next().unwrap_or_default();
    let version = segments
        .next()
        .filter(|v| is_token(v))
        .ok_or_else(malformed)?;
    let configuration = match segments.next() {
        Some(c) if is_token(c) => Configuration::new(c),
        Some(_) => return Err(malformed()),
        None => default_configuration.clone(),
    };
    if segments.next().is_some() {
        return Err(malformed());
    }

    let separator = ":".repeat(extra_colons + 1);
    let module = parse_module(
        &format!("{}{}{}", organization, separator, name),
        scala_version,
    )?;

    let mut dependency = Dependency::new(module, version, configuration);
    let mut params = ParameterMap::new();

    for param in parts {
        let (key, value) = param
            .split_once('=')
            .filter(|(key, value)| !key.is_empty() && !value.is_empty())
            .ok_or_else(|| format!("Malformed parameter in {}: {}", input, param))?;

        match key {
            "exclude" => {
                let (org, name) = value
                    .split_once('%')
                    .filter(|(org, name)| !org.is_empty() && !name.is_empty())
                    .ok_or_else(|| format!("Malformed exclusion in {}: {}", input, value))?;
                dependency
                    .exclusions
                    .insert((Organization::new(org), ModuleName::new(name)));
            }
            "classifier" => dependency.classifier = Some(value.to_string()),
            "type" => dependency.artifact_type = Some(value.to_string()),
            "url" => {
                params.insert(key.to_string(), value.to_string());
            }
            _ => return Err(format!("Unrecognized parameter '{}' in {}", key, input)),
        }
    }

    Ok((dependency, params))
}
