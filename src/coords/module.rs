//! Module string grammar.

use crate::model::{Attributes, Module};
use regex::Regex;
use std::sync::LazyLock;

/// Organization, name, and attribute keys: no whitespace or separators.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s:;,=%]+$").expect("Invalid coordinate token regex"));

/// Whether `value` is a non-empty coordinate token (no whitespace or separators).
pub(super) fn is_token(value: &str) -> bool {
    TOKEN.is_match(value)
}

/// Scala binary version used for `::` cross-built names.
///
/// `2.13.12` gives `2.13`; Scala 3 releases share the binary version `3`.
pub fn scala_binary_version(scala_version: &str) -> String {
    let mut parts = scala_version.split('.');
    match (parts.next(), parts.next()) {
        (Some("3"), _) => "3".to_string(),
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        (Some(major), None) => major.to_string(),
        (None, _) => String::new(),
    }
}

/// Parse `org:name`, `org::name` or `org:::name`, with optional `;key=value` attributes.
pub fn parse_module(input: &str, scala_version: &str) -> Result<Module, String> {
    let mut segments = input.split(';');
    let coordinates = segments.next().unwrap_or_default();

    let mut attributes = Attributes::new();
    for pair in segments {
        match pair.split_once('=') {
            Some((key, value)) if TOKEN.is_match(key) && !value.is_empty() => {
                attributes.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(format!(
                    "Malformed module attribute in {}: {}",
                    input, pair
                ));
            }
        }
    }

    let (organization, name, suffix) = if let Some((org, name)) = coordinates.split_once(":::") {
        (org, name, Some(scala_version.to_string()))
    } else if let Some((org, name)) = coordinates.split_once("::") {
        (org, name, Some(scala_binary_version(scala_version)))
    } else {
        match coordinates.split_once(':') {
            Some((org, name)) => (org, name, None),
            None => return Err(format!("Malformed module: {}", input)),
        }
    };

    if !TOKEN.is_match(organization) || !TOKEN.is_match(name) {
        return Err(format!("Malformed module: {}", input));
    }

    let name = match suffix {
        Some(suffix) => format!("{}_{}", name, suffix),
        None => name.to_string(),
    };

    Ok(Module::new(organization, name).with_attributes(attributes))
}
