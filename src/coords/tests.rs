//! Tests for the coordinate parsers.

use super::*;
use crate::model::{ModuleName, Organization};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn compile() -> Configuration {
    Configuration::new("default(compile)")
}

// =========================================================================
// Module grammar
// =========================================================================

#[test]
fn test_plain_module() {
    let module = parse_module("org.typelevel:cats-core_2.13", "2.13.12").unwrap();
    assert_eq!(module.organization.as_str(), "org.typelevel");
    assert_eq!(module.name.as_str(), "cats-core_2.13");
    assert!(!module.has_attributes());
}

#[test]
fn test_scala_binary_cross_module() {
    let module = parse_module("org.typelevel::cats-core", "2.13.12").unwrap();
    assert_eq!(module.name.as_str(), "cats-core_2.13");

    let module = parse_module("org.typelevel::cats-core", "3.3.1").unwrap();
    assert_eq!(module.name.as_str(), "cats-core_3");
}

#[test]
fn test_full_cross_module() {
    let module = parse_module("org.scalamacros:::paradise", "2.12.18").unwrap();
    assert_eq!(module.name.as_str(), "paradise_2.12.18");
}

#[test]
fn test_module_attributes() {
    let module = parse_module("org.scala-js:sbt-scalajs;sbtVersion=1.0", "2.12.18").unwrap();
    assert_eq!(module.name.as_str(), "sbt-scalajs");
    assert_eq!(module.attributes.get("sbtVersion").map(String::as_str), Some("1.0"));
}

#[test]
fn test_malformed_modules() {
    for input in ["no-colon", ":name", "org:", "org::", "org:name:extra", "a b:c", ""] {
        let err = parse_module(input, "2.13.12").unwrap_err();
        assert_eq!(err, format!("Malformed module: {}", input), "input: {input}");
    }
}

#[test]
fn test_malformed_module_attribute() {
    let err = parse_module("org:name;broken", "2.13.12").unwrap_err();
    assert_eq!(err, "Malformed module attribute in org:name;broken: broken");

    let err = parse_module("org:name;key=", "2.13.12").unwrap_err();
    assert!(err.starts_with("Malformed module attribute"));
}

#[test]
fn test_scala_binary_version() {
    assert_eq!(scala_binary_version("2.13.12"), "2.13");
    assert_eq!(scala_binary_version("2.12"), "2.12");
    assert_eq!(scala_binary_version("3.3.1"), "3");
    assert_eq!(scala_binary_version("2"), "2");
}

#[test]
fn test_parse_modules_reports_every_bad_input() {
    let result = CoordinateParser.parse_modules(&strings(&["a:b", "bad", "c:d", "worse"]), "2.13.12");
    let errors = result.unwrap_err();
    assert_eq!(
        errors.messages(),
        ["Malformed module: bad", "Malformed module: worse"]
    );
}

// =========================================================================
// Dependency grammar
// =========================================================================

#[test]
fn test_plain_dependency_uses_default_configuration() {
    let (dep, params) = parse_dependency("com.example:app:1.2.3", &compile(), "2.13.12").unwrap();

    assert_eq!(dep.module.org_name(), "com.example:app");
    assert_eq!(dep.version, "1.2.3");
    assert_eq!(dep.configuration, compile());
    assert!(dep.transitive);
    assert!(params.is_empty());
}

#[test]
fn test_dependency_with_configuration() {
    let (dep, _) = parse_dependency("com.example:app:1.2.3:test", &compile(), "2.13.12").unwrap();
    assert_eq!(dep.configuration.as_str(), "test");
}

#[test]
fn test_cross_dependency() {
    let (dep, _) = parse_dependency("org.typelevel::cats-core:2.10.0", &compile(), "2.12.18").unwrap();
    assert_eq!(dep.module.name.as_str(), "cats-core_2.12");
    assert_eq!(dep.version, "2.10.0");
}

#[test]
fn test_dependency_with_module_attributes() {
    let (dep, _) = parse_dependency(
        "org.scala-js:sbt-scalajs;scalaVersion=2.11:1.13.0",
        &compile(),
        "2.12.18",
    )
    .unwrap();

    assert_eq!(
        dep.module.attributes.get("scalaVersion").map(String::as_str),
        Some("2.11")
    );
    assert_eq!(dep.version, "1.13.0");
}

#[test]
fn test_dependency_parameters() {
    let (dep, params) = parse_dependency(
        "com.example:app:1.0,exclude=org.bad%lib,classifier=sources,type=src,url=https://example.com/app.jar",
        &compile(),
        "2.13.12",
    )
    .unwrap();

    assert!(
        dep.exclusions
            .contains(&(Organization::new("org.bad"), ModuleName::new("lib")))
    );
    assert_eq!(dep.classifier.as_deref(), Some("sources"));
    assert_eq!(dep.artifact_type.as_deref(), Some("src"));
    assert_eq!(
        params.get("url").map(String::as_str),
        Some("https://example.com/app.jar")
    );
}

#[test]
fn test_missing_version_is_malformed() {
    for input in ["com.example:app", "com.example:app:", "com.example:app:1:test:extra"] {
        let err = parse_dependency(input, &compile(), "2.13.12").unwrap_err();
        assert_eq!(err, format!("Malformed dependency: {}", input));
    }
}

#[test]
fn test_attributes_after_version_are_malformed() {
    for input in [
        "org:name:1.0;k=v",
        "com.typesafe:sbt-native:1.0.0;scalaVersion=2.11",
        "org:name:1%0",
        "org:name:1.0:te=st",
        "org:name:1.0:a b",
    ] {
        let err = parse_dependency(input, &compile(), "2.13.12").unwrap_err();
        assert_eq!(err, format!("Malformed dependency: {}", input));
    }
}

#[test]
fn test_unrecognized_parameter() {
    let err = parse_dependency("a:b:1,color=blue", &compile(), "2.13.12").unwrap_err();
    assert_eq!(err, "Unrecognized parameter 'color' in a:b:1,color=blue");
}

#[test]
fn test_malformed_exclusion_parameter() {
    let err = parse_dependency("a:b:1,exclude=nopercent", &compile(), "2.13.12").unwrap_err();
    assert_eq!(err, "Malformed exclusion in a:b:1,exclude=nopercent: nopercent");
}

#[test]
fn test_parse_dependencies_reports_every_bad_input() {
    let result = CoordinateParser.parse_dependencies(
        &strings(&["a:b:1", "a:b", "c:d:2", "x"]),
        &compile(),
        "2.13.12",
    );
    assert_eq!(
        result.unwrap_err().messages(),
        ["Malformed dependency: a:b", "Malformed dependency: x"]
    );
}
