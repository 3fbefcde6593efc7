//! Tests for the dependency model.

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn module_display_includes_attributes_in_key_order() {
    let module = Module::new("org.scala-js", "sbt-scalajs")
        .with_attributes(attrs(&[("sbtVersion", "1.0"), ("scalaVersion", "2.12")]));

    assert_eq!(
        module.to_string(),
        "org.scala-js:sbt-scalajs;sbtVersion=1.0;scalaVersion=2.12"
    );
}

#[test]
fn module_org_name_ignores_attributes() {
    let module = Module::new("com.example", "app").with_attributes(attrs(&[("k", "v")]));
    assert_eq!(module.org_name(), "com.example:app");
    assert!(module.has_attributes());
}

#[test]
fn dependency_defaults_to_transitive_without_exclusions() {
    let dep = Dependency::new(
        Module::new("com.example", "app"),
        "1.0.0",
        Configuration::new("compile"),
    );

    assert!(dep.transitive);
    assert!(dep.exclusions.is_empty());
    assert_eq!(dep.to_string(), "com.example:app:1.0.0:compile");
}

#[test]
fn added_exclusions_union_with_existing_ones() {
    let first = Module::new("a", "b").exclusion_pair();
    let second = Module::new("c", "d").exclusion_pair();

    let dep = Dependency::new(Module::new("x", "y"), "1", Configuration::new("compile"))
        .with_added_exclusions([&first])
        .with_added_exclusions([&first, &second]);

    assert_eq!(dep.exclusions.len(), 2);
    assert!(dep.exclusions.contains(&first));
    assert!(dep.exclusions.contains(&second));
}

#[test]
fn dependency_serializes_type_field_and_skips_empty_parts() {
    let mut dep = Dependency::new(Module::new("x", "y"), "1", Configuration::new("compile"));
    dep.artifact_type = Some("jar".to_string());

    let json = serde_json::to_value(&dep).unwrap();

    assert_eq!(json["type"], "jar");
    assert_eq!(json["module"]["organization"], "x");
    assert!(json.get("classifier").is_none());
    assert!(json.get("exclusions").is_none());
    assert!(json["module"].get("attributes").is_none());
}
