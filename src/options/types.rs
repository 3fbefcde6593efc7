//! Default values for dependency options.

// Default value functions for serde
pub fn default_scala_version() -> String {
    "2.13.12".to_string()
}
pub fn default_sbt_version() -> String {
    "1.9.7".to_string()
}
pub fn default_configuration() -> String {
    "default(runtime)".to_string()
}
pub fn default_dependency_configuration() -> String {
    "default(compile)".to_string()
}
