//! depparams: validates dependency exclusion and extra-dependency options.
//!
//! Raw option strings go in; a [`params::DependencyParams`] bundle comes out,
//! or every problem found across all option groups.
//!
//! ```no_run
//! use depparams::options::DependencyOptions;
//! use depparams::params::DependencyParams;
//!
//! let options = DependencyOptions {
//!     exclude: vec!["org.slf4j:slf4j-log4j12".to_string()],
//!     sbt_plugin: vec!["org.scala-js:sbt-scalajs:1.13.0".to_string()],
//!     ..Default::default()
//! };
//! let params = DependencyParams::from_options(&options).unwrap();
//! assert_eq!(params.sbt_plugin_dependencies.len(), 1);
//! ```

pub mod coords;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod options;
pub mod params;
pub mod validated;
