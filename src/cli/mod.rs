//! CLI argument parsing for depparams.
//!
//! Uses clap derive macros for declarative argument definitions. Flags are
//! layered over an optional YAML options file: list flags append to the
//! file's lists, scalar flags replace the file's values.

use clap::{Parser, ValueEnum};
use depparams::error::Result;
use depparams::options::DependencyOptions;
use std::path::PathBuf;

/// Validate dependency exclusion and extra-dependency options.
///
/// Prints the resulting parameter bundle on success, or every validation
/// error on failure.
#[derive(Parser, Debug)]
#[command(name = "depparams")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file with base option values.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Module to exclude from every dependency (org:name).
    #[arg(long = "exclude", short = 'E', value_name = "ORG:NAME")]
    pub exclude: Vec<String>,

    /// File of `parent--org:name` exclusion rules.
    #[arg(long, value_name = "PATH")]
    pub local_exclude_file: Option<PathBuf>,

    /// Dependency to add without its own dependencies.
    #[arg(long = "intransitive", value_name = "DEPENDENCY")]
    pub intransitive: Vec<String>,

    /// sbt plugin dependency.
    #[arg(long = "sbt-plugin", value_name = "DEPENDENCY")]
    pub sbt_plugin: Vec<String>,

    /// sbt version used for plugin attributes.
    #[arg(long, value_name = "VERSION")]
    pub sbt_version: Option<String>,

    /// Scaladex lookup.
    #[arg(long = "scaladex", value_name = "LOOKUP")]
    pub scaladex: Vec<String>,

    /// Configuration handed to the resolution engine.
    #[arg(long, value_name = "CONFIGURATION")]
    pub default_configuration: Option<String>,

    /// Configuration for dependencies that do not name one.
    #[arg(long, value_name = "CONFIGURATION")]
    pub dependency_configuration: Option<String>,

    /// Scala version.
    #[arg(long, value_name = "VERSION")]
    pub scala_version: Option<String>,

    /// Output format for the parameter bundle.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the parameter bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Build the option snapshot: options file (or defaults), then flags.
    pub fn to_options(&self) -> Result<DependencyOptions> {
        let mut options = match &self.options {
            Some(path) => DependencyOptions::load(path)?,
            None => DependencyOptions::default(),
        };

        options.exclude.extend(self.exclude.iter().cloned());
        options.intransitive.extend(self.intransitive.iter().cloned());
        options.sbt_plugin.extend(self.sbt_plugin.iter().cloned());
        options.scaladex.extend(self.scaladex.iter().cloned());

        if let Some(path) = &self.local_exclude_file {
            options.local_exclude_file = Some(path.clone());
        }
        if let Some(version) = &self.sbt_version {
            options.sbt_version = version.clone();
        }
        if let Some(version) = &self.scala_version {
            options.scala_version = version.clone();
        }
        if let Some(configuration) = &self.default_configuration {
            options.default_configuration = configuration.clone();
        }
        if let Some(configuration) = &self.dependency_configuration {
            options.dependency_configuration = configuration.clone();
        }

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["depparams"]).unwrap();
        assert!(cli.options.is_none());
        assert!(cli.exclude.is_empty());
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_repeated_flags() {
        let cli = Cli::try_parse_from([
            "depparams",
            "--exclude",
            "org.a:x",
            "-E",
            "org.b:y",
            "--intransitive",
            "com.example:app:1.0",
            "--sbt-plugin",
            "org.scala-js:sbt-scalajs:1.13.0",
            "--scaladex",
            "cats",
            "--sbt-version",
            "0.13.17",
            "--format",
            "yaml",
        ])
        .unwrap();

        assert_eq!(cli.exclude, vec!["org.a:x", "org.b:y"]);
        assert_eq!(cli.intransitive, vec!["com.example:app:1.0"]);
        assert_eq!(cli.sbt_plugin, vec!["org.scala-js:sbt-scalajs:1.13.0"]);
        assert_eq!(cli.scaladex, vec!["cats"]);
        assert_eq!(cli.sbt_version.as_deref(), Some("0.13.17"));
        assert_eq!(cli.format, OutputFormat::Yaml);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["depparams", "-v", "-q"]).is_err());
    }

    #[test]
    fn flags_without_options_file_use_defaults() {
        let cli = Cli::try_parse_from(["depparams", "--scala-version", "2.12.18"]).unwrap();
        let options = cli.to_options().unwrap();

        assert_eq!(options.scala_version, "2.12.18");
        assert_eq!(options.sbt_version, "1.9.7");
    }

    #[test]
    fn flags_layer_over_options_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.yaml");
        std::fs::write(
            &path,
            "exclude: [\"org.a:x\"]\nsbt_version: \"0.13.17\"\nscala_version: \"2.11.12\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "depparams",
            "--options",
            path.to_str().unwrap(),
            "--exclude",
            "org.b:y",
            "--scala-version",
            "2.12.18",
        ])
        .unwrap();
        let options = cli.to_options().unwrap();

        assert_eq!(options.exclude, vec!["org.a:x", "org.b:y"]);
        assert_eq!(options.sbt_version, "0.13.17");
        assert_eq!(options.scala_version, "2.12.18");
    }

    #[test]
    fn blank_flag_value_is_rejected() {
        let cli = Cli::try_parse_from(["depparams", "--sbt-version", ""]).unwrap();
        assert!(cli.to_options().is_err());
    }
}
