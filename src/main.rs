//! depparams: validate dependency options into a resolution parameter bundle.
//!
//! This is the main entry point for the `depparams` CLI. It parses arguments,
//! validates the option snapshot, prints the bundle, and handles errors with
//! proper exit codes.

mod cli;
mod logging;

use cli::{Cli, OutputFormat};
use depparams::error::{ParamsError, Result};
use depparams::exit_codes;
use depparams::params::DependencyParams;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.log_level.as_deref(), cli.verbose, cli.quiet);
    debug!("depparams v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // One line per accumulated problem
            for message in err.messages() {
                eprintln!("Error: {}", message);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.to_options()?;
    let params = DependencyParams::from_options(&options)?;

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&params)
            .map_err(|e| ParamsError::UserError(format!("failed to render JSON: {}", e)))?,
        OutputFormat::Yaml => serde_yaml::to_string(&params)
            .map_err(|e| ParamsError::UserError(format!("failed to render YAML: {}", e)))?,
    };

    println!("{}", rendered);
    Ok(())
}
