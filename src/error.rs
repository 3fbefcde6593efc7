//! Error types for depparams.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::validated::ErrorList;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for depparams operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum ParamsError {
    /// User provided invalid arguments or an invalid options file.
    #[error("{0}")]
    UserError(String),

    /// One or more option groups failed validation.
    ///
    /// Carries every accumulated message, in reporting order.
    #[error("invalid dependency options:\n{0}")]
    Invalid(ErrorList),

    /// The local exclusion file could not be opened or read.
    #[error("failed to read local exclusion file '{}': {source}", .path.display())]
    ExcludeFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParamsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParamsError::UserError(_) => exit_codes::USER_ERROR,
            ParamsError::Invalid(_) => exit_codes::VALIDATION_FAILURE,
            ParamsError::ExcludeFileRead { .. } => exit_codes::EXCLUDE_FILE_FAILURE,
        }
    }

    /// Individual messages to report, one per line of output.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ParamsError::Invalid(errors) => errors.messages().to_vec(),
            other => vec![other.to_string()],
        }
    }
}

impl From<ErrorList> for ParamsError {
    fn from(errors: ErrorList) -> Self {
        ParamsError::Invalid(errors)
    }
}

/// Result type alias for depparams operations.
pub type Result<T> = std::result::Result<T, ParamsError>;
