//! Exit code constants for the depparams CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable options file)
//! - 2: Validation failure (exclusions, exclusion file grammar, dependency strings)
//! - 3: Local exclusion file could not be read

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid options file.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more option groups were rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// The local exclusion file could not be opened or read.
pub const EXCLUDE_FILE_FAILURE: i32 = 3;
