//! CLI error types and exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error (IO, configuration, lexicon file unreadable) |
//! | 4 | Invalid input (blank text, malformed lexicon, bad score) |

use polarity_core::PolarityError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Error = 1,
    InvalidInput = 4,
}

/// Errors raised by the CLI itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map any error surfaced by a command to its exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    if let Some(polarity) = err.downcast_ref::<PolarityError>() {
        if polarity.is_input_error() {
            return CliExitCode::InvalidInput as i32;
        }
        return CliExitCode::Error as i32;
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::InvalidInput(_)) => CliExitCode::InvalidInput as i32,
        _ => CliExitCode::Error as i32,
    }
}
