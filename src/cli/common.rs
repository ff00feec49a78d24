//! Shared CLI error handling and exit codes.

use crate::error::GenError;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Complete output was written
    Success = 0,
    /// Input data is malformed, incomplete or inconsistent
    ValidationError = 1,
    /// Files could not be read or written, or configuration is invalid
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Diagnostic printed to stderr
    pub message: String,
}

impl CliError {
    /// Data error (bad codepoint, missing field, duplicate short name).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or configuration error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenError> for CliError {
    fn from(err: GenError) -> Self {
        if err.is_data_error() {
            Self::validation(err.to_string())
        } else {
            Self::io(err.to_string())
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
