//! CLI exit codes and command errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Define the typed errors commands raise and map them to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Errors that are not a `CliError` map to `GeneralError`.

use std::path::PathBuf;
use thiserror::Error;

/// Structured exit codes for minuet-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - bad argument, or warnings under `check --strict`.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid address '{0}': expected 0x-prefixed hex or a decimal integer")]
    InvalidAddress(String),

    #[error("config file already exists at {0}; pass --force to overwrite")]
    ConfigExists(PathBuf),
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::InvalidAddress(_) => ExitCode::ValidationError,
            CliError::ConfigExists(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait to derive an exit code from an `anyhow::Error`.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.downcast_ref::<CliError>()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
