//! Error and warning types for configuration loading.
//!
//! Responsibilities:
//! - Define `ConfigWarning`, the recoverable problems met while loading.
//! - Define `ConfigFileError`, the low-level read/parse failures, and map
//!   them onto warnings.
//! - Define `ConfigError` for the few operations that can genuinely fail
//!   (`.env` loading).
//!
//! Does NOT handle:
//! - Emitting warnings to a log (see `LoadOutcome::report`).
//!
//! Invariants:
//! - Every `ConfigWarning` means a default was kept; none of them abort a load.
//! - A missing address key is `AddressAbsent`; a present but unusable one is
//!   `MalformedAddress` or `UnexpectedAddressType`.
//! - Warnings carry owned strings only, so outcomes stay `Clone` and comparable.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// A recoverable problem encountered while building a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("Configuration file '{path}' not found. Using default values.")]
    FileNotFound { path: PathBuf },

    #[error(
        "Error decoding JSON from '{path}' at line {line}, column {column}. Using default values."
    )]
    MalformedDocument {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error(
        "An unexpected error occurred while loading configuration from '{path}': {detail}. Using default values."
    )]
    UnexpectedLoadError { path: PathBuf, detail: String },

    #[error("Unable to determine the executable directory ({detail}); using '{fallback}'.")]
    PathUnresolved { detail: String, fallback: PathBuf },

    #[error("Could not parse hex string '{value}' for {field}. Using default {default:#x}.")]
    MalformedAddress {
        field: String,
        value: String,
        default: u64,
    },

    #[error("Unexpected type for hex value None in {field}. Using default {default:#x}.")]
    AddressAbsent { field: String, default: u64 },

    #[error("Unexpected type for hex value {value} in {field}. Using default {default:#x}.")]
    UnexpectedAddressType {
        field: String,
        value: String,
        default: u64,
    },

    #[error("Expected {expected} for {field}, got {value}. Using default.")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        value: String,
    },
}

impl ConfigWarning {
    /// Whether this warning discarded the whole document rather than one field.
    pub fn is_document_level(&self) -> bool {
        matches!(
            self,
            ConfigWarning::FileNotFound { .. }
                | ConfigWarning::MalformedDocument { .. }
                | ConfigWarning::UnexpectedLoadError { .. }
        )
    }

    /// Whether this warning only reports an address key missing from the document.
    pub fn is_absent_key(&self) -> bool {
        matches!(self, ConfigWarning::AddressAbsent { .. })
    }

    /// The JSON key this warning concerns, if it is a per-field warning.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigWarning::AddressAbsent { field, .. }
            | ConfigWarning::MalformedAddress { field, .. }
            | ConfigWarning::UnexpectedAddressType { field, .. }
            | ConfigWarning::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Low-level failures reading the config document.
#[derive(Error, Debug)]
pub(crate) enum ConfigFileError {
    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file at {path} does not contain a JSON object")]
    NotAnObject { path: PathBuf },
}

impl From<ConfigFileError> for ConfigWarning {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, source } if source.kind() == ErrorKind::NotFound => {
                ConfigWarning::FileNotFound { path }
            }
            ConfigFileError::Read { path, source } => ConfigWarning::UnexpectedLoadError {
                path,
                detail: source.to_string(),
            },
            ConfigFileError::Parse { path, source } if source.is_syntax() || source.is_eof() => {
                ConfigWarning::MalformedDocument {
                    path,
                    line: source.line(),
                    column: source.column(),
                }
            }
            ConfigFileError::Parse { path, source } => ConfigWarning::UnexpectedLoadError {
                path,
                detail: source.to_string(),
            },
            ConfigFileError::NotAnObject { path } => ConfigWarning::UnexpectedLoadError {
                path,
                detail: "top-level JSON value is not an object".to_string(),
            },
        }
    }
}

/// Errors that can occur while preparing the loader environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
