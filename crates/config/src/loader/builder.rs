//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that resolves the config file location.
//! - Build the snapshot from defaults plus the document, collecting warnings.
//! - Report the outcome through `tracing`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Key-by-key merging (delegated to overrides.rs).
//! - Writing configuration files (see persistence).
//!
//! Invariants / Assumptions:
//! - Builder path > `MINUET_CONFIG_PATH` > `config.json` beside the executable.
//! - Loading never fails: every problem becomes a `ConfigWarning` and a default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::document::read_document;
use super::env::apply_env;
use super::error::{ConfigError, ConfigWarning};
use super::overrides::apply_document;
use crate::constants::CONFIG_FILE_NAME;
use crate::persistence::default_config_path;
use crate::types::Config;

/// Where the values of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The document was read and merged (individual fields may still have warnings).
    File,
    /// The document was unusable; every field holds its compiled-in default.
    Defaults,
}

/// Result of a load: the snapshot plus everything that went wrong on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub config: Config,
    pub source: ConfigSource,
    /// The path that was (or would have been) read.
    pub path: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadOutcome {
    /// True when the document was read and every present key was accepted.
    ///
    /// Address keys missing from the document do not make an outcome unclean.
    pub fn is_clean(&self) -> bool {
        self.source == ConfigSource::File && self.issues().next().is_none()
    }

    /// Warnings other than `AddressAbsent`.
    pub fn issues(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.warnings.iter().filter(|w| !w.is_absent_key())
    }

    /// Emit the outcome to the log: one info line on success, one warn line per warning.
    pub fn report(&self) {
        if self.source == ConfigSource::File {
            tracing::info!(
                path = %self.path.display(),
                "Successfully loaded configuration"
            );
        }
        for warning in &self.warnings {
            tracing::warn!(path = %self.path.display(), "{}", warning);
        }
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Build a snapshot from the document at `path`.
///
/// Missing, unreadable or malformed documents yield the defaults with a
/// document-level warning; bad individual keys keep their own default.
pub fn load(path: &Path) -> LoadOutcome {
    let mut warnings = Vec::new();

    let (config, source) = match read_document(path) {
        Ok(doc) => {
            tracing::debug!(path = %path.display(), keys = doc.len(), "Parsed config document");
            let config = apply_document(&doc, Config::default(), &mut warnings);
            (config, ConfigSource::File)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Config document unusable");
            warnings.push(ConfigWarning::from(e));
            (Config::default(), ConfigSource::Defaults)
        }
    };

    LoadOutcome {
        config,
        source,
        path: path.to_path_buf(),
        warnings,
    }
}

/// Configuration loader that locates the config file and builds the snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path. Takes precedence over `MINUET_CONFIG_PATH`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration overrides from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub(super) fn set_env_config_path(&mut self, path: Option<PathBuf>) {
        self.env_config_path = path;
    }

    /// Resolve the config file location.
    ///
    /// When the executable directory cannot be determined, falls back to
    /// `config.json` in the working directory and returns a warning.
    pub fn resolve_path(&self) -> (PathBuf, Option<ConfigWarning>) {
        if let Some(path) = self.config_path.as_ref().or(self.env_config_path.as_ref()) {
            return (path.clone(), None);
        }

        match default_config_path() {
            Ok(path) => (path, None),
            Err(e) => {
                let fallback = PathBuf::from(CONFIG_FILE_NAME);
                let warning = ConfigWarning::PathUnresolved {
                    detail: format!("{:#}", e),
                    fallback: fallback.clone(),
                };
                (fallback, Some(warning))
            }
        }
    }

    /// Resolve the path and build the snapshot.
    pub fn load(&self) -> LoadOutcome {
        let (path, path_warning) = self.resolve_path();
        let mut outcome = load(&path);
        if let Some(warning) = path_warning {
            outcome.warnings.insert(0, warning);
        }
        outcome
    }
}
