//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, the first existing file wins:
//! 1. `$GITLAB_CI_HELPER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitlab-ci-helper/config.toml`
//! 3. `~/.gitlab-ci-helper/config.toml`
//!
//! All lookups go through [`Environment`], so loading is hermetic under a
//! [`MapEnv`](crate::core::env::MapEnv).

pub mod schema;

pub use schema::{DumpDefaults, FileConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::env::Environment;
use crate::core::vars;

/// Default target of `ci:revision`.
pub const DEFAULT_REVISION_FILE: &str = "REVISION";

/// Default target of `ci:meta`.
pub const DEFAULT_META_FILE: &str = "ci.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: FileConfig,
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing files are not an error.
    pub fn load(env: &dyn Environment) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        for path in Self::candidates(env, &mut warnings) {
            if path.is_file() {
                let file = Self::read(&path)?;
                return Ok(ConfigLoadResult {
                    config: Config {
                        file,
                        path: Some(path),
                    },
                    warnings,
                });
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    fn candidates(env: &dyn Environment, warnings: &mut Vec<ConfigWarning>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(explicit) = env.var(vars::CONFIG_PATH).filter(|p| !p.is_empty()) {
            let explicit = PathBuf::from(explicit);
            if !explicit.is_file() {
                warnings.push(ConfigWarning {
                    message: format!(
                        "${} points to a missing file, ignoring it",
                        vars::CONFIG_PATH
                    ),
                    path: explicit.clone(),
                });
            }
            paths.push(explicit);
        }

        if let Some(xdg) = env.var(vars::XDG_CONFIG_HOME).filter(|p| !p.is_empty()) {
            paths.push(PathBuf::from(xdg).join("gitlab-ci-helper/config.toml"));
        }

        if let Some(home) = env.home_dir() {
            paths.push(home.join(".gitlab-ci-helper/config.toml"));
        }

        paths
    }

    /// Configuration built from an already-parsed file.
    pub fn from_file(file: FileConfig) -> Self {
        Self { file, path: None }
    }

    /// Read, parse and validate a config file.
    pub fn read(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        file.validate()?;
        Ok(file)
    }

    /// Target of `ci:revision`.
    pub fn revision_file(&self) -> PathBuf {
        self.file
            .revision
            .as_ref()
            .and_then(|r| r.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REVISION_FILE))
    }

    /// Target of `ci:meta`.
    pub fn meta_file(&self) -> PathBuf {
        self.file
            .meta
            .as_ref()
            .and_then(|m| m.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_META_FILE))
    }

    /// Whether commands log resolved values. Defaults to `false`.
    pub fn verbose(&self) -> bool {
        self.file.verbose.unwrap_or(false)
    }

    /// Path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
