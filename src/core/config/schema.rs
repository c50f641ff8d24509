//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! verbose = false
//!
//! [revision]
//! file = "REVISION"
//!
//! [meta]
//! file = "build/ci.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Log resolved values for every command
    pub verbose: Option<bool>,

    /// `ci:revision` defaults
    pub revision: Option<DumpDefaults>,

    /// `ci:meta` defaults
    pub meta: Option<DumpDefaults>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(revision) = &self.revision {
            revision.validate("revision")?;
        }
        if let Some(meta) = &self.meta {
            meta.validate("meta")?;
        }
        Ok(())
    }
}

/// Per-command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DumpDefaults {
    /// Target file
    pub file: Option<PathBuf>,
}

impl DumpDefaults {
    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        match &self.file {
            Some(file) if file.as_os_str().is_empty() => Err(ConfigError::InvalidValue(format!(
                "{}.file must not be empty",
                section
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let config: FileConfig = toml::from_str(
            r#"
            verbose = true

            [revision]
            file = "out/REVISION"

            [meta]
            file = "out/ci.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.verbose, Some(true));
        assert_eq!(
            config.revision.unwrap().file,
            Some(PathBuf::from("out/REVISION"))
        );
        assert_eq!(config.meta.unwrap().file, Some(PathBuf::from("out/ci.json")));
    }

    #[test]
    fn parse_empty() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("trunk = \"main\"");
        assert!(result.is_err());

        let result: Result<FileConfig, _> = toml::from_str("[meta]\npath = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn empty_file_is_invalid() {
        let config: FileConfig = toml::from_str("[meta]\nfile = \"\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("meta.file"));
    }
}
