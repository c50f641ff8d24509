//! core::dump
//!
//! Writing dump files.
//!
//! The target is created or truncated and the whole buffer written. Parent
//! directories are not created. A failed write may leave a truncated file
//! behind; nothing is rolled back.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::metadata::Metadata;

/// Errors from producing a dump file.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to create '{path}': {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Create or truncate `path` and write `contents` in full.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), DumpError> {
    let mut file = File::create(path).map_err(|e| DumpError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| DumpError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write a revision file: the raw value, no newline.
pub fn write_revision(path: &Path, revision: &str) -> Result<(), DumpError> {
    write_file(path, revision.as_bytes())
}

/// Write a metadata file as four-space indented JSON.
pub fn write_metadata(path: &Path, meta: &Metadata) -> Result<(), DumpError> {
    let bytes = meta.to_pretty_json()?;
    write_file(path, &bytes)
}
