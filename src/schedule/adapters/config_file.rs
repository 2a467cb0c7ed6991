//! Loads the constraint configuration from a JSON file.
//!
//! File access goes through a capability-scoped [`Dir`], so the loader can
//! only read beneath the directory it is handed.

use crate::schedule::domain::{ConstraintConfig, ConstraintError, ConstraintModel};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "schedule.json";

/// Errors returned while loading constraint configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The configuration directory or file could not be read.
    #[error("failed to read constraint configuration '{path}': {source}")]
    Read {
        /// Path that failed, relative to the capability directory.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse constraint configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration is internally inconsistent.
    #[error(transparent)]
    Invalid(#[from] ConstraintError),
}

/// Opens `path` as a capability directory using ambient authority.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Read`] when the directory cannot be opened.
pub fn open_config_dir(path: &str) -> Result<Dir, ConfigLoadError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|source| ConfigLoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Reads and parses the configuration file `file_name` inside `dir`.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Read`] when the file cannot be read and
/// [`ConfigLoadError::Parse`] when it is not valid configuration JSON.
pub fn read_config(dir: &Dir, file_name: &str) -> Result<ConstraintConfig, ConfigLoadError> {
    let raw = dir
        .read_to_string(file_name)
        .map_err(|source| ConfigLoadError::Read {
            path: file_name.to_owned(),
            source,
        })?;
    let config = serde_json::from_str(&raw)?;
    tracing::debug!(file = file_name, "constraint configuration loaded");
    Ok(config)
}

/// Reads `file_name` inside `dir` and builds the constraint model.
///
/// # Errors
///
/// Returns [`ConfigLoadError`] when the file cannot be read or parsed, or
/// when the configuration is inconsistent.
pub fn load_constraints(dir: &Dir, file_name: &str) -> Result<ConstraintModel, ConfigLoadError> {
    Ok(read_config(dir, file_name)?.build()?)
}
