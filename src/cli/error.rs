//! CLI-level errors: what gets displayed to the user.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::SettingsError;
use crate::exitcode;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no node with id '{0}' (use `treedown show --ids` to list ids)")]
    NodeNotFound(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Read { .. } => exitcode::NOINPUT,
            CliError::Write { .. } => exitcode::CANTCREAT,
            CliError::NodeNotFound(_) => exitcode::USAGE,
            CliError::Json(_) => exitcode::SOFTWARE,
            CliError::Settings(_) => exitcode::CONFIG,
        }
    }
}
