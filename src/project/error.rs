//! Project-specific error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while creating projects or files on disk.
///
/// Only writes produce these. Missing marker files, malformed markers, and
/// unreadable sources are not errors; see [`ProjectManager`](super::ProjectManager).
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy template {from} to {to}: {source}")]
    CopyTemplate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode project marker: {0}")]
    Marker(#[from] serde_json::Error),

    #[error("invalid project name: {0:?}")]
    InvalidName(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
