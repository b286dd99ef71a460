//! The project value object.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ProjectError, ProjectResult};
use super::marker::MARKER_FILE_NAME;
use super::sources::collect_source_files;

/// An open AdaScript project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Display label; not unique.
    pub name: String,
    /// Directory containing the marker file.
    pub root: PathBuf,
    /// Interpreter executable as configured, absolute or root-relative.
    pub interpreter_path: Option<PathBuf>,
}

impl Project {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            interpreter_path: None,
        }
    }

    pub fn with_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.interpreter_path = Some(path.into());
        self
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILE_NAME)
    }

    /// Every source file under the root, discovered afresh on each call.
    pub fn source_files(&self) -> Vec<PathBuf> {
        collect_source_files(&self.root)
    }

    /// Resolve a path given relative to the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Create an empty file, creating parent directories as needed.
    ///
    /// An existing file is truncated, like saving an empty buffer over it.
    pub fn create_file(&self, path: &Path) -> ProjectResult<PathBuf> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ProjectError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, "").map_err(|source| ProjectError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Create a directory and any missing parents.
    pub fn create_folder(&self, path: &Path) -> ProjectResult<PathBuf> {
        let path = self.resolve(path);
        fs::create_dir_all(&path).map_err(|source| ProjectError::CreateDir {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
