//! The `.nukita.json` marker that identifies a project directory.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ProjectError, ProjectResult};

/// File name of the marker, directly under the project root.
pub const MARKER_FILE_NAME: &str = ".nukita.json";

/// Contents of a marker file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absolute or relative to the project root.
    #[serde(
        default,
        alias = "adascript_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpreter_path: Option<String>,
}

impl ProjectMarker {
    pub fn new(name: impl Into<String>, interpreter_path: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            interpreter_path,
        }
    }

    /// Read the marker under `root`.
    ///
    /// Returns `None` when there is no marker file. A marker that exists but
    /// cannot be read or parsed yields an empty marker, so the caller falls
    /// back to the directory name and no interpreter.
    pub fn read(root: &Path) -> Option<Self> {
        let path = root.join(MARKER_FILE_NAME);
        if !path.is_file() {
            return None;
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Self>(&text).map_err(|e| e.to_string()));

        match parsed {
            Ok(marker) => Some(marker),
            Err(reason) => {
                debug!(path = %path.display(), %reason, "ignoring malformed project marker");
                Some(Self {
                    name: None,
                    interpreter_path: None,
                })
            }
        }
    }

    /// Write the marker under `root` as pretty-printed JSON.
    pub fn write(&self, root: &Path) -> ProjectResult<()> {
        let path = root.join(MARKER_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| ProjectError::Write { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accepts_legacy_key() {
        let marker: ProjectMarker =
            serde_json::from_str(r#"{"name": "demo", "adascript_path": "bin/ada"}"#).unwrap();
        assert_eq!(marker.name.as_deref(), Some("demo"));
        assert_eq!(marker.interpreter_path.as_deref(), Some("bin/ada"));
    }

    #[test]
    fn test_marker_omits_absent_interpreter() {
        let json = serde_json::to_string(&ProjectMarker::new("demo", None)).unwrap();
        assert_eq!(json, r#"{"name":"demo"}"#);
    }

    #[test]
    fn test_marker_name_is_optional() {
        let marker: ProjectMarker = serde_json::from_str("{}").unwrap();
        assert_eq!(marker.name, None);
        assert_eq!(marker.interpreter_path, None);
    }
}
