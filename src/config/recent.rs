//! Most-recently-used list of project roots.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How many project roots are remembered.
pub const MAX_RECENT_PROJECTS: usize = 10;

/// Project roots, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentProjects {
    entries: Vec<PathBuf>,
}

impl RecentProjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `root` to the front, dropping the oldest entry past the cap.
    pub fn remember(&mut self, root: &Path) {
        self.entries.retain(|p| p != root);
        self.entries.insert(0, root.to_path_buf());
        self.entries.truncate(MAX_RECENT_PROJECTS);
    }

    /// Drop `root`, e.g. after it failed to open. Returns whether it was present.
    pub fn forget(&mut self, root: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p != root);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn most_recent(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
