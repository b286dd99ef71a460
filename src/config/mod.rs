//! Persistent IDE settings.
//!
//! User-level settings live in `~/.nukita/settings.json`. Everything is
//! optional: a missing or malformed file loads as [`Settings::default`].

mod recent;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::project::{ProjectManager, ShellFlavor};

pub use recent::{MAX_RECENT_PROJECTS, RecentProjects};

/// Delay the editor waits after the last keystroke or save before acting.
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// User-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub recent_projects: RecentProjects,
    /// How long after a save the caller should wait before reindexing.
    pub reindex_delay_ms: u64,
    /// How long after an edit the caller should wait before checking syntax.
    pub syntax_check_delay_ms: u64,
    /// Source of `include/*.h` and `src/main.cpp` for new projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Shell the run command is built for; the platform's own when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<ShellFlavor>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recent_projects: RecentProjects::default(),
            reindex_delay_ms: DEFAULT_DELAY_MS,
            syntax_check_delay_ms: DEFAULT_DELAY_MS,
            template_dir: None,
            shell: None,
        }
    }
}

/// Path to `~/.nukita/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".nukita"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".nukita"))
    }
}

impl Settings {
    /// Default location of the settings file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs_path().map(|p| p.join("settings.json"))
    }

    /// Load settings, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no settings file, using defaults");
                return Self::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|err| {
            debug!(path = %path.display(), error = %err, "malformed settings, using defaults");
            Self::default()
        })
    }

    /// Write settings as pretty JSON, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn reindex_delay(&self) -> Duration {
        Duration::from_millis(self.reindex_delay_ms)
    }

    pub fn syntax_check_delay(&self) -> Duration {
        Duration::from_millis(self.syntax_check_delay_ms)
    }

    /// A project manager configured from these settings.
    pub fn project_manager(&self) -> ProjectManager {
        let manager = ProjectManager::new().with_shell(self.shell.unwrap_or_default());
        match &self.template_dir {
            Some(dir) => manager.with_template_root(dir),
            None => manager,
        }
    }
}
