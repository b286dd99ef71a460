//! AnalysisHost: the IDE state behind the editor window.
//!
//! Owns the project manager, the reference index for the current project,
//! and the recent-projects list, and keeps them consistent: opening a
//! project records it as recent and rebuilds its index.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::goto::{GotoTarget, goto_definition_at};
use super::references::{ReferenceResult, find_references_at};
use super::semantic_tokens::{SemanticToken, semantic_tokens};
use crate::base::LineCol;
use crate::config::{RecentProjects, Settings};
use crate::hir::{Diagnostic, Location, ReferenceIndex};
use crate::project::{Project, ProjectManager, ProjectResult, RunCommandError};

/// Owns the IDE state for one window.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    projects: ProjectManager,
    index: ReferenceIndex,
    recent: RecentProjects,
}

impl AnalysisHost {
    pub fn new(projects: ProjectManager) -> Self {
        Self {
            projects,
            index: ReferenceIndex::new(),
            recent: RecentProjects::new(),
        }
    }

    /// A host with the manager and recent list described by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            projects: settings.project_manager(),
            index: ReferenceIndex::new(),
            recent: settings.recent_projects.clone(),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.projects.current()
    }

    pub fn projects(&self) -> &ProjectManager {
        &self.projects
    }

    pub fn recent_projects(&self) -> &RecentProjects {
        &self.recent
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    /// Copy the recent list back into `settings` before saving them.
    pub fn save_recent_into(&self, settings: &mut Settings) {
        settings.recent_projects = self.recent.clone();
    }

    /// Open the project at `path`, remember it, and index it.
    ///
    /// A directory without a marker is dropped from the recent list and the
    /// previous project stays open.
    pub fn open_project(&mut self, path: &Path) -> Option<Project> {
        let Some(project) = self.projects.open_project(path) else {
            if self.recent.forget(path) {
                debug!(path = %path.display(), "dropped stale recent project");
            }
            return None;
        };
        self.recent.remember(&project.root);
        self.index.build_index(&project);
        Some(project)
    }

    /// Create `location/name` and open it.
    pub fn create_project(
        &mut self,
        name: &str,
        location: &Path,
        interpreter_path: Option<&str>,
    ) -> ProjectResult<Project> {
        let created = self
            .projects
            .create_project(name, location, interpreter_path)?;
        Ok(self.open_project(&created.root).unwrap_or(created))
    }

    /// Rebuild the index of the current project. Call after saving a file.
    pub fn reindex(&mut self) {
        match self.projects.current() {
            Some(project) => self.index.build_index(project),
            None => debug!("reindex without an open project"),
        }
    }

    pub fn find_references(&mut self, symbol: &str) -> Vec<String> {
        match self.projects.current() {
            Some(project) => self.index.find_references(project, symbol),
            None => Vec::new(),
        }
    }

    pub fn goto_definition(&mut self, symbol: &str) -> Option<Location> {
        let project = self.projects.current()?;
        self.index.goto_definition(project, symbol)
    }

    pub fn goto_definition_at(&self, text: &str, position: LineCol) -> Option<GotoTarget> {
        self.projects.current()?;
        goto_definition_at(&self.index, text, position)
    }

    pub fn find_references_at(&self, text: &str, position: LineCol) -> Option<ReferenceResult> {
        self.projects.current()?;
        find_references_at(&self.index, text, position)
    }

    /// Check editor text; `path` is the file being edited, if it has one.
    pub fn check_syntax(&self, text: &str, path: Option<&Path>) -> Vec<Diagnostic> {
        self.projects.check_syntax(text, path)
    }

    /// Command line for running `active_file` in the current project.
    pub fn run_command(&self, active_file: Option<&Path>) -> Result<String, RunCommandError> {
        self.projects.build_run_command(active_file)
    }

    pub fn semantic_tokens(&self, text: &str) -> Vec<SemanticToken> {
        semantic_tokens(text)
    }

    /// Source files of the current project, as the explorer would list them.
    pub fn source_files(&self) -> Vec<PathBuf> {
        self.projects
            .current()
            .map(Project::source_files)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_queries_without_project() {
        let mut host = AnalysisHost::default();

        assert!(host.find_references("f").is_empty());
        assert_eq!(host.goto_definition("f"), None);
        assert_eq!(host.find_references_at("f", LineCol::new(0, 0)), None);
        assert_eq!(host.run_command(None), Err(RunCommandError::NoProject));
        assert!(host.source_files().is_empty());
        host.reindex();
        assert!(!host.index().is_built());
    }

    #[test]
    fn test_open_remembers_and_indexes() {
        let dir = tempfile::tempdir().unwrap();
        let mut host = AnalysisHost::default();
        let project = host.create_project("demo", dir.path(), None).unwrap();
        fs::write(project.root.join("src/main.ad"), "fun main() {\n}\nmain()\n").unwrap();

        host.reindex();
        assert_eq!(host.project(), Some(&project));
        assert_eq!(host.recent_projects().most_recent(), Some(project.root.as_path()));
        assert_eq!(
            host.goto_definition("main"),
            Some(Location::new(project.root.join("src/main.ad"), 1))
        );
        assert_eq!(host.find_references("main").len(), 2);
    }

    #[test]
    fn test_failed_open_forgets_recent_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.recent_projects.remember(dir.path());

        let mut host = AnalysisHost::from_settings(&settings);
        assert_eq!(host.open_project(dir.path()), None);
        assert!(host.recent_projects().is_empty());

        host.save_recent_into(&mut settings);
        assert!(settings.recent_projects.is_empty());
    }
}
