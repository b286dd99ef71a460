//! Project lifecycle: create, open, and the current project.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::error::{ProjectError, ProjectResult};
use super::marker::ProjectMarker;
use super::model::Project;
use super::run_command::{self, RunCommandError, ShellFlavor};
use crate::hir::{self, Diagnostic};

/// Subfolders every new project starts with.
pub const PROJECT_SUBFOLDERS: &[&str] = &["src", "include"];

/// Creates and opens projects and holds the one that is current.
#[derive(Debug, Clone, Default)]
pub struct ProjectManager {
    current: Option<Project>,
    /// Where `include/*.h` and `src/main.cpp` templates are copied from.
    template_root: Option<PathBuf>,
    shell: ShellFlavor,
}

impl ProjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.template_root = Some(root.into());
        self
    }

    pub fn with_shell(mut self, shell: ShellFlavor) -> Self {
        self.shell = shell;
        self
    }

    pub fn current(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn shell(&self) -> ShellFlavor {
        self.shell
    }

    /// Forget the current project.
    pub fn close_project(&mut self) -> Option<Project> {
        self.current.take()
    }

    /// Create `location/name` with its subfolders, templates, and marker.
    ///
    /// The new project is returned but not made current; open it to switch.
    pub fn create_project(
        &self,
        name: &str,
        location: &Path,
        interpreter_path: Option<&str>,
    ) -> ProjectResult<Project> {
        let mut components = Path::new(name).components();
        let single_dir = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if name.trim().is_empty() || !single_dir {
            return Err(ProjectError::InvalidName(name.to_string()));
        }

        let root = location.join(name);
        create_dir(&root)?;
        for sub in PROJECT_SUBFOLDERS {
            create_dir(&root.join(sub))?;
        }

        if let Some(template_root) = &self.template_root {
            seed_templates(template_root, &root)?;
        }

        let interpreter_path = interpreter_path
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        ProjectMarker::new(name, interpreter_path.clone()).write(&root)?;

        info!(name, root = %root.display(), "created project");
        Ok(Project {
            name: name.to_string(),
            root,
            interpreter_path: interpreter_path.map(PathBuf::from),
        })
    }

    /// Open the project rooted at `path` and make it current.
    ///
    /// Returns `None`, leaving the current project alone, when `path` has no
    /// marker file.
    pub fn open_project(&mut self, path: &Path) -> Option<Project> {
        let Some(marker) = ProjectMarker::read(path) else {
            debug!(path = %path.display(), "no project marker");
            return None;
        };

        let name = marker.name.unwrap_or_else(|| dir_name(path));
        let project = Project {
            name,
            root: path.to_path_buf(),
            interpreter_path: marker.interpreter_path.map(PathBuf::from),
        };

        info!(name = %project.name, root = %project.root.display(), "opened project");
        self.current = Some(project.clone());
        Some(project)
    }

    /// Command line that runs `active_file` (or `--help`) in the current project.
    pub fn build_run_command(&self, active_file: Option<&Path>) -> Result<String, RunCommandError> {
        let project = self.current.as_ref().ok_or(RunCommandError::NoProject)?;
        run_command::build_run_command(project, active_file, self.shell)
    }

    /// Heuristic bracket and string check of editor text.
    ///
    /// `path` only labels log output.
    pub fn check_syntax(&self, source_text: &str, path: Option<&Path>) -> Vec<Diagnostic> {
        let diagnostics = hir::check_syntax(source_text);
        debug!(
            path = %path.map(|p| p.display().to_string()).unwrap_or_default(),
            count = diagnostics.len(),
            "syntax check"
        );
        diagnostics
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn create_dir(path: &Path) -> ProjectResult<()> {
    fs::create_dir_all(path).map_err(|source| ProjectError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy header templates and the sample source into a fresh project.
fn seed_templates(template_root: &Path, root: &Path) -> ProjectResult<()> {
    let include_src = template_root.join("include");
    if include_src.is_dir() {
        let entries = fs::read_dir(&include_src).map_err(|source| ProjectError::CopyTemplate {
            from: include_src.clone(),
            to: root.join("include"),
            source,
        })?;
        for entry in entries.flatten() {
            let from = entry.path();
            if from.is_file() && from.extension().is_some_and(|e| e == "h") {
                let to = root.join("include").join(entry.file_name());
                copy_template(&from, &to)?;
            }
        }
    }

    let main_src = template_root.join("src").join("main.cpp");
    if main_src.is_file() {
        copy_template(&main_src, &root.join("src").join("main.cpp"))?;
    }
    Ok(())
}

fn copy_template(from: &Path, to: &Path) -> ProjectResult<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| ProjectError::CopyTemplate {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}
