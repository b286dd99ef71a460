//! Construction of the shell command that runs the AdaScript interpreter.
//!
//! The command is only built here. Executing it is the terminal's job, with
//! the project root as working directory.

use std::path::{Component, Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::Project;

/// Interpreter locations tried, in order, when none is configured.
pub const INTERPRETER_CANDIDATES: &[&str] = &[
    "dist/windows/adascript.exe",
    "build/adascript.exe",
    "build-linux/adascript",
];

/// Flag passed to the interpreter when there is no file to run.
pub const HELP_FLAG: &str = "--help";

/// The shell that will receive the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ShellFlavor {
    /// Windows `cmd`: `.\dir\tool.exe`
    Cmd,
    /// POSIX shells: `./dir/tool`
    Posix,
}

impl ShellFlavor {
    /// The flavor of the platform we are running on.
    pub fn native() -> Self {
        if cfg!(windows) {
            ShellFlavor::Cmd
        } else {
            ShellFlavor::Posix
        }
    }

    fn separator(self) -> &'static str {
        match self {
            ShellFlavor::Cmd => "\\",
            ShellFlavor::Posix => "/",
        }
    }

    /// Render a root-relative path with this shell's separators.
    fn render_relative(self, rel: &Path) -> String {
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

impl Default for ShellFlavor {
    fn default() -> Self {
        Self::native()
    }
}

/// Why no run command could be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunCommandError {
    #[error("no project is open")]
    NoProject,

    #[error("configured AdaScript interpreter not found: {0}")]
    ConfiguredInterpreterMissing(PathBuf),

    #[error("no AdaScript interpreter found under {0}")]
    InterpreterNotFound(PathBuf),
}

/// Find the interpreter for `project`.
///
/// A configured path wins outright, even when it does not exist; the
/// built-in candidates are only tried when nothing is configured.
pub fn resolve_interpreter(project: &Project) -> Result<PathBuf, RunCommandError> {
    if let Some(configured) = &project.interpreter_path {
        let exe = project.resolve(configured);
        return if exe.exists() {
            Ok(exe)
        } else {
            Err(RunCommandError::ConfiguredInterpreterMissing(exe))
        };
    }

    INTERPRETER_CANDIDATES
        .iter()
        .map(|candidate| project.root.join(candidate))
        .find(|path| path.exists())
        .ok_or_else(|| RunCommandError::InterpreterNotFound(project.root.clone()))
}

/// `path` relative to `root`, if it lies under it.
///
/// Tries a purely lexical comparison first, then one on canonical paths so
/// that symlinked or `..`-laden spellings of the same location still count.
fn relative_to_root(path: &Path, root: &Path) -> Option<PathBuf> {
    let inside = |rel: &Path| !rel.components().any(|c| c == Component::ParentDir);

    if let Ok(rel) = path.strip_prefix(root) {
        if inside(rel) {
            return Some(rel.to_path_buf());
        }
    }

    let path = path.canonicalize().ok()?;
    let root = root.canonicalize().ok()?;
    path.strip_prefix(&root).ok().map(Path::to_path_buf)
}

fn quote_if_spaced(arg: String) -> String {
    if arg.chars().any(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg
    }
}

/// Build the command line that runs `active_file`, or asks for help.
///
/// An interpreter under the project root is invoked through the shell's
/// current-directory prefix; one elsewhere by its quoted absolute path.
pub fn build_run_command(
    project: &Project,
    active_file: Option<&Path>,
    shell: ShellFlavor,
) -> Result<String, RunCommandError> {
    let exe = resolve_interpreter(project)?;

    let exe_str = match relative_to_root(&exe, &project.root) {
        Some(rel) => format!(".{}{}", shell.separator(), shell.render_relative(&rel)),
        None => format!("\"{}\"", exe.display()),
    };

    let Some(file) = active_file else {
        return Ok(format!("{exe_str} {HELP_FLAG}"));
    };

    let file_str = match relative_to_root(file, &project.root) {
        Some(rel) => shell.render_relative(&rel),
        None => file.display().to_string(),
    };
    Ok(format!("{exe_str} {}", quote_if_spaced(file_str)))
}
