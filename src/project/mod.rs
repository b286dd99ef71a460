//! Project management: markers, source discovery, lifecycle, run commands.

mod error;
mod manager;
mod marker;
mod model;
mod run_command;
mod sources;

pub use error::{ProjectError, ProjectResult};
pub use manager::{PROJECT_SUBFOLDERS, ProjectManager};
pub use marker::{MARKER_FILE_NAME, ProjectMarker};
pub use model::Project;
pub use run_command::{
    HELP_FLAG, INTERPRETER_CANDIDATES, RunCommandError, ShellFlavor, build_run_command,
    resolve_interpreter,
};
pub use sources::{collect_source_files, is_source_file};
