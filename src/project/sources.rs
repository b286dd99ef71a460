//! Source file discovery under a project root.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::syntax::SOURCE_EXTENSION;

/// True if `path` names an AdaScript source by its extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Collect every source file under `root`, recursively.
///
/// Entries are visited depth first with each directory's entries sorted by
/// file name, so the order is stable across platforms. Entries that cannot
/// be read are skipped.
///
/// Symlinked directories are not descended into. A symlink named like a
/// source file is listed unless it points at a directory, so a dangling
/// link is kept and later skipped when it fails to read.
pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let file_like = entry.file_type().is_file()
            || (entry.path_is_symlink() && !entry.path().is_dir());
        if file_like && is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}
