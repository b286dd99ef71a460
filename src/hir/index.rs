//! Reference index: where is a symbol defined, where is it used.
//!
//! The index is purely lexical. Every identifier on every line of every
//! source file is a reference, and every line shaped like `fun name(` is a
//! definition of `name`. There is no scoping: two functions with the same
//! name in different files are the same symbol, and the one seen last in
//! traversal order is "the" definition.
//!
//! ## Key Data Structures
//!
//! - [`IndexTables`] - The definition and reference tables of one build
//! - [`ReferenceIndex`] - Owns the current tables and builds them lazily
//! - [`Location`] - A `(path, line)` answer, displayed as `path:line`

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, info};

use super::source::FileSet;
use crate::base::FileId;
use crate::project::Project;
use crate::syntax::{decode_lossy, definition_name, identifiers, source_lines};

// ============================================================================
// LOCATIONS
// ============================================================================

/// A line in an indexed file, relative to the build's [`FileSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub file: FileId,
    /// 1-based line number.
    pub line: u32,
}

/// A resolved answer to an index query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: u32,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

// ============================================================================
// FILE SCANNING
// ============================================================================

/// What one file contributes to the tables, in line order.
#[derive(Debug, Default)]
struct FileScan {
    definitions: Vec<(SmolStr, u32)>,
    references: Vec<(SmolStr, u32)>,
}

fn scan_text(text: &str) -> FileScan {
    let mut scan = FileScan::default();
    for (line_no, line) in source_lines(text) {
        if let Some(name) = definition_name(line) {
            scan.definitions.push((SmolStr::new(name), line_no));
        }
        for (_, ident) in identifiers(line) {
            scan.references.push((SmolStr::new(ident), line_no));
        }
    }
    scan
}

/// Read and scan one file. Unreadable files contribute nothing.
fn scan_file(path: &Path) -> Option<FileScan> {
    match fs::read(path) {
        Ok(bytes) => Some(scan_text(&decode_lossy(&bytes))),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable source file");
            None
        }
    }
}

// ============================================================================
// INDEX TABLES
// ============================================================================

/// The definition and reference tables produced by one build.
///
/// Tables are never updated in place; a rebuild produces a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexTables {
    /// Files that were read successfully, in traversal order.
    files: FileSet,
    /// Symbol → last `fun symbol(` line seen.
    definitions: FxHashMap<SmolStr, FilePosition>,
    /// Symbol → every occurrence, in file, line, column order.
    references: IndexMap<SmolStr, Vec<FilePosition>>,
}

impl IndexTables {
    /// Scan the given files, in the given order.
    ///
    /// Files are read in parallel, but results are merged strictly in
    /// input order, so the tables match a sequential scan exactly.
    pub fn scan<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().collect();
        let scans: Vec<Option<FileScan>> = paths.par_iter().map(|p| scan_file(p)).collect();

        let mut tables = Self::default();
        for (path, scan) in paths.into_iter().zip(scans) {
            let Some(scan) = scan else {
                continue;
            };
            let file = tables.files.insert(path);
            tables.merge(file, scan);
        }
        tables
    }

    fn merge(&mut self, file: FileId, scan: FileScan) {
        for (name, line) in scan.definitions {
            // Last write wins: a later definition silently replaces an earlier one.
            self.definitions.insert(name, FilePosition { file, line });
        }
        for (name, line) in scan.references {
            self.references
                .entry(name)
                .or_default()
                .push(FilePosition { file, line });
        }
    }

    fn resolve(&self, pos: FilePosition) -> Option<Location> {
        self.files
            .path(pos.file)
            .map(|path| Location::new(path, pos.line))
    }

    /// Every occurrence of `symbol`, empty when unknown.
    pub fn references(&self, symbol: &str) -> Vec<Location> {
        self.references
            .get(symbol)
            .map(|positions| positions.iter().filter_map(|&p| self.resolve(p)).collect())
            .unwrap_or_default()
    }

    /// The last `fun symbol(` line seen, if any.
    pub fn definition(&self, symbol: &str) -> Option<Location> {
        self.definitions
            .get(symbol)
            .and_then(|&p| self.resolve(p))
    }

    /// Names with at least one definition, in no particular order.
    pub fn defined_symbols(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(SmolStr::as_str)
    }

    /// Names with at least one occurrence, in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(SmolStr::as_str)
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn symbol_count(&self) -> usize {
        self.references.len()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

// ============================================================================
// REFERENCE INDEX
// ============================================================================

/// Project-wide index of definitions and references.
///
/// The index reflects the files on disk as of the last build. Nothing is
/// watched: after an edit the caller must rebuild. Queries through
/// [`find_references`](Self::find_references) and
/// [`goto_definition`](Self::goto_definition) build once on first use.
#[derive(Clone, Debug, Default)]
pub struct ReferenceIndex {
    tables: IndexTables,
    built: bool,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from every source file of `project`, replacing prior state.
    pub fn build_index(&mut self, project: &Project) {
        self.build_from_paths(project.source_files());
        info!(
            project = %project.name,
            files = self.tables.file_count(),
            symbols = self.tables.symbol_count(),
            definitions = self.tables.definition_count(),
            "reference index rebuilt"
        );
    }

    /// Rebuild from an explicit list of files, scanned in the given order.
    pub fn build_from_paths<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.tables = IndexTables::scan(paths);
        self.built = true;
    }

    fn ensure_built(&mut self, project: &Project) {
        if !self.built {
            self.build_index(project);
        }
    }

    /// Occurrences of `symbol` formatted as `path:line`, in traversal order.
    pub fn find_references(&mut self, project: &Project, symbol: &str) -> Vec<String> {
        self.ensure_built(project);
        self.tables
            .references(symbol)
            .iter()
            .map(Location::to_string)
            .collect()
    }

    /// Where `symbol` was last defined with `fun symbol(`.
    pub fn goto_definition(&mut self, project: &Project, symbol: &str) -> Option<Location> {
        self.ensure_built(project);
        self.tables.definition(symbol)
    }

    /// Occurrences of `symbol` in the current tables, without building.
    pub fn references(&self, symbol: &str) -> Vec<Location> {
        self.tables.references(symbol)
    }

    /// Definition of `symbol` in the current tables, without building.
    pub fn definition(&self, symbol: &str) -> Option<Location> {
        self.tables.definition(symbol)
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn tables(&self) -> &IndexTables {
        &self.tables
    }
}
