//! # nukita-base
//!
//! Core library for the NuKiTa AdaScript IDE: project lifecycle, a lexical
//! reference index, heuristic syntax checks, and editor helpers.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → Editor features (goto-def, find-references, highlighting)
//!   ↓
//! config   → User settings and recent projects
//!   ↓
//! project  → Markers, source discovery, create/open, run commands
//!   ↓
//! hir      → Reference index and bracket/string checker
//!   ↓
//! syntax   → Identifier patterns, line splitting, highlighting lexer
//!   ↓
//! base     → Primitives (FileId, LineIndex, TextRange)
//! ```
//!
//! Nothing here is a parser. The index matches identifier-shaped tokens and
//! `fun name(` lines; it does not resolve scopes.

/// Foundation types: FileId, line/column mapping
pub mod base;

/// User settings persisted between sessions
pub mod config;

/// Reference tables and syntax diagnostics
pub mod hir;

/// Editor features built on `hir` and `project`
pub mod ide;

/// Projects on disk
pub mod project;

/// Lexical building blocks shared by `hir` and `ide`
pub mod syntax;

pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
pub use hir::{Diagnostic, Location, ReferenceIndex, SharedReferenceIndex, check_syntax};
pub use ide::AnalysisHost;
pub use project::{Project, ProjectError, ProjectManager, RunCommandError, ShellFlavor};
