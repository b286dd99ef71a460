//! Lexical analysis of project sources.
//!
//! - [`ReferenceIndex`] / [`SharedReferenceIndex`] - definition and reference tables
//! - [`check_syntax`] - bracket and string heuristics over editor text
//! - [`Diagnostic`] - what the checker reports

mod diagnostics;
mod index;
mod shared;
mod source;
mod syntax_check;

pub use diagnostics::{Diagnostic, DiagnosticCollector, codes};
pub use index::{FilePosition, IndexTables, Location, ReferenceIndex};
pub use shared::SharedReferenceIndex;
pub use source::FileSet;
pub use syntax_check::{BracketChecker, check_syntax};
