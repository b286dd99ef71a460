//! IDE features: editor-facing APIs over the project and index.
//!
//! Positions coming from the editor are [`LineCol`](crate::base::LineCol)
//! values (0-indexed); answers use 1-based lines, as the index stores them.
//!
//! ## Usage
//!
//! ```ignore
//! use nukita::ide::AnalysisHost;
//! use nukita::project::ProjectManager;
//!
//! let mut host = AnalysisHost::new(ProjectManager::new());
//! host.open_project(Path::new("demo"));
//!
//! let refs = host.find_references("area");
//! let target = host.goto_definition_at(text, LineCol::new(3, 8));
//! ```

mod analysis;
mod cursor;
mod goto;
mod references;
mod semantic_tokens;

pub use analysis::AnalysisHost;
pub use cursor::symbol_at;
pub use goto::{GotoTarget, goto_definition_at};
pub use references::{ReferenceResult, find_references_at};
pub use semantic_tokens::{SemanticToken, TokenType, semantic_tokens};
