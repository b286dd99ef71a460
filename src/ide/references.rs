//! Find references: every line that mentions the symbol under the cursor.

use smol_str::SmolStr;

use super::cursor::symbol_at;
use crate::base::LineCol;
use crate::hir::{Location, ReferenceIndex};

/// Result of a find-references request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceResult {
    pub symbol: SmolStr,
    /// Occurrences in traversal order, one per token, the definition included
    pub references: Vec<Location>,
}

impl ReferenceResult {
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// Find references to the identifier at `position` in `text`.
///
/// Returns `None` when the cursor is not on an identifier. An identifier
/// the index has never seen gives an empty result.
pub fn find_references_at(
    index: &ReferenceIndex,
    text: &str,
    position: LineCol,
) -> Option<ReferenceResult> {
    let symbol = symbol_at(text, position)?;
    let references = index.references(&symbol);
    Some(ReferenceResult { symbol, references })
}
