//! Goto definition: jump from a cursor position to `fun name(`.

use smol_str::SmolStr;

use super::cursor::symbol_at;
use crate::base::LineCol;
use crate::hir::{Location, ReferenceIndex};

/// Where the symbol under the cursor is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotoTarget {
    /// The identifier the cursor was on
    pub symbol: SmolStr,
    /// File and 1-based line of its definition
    pub location: Location,
}

/// Resolve the identifier at `position` in `text` against `index`.
///
/// Only the last `fun` definition of a name is known, so there is at most
/// one target. The index is used as is; build it first.
pub fn goto_definition_at(
    index: &ReferenceIndex,
    text: &str,
    position: LineCol,
) -> Option<GotoTarget> {
    let symbol = symbol_at(text, position)?;
    let location = index.definition(&symbol)?;
    Some(GotoTarget { symbol, location })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_goto_from_call_site() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib.ad");
        fs::write(&lib, "// helpers\nfun area(w, h) {\n  return w * h\n}\n").unwrap();

        let mut index = ReferenceIndex::new();
        index.build_from_paths(vec![lib.clone()]);

        let target = goto_definition_at(&index, "print(area(2, 3))", LineCol::new(0, 7)).unwrap();
        assert_eq!(target.symbol, "area");
        assert_eq!(target.location, Location::new(lib, 2));
    }

    #[test]
    fn test_goto_without_definition() {
        let index = ReferenceIndex::new();
        assert_eq!(goto_definition_at(&index, "area()", LineCol::new(0, 1)), None);
        assert_eq!(goto_definition_at(&index, "  ", LineCol::new(0, 1)), None);
    }
}
