//! The symbol under the editor cursor.

use smol_str::SmolStr;

use crate::base::{LineCol, LineIndex};
use crate::syntax::identifiers;

/// The identifier the cursor is on or just after.
///
/// The cursor sits between characters, so `foo|(` and `|foo` both select
/// `foo`. Returns `None` on whitespace and punctuation, or when the
/// position is outside the text.
pub fn symbol_at(text: &str, position: LineCol) -> Option<SmolStr> {
    let index = LineIndex::new(text);
    let range = index.line_range(position.line)?;
    let line = &text[range];

    let col = position.col as usize;
    if col > line.len() || !line.is_char_boundary(col) {
        return None;
    }

    identifiers(line)
        .find(|&(start, ident)| start <= col && col <= start + ident.len())
        .map(|(_, ident)| SmolStr::new(ident))
}
