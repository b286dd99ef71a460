//! Identifier and definition patterns shared by the index and the editor.

use std::sync::LazyLock;

use regex::Regex;

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("identifier pattern is valid"));

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*fun\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("definition pattern is valid")
});

/// True for characters that may continue an identifier.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Every identifier on a line, left to right, with its byte offset.
///
/// Matches are leftmost and non-overlapping, so a run such as `9abc` yields
/// `abc`: identifiers never start with a digit, but the digits do not hide
/// what follows them.
pub fn identifiers(line: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    IDENT.find_iter(line).map(|m| (m.start(), m.as_str()))
}

/// The name introduced by a `fun name(` line, if the line is one.
pub fn definition_name(line: &str) -> Option<&str> {
    DEFINITION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
