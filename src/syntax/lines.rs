//! Line splitting and lenient decoding.

use std::borrow::Cow;

/// Iterate over the lines of `text` as `(line_number, content)`, 1-based.
///
/// `\n`, `\r\n`, a lone `\r` and the other Unicode line boundaries all end
/// a line. A terminator at the very end of the
/// text does not start another (empty) line, so `"a\n"` has one line and
/// `""` has none.
pub fn source_lines(text: &str) -> SourceLines<'_> {
    SourceLines { rest: text, line: 0 }
}

/// Characters that end a line. Besides `\n` and `\r` these are vertical
/// tab, form feed, the file/group/record separators, NEL, and the Unicode
/// line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n'
            | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Iterator returned by [`source_lines`].
#[derive(Clone, Debug)]
pub struct SourceLines<'a> {
    rest: &'a str,
    line: u32,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.line += 1;

        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((end, c)) => {
                let content = &self.rest[..end];
                let mut next = end + c.len_utf8();
                if c == '\r' && self.rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &self.rest[next..];
                Some((self.line, content))
            }
            None => {
                let content = self.rest;
                self.rest = "";
                Some((self.line, content))
            }
        }
    }
}

/// Decode bytes as UTF-8, dropping any invalid sequences.
///
/// Source files are indexed even when they contain stray bytes; the bytes
/// themselves simply vanish from the text.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}
