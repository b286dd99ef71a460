//! Positions in editor text.

use std::fmt;

pub use text_size::TextRange;
pub use text_size::TextSize;

/// A cursor position in editor text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Create from the 1-indexed line and column an editor status bar shows.
    #[inline]
    pub const fn from_one_indexed(line: u32, col: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }

    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// Index for converting between byte offsets and line/column positions.
///
/// Lines are split on `\n`; a `\r` before the newline belongs to no line
/// as far as [`LineIndex::line_range`] is concerned.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
    /// Total length of the indexed text
    len: TextSize,
    /// Whether each line ends in `\r\n`
    crlf: Vec<bool>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut crlf = Vec::new();
        let bytes = text.as_bytes();

        for (offset, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                crlf.push(offset > 0 && bytes[offset - 1] == b'\r');
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        crlf.push(false);

        Self {
            line_starts,
            len: TextSize::of(text),
            crlf,
        }
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let col = offset - line_start;

        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a line/column position to a byte offset.
    ///
    /// Returns `None` when the line does not exist or the column lies past
    /// the end of the line.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let range = self.line_range(line_col.line)?;
        let offset = range.start() + TextSize::from(line_col.col);
        (offset <= range.end()).then_some(offset)
    }

    /// Byte range of a line's content, without its line terminator.
    pub fn line_range(&self, line: u32) -> Option<TextRange> {
        let line = line as usize;
        let start = *self.line_starts.get(line)?;
        let mut end = match self.line_starts.get(line + 1) {
            Some(&next) => next - TextSize::from(1),
            None => self.len,
        };
        if self.crlf.get(line).copied().unwrap_or(false) {
            end -= TextSize::from(1);
        }
        Some(TextRange::new(start, end))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Always false: even empty text has one (empty) line.
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol::new(0, 0).to_string(), "1:1");
        assert_eq!(LineCol::new(5, 10).to_string(), "6:11");
    }

    #[test]
    fn test_line_col_from_one_indexed() {
        let pos = LineCol::from_one_indexed(1, 1);
        assert_eq!(pos, LineCol::new(0, 0));
        // Zero is clamped rather than wrapping.
        assert_eq!(LineCol::from_one_indexed(0, 0), LineCol::new(0, 0));
    }

    #[test]
    fn test_line_index_multi_line() {
        let index = LineIndex::new("fun a()\nb\n!");

        assert_eq!(index.len(), 3);
        assert_eq!(index.line_col(TextSize::from(0)), LineCol::new(0, 0));
        assert_eq!(index.line_col(TextSize::from(4)), LineCol::new(0, 4));
        assert_eq!(index.line_col(TextSize::from(8)), LineCol::new(1, 0));
        assert_eq!(index.line_col(TextSize::from(10)), LineCol::new(2, 0));
    }

    #[test]
    fn test_line_index_offset_bounds() {
        let index = LineIndex::new("hello\nworld");

        assert_eq!(index.offset(LineCol::new(1, 3)), Some(TextSize::from(9)));
        assert_eq!(index.offset(LineCol::new(0, 5)), Some(TextSize::from(5)));
        assert_eq!(index.offset(LineCol::new(0, 6)), None);
        assert_eq!(index.offset(LineCol::new(2, 0)), None);
    }

    #[test]
    fn test_line_range_strips_crlf() {
        let text = "ab\r\ncd\n";
        let index = LineIndex::new(text);

        let first = index.line_range(0).unwrap();
        assert_eq!(&text[first], "ab");
        let second = index.line_range(1).unwrap();
        assert_eq!(&text[second], "cd");
        let last = index.line_range(2).unwrap();
        assert!(last.is_empty());
    }
}
