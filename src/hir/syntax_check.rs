//! Heuristic syntax check: bracket balance and string termination.
//!
//! This is a single left-to-right pass over the characters of each line,
//! carrying a bracket stack and the active quote character across lines.
//! It is not a tokenizer: comments are not recognised, so a bracket inside
//! `// ...` or `/* ... */` still counts and can produce a false positive.
//! Quotes inside comments open strings for the same reason.

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::syntax::source_lines;

/// Expected closer for an opening bracket.
fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Line-by-line bracket and string checker.
#[derive(Debug, Default)]
pub struct BracketChecker {
    /// Expected closer and the 1-based line of its opener.
    stack: Vec<(char, u32)>,
    /// Quote character of the string currently open, if any.
    in_string: Option<char>,
    last_line: u32,
    collector: DiagnosticCollector,
}

impl BracketChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Lines must arrive in order.
    pub fn check_line(&mut self, line_no: u32, line: &str) {
        self.last_line = line_no;
        let mut chars = line.chars();

        while let Some(ch) = chars.next() {
            if let Some(quote) = self.in_string {
                if ch == quote {
                    self.in_string = None;
                } else if ch == '\\' {
                    // The escaped character never closes the string. An escape
                    // at end of line escapes nothing.
                    chars.next();
                }
                continue;
            }

            match ch {
                '"' | '\'' => self.in_string = Some(ch),
                '(' | '{' | '[' => {
                    if let Some(expected) = closer_for(ch) {
                        self.stack.push((expected, line_no));
                    }
                }
                ')' | '}' | ']' => match self.stack.last() {
                    Some(&(expected, _)) if expected == ch => {
                        self.stack.pop();
                    }
                    _ => self.collector.unmatched_closing(line_no, ch),
                },
                _ => {}
            }
        }
    }

    /// Report what is still open and return every diagnostic in order.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        if self.in_string.is_some() {
            self.collector.unterminated_string(self.last_line);
        }
        for (expected, line) in std::mem::take(&mut self.stack) {
            self.collector.missing_closing(line, expected);
        }
        self.collector.take()
    }
}

/// Check a whole editor buffer.
///
/// Diagnostics come out in three groups: unmatched closers in scan order,
/// then an unterminated string (at the last line), then one missing closer
/// per still-open bracket in the order the brackets were opened.
pub fn check_syntax(source: &str) -> Vec<Diagnostic> {
    let mut checker = BracketChecker::new();
    for (line_no, line) in source_lines(source) {
        checker.check_line(line_no, line);
    }
    checker.finish()
}
