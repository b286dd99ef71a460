//! Diagnostics: advisory problems found in editor text.
//!
//! Diagnostics are produced fresh on every check and never persisted. The
//! UI decides how to render them; this module only fixes their content.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// An error message attached to a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: u32,
    /// Stable code from [`codes`].
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn error(line: u32, message: impl Into<Arc<str>>) -> Self {
        Self {
            line,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The `(line, message)` pair handed to the editor.
    pub fn as_pair(&self) -> (u32, &str) {
        (self.line, &self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Codes for the lexical checks.
pub mod codes {
    /// A closing bracket that does not match the innermost open one.
    pub const UNMATCHED_CLOSING: &str = "E0001";
    /// An opening bracket that is never closed.
    pub const MISSING_CLOSING: &str = "E0002";
    /// A string literal still open at end of text.
    pub const UNTERMINATED_STRING: &str = "E0003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics in the order they are found.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn unmatched_closing(&mut self, line: u32, found: char) {
        self.add(
            Diagnostic::error(line, format!("Unmatched closing '{found}'"))
                .with_code(codes::UNMATCHED_CLOSING),
        );
    }

    pub fn missing_closing(&mut self, line: u32, expected: char) {
        self.add(
            Diagnostic::error(line, format!("Missing closing '{expected}'"))
                .with_code(codes::MISSING_CLOSING),
        );
    }

    pub fn unterminated_string(&mut self, line: u32) {
        self.add(
            Diagnostic::error(line, "Unterminated string literal")
                .with_code(codes::UNTERMINATED_STRING),
        );
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(3, "Missing closing ')'");
        assert_eq!(diag.to_string(), "Line 3: Missing closing ')'");
        assert_eq!(diag.as_pair(), (3, "Missing closing ')'"));
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error(1, "x").with_code(codes::UNTERMINATED_STRING);
        assert_eq!(diag.code.as_deref(), Some("E0003"));
    }

    #[test]
    fn test_collector_keeps_order_and_codes() {
        let mut collector = DiagnosticCollector::new();
        collector.unmatched_closing(1, ')');
        collector.missing_closing(2, ']');
        collector.unterminated_string(3);

        let taken = collector.take();
        let codes: Vec<_> = taken.iter().map(|d| d.code.as_deref()).collect();
        assert_eq!(codes, vec![Some("E0001"), Some("E0002"), Some("E0003")]);
        assert_eq!(&*taken[0].message, "Unmatched closing ')'");
        assert!(collector.take().is_empty());
    }
}
