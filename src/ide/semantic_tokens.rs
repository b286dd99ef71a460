//! Semantic tokens: token classes for syntax highlighting.
//!
//! Colors and fonts belong to the editor; this module only says which
//! spans are keywords, builtins, numbers, strings, comments, function
//! names, or operators.

use crate::base::{LineIndex, TextRange};
use crate::syntax::{BUILTINS, KEYWORDS, Token, TokenKind, tokenize};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Keyword,
    Builtin,
    Number,
    String,
    Comment,
    Function,
    Operator,
}

/// A semantic token for syntax highlighting.
///
/// Tokens never span lines; a multi-line comment becomes one token per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed, UTF-8 bytes)
    pub col: u32,
    /// Length of the token in UTF-8 bytes
    pub length: u32,
    pub token_type: TokenType,
}

fn classify(text: &str, token: &Token) -> Option<TokenType> {
    let token_type = match token.kind {
        TokenKind::Ident => {
            let name = &text[token.range];
            // A call or definition site reads as a function even if the
            // name is reserved.
            if text[usize::from(token.range.end())..].starts_with('(') {
                TokenType::Function
            } else if KEYWORDS.contains(&name) {
                TokenType::Keyword
            } else if BUILTINS.contains(&name) {
                TokenType::Builtin
            } else {
                return None;
            }
        }
        TokenKind::Number => TokenType::Number,
        TokenKind::String => TokenType::String,
        TokenKind::LineComment | TokenKind::BlockComment => TokenType::Comment,
        TokenKind::Operator => TokenType::Operator,
        TokenKind::Punct => return None,
    };
    Some(token_type)
}

/// Split `range` at line breaks, dropping empty pieces.
fn per_line(
    lines: &LineIndex,
    range: TextRange,
    token_type: TokenType,
    out: &mut Vec<SemanticToken>,
) {
    let start = lines.line_col(range.start());
    let end = lines.line_col(range.end());

    for line in start.line..=end.line {
        let Some(line_range) = lines.line_range(line) else {
            continue;
        };
        let piece_start = range.start().max(line_range.start());
        let piece_end = range.end().min(line_range.end());
        if piece_end <= piece_start {
            continue;
        }
        out.push(SemanticToken {
            line,
            col: (piece_start - line_range.start()).into(),
            length: (piece_end - piece_start).into(),
            token_type,
        });
    }
}

/// Get semantic tokens for editor text, sorted by position.
pub fn semantic_tokens(text: &str) -> Vec<SemanticToken> {
    let lines = LineIndex::new(text);
    let mut tokens = Vec::new();

    for token in tokenize(text) {
        if let Some(token_type) = classify(text, &token) {
            per_line(&lines, token.range, token_type, &mut tokens);
        }
    }

    tokens.sort_by_key(|t| (t.line, t.col));
    tokens
}
