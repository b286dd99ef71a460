//! Lexical building blocks for AdaScript text.
//!
//! Nothing here builds a tree. The index and the syntax checker work line by
//! line over raw text, and the highlighter classifies a flat token stream.

pub mod lexer;
mod lines;
mod words;

pub use lexer::{BUILTINS, KEYWORDS, Token, TokenKind, tokenize};
pub use lines::{decode_lossy, source_lines};
pub use words::{definition_name, identifiers, is_ident_char};

/// File extension of AdaScript sources, without the dot.
pub const SOURCE_EXTENSION: &str = "ad";
