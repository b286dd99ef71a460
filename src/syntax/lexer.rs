//! Flat tokenizer used for syntax highlighting.
//!
//! The lexer understands comments and string literals, which the index and
//! the bracket checker deliberately do not. Characters it does not know are
//! dropped from the stream instead of failing the whole text.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Reserved words of AdaScript.
pub const KEYWORDS: &[&str] = &[
    "fun", "var", "if", "else", "while", "for", "return", "true", "false", "null", "and", "or",
    "not", "in", "import", "from", "as", "class", "try", "catch", "throw", "break", "continue",
    "switch", "case", "default", "const", "let", "async", "await", "yield", "with", "using",
    "match",
];

/// Functions and type names provided by the interpreter.
pub const BUILTINS: &[&str] = &[
    "print", "println", "input", "len", "type", "str", "int", "float", "bool", "list", "dict",
    "set", "tuple", "range", "enumerate", "map", "filter", "reduce", "zip", "sort", "reverse",
    "max", "min", "sum", "abs", "round", "pow", "sqrt", "sin", "cos", "tan", "log", "exp",
    "random", "time", "sleep",
];

/// A token with its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

/// Token kinds produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `// ...` up to the end of the line.
    #[regex(r"//[^\n]*")]
    LineComment,
    /// `/* ... */`. Without a closing `*/` it runs to the end of the text.
    #[regex(r"/\*([^*]|\*+[^*/])*\**(\*/)?")]
    BlockComment,
    /// Double- or single-quoted literal on one line, with backslash escapes.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Identifier, keyword, or builtin name.
    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"==|!=|<=|>=|[=<>+*/%^-]")]
    Operator,
    #[regex(r"[(){}\[\],.;:]")]
    Punct,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// Tokenize a whole text.
pub fn tokenize(text: &str) -> Vec<Token> {
    TokenKind::lexer(text)
        .spanned()
        .filter_map(|(kind, span)| {
            let kind = kind.ok()?;
            let range = TextRange::new(
                TextSize::from(span.start as u32),
                TextSize::from(span.end as u32),
            );
            Some(Token { kind, range })
        })
        .collect()
}
