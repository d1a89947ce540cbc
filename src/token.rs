use std::fmt;

/// Source location of a token's first char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset into the source text.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Location of the first char of a source text.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single token with its kind, source text, and location.
///
/// `value` is the exact source slice that produced the token; quotes and
/// escapes are kept verbatim. Error tokens carry the error message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    pub kind: K,
    pub value: String,
    pub span: Span,
}

impl<K> Token<K> {
    #[must_use]
    pub const fn new(kind: K, value: String, span: Span) -> Self {
        Self { kind, value, span }
    }
}
