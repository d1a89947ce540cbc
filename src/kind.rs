use std::fmt;

use crate::lexer::LexErrorKind;
use crate::scanner::TokenType;

/// Token kinds produced by the CE lexer.
///
/// Variants are declared in a fixed order; [`TokenKind::ALL`] and the
/// name table follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TokenKind {
    /// Placeholder kind, never emitted.
    #[default]
    Empty,
    /// Lexical error; the token value is the message.
    Error,
    /// Double-quoted string, quotes and escapes kept verbatim.
    String,
    /// Identifier, dotted path (`a.b.c`), or annotation (`@name`).
    Identifier,
    Integer,
    /// Decimal number: `1.5`, `1.`, or `.5`.
    Decimal,
    /// Punctuation without a dedicated kind (`@`, `#`, `$`, `?`, ...).
    Punctuation,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    SquareLParen,
    /// `]`
    SquareRParen,
    /// `{`
    CurlyLParen,
    /// `}`
    CurlyRParen,
    /// `'`
    Quote,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `!`
    Not,
    /// `=`
    Equal,
    /// `==`
    EqualTo,
    /// `!=` or `<>`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `</`
    TagClose,
    /// `/>`
    SelfClose,
    /// `&`
    BitwiseAnd,
    /// `&&`
    LogicalAnd,
    /// `|`
    BitwiseOr,
    /// `||`
    LogicalOr,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 38] = [
        Self::Empty,
        Self::Error,
        Self::String,
        Self::Identifier,
        Self::Integer,
        Self::Decimal,
        Self::Punctuation,
        Self::LParen,
        Self::RParen,
        Self::SquareLParen,
        Self::SquareRParen,
        Self::CurlyLParen,
        Self::CurlyRParen,
        Self::Quote,
        Self::Comma,
        Self::Semicolon,
        Self::Colon,
        Self::Dot,
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
        Self::Not,
        Self::Equal,
        Self::EqualTo,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::TagClose,
        Self::SelfClose,
        Self::BitwiseAnd,
        Self::LogicalAnd,
        Self::BitwiseOr,
        Self::LogicalOr,
    ];

    /// Human-readable name, unique per kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Error => "Error",
            Self::String => "String",
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Punctuation => "Punctuation",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::SquareLParen => "SquareLParen",
            Self::SquareRParen => "SquareRParen",
            Self::CurlyLParen => "CurlyLParen",
            Self::CurlyRParen => "CurlyRParen",
            Self::Quote => "Quote",
            Self::Comma => "Comma",
            Self::Semicolon => "Semicolon",
            Self::Colon => "Colon",
            Self::Dot => "Dot",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Modulo => "Modulo",
            Self::Power => "Power",
            Self::Not => "Not",
            Self::Equal => "Equal",
            Self::EqualTo => "EqualTo",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::TagClose => "TagClose",
            Self::SelfClose => "SelfClose",
            Self::BitwiseAnd => "BitwiseAnd",
            Self::LogicalAnd => "LogicalAnd",
            Self::BitwiseOr => "BitwiseOr",
            Self::LogicalOr => "LogicalOr",
        }
    }

    /// Inverse of [`TokenKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Kind of a punctuation char that is always a token on its own.
    ///
    /// Chars that start multi-char operators are resolved by the lexer;
    /// anything not listed here is [`TokenKind::Punctuation`].
    #[must_use]
    pub const fn from_punctuation(c: char) -> Self {
        match c {
            '(' => Self::LParen,
            ')' => Self::RParen,
            '[' => Self::SquareLParen,
            ']' => Self::SquareRParen,
            '{' => Self::CurlyLParen,
            '}' => Self::CurlyRParen,
            '\'' => Self::Quote,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Multiply,
            '%' => Self::Modulo,
            '^' => Self::Power,
            _ => Self::Punctuation,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenType for TokenKind {
    type Error = LexErrorKind;
    const ERROR: Self = Self::Error;
}
