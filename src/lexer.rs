use std::fmt;

use crate::cursor::Cursor;
use crate::kind::TokenKind;
use crate::scanner::{Scanner, StateFn};
use crate::token::Span;

/// A CE token.
pub type Token = crate::token::Token<TokenKind>;

type State = StateFn<TokenKind>;
type CeScanner = Scanner<TokenKind>;

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// End of input inside a double-quoted string.
    UnterminatedString,
    /// Number followed by a char that cannot end it (`12abc`).
    MalformedNumber(char),
    /// Second `.` inside a decimal number (`1.2.3`).
    NestedDecimal,
    /// Dotted identifier segment that does not start with a letter or `_`.
    MalformedIdentifier(Option<char>),
    /// Char that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "string not properly terminated")
            }
            Self::MalformedNumber(c) => {
                write!(f, "malformed number: unexpected character {c:?}")
            }
            Self::NestedDecimal => {
                write!(f, "malformed number: more than one '.'")
            }
            Self::MalformedIdentifier(Some(c)) => {
                write!(
                    f,
                    "malformed identifier: segment cannot start with {c:?}"
                )
            }
            Self::MalformedIdentifier(None) => {
                write!(f, "malformed identifier: empty segment at end of input")
            }
            Self::UnexpectedCharacter(c) => {
                write!(f, "unexpected character: {c:?}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize a CE expression into a sequence of tokens.
///
/// # Errors
///
/// Returns `LexError` on unterminated strings, malformed numbers or
/// identifiers, and chars that cannot start a token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let tokens: Vec<Token> = lexer
        .by_ref()
        .filter(|t| t.kind != TokenKind::Error)
        .collect();
    match lexer.error() {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

/// Pull-based CE lexer.
///
/// Tokens are produced on demand; once an `Error` token has been
/// returned, the lexer is done.
///
/// ```
/// use ce_lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a.b <= 1.5");
/// let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::LessThanOrEqual, TokenKind::Decimal]
/// );
/// assert!(lexer.error().is_none());
/// ```
#[derive(Debug)]
pub struct Lexer {
    scanner: CeScanner,
}

impl Lexer {
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut cursor = Cursor::new(input);
        cursor.skip_bom();
        Self {
            scanner: Scanner::with_cursor(cursor, StateFn(dispatch)),
        }
    }

    /// Next token, or `None` once scanning has completed.
    pub fn next_token(&mut self) -> Option<Token> {
        self.scanner.next_token()
    }

    /// The error that halted the lexer, if any.
    #[must_use]
    pub fn error(&self) -> Option<LexError> {
        self.scanner.failure().map(|(kind, span)| LexError {
            kind: kind.clone(),
            span: *span,
        })
    }

    /// True once no more tokens will be produced by the state machine.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.scanner.is_terminated()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Chars that may end a number without being part of it.
const fn ends_number(c: char) -> bool {
    is_space(c) || c.is_ascii_punctuation()
}

fn dispatch(s: &mut CeScanner) -> Option<State> {
    let c = s.next_char()?;
    match c {
        c if is_space(c) => Some(StateFn(whitespace)),
        c if is_identifier_start(c) => Some(StateFn(identifier)),
        '0'..='9' => Some(StateFn(number)),
        '"' => Some(StateFn(string)),
        '@' if s.peek().is_some_and(is_identifier_start) => Some(StateFn(at_identifier)),
        '.' if s.peek().is_some_and(|n| n.is_ascii_digit()) => Some(StateFn(decimal)),
        c if c.is_ascii_punctuation() => {
            let kind = operator(s, c);
            s.emit(kind);
            Some(StateFn(dispatch))
        }
        c => s.errorf(LexErrorKind::UnexpectedCharacter(c)),
    }
}

/// Resolve a punctuation char, looking one char ahead for two-char
/// operators.
fn operator(s: &mut CeScanner, c: char) -> TokenKind {
    match c {
        '<' => lookahead(
            s,
            &[
                ('=', TokenKind::LessThanOrEqual),
                ('>', TokenKind::NotEqual),
                ('/', TokenKind::TagClose),
            ],
            TokenKind::LessThan,
        ),
        '>' => lookahead(
            s,
            &[('=', TokenKind::GreaterThanOrEqual)],
            TokenKind::GreaterThan,
        ),
        '=' => lookahead(s, &[('=', TokenKind::EqualTo)], TokenKind::Equal),
        '!' => lookahead(s, &[('=', TokenKind::NotEqual)], TokenKind::Not),
        '/' => lookahead(s, &[('>', TokenKind::SelfClose)], TokenKind::Divide),
        '&' => lookahead(s, &[('&', TokenKind::LogicalAnd)], TokenKind::BitwiseAnd),
        '|' => lookahead(s, &[('|', TokenKind::LogicalOr)], TokenKind::BitwiseOr),
        '.' => TokenKind::Dot,
        c => TokenKind::from_punctuation(c),
    }
}

fn lookahead(s: &mut CeScanner, pairs: &[(char, TokenKind)], single: TokenKind) -> TokenKind {
    let next = s.next_char();
    if let Some(&(_, kind)) = pairs.iter().find(|(c, _)| Some(*c) == next) {
        return kind;
    }
    s.rewind();
    single
}

fn whitespace(s: &mut CeScanner) -> Option<State> {
    s.take_while(is_space);
    s.ignore();
    Some(StateFn(dispatch))
}

fn number(s: &mut CeScanner) -> Option<State> {
    s.take_while(|c| c.is_ascii_digit());
    match s.next_char() {
        None => {
            s.emit(TokenKind::Integer);
            None
        }
        Some('.') => Some(StateFn(decimal)),
        Some(c) if ends_number(c) => {
            s.rewind();
            s.emit(TokenKind::Integer);
            Some(StateFn(dispatch))
        }
        Some(c) => s.errorf(LexErrorKind::MalformedNumber(c)),
    }
}

fn decimal(s: &mut CeScanner) -> Option<State> {
    s.take_while(|c| c.is_ascii_digit());
    match s.next_char() {
        None => {
            s.emit(TokenKind::Decimal);
            None
        }
        Some('.') => s.errorf(LexErrorKind::NestedDecimal),
        Some(c) if ends_number(c) => {
            s.rewind();
            s.emit(TokenKind::Decimal);
            Some(StateFn(dispatch))
        }
        Some(c) => s.errorf(LexErrorKind::MalformedNumber(c)),
    }
}

fn identifier(s: &mut CeScanner) -> Option<State> {
    s.take_while(is_identifier_part);
    if s.accept('.') {
        return Some(StateFn(dotted_identifier));
    }
    s.emit(TokenKind::Identifier);
    Some(StateFn(dispatch))
}

/// Entered after the `.` of a dotted path such as `a.b`.
fn dotted_identifier(s: &mut CeScanner) -> Option<State> {
    match s.next_char() {
        Some(c) if is_identifier_start(c) => Some(StateFn(identifier)),
        other => s.errorf(LexErrorKind::MalformedIdentifier(other)),
    }
}

/// Entered after an `@` known to be followed by an identifier start.
fn at_identifier(s: &mut CeScanner) -> Option<State> {
    s.next_char();
    Some(StateFn(identifier))
}

/// Entered after the opening `"`.
fn string(s: &mut CeScanner) -> Option<State> {
    loop {
        match s.next_char() {
            None => return s.errorf(LexErrorKind::UnterminatedString),
            Some('\\') => {
                if s.next_char().is_none() {
                    return s.errorf(LexErrorKind::UnterminatedString);
                }
            }
            Some('"') => {
                s.emit(TokenKind::String);
                return Some(StateFn(dispatch));
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(input).map(|t| (t.kind, t.value)).collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).map(|t| t.kind).collect()
    }

    #[test]
    fn integer() {
        assert_eq!(lex("123"), vec![(TokenKind::Integer, "123".to_string())]);
    }

    #[test]
    fn decimals() {
        assert_eq!(lex("123."), vec![(TokenKind::Decimal, "123.".to_string())]);
        assert_eq!(
            lex("123.45"),
            vec![(TokenKind::Decimal, "123.45".to_string())]
        );
        assert_eq!(lex(".5"), vec![(TokenKind::Decimal, ".5".to_string())]);
    }

    #[test]
    fn number_followed_by_letter() {
        assert_eq!(kinds("123abc"), vec![TokenKind::Error]);
    }

    #[test]
    fn nested_decimal() {
        let mut lexer = Lexer::new("1.2.3");
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert!(lexer.next_token().is_none());
        assert_eq!(
            lexer.error().map(|e| e.kind),
            Some(LexErrorKind::NestedDecimal)
        );
    }

    #[test]
    fn dotted_identifier_is_one_token() {
        assert_eq!(
            lex("a.b.c"),
            vec![(TokenKind::Identifier, "a.b.c".to_string())]
        );
    }

    #[test]
    fn dotted_identifier_bad_segment() {
        let mut lexer = Lexer::new("a.1");
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert_eq!(
            lexer.error().map(|e| e.kind),
            Some(LexErrorKind::MalformedIdentifier(Some('1')))
        );

        let mut lexer = Lexer::new("a.");
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert_eq!(
            lexer.error().map(|e| e.kind),
            Some(LexErrorKind::MalformedIdentifier(None))
        );
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(kinds("<="), vec![TokenKind::LessThanOrEqual]);
        assert_eq!(kinds("<>"), vec![TokenKind::NotEqual]);
        assert_eq!(kinds("</"), vec![TokenKind::TagClose]);
        assert_eq!(kinds(">="), vec![TokenKind::GreaterThanOrEqual]);
        assert_eq!(kinds("=="), vec![TokenKind::EqualTo]);
        assert_eq!(kinds("!="), vec![TokenKind::NotEqual]);
        assert_eq!(kinds("/>"), vec![TokenKind::SelfClose]);
        assert_eq!(kinds("&&"), vec![TokenKind::LogicalAnd]);
        assert_eq!(kinds("||"), vec![TokenKind::LogicalOr]);
    }

    #[test]
    fn single_char_operator_keeps_lookahead() {
        assert_eq!(
            lex("<a"),
            vec![
                (TokenKind::LessThan, "<".to_string()),
                (TokenKind::Identifier, "a".to_string()),
            ]
        );
        assert_eq!(kinds("!x"), vec![TokenKind::Not, TokenKind::Identifier]);
        assert_eq!(kinds("<"), vec![TokenKind::LessThan]);
    }

    #[test]
    fn string_keeps_escapes() {
        assert_eq!(
            lex(r#""hello \" world""#),
            vec![(TokenKind::String, r#""hello \" world""#.to_string())]
        );
    }

    #[test]
    fn unterminated_string() {
        let mut lexer = Lexer::new("\"unterminated");
        let token = lexer.next_token().expect("error token");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.value, "string not properly terminated");
        assert!(lexer.next_token().is_none());
    }

    #[test]
    fn trailing_backslash_in_string() {
        let mut lexer = Lexer::new("\"abc\\");
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert_eq!(
            lexer.error().map(|e| e.kind),
            Some(LexErrorKind::UnterminatedString)
        );
    }

    #[test]
    fn annotation() {
        assert_eq!(
            lex("@annotation"),
            vec![(TokenKind::Identifier, "@annotation".to_string())]
        );
        assert_eq!(
            lex("@1"),
            vec![
                (TokenKind::Punctuation, "@".to_string()),
                (TokenKind::Integer, "1".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_only() {
        assert!(lex(" \t\r\n ").is_empty());
    }

    #[test]
    fn unexpected_character() {
        let mut lexer = Lexer::new("a € b");
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert!(lexer.next_token().is_none());
        let err = lexer.error().expect("error");
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('€'));
        assert_eq!(err.span.column, 3);
    }

    #[test]
    fn tokenize_reports_error() {
        let err = tokenize("x = \"open").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.span.column, 5);
        assert_eq!(
            err.to_string(),
            "string not properly terminated at line 1, column 5"
        );
    }

    #[test]
    fn spans() {
        let tokens = tokenize("a\n  b").expect("tokenize");
        assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
        assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 3));
    }
}
