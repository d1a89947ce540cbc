#![allow(dead_code)]

use ce_lexer::{Lexer, TokenKind};

/// Lex `input` to completion as `(kind, value)` pairs.
pub fn lex(input: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(input).map(|t| (t.kind, t.value)).collect()
}

/// Lex `input` to completion, keeping only the kinds.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).map(|t| t.kind).collect()
}

/// Build an expected `(kind, value)` list from string literals.
pub fn expected(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    pairs
        .iter()
        .map(|(kind, value)| (*kind, (*value).to_string()))
        .collect()
}

/// Assert that lexing `input` yields exactly one token of `kind` whose
/// value is the whole input.
pub fn assert_single(input: &str, kind: TokenKind) {
    assert_eq!(
        lex(input),
        expected(&[(kind, input)]),
        "lexing {input:?}"
    );
}

/// Assert that lexing `input` ends with an error token and nothing after.
pub fn assert_lex_error(input: &str) {
    let mut lexer = Lexer::new(input);
    let last = lexer.by_ref().last().expect("at least one token");
    assert_eq!(last.kind, TokenKind::Error, "lexing {input:?}");
    assert!(lexer.next_token().is_none());
    assert!(lexer.is_terminated());
    assert!(lexer.error().is_some());
}
