//! Lexer for CE, a small configuration and conditional expression
//! language.
//!
//! The crate has two layers: a grammar-independent [`Scanner`] engine
//! that runs a chain of state functions over a source text, and the CE
//! grammar built on it, exposed through [`Lexer`] and [`tokenize`].
//!
//! # Quick start
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use ce_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(r#"len(123., 37, "hello", @annotation)"#);
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Identifier);
//! assert_eq!(first.value, "len");
//! assert_eq!(lexer.count(), 9);
//! ```
//!
//! ## Tokenize in one step
//!
//! ```
//! use ce_lexer::{LexErrorKind, tokenize};
//!
//! let tokens = tokenize(r#"{ src="newTest.kt" }"#).unwrap();
//! assert_eq!(tokens[3].value, r#""newTest.kt""#);
//!
//! let err = tokenize("12abc").unwrap_err();
//! assert_eq!(err.kind, LexErrorKind::MalformedNumber('a'));
//! ```
//!
//! ## Write a grammar of your own
//!
//! ```
//! use ce_lexer::scanner::{Scanner, StateFn, TokenType};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Digits,
//!     Error,
//! }
//!
//! impl TokenType for Kind {
//!     type Error = String;
//!     const ERROR: Self = Self::Error;
//! }
//!
//! fn digits(s: &mut Scanner<Kind>) -> Option<StateFn<Kind>> {
//!     if s.take("0123456789") == 0 {
//!         return match s.next_char() {
//!             None => None,
//!             Some(c) => s.errorf(format!("not a digit: {c}")),
//!         };
//!     }
//!     s.emit(Kind::Digits);
//!     s.take(" ");
//!     s.ignore();
//!     Some(StateFn(digits))
//! }
//!
//! let values: Vec<_> = Scanner::new("12 345", StateFn(digits))
//!     .map(|t| t.value)
//!     .collect();
//! assert_eq!(values, ["12", "345"]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate. State functions share one signature, so
// some always return `Some`.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::unnecessary_wraps
)]

pub mod cursor;
pub mod kind;
pub mod lexer;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use kind::TokenKind;
pub use lexer::{LexError, LexErrorKind, Lexer, Token, tokenize};
pub use scanner::{Scanner, StateFn, TokenType};
pub use token::Span;
