//! Grammar-independent scanner engine.
//!
//! A grammar is a set of state functions. Each one reads from the
//! [`Scanner`], emits zero or more tokens, and hands control to the next
//! state, or to `None` when scanning is over. The engine steps the chain
//! lazily: a state only runs when the consumer asks for a token and none
//! is buffered.

use std::collections::VecDeque;
use std::fmt;

use crate::cursor::Cursor;
use crate::token::{Span, Token};

/// A token kind a [`Scanner`] can produce.
pub trait TokenType: Copy + Eq + fmt::Debug {
    /// Classifies the failures reported through [`Scanner::errorf`].
    type Error: Clone + fmt::Debug + fmt::Display;

    /// The kind given to error tokens.
    const ERROR: Self;
}

/// A state of the scanning automaton.
#[derive(Clone, Copy)]
pub struct StateFn<K: TokenType>(pub fn(&mut Scanner<K>) -> Option<StateFn<K>>);

impl<K: TokenType> fmt::Debug for StateFn<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateFn")
    }
}

/// Drives a chain of state functions over a source text and buffers the
/// tokens they emit.
#[derive(Debug)]
pub struct Scanner<K: TokenType> {
    cursor: Cursor,
    pending: VecDeque<Token<K>>,
    state: Option<StateFn<K>>,
    failure: Option<(K::Error, Span)>,
}

impl<K: TokenType> Scanner<K> {
    /// Create a scanner over `text` that starts in `start`.
    #[must_use]
    pub fn new(text: impl Into<String>, start: StateFn<K>) -> Self {
        Self::with_cursor(Cursor::new(text), start)
    }

    pub(crate) const fn with_cursor(cursor: Cursor, start: StateFn<K>) -> Self {
        Self {
            cursor,
            pending: VecDeque::new(),
            state: Some(start),
            failure: None,
        }
    }

    /// Return the next token, running states until one is available.
    ///
    /// Returns `None` once the state chain has terminated and every
    /// buffered token has been handed out.
    pub fn next_token(&mut self) -> Option<Token<K>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            let before = self.progress();
            let next = (state.0)(self);
            self.state = if self.failure.is_some() { None } else { next };
            debug_assert!(
                self.state.is_none() || !self.pending.is_empty() || self.progress() > before,
                "scanner state made no progress at offset {}",
                self.cursor.position()
            );
        }
    }

    /// True once the state chain has returned the terminal state.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.state.is_none()
    }

    /// The error that halted scanning, with the span of the failed token.
    #[must_use]
    pub const fn failure(&self) -> Option<&(K::Error, Span)> {
        self.failure.as_ref()
    }

    /// See [`Cursor::next_char`].
    pub fn next_char(&mut self) -> Option<char> {
        self.cursor.next_char()
    }

    /// See [`Cursor::peek`].
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// See [`Cursor::rewind`].
    pub fn rewind(&mut self) {
        self.cursor.rewind();
    }

    /// See [`Cursor::accept`].
    pub fn accept(&mut self, expected: char) -> bool {
        self.cursor.accept(expected)
    }

    /// See [`Cursor::take`].
    pub fn take(&mut self, charset: &str) -> usize {
        self.cursor.take(charset)
    }

    /// See [`Cursor::take_while`].
    pub fn take_while(&mut self, pred: impl FnMut(char) -> bool) -> usize {
        self.cursor.take_while(pred)
    }

    /// Text consumed since the last emitted or ignored token.
    #[must_use]
    pub fn current(&self) -> &str {
        self.cursor.current()
    }

    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Discard the pending text without producing a token.
    pub fn ignore(&mut self) {
        self.cursor.skip();
    }

    /// Queue the pending text as a token of the given kind.
    pub fn emit(&mut self, kind: K) {
        let (value, span) = self.cursor.commit();
        self.pending.push_back(Token::new(kind, value, span));
    }

    /// Queue an error token carrying the message of `error` and halt.
    ///
    /// Returns the terminal state so a state function can end with
    /// `return s.errorf(..)`.
    pub fn errorf(&mut self, error: K::Error) -> Option<StateFn<K>> {
        let span = self.cursor.token_span();
        self.cursor.skip();
        self.pending.push_back(Token::new(K::ERROR, error.to_string(), span));
        self.failure = Some((error, span));
        None
    }

    const fn progress(&self) -> usize {
        self.cursor.position() + self.cursor.token_start()
    }
}

impl<K: TokenType> Iterator for Scanner<K> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Token<K>> {
        self.next_token()
    }
}
