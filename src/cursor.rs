use crate::token::Span;

/// Char cursor over an owned source text.
///
/// Tracks the scanning position, the start of the token being built, and a
/// single pushback slot holding the width of the last char returned by
/// [`Cursor::next_char`].
#[derive(Debug, Clone)]
pub struct Cursor {
    text: String,
    pos: usize,
    start: usize,
    start_span: Span,
    last_width: Option<usize>,
}

impl Cursor {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
            start: 0,
            start_span: Span::start(),
            last_width: None,
        }
    }

    /// The full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the next char to be read.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the pending token starts.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.start
    }

    /// Location of the pending token's first char.
    #[must_use]
    pub const fn token_span(&self) -> Span {
        self.start_span
    }

    /// Text consumed since the last token boundary.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.text[self.start..self.pos]
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume and return the next char, or `None` at end of input.
    ///
    /// At end of input the position does not move, and a following
    /// [`Cursor::rewind`] is a no-op.
    pub fn next_char(&mut self) -> Option<char> {
        let Some(c) = self.peek() else {
            self.last_width = Some(0);
            return None;
        };
        let width = c.len_utf8();
        self.pos += width;
        self.last_width = Some(width);
        Some(c)
    }

    /// The char [`Cursor::next_char`] would return, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Push back the char returned by the immediately preceding
    /// [`Cursor::next_char`].
    ///
    /// # Panics
    ///
    /// Panics when there is nothing to push back: two rewinds in a row, or
    /// a rewind across a token boundary.
    pub fn rewind(&mut self) {
        let Some(width) = self.last_width.take() else {
            panic!("rewind without a preceding next_char at offset {}", self.pos);
        };
        self.pos -= width;
    }

    /// Consume the next char if it is `expected`, otherwise push it back.
    pub fn accept(&mut self, expected: char) -> bool {
        if self.next_char() == Some(expected) {
            true
        } else {
            self.rewind();
            false
        }
    }

    /// Consume a maximal run of chars contained in `charset`.
    pub fn take(&mut self, charset: &str) -> usize {
        self.take_while(|c| charset.contains(c))
    }

    /// Consume a maximal run of chars matching `pred`, returning how many
    /// were consumed.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&mut pred) {
            self.next_char();
            count += 1;
        }
        count
    }

    /// Close the pending token: return its text and span, and move the
    /// token boundary up to the current position.
    pub fn commit(&mut self) -> (String, Span) {
        let value = self.current().to_owned();
        let span = self.start_span;
        self.skip();
        (value, span)
    }

    /// Move the token boundary up to the current position, discarding the
    /// pending text.
    pub fn skip(&mut self) {
        let mut span = self.start_span;
        for c in self.text[self.start..self.pos].chars() {
            if c == '\n' {
                span.line += 1;
                span.column = 1;
            } else {
                span.column += 1;
            }
        }
        span.offset = self.pos;
        self.start_span = span;
        self.start = self.pos;
        self.last_width = None;
    }

    /// Advance past a leading byte order mark, if any.
    pub fn skip_bom(&mut self) {
        if self.pos == 0 && self.text.starts_with('\u{FEFF}') {
            self.pos = '\u{FEFF}'.len_utf8();
            self.start = self.pos;
            self.start_span.offset = self.pos;
        }
    }
}
