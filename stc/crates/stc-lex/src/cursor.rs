//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while iterating through source characters. Positions are byte offsets;
//! lookahead is in characters so multi-byte UTF-8 input is handled
//! correctly.

/// A cursor for traversing source code character by character.
///
/// Unlike a sentinel-based cursor, lookahead returns `Option<char>`: the
/// scanner distinguishes "end of input" from any real character, which the
/// sentinel rules (`$`, `<`, `>`, `:`, `~`) depend on.
///
/// # Example
///
/// ```
/// use stc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x <- 1");
///
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some(' '));
/// assert_eq!(cursor.peek_char(1), Some('<'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a cursor starting at byte offset `position`.
    ///
    /// A position past the end behaves like end of input. The caller must
    /// ensure `position` is on a character boundary when it is inside the
    /// text.
    pub fn at(source: &'a str, position: usize) -> Self {
        Self { source, position }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use stc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("$é!");
    /// assert_eq!(cursor.peek_char(0), Some('$'));
    /// assert_eq!(cursor.peek_char(1), Some('é'));
    /// assert_eq!(cursor.peek_char(2), Some('!'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return Some(b as char);
            }
        }

        rest.chars().nth(offset)
    }

    /// Returns true if the character `offset` ahead satisfies `pred`.
    #[inline]
    pub fn peek_is(&self, offset: usize, pred: impl Fn(char) -> bool) -> bool {
        self.peek_char(offset).is_some_and(pred)
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// ```
    /// use stc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances while `pred` holds for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_is(0, &pred) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the text from byte offset `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position.min(self.source.len())]
    }
}
