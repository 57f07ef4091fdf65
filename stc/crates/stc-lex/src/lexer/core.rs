//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct and the dispatch that picks a
//! rule from the current character.

use tracing::trace;

use crate::chars::{is_alpha, is_digit, is_single_special, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{LexResult, TokenError};
use crate::token::Token;

/// Lexer for the Smalltalk dialect.
///
/// The lexer is a pull scanner: each call to [`Lexer::next_token`] returns
/// the next token, `None` at end of input, or the first error. Errors are
/// fatal; once one has been returned the iterator yields nothing more.
///
/// # Example
///
/// ```
/// use stc_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::new("foo bar: 2");
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::identifier("foo")));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::parameter("bar")));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::number("2")));
/// assert_eq!(lexer.next_token().unwrap(), None);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Emit whitespace runs as tokens instead of skipping them.
    include_whitespace: bool,

    /// Set once an error has been returned by the iterator.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a lexer that starts scanning at byte offset `start`.
    ///
    /// `start` must lie on a character boundary; [`crate::scan`] checks
    /// this before building a lexer.
    pub fn at(source: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::at(source, start),
            token_start: start,
            include_whitespace: false,
            failed: false,
        }
    }

    /// Emit whitespace runs as [`TokenKind::Whitespace`](crate::TokenKind) tokens.
    pub fn with_whitespace(mut self, include_whitespace: bool) -> Self {
        self.include_whitespace = include_whitespace;
        self
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// Rules are tried by the first character. Characters with more than
    /// one meaning (`-`, `<`, `>`, `:`) settle it by lookahead inside their
    /// own rule before anything is consumed.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            self.token_start = self.cursor.position();

            let Some(c) = self.cursor.current_char() else {
                return Ok(None);
            };

            let token = match c {
                c if is_whitespace(c) => {
                    let run = self.lex_whitespace();
                    if !self.include_whitespace {
                        continue;
                    }
                    run
                }
                c if is_alpha(c) => self.lex_identifier(),
                '>' => self.lex_greater()?,
                c if is_single_special(c) => self.lex_single_special(),
                '=' => self.lex_equals(),
                '/' => self.lex_slash(),
                '\\' => self.lex_backslash()?,
                ':' => self.lex_block_argument()?,
                '<' => self.lex_less()?,
                '$' => self.lex_char()?,
                '"' => self.lex_comment(),
                '`' => self.lex_string(),
                '#' => self.lex_hash()?,
                '~' => self.lex_tilde()?,
                c if is_digit(c) => self.lex_number()?,
                '-' => self.lex_minus()?,
                c => {
                    return Err(TokenError::UnknownCharacter {
                        character: c,
                        offset: self.token_start,
                    })
                }
            };

            trace!(start = self.token_start, %token, "token");
            return Ok(Some(token));
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset where the most recent token started.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Consumes `len` characters and returns them as a special token.
    pub(crate) fn emit_special(&mut self, len: usize) -> Token {
        self.cursor.advance_n(len);
        Token::special(self.cursor.slice_from(self.token_start))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
