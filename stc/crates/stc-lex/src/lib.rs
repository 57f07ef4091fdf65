//! stc-lex - Lexical Analyzer for the Smalltalk dialect
//!
//! This crate turns Smalltalk-dialect source text into a flat sequence of
//! classified tokens. It does not build a syntax tree; consumers such as
//! `stc-js` work directly on the token stream.
//!
//! # Example Usage
//!
//! ```
//! use stc_lex::{scan, Token};
//!
//! let result = scan("foo <- 8r377.", 0, false).unwrap();
//! assert_eq!(
//!     result.tokens,
//!     vec![
//!         Token::identifier("foo"),
//!         Token::special("<-"),
//!         Token::number("255"),
//!         Token::special("."),
//!     ]
//! );
//! assert_eq!(result.end, 13);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and values
//! - [`lexer`] - The scanner and its rules
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`numeric`] - Numeric literal evaluation and formatting
//! - [`error`] - Tokenization errors
//!
//! # Token Categories
//!
//! - **Identifiers**: `foo`, `bill2`
//! - **Parameters**: `at:` (value `at`)
//! - **Block arguments**: `:each` (value `each`)
//! - **Numbers**: `42`, `-1.5`, `3e-2`, `16rFF`, `8r-377`, `2r11e6`
//! - **Strings**: `` `text` ``, with ``` `` ``` for a literal backtick
//! - **Characters**: `$a`
//! - **Symbols**: `#name`, `#at:put:`
//! - **Comments**: `"text"`
//! - **Specials**: `+ * . ; [ ] ( ) | ^ & @ - = == / // \\ > >= < <- <= ~~ ~= #(`
//!
//! # Offsets
//!
//! All offsets, including the scan end and error positions, are byte
//! offsets into the scanned text.

#![warn(missing_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod numeric;
pub mod token;

mod edge_cases;

pub use error::{LexResult, TokenError};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use serde::Serialize;
use tracing::debug;

/// The outcome of a successful scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scan {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Byte offset where scanning stopped; the text length unless `start`
    /// was past it.
    pub end: usize,
}

/// Scans `text` from byte offset `start`.
///
/// Whitespace runs are skipped unless `include_whitespace` is set. The
/// first error aborts the scan; no partial token list is returned.
///
/// A `start` past the end of `text` yields no tokens and `end == start`.
///
/// ```
/// use stc_lex::{scan, Token, TokenError};
///
/// let result = scan("a b", 0, true).unwrap();
/// assert_eq!(result.tokens[1], Token::whitespace(" "));
///
/// let err = scan("x <- $", 0, false).unwrap_err();
/// assert_eq!(err, TokenError::TrailingDollar { offset: 5 });
/// ```
pub fn scan(text: &str, start: usize, include_whitespace: bool) -> LexResult<Scan> {
    if start < text.len() && !text.is_char_boundary(start) {
        return Err(TokenError::InvalidStart { offset: start });
    }

    let mut lexer = Lexer::at(text, start).with_whitespace(include_whitespace);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    let end = lexer.position();

    debug!(tokens = tokens.len(), start, end, "scanned source");
    Ok(Scan { tokens, end })
}
