//! Tokenization errors.
//!
//! Every error is fatal for the scan that raised it. Each variant carries
//! the byte offset it refers to so callers can point at the source.

use stc_util::{Diagnostic, SourceFile};
use thiserror::Error;

/// Error raised by the scanner for structurally invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// `$` as the last character.
    #[error("Ending with a dollar sign")]
    TrailingDollar {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `<` as the last character.
    #[error("Ending with a trailing <")]
    TrailingLess {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `>` as the last character.
    #[error("Ending with a trailing >")]
    TrailingGreater {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `:` as the last character.
    #[error("Ending with a trailing :")]
    TrailingColon {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `\` not followed by a second `\`.
    #[error("Ending with a trailing \\, expected \\\\")]
    TrailingBackslash {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `#` followed by neither `(` nor a letter or digit.
    #[error("Expected #( or symbol after # at index {offset}")]
    InvalidHash {
        /// Byte offset of the error.
        offset: usize,
    },

    /// `~` followed by neither `~` nor `=`.
    #[error("Expected ~~ or ~= after ~ at index {offset}")]
    InvalidTilde {
        /// Byte offset of the error.
        offset: usize,
    },

    /// A second `r` inside one numeric literal.
    #[error("Multiple radix specifiers in number at index {offset}")]
    MultipleRadix {
        /// Byte offset of the error.
        offset: usize,
    },

    /// A second `e` inside one numeric literal.
    #[error("Multiple exponent specifiers in number at index {offset}")]
    MultipleExponent {
        /// Byte offset of the error.
        offset: usize,
    },

    /// Radix prefix outside 2..=36.
    #[error("Invalid radix {radix} at index {offset}, expected 2 to 36")]
    InvalidRadix {
        /// The radix text before `r`.
        radix: String,
        /// Byte offset of the error.
        offset: usize,
    },

    /// A digit that is not valid in the literal's radix.
    #[error("Invalid digit for radix {radix}: {digit}")]
    InvalidDigit {
        /// The offending digit.
        digit: char,
        /// The literal's radix.
        radix: u32,
        /// Byte offset of the error.
        offset: usize,
    },

    /// A numeric literal whose exponent has no digits.
    #[error("Malformed number literal {literal} at index {offset}")]
    MalformedNumber {
        /// The captured literal text.
        literal: String,
        /// Byte offset of the error.
        offset: usize,
    },

    /// The requested start offset splits a multi-byte character.
    #[error("Start offset {offset} is not on a character boundary")]
    InvalidStart {
        /// The requested start offset.
        offset: usize,
    },

    /// A character no rule accepts.
    #[error("Unknown character: {character} at index {offset}")]
    UnknownCharacter {
        /// The unrecognized character.
        character: char,
        /// Byte offset of the error.
        offset: usize,
    },
}

impl TokenError {
    /// Byte offset in the scanned text this error refers to.
    pub fn offset(&self) -> usize {
        match self {
            TokenError::TrailingDollar { offset }
            | TokenError::TrailingLess { offset }
            | TokenError::TrailingGreater { offset }
            | TokenError::TrailingColon { offset }
            | TokenError::TrailingBackslash { offset }
            | TokenError::InvalidHash { offset }
            | TokenError::InvalidTilde { offset }
            | TokenError::MultipleRadix { offset }
            | TokenError::MultipleExponent { offset }
            | TokenError::InvalidRadix { offset, .. }
            | TokenError::InvalidDigit { offset, .. }
            | TokenError::MalformedNumber { offset, .. }
            | TokenError::InvalidStart { offset }
            | TokenError::UnknownCharacter { offset, .. } => *offset,
        }
    }

    /// Builds a diagnostic pointing at the error offset in `file`.
    ///
    /// ```
    /// use stc_lex::scan;
    /// use stc_util::SourceFile;
    ///
    /// let file = SourceFile::new("demo.st", "x <- 1\ny ~ 2");
    /// let err = scan(file.content(), 0, false).unwrap_err();
    /// let rendered = err.to_diagnostic(&file).render(&file);
    /// assert!(rendered.starts_with("error: Expected ~~ or ~= after ~ at index 9\n"));
    /// assert!(rendered.contains("--> demo.st:2:3"));
    /// ```
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string(), file.span_at(self.offset()));
        match self {
            TokenError::InvalidDigit { radix, .. } => {
                diagnostic.with_help(format!("radix {radix} digits are 0 to {}", max_digit(*radix)))
            }
            TokenError::TrailingBackslash { .. } => {
                diagnostic.with_help("write `\\\\` for the backslash operator")
            }
            TokenError::InvalidRadix { .. } => diagnostic.with_note("a radix must be 2 to 36"),
            _ => diagnostic,
        }
    }

    /// Shift the offset by `base`.
    ///
    /// The numeric evaluator reports offsets relative to the literal it was
    /// given; the lexer rebases them onto the source text.
    pub(crate) fn offset_by(mut self, base: usize) -> Self {
        match &mut self {
            TokenError::TrailingDollar { offset }
            | TokenError::TrailingLess { offset }
            | TokenError::TrailingGreater { offset }
            | TokenError::TrailingColon { offset }
            | TokenError::TrailingBackslash { offset }
            | TokenError::InvalidHash { offset }
            | TokenError::InvalidTilde { offset }
            | TokenError::MultipleRadix { offset }
            | TokenError::MultipleExponent { offset }
            | TokenError::InvalidRadix { offset, .. }
            | TokenError::InvalidDigit { offset, .. }
            | TokenError::MalformedNumber { offset, .. }
            | TokenError::InvalidStart { offset }
            | TokenError::UnknownCharacter { offset, .. } => *offset += base,
        }
        self
    }
}

/// Highest digit character of `radix`, uppercase.
fn max_digit(radix: u32) -> char {
    if !(2..=36).contains(&radix) {
        return '?';
    }
    std::char::from_digit(radix.saturating_sub(1), radix)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Result type alias for scanning.
pub type LexResult<T> = std::result::Result<T, TokenError>;
