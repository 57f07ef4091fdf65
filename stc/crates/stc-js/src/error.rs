//! Error types for JavaScript rendering
//!
//! Rendering fails either because the text does not scan, or because it
//! contains a token the renderer has no JavaScript form for yet.

use stc_lex::{TokenError, TokenKind};
use stc_util::{Diagnostic, SourceFile};
use thiserror::Error;

/// Error type for JavaScript rendering
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Special character with no JavaScript counterpart
    #[error("Unknown operator: {operator}")]
    UnknownOperator {
        /// The operator spelling, e.g. `<-`.
        operator: String,
        /// Byte offset of the token, when rendered from source text.
        offset: Option<usize>,
    },

    /// Token kind the renderer does not handle
    #[error("Unknown token: {kind} {value:?}")]
    UnknownToken {
        /// Kind of the rejected token.
        kind: TokenKind,
        /// Its decoded value.
        value: String,
        /// Byte offset of the token, when rendered from source text.
        offset: Option<usize>,
    },

    /// The source text did not scan
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Symbol name could not be encoded as a JavaScript string
    #[error("Symbol encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConversionError {
    /// Byte offset in the source text this error refers to, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ConversionError::UnknownOperator { offset, .. }
            | ConversionError::UnknownToken { offset, .. } => *offset,
            ConversionError::Token(err) => Some(err.offset()),
            ConversionError::Json(_) => None,
        }
    }

    /// Attach the source offset of the token being rendered.
    pub(crate) fn at(mut self, position: usize) -> Self {
        match &mut self {
            ConversionError::UnknownOperator { offset, .. }
            | ConversionError::UnknownToken { offset, .. } => *offset = Some(position),
            ConversionError::Token(_) | ConversionError::Json(_) => {}
        }
        self
    }

    /// Builds a diagnostic pointing into `file`, or `None` when the error
    /// has no source position.
    pub fn to_diagnostic(&self, file: &SourceFile) -> Option<Diagnostic> {
        match self {
            ConversionError::Token(err) => Some(err.to_diagnostic(file)),
            _ => {
                let offset = self.offset()?;
                Some(
                    Diagnostic::error(self.to_string(), file.span_at(offset))
                        .with_note("this token has no JavaScript rendering yet"),
                )
            }
        }
    }
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, ConversionError>;
