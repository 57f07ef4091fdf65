//! Error handling module for the stct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use stc_js::ConversionError;
use stc_lex::TokenError;
use stc_util::SourceFile;
use thiserror::Error;

/// Main error type for the stct CLI application.
///
/// Tokenize and convert failures keep the source they came from so they
/// can be reported with a caret snippet.
#[derive(Error, Debug)]
pub enum StctError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// The source did not scan.
    #[error("{}: {source}", .file.name())]
    Tokenize {
        /// The scanned source.
        file: Box<SourceFile>,
        /// The scanner error.
        source: TokenError,
    },

    /// The source could not be rendered as JavaScript.
    #[error("{}: {source}", .file.name())]
    Convert {
        /// The rendered source.
        file: Box<SourceFile>,
        /// The renderer error.
        source: ConversionError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StctError {
    /// Wrap a scanner error with its source.
    pub fn tokenize(file: SourceFile, source: TokenError) -> Self {
        Self::Tokenize {
            file: Box::new(file),
            source,
        }
    }

    /// Wrap a renderer error with its source.
    pub fn convert(file: SourceFile, source: ConversionError) -> Self {
        Self::Convert {
            file: Box::new(file),
            source,
        }
    }

    /// Render a caret diagnostic when the error points into a source file.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            StctError::Tokenize { file, source } => {
                Some(source.to_diagnostic(file).render(file))
            }
            StctError::Convert { file, source } => {
                source.to_diagnostic(file).map(|d| d.render(file))
            }
            _ => None,
        }
    }
}

/// Result type alias using StctError.
pub type Result<T> = std::result::Result<T, StctError>;
