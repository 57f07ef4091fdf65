//! Diagnostic module - user-facing error reports.
//!
//! Scanning and rendering stop at the first error, so there is no
//! collecting handler here: a phase returns its typed error, and the tool
//! wraps it in a [`Diagnostic`] and renders it against the [`SourceFile`]
//! it came from.
//!
//! # Examples
//!
//! ```
//! use stc_util::{Diagnostic, SourceFile};
//!
//! let file = SourceFile::new("t.st", "a ~ b");
//! let report = Diagnostic::error("Expected ~~ or ~= after ~ at index 2", file.span_at(2))
//!     .with_help("use `~=` for inequality")
//!     .render(&file);
//!
//! assert!(report.starts_with("error: Expected ~~ or ~="));
//! assert!(report.contains("--> t.st:1:3"));
//! ```

use std::fmt;

use crate::span::{SourceFile, Span};

/// Diagnostic severity level
///
/// Scanning and rendering only ever stop with an error, so that is the
/// one level there is.
///
/// ```
/// use stc_util::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the operation
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Add a note to this diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message to this diagnostic
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic with a caret snippet from `file`.
    ///
    /// The output looks like:
    ///
    /// ```text
    /// error: Ending with a trailing <
    ///  --> main.st:3:7
    ///   |
    /// 3 | x <- y <
    ///   |        ^
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let line_number = self.span.line.max(1) as usize;
        let gutter = line_number.to_string().len();
        let mut out = format!("{}: {}\n", self.level, self.message);

        out.push_str(&format!(
            "{:>width$}--> {}:{}\n",
            "",
            file.name(),
            self.span,
            width = gutter
        ));

        if let Some(line) = file.line_at(line_number) {
            let caret_col = (self.span.column.max(1) - 1) as usize;
            let caret_len = self.span.len().max(1);
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&format!("{} | {}\n", line_number, line));
            out.push_str(&format!(
                "{:>width$} | {}{}\n",
                "",
                " ".repeat(caret_col),
                "^".repeat(caret_len),
                width = gutter
            ));
        }

        for note in &self.notes {
            out.push_str(&format!("{:>width$} = note: {}\n", "", note, width = gutter));
        }
        for help in &self.helps {
            out.push_str(&format!("{:>width$} = help: {}\n", "", help, width = gutter));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
