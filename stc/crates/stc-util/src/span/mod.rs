//! Span module - Source location tracking.
//!
//! A [`Span`] is a byte range plus the 1-based line and column of its start.
//! Scanners work in byte offsets only; [`SourceFile`] turns an offset back
//! into a line and column when a report has to be shown to a person.
//!
//! # Examples
//!
//! ```
//! use stc_util::span::{SourceFile, Span};
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//!
//! let file = SourceFile::new("main.st", "a\nbc");
//! assert_eq!(file.span_at(3), Span::new(3, 3, 2, 2));
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// Offsets are byte offsets into UTF-8 text; `line` and `column` describe
/// `start` and are 1-based. Column counts bytes from the start of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
