//! Source files with precomputed line starts.

use std::sync::Arc;

use super::Span;

/// A source file with its content and line index
///
/// # Examples
///
/// ```
/// use stc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.st", "x <- 3 + 4.");
/// assert_eq!(file.name(), "main.st");
/// assert_eq!(file.content(), "x <- 3 + 4.");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// ```
    /// use stc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.st", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates.
    ///
    /// Offsets past the end of the file are clamped to the end.
    ///
    /// ```
    /// use stc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.st", "foo bar: 2");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point is at least 1 here
                let line = insert_point - 1;
                let col = offset - self.line_starts[line] + 1;
                (line + 1, col)
            }
        }
    }

    /// Build a point span at `offset` with its line and column filled in.
    pub fn span_at(&self, offset: usize) -> Span {
        self.span(offset, offset)
    }

    /// Build a span over `start..end` with the line and column of `start`.
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (line, column) = self.offset_to_line_col(start);
        Span::new(start, end, line as u32, column as u32)
    }

    /// Get a specific source line (1-indexed), without its line break
    ///
    /// ```
    /// use stc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.st", "line1\r\nline2");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
