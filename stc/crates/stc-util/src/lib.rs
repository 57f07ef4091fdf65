//! stc-util - Shared foundation types for the stc toolchain.
//!
//! This crate holds the pieces every other stc crate needs but that do not
//! belong to any single phase:
//!
//! - [`span`] - byte ranges, source files and offset to line/column lookup
//! - [`diagnostic`] - user-facing error reports with a source snippet
//!
//! # Example
//!
//! ```
//! use stc_util::{Diagnostic, SourceFile, Span};
//!
//! let file = SourceFile::new("demo.st", "x <- 1.\ny <- $");
//! let span = file.span_at(13);
//! assert_eq!((span.line, span.column), (2, 6));
//!
//! let report = Diagnostic::error("Ending with a dollar sign", span).render(&file);
//! assert!(report.contains("demo.st:2:6"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use span::{SourceFile, Span};
