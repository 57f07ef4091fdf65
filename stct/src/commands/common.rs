//! Common types and utilities for stct commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use stc_util::SourceFile;

use crate::error::{Result, StctError};

/// Path argument that stands for standard input or output.
pub const STDIO_PATH: &str = "-";

/// Display name of standard input in diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `kind value` line per token
    Text,
    /// One JSON object per input
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in `stct.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = StctError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(StctError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Returns true when `path` is the `-` placeholder.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Read one input into a [`SourceFile`] named after its path.
///
/// `-` reads all of standard input.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if is_stdio(path) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(SourceFile::new(STDIN_NAME, content));
    }

    if !path.exists() {
        return Err(StctError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(StctError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        StctError::FileOperation(format!("Cannot read {}: {}", path.display(), e))
    })?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Validate that at least one input was given, and `-` at most once.
pub fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(StctError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    if inputs.iter().filter(|path| is_stdio(path)).count() > 1 {
        return Err(StctError::Validation(
            error_messages::STDIN_TWICE.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Reporting
// ============================================================================

/// Print a per-file failure to stderr, as a caret diagnostic when the
/// error points into the source.
pub fn report_failure(input: &Path, error: &StctError) {
    match error.diagnostic() {
        Some(rendered) => eprint!("{}", rendered),
        None => eprintln!("error: {}: {}", input.display(), error),
    }
}

/// Error returned after a multi-file run in which some files failed.
pub fn files_failed(count: usize) -> StctError {
    StctError::CommandExecution(format!("{} {}", count, error_messages::FILES_FAILED))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when `-` is given more than once.
    pub const STDIN_TWICE: &str = "Standard input can only be read once";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when output file already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force):";

    /// Error when several inputs would be written to one file.
    pub const OUTPUT_NOT_DIR: &str = "Output must be a directory when converting several files:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";

    /// Error when file path is invalid.
    pub const INVALID_FILE_PATH: &str = "Invalid file path:";
}
