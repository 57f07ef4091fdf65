//! Command trait and common types for the stct CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

use std::time::Duration;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all stct commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Use `config` for settings the arguments leave open.
    fn with_config(self, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;

    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// Outcome of a command that processes several files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    /// Number of files processed successfully.
    pub items_processed: usize,

    /// Number of files that failed.
    pub items_failed: usize,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl CommandResult {
    /// Record one successful file.
    pub fn processed(&mut self) {
        self.items_processed += 1;
    }

    /// Record one failed file.
    pub fn failed(&mut self) {
        self.items_failed += 1;
    }

    /// Whether every file succeeded.
    pub fn is_success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the execution time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}
