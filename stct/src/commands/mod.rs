//! Command modules for the stct CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod convert;
pub mod tokens;

// Re-export command types and functions
pub use convert::{ConvertArgs, ConvertCommand};
pub use tokens::{TokensArgs, TokensCommand};
