//! Lexer module.
//!
//! The lexer is split by rule family:
//! - `core` - the `Lexer` struct and first-character dispatch
//! - `identifier` - identifiers, keyword parameters and block arguments
//! - `number` - numeric literal capture
//! - `literal` - strings, characters and symbols
//! - `operator` - special characters and operators
//! - `trivia` - whitespace and comments

mod core;
mod identifier;
mod literal;
mod number;
mod operator;
mod trivia;

pub use self::core::Lexer;
