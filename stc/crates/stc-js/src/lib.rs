//! stc-js - JavaScript rendering for the Smalltalk dialect
//!
//! A thin, partial pass over the token stream. Each token is rendered on
//! its own; there is no parsing and no reordering, so whitespace and layout
//! survive unchanged.
//!
//! | Token | JavaScript |
//! |-------|------------|
//! | number | the normalized decimal text |
//! | string | `` `text` `` with `` ` ``, `\` and `${` escaped |
//! | symbol | `Symbol.for("name")` |
//! | comment | `// text` on each line |
//! | whitespace | unchanged |
//! | `+ - * /` | unchanged |
//! | `=` / `==` | `==` / `===` |
//!
//! Anything else is a [`ConversionError`].
//!
//! # Example
//!
//! ```
//! let js = stc_js::render("16rFF + 2r11e-2 \"sum\"").unwrap();
//! assert_eq!(js, "255 + 0.75 // sum");
//! ```

mod edge_cases;
mod emit;
pub mod error;

pub use error::{ConversionError, Result};

use stc_lex::{Lexer, Token};
use tracing::debug;

use emit::emit_token;

/// Renders Smalltalk source text as JavaScript.
///
/// The whole text is scanned first, whitespace included, so a scan error
/// takes precedence over an unsupported token earlier in the text.
pub fn render(text: &str) -> Result<String> {
    let mut lexer = Lexer::new(text).with_whitespace(true);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push((lexer.token_start(), token));
    }

    let mut out = String::with_capacity(text.len());
    for (offset, token) in &tokens {
        emit_token(token, &mut out).map_err(|err| err.at(*offset))?;
    }

    debug!(tokens = tokens.len(), bytes = out.len(), "rendered javascript");
    Ok(out)
}

/// Renders an already scanned token sequence.
///
/// Pass a whitespace-inclusive scan to keep the layout. Errors carry no
/// source offset.
pub fn render_tokens(tokens: &[Token]) -> Result<String> {
    let mut out = String::new();
    for token in tokens {
        emit_token(token, &mut out)?;
    }
    Ok(out)
}
