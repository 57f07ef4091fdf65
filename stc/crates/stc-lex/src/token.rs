//! Token definitions.
//!
//! A token is a classified lexical unit: a [`TokenKind`] plus the decoded
//! text it carries. Values are always fully decoded: strings have their
//! doubled backticks collapsed, numbers are already normalized decimal
//! text, and special characters carry their exact spelling.

use std::fmt;

use serde::Serialize;

/// The closed set of token kinds.
///
/// The serialized names (`sc`, `blockArgument`, ...) are stable and are
/// what the `stct tokens --format json` dump prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// Punctuation and operators: `+`, `<-`, `//`, `#(`, ...
    #[serde(rename = "sc")]
    Special,
    /// Numeric literal, value already evaluated to decimal text.
    Number,
    /// Backtick-quoted string.
    String,
    /// `#name` symbol; the value excludes the `#`.
    Symbol,
    /// `$c` character literal; the value is the single character.
    Char,
    /// Bare identifier.
    Identifier,
    /// Keyword-message label (`at:`); the value excludes the colon.
    Parameter,
    /// Block argument (`:each`); the value excludes the colon.
    BlockArgument,
    /// Double-quoted comment; the value excludes the quotes.
    Comment,
    /// A run of whitespace, only emitted on request.
    Whitespace,
}

impl TokenKind {
    /// Stable short name of the kind.
    ///
    /// ```
    /// use stc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Special.as_str(), "sc");
    /// assert_eq!(TokenKind::BlockArgument.as_str(), "blockArgument");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Special => "sc",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Char => "char",
            TokenKind::Identifier => "identifier",
            TokenKind::Parameter => "parameter",
            TokenKind::BlockArgument => "blockArgument",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token with its decoded value.
///
/// ```
/// use stc_lex::{Token, TokenKind};
///
/// let token = Token::special("<-");
/// assert_eq!(token.kind, TokenKind::Special);
/// assert_eq!(token.value, "<-");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The token classification.
    #[serde(rename = "t")]
    pub kind: TokenKind,
    /// The decoded payload.
    #[serde(rename = "v")]
    pub value: String,
}

impl Token {
    /// Creates a token of any kind.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Special-character token.
    pub fn special(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Special, value)
    }

    /// Number token; `value` must already be normalized.
    pub fn number(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, value)
    }

    /// String token.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(TokenKind::String, value)
    }

    /// Symbol token.
    pub fn symbol(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, value)
    }

    /// Character token.
    pub fn char(value: char) -> Self {
        Self::new(TokenKind::Char, value.to_string())
    }

    /// Identifier token.
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    /// Parameter token.
    pub fn parameter(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Parameter, value)
    }

    /// Block-argument token.
    pub fn block_argument(value: impl Into<String>) -> Self {
        Self::new(TokenKind::BlockArgument, value)
    }

    /// Comment token.
    pub fn comment(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, value)
    }

    /// Whitespace token.
    pub fn whitespace(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Whitespace, value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Token::parameter("at").to_string(), "parameter(\"at\")");
        assert_eq!(Token::char('\n').to_string(), "char(\"\\n\")");
    }

    #[test]
    fn test_serialize_uses_short_names() {
        let json = serde_json::to_string(&Token::block_argument("each")).unwrap();
        assert_eq!(json, r#"{"t":"blockArgument","v":"each"}"#);

        let json = serde_json::to_string(&Token::special("<-")).unwrap();
        assert_eq!(json, r#"{"t":"sc","v":"<-"}"#);
    }
}
