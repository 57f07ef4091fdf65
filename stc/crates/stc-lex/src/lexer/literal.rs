//! Character, string and symbol literals.

use crate::chars::{is_alphanumeric, is_whitespace};
use crate::error::{LexResult, TokenError};
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// `$c`: the character after `$`, whatever it is.
    pub(crate) fn lex_char(&mut self) -> LexResult<Token> {
        let value = self
            .cursor
            .peek_char(1)
            .ok_or(TokenError::TrailingDollar {
                offset: self.token_start,
            })?;
        self.cursor.advance_n(2);
        Ok(Token::char(value))
    }

    /// Backtick-quoted string. A doubled backtick stands for one literal
    /// backtick. An unterminated string runs to end of input.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut value = String::new();
        while let Some(c) = self.cursor.current_char() {
            if c == '`' {
                if self.cursor.peek_char(1) == Some('`') {
                    value.push('`');
                    self.cursor.advance_n(2);
                    continue;
                }
                self.cursor.advance();
                break;
            }
            value.push(c);
            self.cursor.advance();
        }

        Token::string(value)
    }

    /// `#name` symbol or the `#(` literal-array opener.
    ///
    /// A symbol runs from the first alphanumeric up to the next whitespace,
    /// so `#at:put:` is a single symbol.
    pub(crate) fn lex_hash(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            Some(c) if is_alphanumeric(c) => {
                self.cursor.advance();
                let start = self.cursor.position();
                self.cursor.eat_while(|c| !is_whitespace(c));
                Ok(Token::symbol(self.cursor.slice_from(start)))
            }
            Some('(') => Ok(self.emit_special(2)),
            _ => Err(TokenError::InvalidHash {
                offset: self.token_start,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TokenError;
    use crate::token::Token;
    use crate::Lexer;

    fn lex_all(source: &str) -> Result<Vec<Token>, TokenError> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(lex_all("$$").unwrap(), vec![Token::char('$')]);
        assert_eq!(
            lex_all("$a $ ").unwrap(),
            vec![Token::char('a'), Token::char(' ')]
        );
        assert_eq!(lex_all("$é").unwrap(), vec![Token::char('é')]);
        assert_eq!(
            lex_all("$").unwrap_err(),
            TokenError::TrailingDollar { offset: 0 }
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(lex_all("`hello`").unwrap(), vec![Token::string("hello")]);
        assert_eq!(lex_all("``").unwrap(), vec![Token::string("")]);
        assert_eq!(
            lex_all("`it``s`").unwrap(),
            vec![Token::string("it`s")]
        );
        assert_eq!(lex_all("`a````").unwrap(), vec![Token::string("a``")]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(
            lex_all("`open \"not a comment\"").unwrap(),
            vec![Token::string("open \"not a comment\"")]
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(lex_all("#foo").unwrap(), vec![Token::symbol("foo")]);
        assert_eq!(
            lex_all("#at:put: #1x").unwrap(),
            vec![Token::symbol("at:put:"), Token::symbol("1x")]
        );
        assert_eq!(
            lex_all("#foo.").unwrap(),
            vec![Token::symbol("foo.")]
        );
    }

    #[test]
    fn test_literal_array_opener() {
        assert_eq!(
            lex_all("#(())").unwrap(),
            vec![
                Token::special("#("),
                Token::special("("),
                Token::special(")"),
                Token::special(")"),
            ]
        );
    }

    #[test]
    fn test_invalid_hash() {
        assert_eq!(
            lex_all("a #").unwrap_err(),
            TokenError::InvalidHash { offset: 2 }
        );
        assert_eq!(
            lex_all("# foo").unwrap_err(),
            TokenError::InvalidHash { offset: 0 }
        );
    }
}
