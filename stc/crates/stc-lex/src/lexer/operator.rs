//! Special characters and operators.
//!
//! Two-character operators are matched with one character of lookahead.
//! `<`, `>`, `\` and `~` cannot end the input.

use crate::error::{LexResult, TokenError};
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// One of `+ * . ; [ ] ( ) | ^ & @`.
    pub(crate) fn lex_single_special(&mut self) -> Token {
        self.emit_special(1)
    }

    /// `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token {
        let len = if self.cursor.peek_char(1) == Some('=') { 2 } else { 1 };
        self.emit_special(len)
    }

    /// `/` or `//`.
    pub(crate) fn lex_slash(&mut self) -> Token {
        let len = if self.cursor.peek_char(1) == Some('/') { 2 } else { 1 };
        self.emit_special(len)
    }

    /// `\\`; a lone backslash is an error.
    pub(crate) fn lex_backslash(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            Some('\\') => Ok(self.emit_special(2)),
            _ => Err(TokenError::TrailingBackslash {
                offset: self.token_start,
            }),
        }
    }

    /// `>=` or `>`.
    pub(crate) fn lex_greater(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            None => Err(TokenError::TrailingGreater {
                offset: self.token_start,
            }),
            Some('=') => Ok(self.emit_special(2)),
            Some(_) => Ok(self.emit_special(1)),
        }
    }

    /// `<-`, `<=` or `<`.
    pub(crate) fn lex_less(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            None => Err(TokenError::TrailingLess {
                offset: self.token_start,
            }),
            Some('-' | '=') => Ok(self.emit_special(2)),
            Some(_) => Ok(self.emit_special(1)),
        }
    }

    /// `~~` or `~=`.
    pub(crate) fn lex_tilde(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            Some('~' | '=') => Ok(self.emit_special(2)),
            _ => Err(TokenError::InvalidTilde {
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

    fn specials(source: &str) -> Vec<String> {
        Lexer::new(source)
            .map(|token| token.unwrap().value)
            .collect()
    }

    #[test]
    fn test_single_specials() {
        assert_eq!(
            specials("+ * . ; [ ] ( ) | ^ & @"),
            vec!["+", "*", ".", ";", "[", "]", "(", ")", "|", "^", "&", "@"]
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            specials("== = // / \\\\ >= > <- <= < ~~ ~="),
            vec!["==", "=", "//", "/", "\\\\", ">=", ">", "<-", "<=", "<", "~~", "~="]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            Lexer::new("a<=b").collect::<Result<Vec<_>, _>>().unwrap(),
            vec![
                Token::identifier("a"),
                Token::special("<="),
                Token::identifier("b"),
            ]
        );
        assert_eq!(specials("<<-"), vec!["<", "<-"]);
        assert_eq!(specials("==="), vec!["==", "="]);
    }

    #[test]
    fn test_bare_greater_before_operand() {
        assert_eq!(
            Lexer::new("a > b").collect::<Result<Vec<_>, _>>().unwrap(),
            vec![
                Token::identifier("a"),
                Token::special(">"),
                Token::identifier("b"),
            ]
        );
    }

    #[test]
    fn test_sentinel_errors() {
        let first_error = |source: &str| Lexer::new(source).find_map(Result::err);

        assert_eq!(
            first_error("a <"),
            Some(TokenError::TrailingLess { offset: 2 })
        );
        assert_eq!(
            first_error("a >"),
            Some(TokenError::TrailingGreater { offset: 2 })
        );
        assert_eq!(
            first_error("\\"),
            Some(TokenError::TrailingBackslash { offset: 0 })
        );
        assert_eq!(
            first_error("\\ x"),
            Some(TokenError::TrailingBackslash { offset: 0 })
        );
        assert_eq!(
            first_error("a ~ b"),
            Some(TokenError::InvalidTilde { offset: 2 })
        );
        assert_eq!(first_error("~"), Some(TokenError::InvalidTilde { offset: 0 }));
    }
}
