//! Identifier lexing.
//!
//! Names are ASCII letters followed by letters or digits. A name directly
//! followed by `:` is a keyword parameter; a `:` directly followed by a
//! name is a block argument.

use crate::chars::{is_alpha, is_alphanumeric};
use crate::error::{LexResult, TokenError};
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, or a parameter when a `:` follows it.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_alphanumeric);
        let name = self.cursor.slice_from(self.token_start);

        if self.cursor.match_char(':') {
            Token::parameter(name)
        } else {
            Token::identifier(name)
        }
    }

    /// Lexes `:name` as a block argument.
    ///
    /// A `:` at end of input or before anything other than a letter is an
    /// error.
    pub(crate) fn lex_block_argument(&mut self) -> LexResult<Token> {
        match self.cursor.peek_char(1) {
            None => Err(TokenError::TrailingColon {
                offset: self.token_start,
            }),
            Some(c) if is_alpha(c) => {
                self.cursor.advance();
                let start = self.cursor.position();
                self.cursor.eat_while(is_alphanumeric);
                Ok(Token::block_argument(self.cursor.slice_from(start)))
            }
            Some(_) => Err(TokenError::UnknownCharacter {
                character: ':',
                offset: self.token_start,
            }),
        }
    }
}
