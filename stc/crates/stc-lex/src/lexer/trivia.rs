//! Whitespace and comments.

use crate::chars::is_whitespace;
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a maximal whitespace run.
    ///
    /// The caller decides whether the run is emitted.
    pub(crate) fn lex_whitespace(&mut self) -> Token {
        self.cursor.eat_while(is_whitespace);
        Token::whitespace(self.cursor.slice_from(self.token_start))
    }

    /// Double-quoted comment. Comments do not nest; an unterminated comment
    /// runs to end of input.
    pub(crate) fn lex_comment(&mut self) -> Token {
        self.cursor.advance();
        let start = self.cursor.position();
        self.cursor.eat_while(|c| c != '"');
        let text = self.cursor.slice_from(start);
        self.cursor.match_char('"');
        Token::comment(text)
    }
}
