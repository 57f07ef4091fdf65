//! Numeric literal lexing.
//!
//! The lexer only captures the raw literal; evaluation and formatting live
//! in [`crate::numeric`].

use tracing::trace;

use crate::chars::{is_alphanumeric, is_digit};
use crate::error::{LexResult, TokenError};
use crate::numeric::{evaluate, format_number};
use crate::token::Token;

use super::Lexer;

/// Markers seen so far in the literal being captured.
///
/// Reset only at the start of each literal.
#[derive(Default)]
struct LiteralMarks {
    radix: bool,
    exponent: bool,
    dot: bool,
    minus: bool,
}

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at a digit or at `-` followed by a
    /// digit.
    ///
    /// Capture rules:
    /// - `r` and `e` may each appear once; a second one is an error
    /// - `e` clears the minus mark so the exponent may carry its own sign
    /// - `.` is taken once, and only when an alphanumeric follows it
    /// - `-` is taken once per mark
    /// - anything else that is not alphanumeric ends the literal
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let mut marks = LiteralMarks::default();

        while let Some(c) = self.cursor.current_char() {
            match c {
                'r' => {
                    if marks.radix {
                        return Err(TokenError::MultipleRadix {
                            offset: self.cursor.position(),
                        });
                    }
                    marks.radix = true;
                }
                'e' => {
                    if marks.exponent {
                        return Err(TokenError::MultipleExponent {
                            offset: self.cursor.position(),
                        });
                    }
                    marks.exponent = true;
                    marks.minus = false;
                }
                '.' if self.cursor.peek_is(1, is_alphanumeric) => {
                    if marks.dot {
                        break;
                    }
                    marks.dot = true;
                }
                '-' => {
                    if marks.minus {
                        break;
                    }
                    marks.minus = true;
                }
                c if is_alphanumeric(c) => {}
                _ => break,
            }
            self.cursor.advance();
        }

        let literal = self.cursor.slice_from(self.token_start);
        let value = evaluate(literal).map_err(|err| err.offset_by(self.token_start))?;
        trace!(literal, value, "evaluated number");

        Ok(Token::number(format_number(value)))
    }

    /// Lexes `-`: a negative literal when a digit follows, otherwise the
    /// subtraction operator.
    pub(crate) fn lex_minus(&mut self) -> LexResult<Token> {
        if self.cursor.peek_is(1, is_digit) {
            self.lex_number()
        } else {
            Ok(self.emit_special(1))
        }
    }
}
