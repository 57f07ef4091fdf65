//! Numeric literal evaluation.
//!
//! The scanner captures the raw text of a literal; this module turns it
//! into an `f64`. Accepted shapes:
//!
//! - `123`, `-123`, `1.5`: plain base-10
//! - `3e-2`: base-10 mantissa times `10^exponent`
//! - `16rAC.DC`, `8r-377`, `2r11e6`: `<radix>r<digits>[.<digits>][e<exponent>]`
//!   where digits are read in the radix (letters case-insensitive up to
//!   base 36), a `-` right after `r` negates the result, and the exponent
//!   scales by `radix^exponent`
//!
//! Plain and exponent parts follow prefix parsing: trailing characters the
//! number grammar does not accept are ignored, so `12ab` evaluates to 12.
//! Overflow is not an error; it yields an infinite value.
//!
//! Errors carry offsets relative to the start of the literal.

mod format;

pub use format::format_number;

use crate::chars::digit_value;
use crate::error::{LexResult, TokenError};

/// Evaluates a raw numeric literal.
///
/// ```
/// use stc_lex::numeric::evaluate;
///
/// assert_eq!(evaluate("8r377").unwrap(), 255.0);
/// assert_eq!(evaluate("16r-1.C").unwrap(), -1.75);
/// assert_eq!(evaluate("2r11e6").unwrap(), 192.0);
/// assert!(evaluate("8r9").is_err());
/// ```
pub fn evaluate(literal: &str) -> LexResult<f64> {
    match literal.find('r') {
        Some(r_index) => evaluate_radix(literal, r_index),
        None => evaluate_decimal(literal),
    }
}

fn evaluate_decimal(literal: &str) -> LexResult<f64> {
    let malformed = |offset| TokenError::MalformedNumber {
        literal: literal.to_string(),
        offset,
    };

    match literal.find('e') {
        Some(e_index) => {
            let base = parse_float_prefix(&literal[..e_index]).ok_or_else(|| malformed(0))?;
            let exponent =
                parse_int_prefix(&literal[e_index + 1..]).ok_or_else(|| malformed(e_index))?;
            Ok(base * 10f64.powf(exponent))
        }
        None => parse_float_prefix(literal).ok_or_else(|| malformed(0)),
    }
}

fn evaluate_radix(literal: &str, r_index: usize) -> LexResult<f64> {
    let radix_text = &literal[..r_index];
    let radix = parse_int_prefix(radix_text)
        .filter(|r| (2.0..=36.0).contains(r))
        .ok_or_else(|| TokenError::InvalidRadix {
            radix: radix_text.to_string(),
            offset: 0,
        })? as u32;

    let body_start = r_index + 1;
    let body = &literal[body_start..];
    let (mantissa, exponent) = match body.find('e') {
        Some(e_index) => (&body[..e_index], Some((e_index, &body[e_index + 1..]))),
        None => (body, None),
    };

    let negative = mantissa.starts_with('-');
    let digits_start = body_start + usize::from(negative);
    let digits = &mantissa[usize::from(negative)..];
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let base = f64::from(radix);
    let mut value = 0.0;
    for (i, c) in integer.char_indices() {
        let digit = radix_digit(c, radix, digits_start + i)?;
        value = value * base + f64::from(digit);
    }

    if let Some(fraction) = fraction {
        let fraction_start = digits_start + integer.len() + 1;
        for (k, (i, c)) in fraction.char_indices().enumerate() {
            let digit = radix_digit(c, radix, fraction_start + i)?;
            value += f64::from(digit) * base.powf(-((k + 1) as f64));
        }
    }

    if let Some((e_index, text)) = exponent {
        let exponent = parse_int_prefix(text).ok_or_else(|| TokenError::MalformedNumber {
            literal: literal.to_string(),
            offset: body_start + e_index,
        })?;
        value *= base.powf(exponent);
    }

    Ok(if negative { -value } else { value })
}

fn radix_digit(c: char, radix: u32, offset: usize) -> LexResult<u32> {
    digit_value(c)
        .filter(|&d| d < radix)
        .ok_or(TokenError::InvalidDigit {
            digit: c,
            radix,
            offset,
        })
}

/// Length of the run of ASCII digits at the start of `bytes`.
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Parses the longest `[+-]?digits` prefix of `text`.
///
/// Returns `None` when there is no digit to read.
pub(crate) fn parse_int_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

/// Parses the longest decimal floating-point prefix of `text`:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
///
/// Returns `None` when the mantissa has no digit.
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = sign_len(bytes);

    let integer = digit_run(&bytes[end..]);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digit_run(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    text[..end].parse().ok()
}
