//! Character classes used by the scanner.
//!
//! The dialect is ASCII-only for names and digits: letters are `a-z` and
//! `A-Z`, digits are `0-9`. Non-ASCII text may appear inside strings,
//! comments and character literals but never starts or continues a name.

/// Whitespace separating tokens: space, tab, newline, carriage return.
///
/// ```
/// use stc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// ASCII letter.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII letter or decimal digit.
///
/// ```
/// use stc_lex::chars::is_alphanumeric;
///
/// assert!(is_alphanumeric('Z'));
/// assert!(is_alphanumeric('7'));
/// assert!(!is_alphanumeric('_'));
/// assert!(!is_alphanumeric('é'));
/// ```
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Characters that always form a one-character special token.
///
/// `>` is absent: it is only a bare special after `>=` has been ruled out.
#[inline]
pub fn is_single_special(c: char) -> bool {
    matches!(
        c,
        '+' | '*' | '.' | ';' | '[' | ']' | '(' | ')' | '|' | '^' | '&' | '@'
    )
}

/// Value of `c` as a digit in base 36, case-insensitive.
///
/// Returns `None` for anything that is not `0-9`, `a-z` or `A-Z`.
///
/// ```
/// use stc_lex::chars::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('c'), Some(12));
/// assert_eq!(digit_value('C'), Some(12));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('-'), None);
/// ```
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(36)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_specials_exclude_overloaded() {
        for c in ['>', '<', '-', '=', '/', ':', '~', '#', '$'] {
            assert!(!is_single_special(c), "{c} must go through its own rule");
        }
        for c in "+*.;[]()|^&@".chars() {
            assert!(is_single_special(c));
        }
    }

    #[test]
    fn test_digit_value_range() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('a'), Some(10));
        assert_eq!(digit_value('z'), Some(35));
        assert_eq!(digit_value('.'), None);
    }
}
