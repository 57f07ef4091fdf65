//! Per-token JavaScript text.

use stc_lex::{Token, TokenKind};

use crate::error::{ConversionError, Result};

/// Appends the JavaScript form of `token` to `out`.
pub(crate) fn emit_token(token: &Token, out: &mut String) -> Result<()> {
    match token.kind {
        TokenKind::Number | TokenKind::Whitespace => out.push_str(&token.value),
        TokenKind::String => emit_template_literal(&token.value, out),
        TokenKind::Symbol => {
            out.push_str("Symbol.for(");
            out.push_str(&serde_json::to_string(&token.value)?);
            out.push(')');
        }
        TokenKind::Comment => emit_line_comments(&token.value, out),
        TokenKind::Special => out.push_str(operator(&token.value)?),
        kind => {
            return Err(ConversionError::UnknownToken {
                kind,
                value: token.value.clone(),
                offset: None,
            })
        }
    }
    Ok(())
}

/// JavaScript spelling of a special-character token.
fn operator(spelling: &str) -> Result<&'static str> {
    let js = match spelling {
        "+" => "+",
        "-" => "-",
        "*" => "*",
        "/" => "/",
        "=" => "==",
        "==" => "===",
        other => {
            return Err(ConversionError::UnknownOperator {
                operator: other.to_string(),
                offset: None,
            })
        }
    };
    Ok(js)
}

/// Backtick template literal. `\`, `` ` `` and `${` are escaped so the
/// text comes out unchanged.
fn emit_template_literal(text: &str, out: &mut String) {
    out.push('`');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out.push('`');
}

/// `// ` before every line of the comment.
fn emit_line_comments(text: &str, out: &mut String) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("// ");
        out.push_str(line);
    }
}
