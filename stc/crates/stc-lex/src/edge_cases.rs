//! Edge case tests for stc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Lexer, Token, TokenError, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        scan(source, 0, false).unwrap().tokens
    }

    fn lex_err(source: &str) -> TokenError {
        scan(source, 0, false).unwrap_err()
    }

    fn to_radix(mut value: u64, radix: u32) -> String {
        if value == 0 {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        while value > 0 {
            let digit = (value % u64::from(radix)) as u32;
            digits.push(std::char::from_digit(digit, radix).unwrap().to_ascii_uppercase());
            value /= u64::from(radix);
        }
        digits.iter().rev().collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let result = scan(" \t\r\n ", 0, false).unwrap();
        assert!(result.tokens.is_empty());
        assert_eq!(result.end, 5);
    }

    #[test]
    fn test_edge_comment_only() {
        assert_eq!(lex_all("\"\""), vec![Token::comment("")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        assert_eq!(lex_all(&name), vec![Token::identifier(name.as_str())]);
    }

    #[test]
    fn test_edge_deep_nesting() {
        let source = format!("{}{}", "[".repeat(500), "]".repeat(500));
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1000);
        assert!(tokens[..500].iter().all(|t| *t == Token::special("[")));
        assert!(tokens[500..].iter().all(|t| *t == Token::special("]")));
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007"), vec![Token::number("7")]);
        assert_eq!(lex_all("16r00FF"), vec![Token::number("255")]);
    }

    #[test]
    fn test_edge_exponent_scales_by_radix() {
        assert_eq!(lex_all("2r1e10"), vec![Token::number("1024")]);
        assert_eq!(lex_all("16r1e2"), vec![Token::number("256")]);
    }

    #[test]
    fn test_edge_large_exponent_is_infinite() {
        assert_eq!(lex_all("1e400"), vec![Token::number("Infinity")]);
        assert_eq!(lex_all("1e21"), vec![Token::number("1e+21")]);
    }

    #[test]
    fn test_edge_number_followed_by_identifier() {
        assert_eq!(lex_all("12ab"), vec![Token::number("12")]);
        assert_eq!(
            lex_all("3 abs"),
            vec![Token::number("3"), Token::identifier("abs")]
        );
    }

    #[test]
    fn test_edge_number_then_message() {
        assert_eq!(
            lex_all("3 + 4; * 2"),
            vec![
                Token::number("3"),
                Token::special("+"),
                Token::number("4"),
                Token::special(";"),
                Token::special("*"),
                Token::number("2"),
            ]
        );
    }

    #[test]
    fn test_edge_radix_bounds() {
        assert_eq!(lex_all("2r1"), vec![Token::number("1")]);
        assert_eq!(lex_all("36rZZ"), vec![Token::number("1295")]);
        assert!(matches!(lex_err("1r0"), TokenError::InvalidRadix { .. }));
        assert!(matches!(lex_err("37r0"), TokenError::InvalidRadix { .. }));
    }

    #[test]
    fn test_edge_invalid_digits() {
        assert_eq!(
            lex_err("2r102"),
            TokenError::InvalidDigit {
                digit: '2',
                radix: 2,
                offset: 4
            }
        );
        assert_eq!(
            lex_err("16r1.G"),
            TokenError::InvalidDigit {
                digit: 'G',
                radix: 16,
                offset: 5
            }
        );
    }

    #[test]
    fn test_edge_exponent_without_digits() {
        assert!(matches!(lex_err("3e"), TokenError::MalformedNumber { .. }));
        assert!(matches!(lex_err("2r1e"), TokenError::MalformedNumber { .. }));
    }

    #[test]
    fn test_edge_unknown_characters() {
        assert_eq!(
            lex_err("a_b"),
            TokenError::UnknownCharacter {
                character: '_',
                offset: 1
            }
        );
        assert_eq!(
            lex_err("x é"),
            TokenError::UnknownCharacter {
                character: 'é',
                offset: 2
            }
        );
        assert_eq!(
            lex_err("'single'"),
            TokenError::UnknownCharacter {
                character: '\'',
                offset: 0
            }
        );
    }

    #[test]
    fn test_edge_non_ascii_in_literals() {
        assert_eq!(
            lex_all("`héllo` \"ünïcode\" $ß"),
            vec![
                Token::string("héllo"),
                Token::comment("ünïcode"),
                Token::char('ß'),
            ]
        );
    }

    #[test]
    fn test_edge_first_error_wins() {
        assert_eq!(lex_err("$x ~ <"), TokenError::InvalidTilde { offset: 3 });
    }

    #[test]
    fn test_edge_iterator_matches_scan() {
        let source = "x <- #(1 $a `s` #sym) \"c\" [:e | e >= 2]";
        let from_iter: Vec<_> = Lexer::new(source).collect::<Result<_, _>>().unwrap();
        assert_eq!(from_iter, lex_all(source));
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_whitespace_only() {
        use proptest::prelude::*;

        proptest!(|(input in "[ \t\r\n]{0,64}")| {
            let result = scan(&input, 0, false).unwrap();
            assert!(result.tokens.is_empty());
            assert_eq!(result.end, input.len());

            let with = scan(&input, 0, true).unwrap();
            let expected = if input.is_empty() {
                vec![]
            } else {
                vec![Token::whitespace(input.as_str())]
            };
            assert_eq!(with.tokens, expected);
        });
    }

    #[test]
    fn test_property_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,40}")| {
            assert_eq!(lex_all(&input), vec![Token::identifier(input.as_str())]);

            let keyword = format!("{}:", input);
            assert_eq!(lex_all(&keyword), vec![Token::parameter(input.as_str())]);

            let argument = format!(":{}", input);
            assert_eq!(lex_all(&argument), vec![Token::block_argument(input.as_str())]);
        });
    }

    #[test]
    fn test_property_decimal_integers() {
        use proptest::prelude::*;

        proptest!(|(input in "[1-9][0-9]{0,14}")| {
            assert_eq!(lex_all(&input), vec![Token::number(input.as_str())]);

            let negative = format!("-{}", input);
            assert_eq!(lex_all(&negative), vec![Token::number(negative.as_str())]);
        });
    }

    #[test]
    fn test_property_radix_integers() {
        use proptest::prelude::*;

        proptest!(|(radix in 2u32..=36, value in 0u64..(1u64 << 40))| {
            let source = format!("{}r{}", radix, to_radix(value, radix));
            assert_eq!(lex_all(&source), vec![Token::number(value.to_string())]);
        });
    }

    #[test]
    fn test_property_strings_decode_doubled_backticks() {
        use proptest::prelude::*;

        proptest!(|(content in "[a-z `\"$#]{0,40}")| {
            let source = format!("`{}`", content.replace('`', "``"));
            let result = scan(&source, 0, false).unwrap();
            assert_eq!(result.tokens, vec![Token::string(content.as_str())]);
            assert_eq!(result.end, source.len());
        });
    }

    #[test]
    fn test_property_scan_consumes_everything_or_fails() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,64}")| {
            let first = scan(&input, 0, false);
            if let Ok(ref result) = first {
                assert_eq!(result.end, input.len());
            }
            assert_eq!(first, scan(&input, 0, false));
        });
    }

    #[test]
    fn test_property_whitespace_flag_only_adds_whitespace() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 +<=\\-.\\t\\n]{0,64}")| {
            let without = scan(&input, 0, false);
            let with = scan(&input, 0, true).map(|result| {
                result
                    .tokens
                    .into_iter()
                    .filter(|t| t.kind != TokenKind::Whitespace)
                    .collect::<Vec<_>>()
            });
            assert_eq!(with, without.map(|result| result.tokens));
        });
    }
}
