//! Edge case tests for stc-js

#[cfg(test)]
mod tests {
    use crate::{render, ConversionError};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(render(" \r\n\t").unwrap(), " \r\n\t");
    }

    #[test]
    fn test_edge_symbol_runs_to_whitespace() {
        assert_eq!(render("#a+b 1").unwrap(), "Symbol.for(\"a+b\") 1");
    }

    #[test]
    fn test_edge_number_formats() {
        assert_eq!(render("1e21").unwrap(), "1e+21");
        assert_eq!(render("1e400").unwrap(), "Infinity");
        assert_eq!(render("16rAC.DC").unwrap(), "172.859375");
        assert_eq!(render("-0").unwrap(), "0");
    }

    #[test]
    fn test_edge_multi_line_comment_stays_commented() {
        let js = render("1 \"one\ntwo\"\n2").unwrap();
        assert_eq!(js, "1 // one\n// two\n2");
    }

    #[test]
    fn test_edge_literal_array_is_unsupported() {
        assert!(matches!(
            render("#(1 2)"),
            Err(ConversionError::UnknownOperator { offset: Some(0), .. })
        ));
    }

    #[test]
    fn test_edge_statement_period_is_unsupported() {
        assert!(matches!(
            render("1 + 2."),
            Err(ConversionError::UnknownOperator { offset: Some(5), .. })
        ));
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_arithmetic_passes_through() {
        use proptest::prelude::*;

        proptest!(|(input in "[1-9][0-9]{0,5}( {0,3}[+*/] {0,3}[1-9][0-9]{0,5}){0,8}")| {
            assert_eq!(render(&input).unwrap(), input);
        });
    }

    #[test]
    fn test_property_strings_render_as_template_literals() {
        use proptest::prelude::*;

        proptest!(|(content in "[a-z `]{0,30}")| {
            let source = format!("`{}`", content.replace('`', "``"));
            let expected = format!("`{}`", content.replace('`', "\\`"));
            assert_eq!(render(&source).unwrap(), expected);
        });
    }
}
