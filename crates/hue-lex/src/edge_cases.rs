//! Edge case tests for the Hue lexer.

#[cfg(test)]
mod tests {
    use hue_util::Handler;

    use crate::lexer::Lexer;
    use crate::token::{Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_end() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn empty_source_yields_only_the_synthetic_newline() {
        let t = lex_all("");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::NewLine);
    }

    #[test]
    fn single_char_identifier() {
        let t = lex_all("x");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].text_value.unwrap().as_str(), "x");
    }

    #[test]
    fn long_identifier_round_trips() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t[1].text_value.unwrap().as_str(), name);
    }

    #[test]
    fn keywords_are_not_lexed_as_identifiers() {
        let t = lex_all("func if");
        assert_eq!(t[1].kind, TokenKind::Func);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn hex_bounds() {
        let t = lex_all("0x0 0xFF");
        assert_eq!(t[1].int_value, Some(0));
        assert_eq!(t[2].int_value, Some(255));
    }

    #[test]
    fn empty_text_literal() {
        let t = lex_all("\"\"");
        assert_eq!(t[1].kind, TokenKind::TextLiteral);
        assert_eq!(t[1].text_value.unwrap().as_str(), "");
    }

    #[test]
    fn empty_data_literal() {
        let t = lex_all("''");
        assert_eq!(t[1].kind, TokenKind::DataLiteral);
        assert_eq!(t[1].text_value.unwrap().as_str(), "");
    }

    #[test]
    fn all_delimiters() {
        let t = lex_all("( ) [ ] , ; : . { }");
        let kinds: Vec<_> = t.iter().map(|tok| tok.kind).collect();
        assert!(kinds.contains(&TokenKind::LeftParen));
        assert!(kinds.contains(&TokenKind::RightParen));
        assert!(kinds.contains(&TokenKind::MapLiteral));
    }

    #[test]
    fn nested_parens() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|tok| tok.kind == TokenKind::LeftParen).count(), 3);
    }

    #[test]
    fn case_sensitive_keywords() {
        let t = lex_all("If if");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn bools() {
        let t = lex_all("true false");
        assert_eq!(t[1].int_value, Some(1));
        assert_eq!(t[2].int_value, Some(0));
    }

    #[test]
    fn scientific_notation_floats() {
        let t = lex_all("1e10 1.5e-3");
        assert!(t[1..].iter().all(|tok| tok.kind == TokenKind::FloatLiteral));
    }

    #[test]
    fn all_type_keywords() {
        let t = lex_all("Bool Int Float Byte Char");
        let kinds: Vec<_> = t[1..].iter().map(|tok| tok.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bool,
                TokenKind::IntSymbol,
                TokenKind::FloatSymbol,
                TokenKind::Byte,
                TokenKind::Char,
            ]
        );
    }

    #[test]
    fn unterminated_text_literal_reports_error() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("\"unterminated", &handler);
        lexer.next_token();
        lexer.next_token();
        assert!(handler.has_errors());
    }

    #[test]
    fn unterminated_data_literal_reports_error() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("'x", &handler);
        lexer.next_token();
        lexer.next_token();
        assert!(handler.has_errors());
    }

    #[test]
    fn invalid_character_is_flagged_but_scanning_continues() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("@ func", &handler);
        loop {
            let tok = lexer.next_token();
            if tok.is_end() {
                break;
            }
        }
        assert!(handler.has_errors());
    }

    #[test]
    fn consecutive_arithmetic_operators_lex_individually() {
        let t = lex_all("+++");
        assert!(t.len() >= 3);
    }

    #[test]
    fn indentation_after_blank_lines_is_the_last_run() {
        let t = lex_all("a\n\n  b");
        let newline = t.iter().find(|tok| tok.kind == TokenKind::NewLine && tok.line > 1).unwrap();
        assert_eq!(newline.length, 2);
    }

    #[test]
    fn leading_zero_is_a_valid_decimal() {
        assert!(!lex_all("007").is_empty());
    }

    // ------------------------------------------------------------------
    // PROPERTY-BASED TESTS - arbitrary inputs via proptest
    // ------------------------------------------------------------------

    proptest::proptest! {
        #[test]
        fn arbitrary_ascii_identifiers_lex_as_a_single_identifier_token(
            name in "[a-zA-Z_][a-zA-Z0-9_]{0,40}"
        ) {
            let t = lex_all(&name);
            // one synthetic leading NewLine plus exactly one Identifier.
            prop_assert_eq!(t.len(), 2);
            prop_assert_eq!(t[1].kind, TokenKind::Identifier);
        }

        #[test]
        fn arbitrary_decimal_digit_runs_lex_as_one_int_literal(
            digits in "[1-9][0-9_]{0,15}"
        ) {
            let t = lex_all(&digits);
            prop_assert_eq!(t.len(), 2);
            prop_assert_eq!(t[1].kind, TokenKind::IntLiteral);
        }

        #[test]
        fn arbitrary_hex_digit_runs_lex_as_one_hex_int_literal(
            digits in "[0-9a-fA-F]{1,12}"
        ) {
            let source = format!("0x{digits}");
            let t = lex_all(&source);
            prop_assert_eq!(t.len(), 2);
            prop_assert_eq!(t[1].kind, TokenKind::IntLiteral);
            prop_assert_eq!(t[1].radix, Some(crate::token::Radix::Hex));
        }

        #[test]
        fn arbitrary_quoted_text_without_escapes_lexes_as_one_text_literal(
            body in "[a-zA-Z0-9 ]{0,60}"
        ) {
            let source = format!("\"{body}\"");
            let t = lex_all(&source);
            prop_assert_eq!(t.len(), 2);
            prop_assert_eq!(t[1].kind, TokenKind::TextLiteral);
        }

        /// Token columns never regress within a single line: §4.1's
        /// per-scalar column bookkeeping must stay monotonic non-decreasing
        /// as the lexer walks left to right across one physical line.
        #[test]
        fn token_columns_are_monotonic_within_a_line(
            words in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 1..8)
        ) {
            let source = words.join(" ");
            let t = lex_all(&source);
            let mut last_column = 0u32;
            for tok in t.iter().filter(|tok| tok.line == 1) {
                prop_assert!(tok.column >= last_column);
                last_column = tok.column;
            }
        }
    }
}
