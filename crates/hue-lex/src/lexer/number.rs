//! Numeric literal lexing (§4.1).
//!
//! Hue has two numeric forms: hexadecimal integers (`0x` followed by hex
//! digits, underscores allowed as separators) and decimal numbers, which
//! start as an `IntLiteral` and promote to `FloatLiteral` the moment a
//! fractional `.digit` or an `e`/`E` exponent appears.

use crate::token::{Radix, Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();

        if self.cursor.current_char() == '0' && matches!(self.cursor.peek_char(1), 'x' | 'X') {
            self.cursor.advance();
            self.cursor.advance();
            return self.lex_hex_integer(start, line, column);
        }

        if self.cursor.current_char() == '.' {
            return self.lex_decimal_number(start, line, column, true);
        }

        self.lex_decimal_number(start, line, column, false)
    }

    fn lex_hex_integer(&mut self, start: usize, line: u32, column: u32) -> Token {
        let digits_start = self.cursor.position();
        while matches!(self.cursor.current_char(), '0'..='9' | 'a'..='f' | 'A'..='F' | '_') {
            self.cursor.advance();
        }

        if self.cursor.position() == digits_start {
            let span = self.current_span(start);
            self.report_error(span, "expected hex digits after '0x'");
            return Token::new(TokenKind::Error, line, column, (self.cursor.position() - start) as u32);
        }

        let digits: String = self.cursor.slice_from(digits_start).chars().filter(|&c| c != '_').collect();
        let length = (self.cursor.position() - start) as u32;
        match i64::from_str_radix(&digits, 16) {
            Ok(value) => Token::new(TokenKind::IntLiteral, line, column, length)
                .with_int(value)
                .with_radix(Radix::Hex)
                .with_text(hue_util::Symbol::intern(&digits)),
            Err(e) => {
                let span = self.current_span(start);
                self.report_error(span, format!("hex integer literal out of range: {}", e));
                Token::new(TokenKind::Error, line, column, length)
            }
        }
    }

    fn lex_decimal_number(&mut self, start: usize, line: u32, column: u32, leading_dot: bool) -> Token {
        let mut is_float = leading_dot;

        if leading_dot {
            self.cursor.advance(); // '.'
        } else {
            while matches!(self.cursor.current_char(), '0'..='9' | '_') {
                self.cursor.advance();
            }
            if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
                is_float = true;
                self.cursor.advance();
            }
        }

        if is_float {
            while matches!(self.cursor.current_char(), '0'..='9' | '_') {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let exponent_start = self.cursor.position();
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let exponent_digits_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.cursor.position() == exponent_digits_start {
                let span = self.current_span(start);
                self.report_error(span, "malformed exponent: expected digits after 'e'");
                let length = (self.cursor.position() - start) as u32;
                return Token::new(TokenKind::Error, line, column, length);
            }
            is_float = true;
            let _ = exponent_start;
        }

        let length = (self.cursor.position() - start) as u32;
        let text: String = self.cursor.slice_from(start).chars().filter(|&c| c != '_').collect();

        if is_float {
            match text.parse::<f64>() {
                Ok(value) => Token::new(TokenKind::FloatLiteral, line, column, length).with_double(value),
                Err(e) => {
                    let span = self.current_span(start);
                    self.report_error(span, format!("invalid floating point literal '{}': {}", text, e));
                    Token::new(TokenKind::Error, line, column, length)
                }
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Token::new(TokenKind::IntLiteral, line, column, length)
                    .with_int(value)
                    .with_radix(Radix::Decimal)
                    .with_text(hue_util::Symbol::intern(&text)),
                Err(e) => {
                    let span = self.current_span(start);
                    self.report_error(span, format!("integer literal out of range '{}': {}", text, e));
                    Token::new(TokenKind::Error, line, column, length)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hue_util::Handler;

    use crate::lexer::core::Lexer;
    use crate::token::{Radix, TokenKind};

    fn lex_first(source: &str) -> crate::token::Token {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token();
        lexer.next_token()
    }

    #[test]
    fn decimal_integer() {
        let tok = lex_first("42");
        assert_eq!(tok.kind, TokenKind::IntLiteral);
        assert_eq!(tok.int_value, Some(42));
        assert_eq!(tok.radix, Some(Radix::Decimal));
    }

    #[test]
    fn hex_integer() {
        let tok = lex_first("0xFF_00");
        assert_eq!(tok.kind, TokenKind::IntLiteral);
        assert_eq!(tok.int_value, Some(0xFF00));
        assert_eq!(tok.radix, Some(Radix::Hex));
        assert_eq!(tok.text_value.unwrap().as_str(), "FF00");
    }

    #[test]
    fn decimal_integer_text_keeps_original_digits_without_underscores() {
        let tok = lex_first("1_000");
        assert_eq!(tok.text_value.unwrap().as_str(), "1000");
    }

    #[test]
    fn float_with_fraction() {
        let tok = lex_first("3.14");
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert!((tok.double_value.unwrap() - 3.14).abs() < 1e-9);
    }

    #[test]
    fn float_with_exponent_promotes_int() {
        let tok = lex_first("1e10");
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert!((tok.double_value.unwrap() - 1e10).abs() < 1.0);
    }

    #[test]
    fn leading_dot_float() {
        let tok = lex_first(".5");
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert!((tok.double_value.unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_exponent_is_error_token() {
        let tok = lex_first("1e");
        assert_eq!(tok.kind, TokenKind::Error);
    }

    #[test]
    fn underscores_in_decimal_are_separators() {
        let tok = lex_first("1_000_000");
        assert_eq!(tok.int_value, Some(1_000_000));
    }
}
