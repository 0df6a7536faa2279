//! Operator, arrow, and comparison lexing (§4.1).
//!
//! Single-byte arithmetic and single-byte comparison operators both emit
//! `TokenKind::BinaryOperator`; the parser's precedence table, not the
//! lexer, is what tells `<` from `+`. Two-character equality-style
//! comparisons (`==`, `!=`, `<=`, `>=`) get their own `BinaryComparisonOperator`
//! kind, and `->`/`<-` are dedicated arrow tokens rather than operators.

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_arith_operator(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        let byte = self.cursor.current_char() as i64;
        self.cursor.advance();
        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::BinaryOperator, line, column, length).with_int(byte)
    }

    pub(crate) fn lex_minus_or_arrow(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // '-'
        if self.cursor.current_char() == '>' {
            self.cursor.advance();
            let length = (self.cursor.position() - start) as u32;
            return Token::new(TokenKind::RightArrow, line, column, length);
        }
        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::BinaryOperator, line, column, length).with_int('-' as i64)
    }

    pub(crate) fn lex_less(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // '<'
        match self.cursor.current_char() {
            '=' => {
                self.cursor.advance();
                let length = (self.cursor.position() - start) as u32;
                Token::new(TokenKind::BinaryComparisonOperator, line, column, length).with_int('<' as i64)
            }
            '-' => {
                self.cursor.advance();
                let length = (self.cursor.position() - start) as u32;
                Token::new(TokenKind::LeftArrow, line, column, length)
            }
            _ => {
                let length = (self.cursor.position() - start) as u32;
                Token::new(TokenKind::BinaryOperator, line, column, length).with_int('<' as i64)
            }
        }
    }

    pub(crate) fn lex_greater(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // '>'
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            let length = (self.cursor.position() - start) as u32;
            return Token::new(TokenKind::BinaryComparisonOperator, line, column, length).with_int('>' as i64);
        }
        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::BinaryOperator, line, column, length).with_int('>' as i64)
    }

    pub(crate) fn lex_equals(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // '='
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            let length = (self.cursor.position() - start) as u32;
            return Token::new(TokenKind::BinaryComparisonOperator, line, column, length).with_int('=' as i64);
        }
        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::Assignment, line, column, length)
    }

    pub(crate) fn lex_bang(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // '!'
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            let length = (self.cursor.position() - start) as u32;
            return Token::new(TokenKind::BinaryComparisonOperator, line, column, length).with_int('!' as i64);
        }
        let span = self.current_span(start);
        self.report_error(span, "'!' is not a valid standalone operator");
        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::Error, line, column, length)
    }
}
