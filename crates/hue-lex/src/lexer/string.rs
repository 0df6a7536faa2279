//! Text (`"..."`) and data (`'...'`) literal lexing (§4.1).
//!
//! The two literal forms share the overall scan-and-unescape shape but
//! accept different escape alphabets: text literals allow a `\uHHHHHHHH`
//! Unicode escape (one to eight hex digits) and a backslash-newline line
//! continuation that text files need and byte blobs do not; data literals
//! allow a `\xHH` byte escape (exactly two hex digits) that would be
//! meaningless once decoded as Unicode scalars.

use hue_util::Symbol;

use crate::token::{Token, TokenKind};
use crate::unicode::parse_hex_codepoint;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_text_literal(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // opening '"'

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                let span = self.current_span(start);
                self.report_error(span, "unterminated text literal");
                break;
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    if let Some(c) = self.parse_text_escape(start) {
                        content.push(c);
                    }
                }
                c => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }

        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::TextLiteral, line, column, length).with_text(Symbol::intern(&content))
    }

    pub(crate) fn lex_data_literal(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();
        self.cursor.advance(); // opening '\''

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                let span = self.current_span(start);
                self.report_error(span, "unterminated data literal");
                break;
            }
            match self.cursor.current_char() {
                '\'' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    if let Some(c) = self.parse_data_escape(start) {
                        content.push(c);
                    }
                }
                c => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }

        let length = (self.cursor.position() - start) as u32;
        Token::new(TokenKind::DataLiteral, line, column, length).with_text(Symbol::intern(&content))
    }

    /// `\t \n \r \\ \" \0` and `\uHHHHHHHH` (one to eight hex digits), plus a
    /// backslash directly followed by a newline, which continues the
    /// literal onto the next source line without inserting a character.
    fn parse_text_escape(&mut self, literal_start: usize) -> Option<char> {
        if self.cursor.is_at_end() {
            let span = self.current_span(literal_start);
            self.report_error(span, "unterminated escape sequence");
            return None;
        }
        let c = self.cursor.current_char();
        match c {
            '\n' => {
                self.cursor.advance();
                None
            }
            't' => {
                self.cursor.advance();
                Some('\t')
            }
            'n' => {
                self.cursor.advance();
                Some('\n')
            }
            'r' => {
                self.cursor.advance();
                Some('\r')
            }
            '\\' => {
                self.cursor.advance();
                Some('\\')
            }
            '"' => {
                self.cursor.advance();
                Some('"')
            }
            '0' => {
                self.cursor.advance();
                Some('\0')
            }
            'u' => {
                self.cursor.advance();
                let mut hex = String::new();
                while hex.len() < 8 && self.cursor.current_char().is_ascii_hexdigit() {
                    hex.push(self.cursor.current_char());
                    self.cursor.advance();
                }
                match parse_hex_codepoint(&hex).and_then(char::from_u32) {
                    Some(ch) => Some(ch),
                    None => {
                        let span = self.current_span(literal_start);
                        self.report_error(span, "invalid unicode escape sequence");
                        None
                    }
                }
            }
            other => {
                self.cursor.advance();
                let span = self.current_span(literal_start);
                self.report_error(span, format!("unknown escape sequence '\\{}'", other));
                None
            }
        }
    }

    /// `\t \n \r \\ \' \0` and `\xHH` (exactly two hex digits).
    fn parse_data_escape(&mut self, literal_start: usize) -> Option<char> {
        if self.cursor.is_at_end() {
            let span = self.current_span(literal_start);
            self.report_error(span, "unterminated escape sequence");
            return None;
        }
        let c = self.cursor.current_char();
        match c {
            't' => {
                self.cursor.advance();
                Some('\t')
            }
            'n' => {
                self.cursor.advance();
                Some('\n')
            }
            'r' => {
                self.cursor.advance();
                Some('\r')
            }
            '\\' => {
                self.cursor.advance();
                Some('\\')
            }
            '\'' => {
                self.cursor.advance();
                Some('\'')
            }
            '0' => {
                self.cursor.advance();
                Some('\0')
            }
            'x' => {
                self.cursor.advance();
                let mut hex = String::new();
                for _ in 0..2 {
                    if self.cursor.current_char().is_ascii_hexdigit() {
                        hex.push(self.cursor.current_char());
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
                if hex.len() == 2 {
                    u8::from_str_radix(&hex, 16).ok().map(|b| b as char)
                } else {
                    let span = self.current_span(literal_start);
                    self.report_error(span, "invalid byte escape sequence");
                    None
                }
            }
            other => {
                self.cursor.advance();
                let span = self.current_span(literal_start);
                self.report_error(span, format!("unknown escape sequence '\\{}'", other));
                None
            }
        }
    }
}
