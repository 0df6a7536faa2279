//! Identifier and keyword lexing (§4.1, §9).
//!
//! An identifier is a run of ident-continue characters, possibly chained
//! with `:` or `/` separators as long as each separator is immediately
//! followed by another ident-start character — `a:b:c` and `pkg/mod` lex
//! as a single path-qualified identifier token rather than `Identifier`,
//! `Colon`, `Identifier`. A separator not followed by an identifier is
//! left for the top-level dispatcher (so bare `/` still divides, and bare
//! `:` still introduces whatever the standalone `Colon` token is used for).

use hue_util::Symbol;

use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let line = self.token_start_line();
        let column = self.token_start_column();
        let start = self.cursor.position();

        self.consume_ident_run();

        loop {
            let sep = self.cursor.current_char();
            if (sep == ':' || sep == '/') && is_ident_start(self.cursor.peek_char(1)) {
                self.cursor.advance(); // separator
                self.consume_ident_run();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start);
        let length = text.len() as u32;

        if let Some(tok) = Self::keyword_token(text, line, column, length) {
            return tok;
        }

        Token::new(TokenKind::Identifier, line, column, length).with_text(Symbol::intern(text))
    }

    fn consume_ident_run(&mut self) {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    fn keyword_token(text: &str, line: u32, column: u32, length: u32) -> Option<Token> {
        let kind = match text {
            "func" => TokenKind::Func,
            "extern" => TokenKind::External,
            "nil" => TokenKind::Nil,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "struct" => TokenKind::Structure,
            "MUTABLE" => TokenKind::Mutable,
            "Bool" => TokenKind::Bool,
            "Int" => TokenKind::IntSymbol,
            "Float" => TokenKind::FloatSymbol,
            "Byte" => TokenKind::Byte,
            "Char" => TokenKind::Char,
            "true" => return Some(Token::new(TokenKind::BoolLiteral, line, column, length).with_int(1)),
            "false" => return Some(Token::new(TokenKind::BoolLiteral, line, column, length).with_int(0)),
            _ => return None,
        };
        Some(Token::new(kind, line, column, length))
    }
}

#[cfg(test)]
mod tests {
    use hue_util::Handler;

    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    fn lex_first(source: &str) -> crate::token::Token {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token();
        lexer.next_token()
    }

    #[test]
    fn plain_identifier() {
        let tok = lex_first("foo_bar");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text_value.unwrap().as_str(), "foo_bar");
    }

    #[test]
    fn keywords() {
        assert_eq!(lex_first("func").kind, TokenKind::Func);
        assert_eq!(lex_first("extern").kind, TokenKind::External);
        assert_eq!(lex_first("nil").kind, TokenKind::Nil);
        assert_eq!(lex_first("if").kind, TokenKind::If);
        assert_eq!(lex_first("else").kind, TokenKind::Else);
        assert_eq!(lex_first("struct").kind, TokenKind::Structure);
        assert_eq!(lex_first("MUTABLE").kind, TokenKind::Mutable);
    }

    #[test]
    fn type_keywords() {
        assert_eq!(lex_first("Bool").kind, TokenKind::Bool);
        assert_eq!(lex_first("Int").kind, TokenKind::IntSymbol);
        assert_eq!(lex_first("Float").kind, TokenKind::FloatSymbol);
        assert_eq!(lex_first("Byte").kind, TokenKind::Byte);
        assert_eq!(lex_first("Char").kind, TokenKind::Char);
    }

    #[test]
    fn bool_literals() {
        let t = lex_first("true");
        assert_eq!(t.kind, TokenKind::BoolLiteral);
        assert_eq!(t.int_value, Some(1));
        let f = lex_first("false");
        assert_eq!(f.int_value, Some(0));
    }

    #[test]
    fn path_qualified_identifier_joins_segments() {
        let tok = lex_first("std:io:read");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text_value.unwrap().as_str(), "std:io:read");
    }

    #[test]
    fn namespaced_identifier_joins_on_slash() {
        let tok = lex_first("pkg/module");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text_value.unwrap().as_str(), "pkg/module");
    }

    #[test]
    fn trailing_colon_without_identifier_is_not_consumed() {
        let tok = lex_first("foo:");
        assert_eq!(tok.text_value.unwrap().as_str(), "foo");
    }
}
