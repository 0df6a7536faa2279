//! Line comments: `#` to end of line (§4.1).
//!
//! Hue has no block comments. A comment token carries its text so tooling
//! built on top of the lexer (doc extraction, formatters) can recover it;
//! the parser itself discards `TokenKind::Comment` tokens outright.

use hue_util::Symbol;

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_comment(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // '#'

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let length = text.len() as u32;
        Token::new(TokenKind::Comment, self.token_start_line(), self.token_start_column(), length)
            .with_text(Symbol::intern(text))
    }
}

#[cfg(test)]
mod tests {
    use hue_util::Handler;

    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn lexes_comment_to_end_of_line() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("# hello\nfunc", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::NewLine); // synthetic priming token
        let comment = lexer.next_token();
        assert_eq!(comment.kind, TokenKind::Comment);
        assert_eq!(comment.text_value.unwrap().as_str(), "# hello");
    }

    #[test]
    fn comment_at_end_of_source_has_no_trailing_newline() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("#done", &handler);
        lexer.next_token();
        let comment = lexer.next_token();
        assert_eq!(comment.text_value.unwrap().as_str(), "#done");
        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }
}
