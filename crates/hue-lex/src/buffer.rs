//! `TokenBuffer`: the bounded ring connecting [`crate::Lexer`] and the
//! parser (§4.2).
//!
//! The buffer keeps exactly one token of future lookahead (`current` plus a
//! pre-fetched `future`) and a capped history ring used for diagnostics that
//! want to show the token(s) leading up to an error. It never re-lexes:
//! every token the lexer produces passes through the ring exactly once.

use std::collections::VecDeque;

use hue_util::diagnostic::Handler;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Minimum ring capacity (§4.2): enough history to annotate a
/// multi-token diagnostic (e.g. "expected `)` to match this `(`") without
/// growing unbounded on long files.
pub const MIN_CAPACITY: usize = 16;

pub struct TokenBuffer<'a> {
    lexer: Lexer<'a>,
    history: VecDeque<Token>,
    capacity: usize,
    current: Token,
    future: Token,
}

impl<'a> TokenBuffer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_capacity(source, handler, MIN_CAPACITY)
    }

    pub fn with_capacity(source: &'a str, handler: &'a Handler, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut lexer = Lexer::new(source, handler);
        let current = lexer.next_token();
        let future = lexer.next_token();
        Self {
            lexer,
            history: VecDeque::with_capacity(capacity),
            capacity,
            current,
            future,
        }
    }

    /// The token the parser is currently positioned on.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The buffer's one token of future lookahead.
    pub fn peek(&self) -> &Token {
        &self.future
    }

    /// Advances the buffer by one token, returning the new current token.
    pub fn next(&mut self) -> &Token {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        let consumed = std::mem::replace(&mut self.current, self.future.clone());
        self.history.push_back(consumed);
        self.future = if self.current.is_end() {
            self.current.clone()
        } else {
            self.lexer.next_token()
        };
        &self.current
    }

    /// The `n`th most recently consumed token (`prev(0)` is the token just
    /// replaced by the last `next()`). Returns `None` once `n` exceeds the
    /// retained history window.
    pub fn prev(&self, n: usize) -> Option<&Token> {
        let len = self.history.len();
        let index = len.checked_sub(n + 1)?;
        self.history.get(index)
    }

    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::End
    }
}
