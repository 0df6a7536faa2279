//! Syntactic analysis for Hue (§4.3).
//!
//! [`Parser`] drives a [`hue_lex::TokenBuffer`] and builds an [`ast::Ast`]
//! arena. There is no separate tree type for statements versus
//! expressions; Hue has no statements that aren't themselves expressions,
//! so `parse_expr` is the only production that ever returns a [`ast::NodeId`].

pub mod ast;
pub mod config;
mod edge_cases;
pub mod expr;
mod items;
mod stmt;
pub mod types;

use hue_lex::{TokenBuffer, TokenKind};
use hue_util::index_vec::IndexVec;
use hue_util::{Handler, Span};

pub use ast::{Ast, Node, NodeId, NodeKind};
pub use config::ParserConfig;

/// Recursive-descent/Pratt parser over a [`TokenBuffer`].
///
/// `call_indent` tracks the column a call's callee started at, so call
/// argument collection (§4.3.2) can tell a continuation line from one that
/// dedents back out of the call.
pub struct Parser<'a> {
    buffer: TokenBuffer<'a>,
    handler: &'a Handler,
    nodes: IndexVec<NodeId, Node>,
    call_indent: Option<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_config(source, handler, &ParserConfig::default())
    }

    pub fn with_config(source: &'a str, handler: &'a Handler, config: &ParserConfig) -> Self {
        Self {
            buffer: TokenBuffer::with_capacity(source, handler, config.token_lookback),
            handler,
            nodes: IndexVec::new(),
            call_indent: None,
        }
    }

    /// Entry point (§4.3.1): a module is a sequence of top-level
    /// expressions, implicitly wrapped in a zero-argument public `Function`
    /// so the semantic pass always starts from a single root.
    pub fn parse_module(&mut self) -> Ast {
        let start_span = self.current_span();
        let mut expressions = Vec::new();
        self.skip_newlines();
        while !self.is_at_end() {
            let expr = self.parse_statement();
            expressions.push(expr);
            self.skip_newlines();
        }
        let end_span = self.current_span();
        let body_span = start_span.merge(end_span);
        let body = self.push(Node::new(NodeKind::Block { expressions }, body_span));
        let function_type = types::FunctionType { args: Vec::new(), result_type: types::Type::Unknown, is_public: true };
        let root = self.push(Node::new(NodeKind::Function { function_type, body }, body_span));
        Ast { nodes: std::mem::take(&mut self.nodes), root }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node)
    }

    pub(crate) fn nodes_ref(&self) -> &IndexVec<NodeId, Node> {
        &self.nodes
    }

    pub(crate) fn handler(&self) -> &'a Handler {
        self.handler
    }

    pub(crate) fn current(&self) -> &hue_lex::Token {
        self.buffer.current()
    }

    pub(crate) fn peek(&self) -> &hue_lex::Token {
        self.buffer.peek()
    }

    pub(crate) fn bump(&mut self) -> hue_lex::Token {
        let consumed = self.buffer.current().clone();
        self.buffer.next();
        consumed
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, context: &str) {
        if !self.eat(kind) {
            let span = self.current_span();
            self.error(span, &format!("expected {:?} {context}, found {:?}", kind, self.current().kind));
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.buffer.is_at_end()
    }

    pub(crate) fn current_span(&self) -> Span {
        let tok = self.current();
        Span::new(0, tok.length as usize, tok.line, tok.column)
    }

    pub(crate) fn error(&self, span: Span, message: &str) {
        self.handler.build_error(span, message.to_string()).emit(self.handler);
    }

    /// Consumes zero or more `NewLine`/`Semicolon` tokens; every top-level
    /// expression and every block body is terminated by one or the other
    /// (§4.1, §4.3.1), so callers skip runs of them rather than
    /// special-casing blank lines or repeated `;`.
    pub(crate) fn skip_newlines(&mut self) {
        while matches!(self.current().kind, TokenKind::NewLine | TokenKind::Semicolon) {
            self.bump();
        }
    }

    /// Indentation recorded on the most recently consumed `NewLine`, used by
    /// §4.3.2's call-argument termination rule. Zero before any newline has
    /// been seen.
    pub(crate) fn current_indent(&self) -> u32 {
        self.buffer.prev(0).map(|tok| tok.length).unwrap_or(0)
    }
}
