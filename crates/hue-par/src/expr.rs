//! Pratt operator-precedence parsing and call-argument collection
//! (§4.3.2, §4.3.3).
//!
//! Hue has no separate "statement" grammar: every production bottoms out
//! in [`Parser::parse_expression`]. The precedence climb
//! (`parse_expression` -> `parse_binary` -> `parse_call` -> `parse_primary`)
//! mirrors the three-tier table in §4.3.3; `parse_call` is where the
//! indentation-sensitive juxtaposed-argument rule from §4.3.2 lives, since
//! a callee and its arguments bind tighter than any binary operator.

use hue_lex::TokenKind;
use hue_util::Span;

use crate::ast::{BinaryOpKind, IntRadix, Node, NodeId, NodeKind};
use crate::Parser;

/// `(operator byte, associativity kind, binding power)` for the token the
/// parser is currently sitting on, or `None` if it isn't a binary operator
/// at all (§4.3.3's table; `<`/`>` lex as plain `BinaryOperator` but still
/// carry comparison semantics, so they get `EqualityLTR` despite sharing a
/// token kind with `+`/`-`).
fn operator_info(kind: TokenKind, byte: char) -> Option<(char, BinaryOpKind, u8)> {
    match kind {
        TokenKind::BinaryOperator => match byte {
            '*' | '/' => Some((byte, BinaryOpKind::SimpleLTR, 40)),
            '+' | '-' => Some((byte, BinaryOpKind::SimpleLTR, 20)),
            '<' | '>' => Some((byte, BinaryOpKind::EqualityLTR, 10)),
            _ => None,
        },
        TokenKind::BinaryComparisonOperator => Some((byte, BinaryOpKind::EqualityLTR, 10)),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// Top of the precedence climb: binary operators at any of the three
    /// tiers, left-associative (§4.3.3).
    pub(crate) fn parse_expression(&mut self) -> NodeId {
        self.parse_binary(0)
    }

    fn parse_binary(&mut self, min_power: u8) -> NodeId {
        let mut lhs = self.parse_call();
        loop {
            let current = self.current();
            let byte = current.int_value.unwrap_or(0) as u8 as char;
            let Some((op, kind, power)) = operator_info(current.kind, byte) else { break };
            if power < min_power {
                break;
            }
            self.bump();
            let rhs = self.parse_binary(power + 1);
            let span = self.span_of(lhs).merge(self.span_of(rhs));
            lhs = self.push(Node::new(NodeKind::BinaryOp { op, kind, lhs, rhs }, span));
        }
        lhs
    }

    /// `callee arg…`, stopping at the first token that terminates the call
    /// (§4.3.2). `call_indent` is snapshotted before the callee is parsed,
    /// so a deeper-indented continuation line (§8 scenario S6) can be told
    /// apart from a dedented next statement.
    pub(crate) fn parse_call(&mut self) -> NodeId {
        let call_indent = self.current_indent();
        let callee = self.parse_primary();
        self.try_collect_call_args(callee, call_indent)
    }

    /// Shared by `parse_call` and `stmt::parse_statement`'s identifier-led
    /// path, which has already consumed the callee token before it can tell
    /// whether it's parsing an assignment or a call (§4.3.3).
    pub(crate) fn try_collect_call_args(&mut self, callee: NodeId, call_indent: u32) -> NodeId {
        if !matches!(self.node(callee).kind, NodeKind::Symbol { .. }) {
            return callee;
        }
        let mut arguments = Vec::new();
        loop {
            if self.at(TokenKind::NewLine) {
                if self.current().length > call_indent {
                    self.bump();
                    continue;
                }
                break;
            }
            if !self.current().kind.can_start_call_argument() {
                break;
            }
            arguments.push(self.parse_call());
        }
        if arguments.is_empty() {
            return callee;
        }
        let span = arguments
            .iter()
            .fold(self.span_of(callee), |acc, &arg| acc.merge(self.span_of(arg)));
        self.push(Node::new(NodeKind::Call { callee_name: callee, arguments, resolved_callee: None }, span))
    }

    /// Primary/atomic forms: literals, path symbols, parenthesized
    /// sub-expressions (which suspend call-argument mode per §4.3.2), list
    /// literals, and the keyword-introduced compound forms.
    pub(crate) fn parse_primary(&mut self) -> NodeId {
        let span = self.current_span();
        match self.current().kind {
            TokenKind::Nil => {
                self.bump();
                self.push(Node::with_type(NodeKind::NilLiteral, crate::types::Type::Nil, span))
            }
            TokenKind::IntLiteral => {
                let tok = self.bump();
                let text = tok.text_value.unwrap_or_else(|| hue_util::Symbol::intern(&tok.int_value.unwrap_or(0).to_string()));
                let radix = IntRadix::from(tok.radix.unwrap_or(hue_lex::Radix::Decimal));
                self.push(Node::with_type(NodeKind::IntLiteral { text, radix }, crate::types::Type::Int, span))
            }
            TokenKind::FloatLiteral => {
                let tok = self.bump();
                let text = hue_util::Symbol::intern(&tok.double_value.unwrap_or(0.0).to_string());
                self.push(Node::with_type(NodeKind::FloatLiteral { text }, crate::types::Type::Float, span))
            }
            TokenKind::BoolLiteral => {
                let tok = self.bump();
                let value = tok.int_value.unwrap_or(0) != 0;
                self.push(Node::with_type(NodeKind::BoolLiteral { value }, crate::types::Type::Bool, span))
            }
            TokenKind::DataLiteral => {
                let tok = self.bump();
                let bytes = tok
                    .text_value
                    .map(|s| s.as_str().chars().map(|c| c as u32 as u8).collect())
                    .unwrap_or_default();
                let ty = crate::types::Type::Array(Box::new(crate::types::Type::Byte));
                self.push(Node::with_type(NodeKind::DataLiteral { bytes }, ty, span))
            }
            TokenKind::TextLiteral => {
                let tok = self.bump();
                let scalars = tok.text_value.map(|s| s.as_str().chars().collect()).unwrap_or_default();
                let ty = crate::types::Type::Array(Box::new(crate::types::Type::Char));
                self.push(Node::with_type(NodeKind::TextLiteral { scalars }, ty, span))
            }
            TokenKind::Identifier => self.parse_symbol(),
            TokenKind::LeftParen => {
                self.bump();
                let inner = self.parse_expression();
                self.expect(TokenKind::RightParen, "to close parenthesized expression");
                inner
            }
            TokenKind::LeftSqBracket => self.parse_list_literal(),
            TokenKind::Func => self.parse_function(),
            TokenKind::External => self.parse_external_function(),
            TokenKind::If => self.parse_conditional(),
            TokenKind::Structure => self.parse_structure(),
            other => {
                self.error(span, &format!("expected expression, found {other:?}"));
                self.bump();
                self.push(Node::new(NodeKind::NilLiteral, span))
            }
        }
    }

    /// A plain or path-qualified identifier (§3's `Symbol`). The lexer
    /// already joined `a:b:c` into one `Identifier` token with `:`-separated
    /// text (§4.1); the parser's only job is splitting it back apart.
    fn parse_symbol(&mut self) -> NodeId {
        let span = self.current_span();
        let tok = self.bump();
        self.symbol_node_from_token(&tok, span)
    }

    /// Builds a `Symbol` node from an already-consumed `Identifier` token.
    /// Shared with `stmt::parse_statement`'s identifier-led disambiguation,
    /// which must consume the leading identifier before it can tell whether
    /// it's the start of an assignment or a call (§4.3.3).
    pub(crate) fn symbol_node_from_token(&mut self, tok: &hue_lex::Token, span: Span) -> NodeId {
        let text = tok.text_value.map(|s| s.as_str().to_string()).unwrap_or_default();
        let is_path = text.contains(':');
        let pathname: Vec<_> = text.split(':').map(hue_util::Symbol::intern).collect();
        self.push(Node::new(NodeKind::Symbol { pathname, is_path }, span))
    }

    /// `[ expr, … ]` (§4.3.4) — unlike call arguments, list elements are
    /// comma-separated, not juxtaposed.
    fn parse_list_literal(&mut self) -> NodeId {
        let span = self.current_span();
        self.bump(); // '['
        let mut elements = Vec::new();
        while !self.at(TokenKind::RightSqBracket) && !self.is_at_end() {
            elements.push(self.parse_expression());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightSqBracket, "to close list literal");
        self.push(Node::new(NodeKind::ListLiteral { elements }, span))
    }

    pub(crate) fn span_of(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes_ref()[id]
    }
}
