//! Top-level/block-level statement dispatch: the assignment-vs-call
//! disambiguation that §4.3.3 calls out as "the only place the parser
//! requires two-token lookahead".
//!
//! `TokenBuffer` only ever exposes one token of *future* lookahead
//! (`current` + `peek`, §4.2) — so the `Identifier Identifier` case (a
//! possible `name TypeName = rhs` declaration) can't be decided purely by
//! peeking. It's resolved by consuming the leading identifier and then
//! re-examining `current`/`peek` from the new position: if what's now
//! `peek` is `Assignment`, the token in between was a type name; if not,
//! the identifier already consumed is simply a call's callee and the
//! token it's sitting on is the call's first argument, so parsing falls
//! straight through to the normal call-argument loop with nothing to undo.

use hue_lex::TokenKind;
use hue_util::Symbol;

use crate::ast::{Node, NodeId, NodeKind};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> NodeId {
        if self.at(TokenKind::Identifier) {
            match self.peek().kind {
                TokenKind::Assignment => return self.parse_assignment(),
                kind if Self::is_type_start(kind) => return self.parse_assignment(),
                TokenKind::Identifier => return self.parse_identifier_then_identifier(),
                _ => {}
            }
        }
        self.parse_expression()
    }

    /// `name type? = rhs`, reached once `peek` already proves this is an
    /// assignment: either an `Assignment` token directly, or one of the
    /// unambiguous type-start tokens that can never begin a call argument
    /// (§4.1's `can_start_call_argument`).
    fn parse_assignment(&mut self) -> NodeId {
        let span = self.current_span();
        let name_tok = self.bump();
        let name = name_tok.text_value.unwrap_or_else(|| Symbol::intern(""));
        let is_mutable = self.eat(TokenKind::Mutable);
        let declared_type = if Self::is_type_start(self.current().kind) { Some(self.parse_type()) } else { None };
        self.expect(TokenKind::Assignment, "in variable assignment");
        let rhs = self.parse_expression();
        self.finish_assignment(name, is_mutable, declared_type, rhs, span)
    }

    /// `Identifier Identifier …`: consumes the first identifier, then
    /// decides from the (now current, peek) pair whether the second
    /// identifier is a declared type (followed by `=`) or the start of a
    /// call argument.
    fn parse_identifier_then_identifier(&mut self) -> NodeId {
        let span = self.current_span();
        let call_indent = self.current_indent();
        let name_tok = self.bump();

        if self.peek().kind == TokenKind::Assignment {
            let name = name_tok.text_value.unwrap_or_else(|| Symbol::intern(""));
            let declared_type = Some(self.parse_type());
            self.expect(TokenKind::Assignment, "in variable assignment");
            let rhs = self.parse_expression();
            return self.finish_assignment(name, false, declared_type, rhs, span);
        }

        let callee = self.symbol_node_from_token(&name_tok, span);
        self.try_collect_call_args(callee, call_indent)
    }

    fn finish_assignment(
        &mut self,
        name: Symbol,
        is_mutable: bool,
        declared_type: Option<crate::types::Type>,
        rhs: NodeId,
        span: hue_util::Span,
    ) -> NodeId {
        let variable = self.push(Node::new(NodeKind::Variable { name, is_mutable, declared_type }, span));
        let full_span = span.merge(self.span_of(rhs));
        self.push(Node::new(NodeKind::Assignment { variable, rhs }, full_span))
    }
}
