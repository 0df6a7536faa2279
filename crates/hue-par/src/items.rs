//! Keyword-introduced compound forms (§4.3.4): `func`,
//! `extern`, `if`/`else`, and `struct`. Each owns a chunk of the type
//! grammar too (function-argument declarations, `extern`'s result type).
//!
//! `func`/`if`/`else` bodies use the indentation-delimited form everywhere:
//! either a single trailing expression or a newline-delimited block
//! indented deeper than the construct that opened it, via `parse_body`.
//! `struct` additionally accepts the brace form from §4.3.4's grammar
//! sketch, since `hue_lex::TokenKind::MapLiteral` covers both `{` and `}`
//! (the brace itself rides along in the token's `int_value`); either form
//! holds zero or more `Assignment` expressions, and `hue-sem` is what turns
//! those into a `StructType` (§4.4, "`Structure.update()` re-materialises
//! its cached `StructType`").

use hue_lex::TokenKind;
use hue_util::{Span, Symbol};

use crate::ast::{Node, NodeId, NodeKind};
use crate::types::{FunctionArg, FunctionType, Type};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `func (var…)? resulttype? -> expr`.
    pub(crate) fn parse_function(&mut self) -> NodeId {
        let span = self.current_span();
        let base_indent = self.current_indent();
        self.bump(); // 'func'
        let args = if self.at(TokenKind::LeftParen) { self.parse_function_args() } else { Vec::new() };
        let result_type = if Self::is_type_start(self.current().kind) { Some(self.parse_type()) } else { None };
        if !self.eat(TokenKind::RightArrow) {
            let here = self.current_span();
            self.error_code(
                here,
                hue_util::diagnostic::DiagnosticCode::E_PARSER_EXPECTED_ARROW,
                "expected '->' after function interface",
            );
        }
        let body = self.parse_body(base_indent);
        let function_type = FunctionType { args, result_type: result_type.unwrap_or(Type::Unknown), is_public: true };
        let full_span = span.merge(self.span_of(body));
        self.push(Node::new(NodeKind::Function { function_type, body }, full_span))
    }

    /// `extern name (var…) resulttype NEWLINE`.
    pub(crate) fn parse_external_function(&mut self) -> NodeId {
        let span = self.current_span();
        self.bump(); // 'extern'
        let name = self.expect_identifier_symbol("after 'extern'");
        let args = self.parse_function_args();
        let result_type = self.parse_type();
        if !self.eat(TokenKind::NewLine) && !self.eat(TokenKind::Semicolon) && !self.is_at_end() {
            let here = self.current_span();
            self.error_code(
                here,
                hue_util::diagnostic::DiagnosticCode::E_PARSER_EXPECTED_TERMINATOR,
                "expected newline after external declaration",
            );
        }
        let function_type = FunctionType { args, result_type, is_public: true };
        self.push(Node::new(NodeKind::ExternalFunction { name, function_type }, span))
    }

    /// `(name MUTABLE? type?)` repeated, comma-separated, inside `( … )`.
    fn parse_function_args(&mut self) -> Vec<FunctionArg> {
        self.expect(TokenKind::LeftParen, "to open argument list");
        let mut args = Vec::new();
        while !self.at(TokenKind::RightParen) && !self.is_at_end() {
            let name = self.expect_identifier_symbol("as argument name");
            let is_mutable = self.eat(TokenKind::Mutable);
            let ty = if Self::is_type_start(self.current().kind) { self.parse_type() } else { Type::Unknown };
            args.push(FunctionArg { name, is_mutable, ty });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen, "to close argument list");
        args
    }

    /// `if test block (else if test block)* (else block)?`. There is no
    /// dedicated `elif` token (§4.1 has only `If`/`Else`), so an `else`
    /// immediately followed by `if` starts another branch rather than the
    /// default block.
    pub(crate) fn parse_conditional(&mut self) -> NodeId {
        let span = self.current_span();
        let base_indent = self.current_indent();
        self.bump(); // 'if'
        let mut branches = Vec::new();
        let mut default_block = None;
        loop {
            let test = self.parse_expression();
            let block = self.parse_body(base_indent);
            branches.push((test, block));
            if !self.eat(TokenKind::Else) {
                break;
            }
            if self.eat(TokenKind::If) {
                continue;
            }
            default_block = Some(self.parse_body(base_indent));
            break;
        }
        let end_span = default_block
            .or_else(|| branches.last().map(|&(_, block)| block))
            .map(|id| self.span_of(id))
            .unwrap_or(span);
        self.push(Node::new(NodeKind::Conditional { branches, default_block }, span.merge(end_span)))
    }

    /// `struct { assignment* }`, or the indentation-delimited form shared
    /// with `func`/`if` bodies.
    pub(crate) fn parse_structure(&mut self) -> NodeId {
        let span = self.current_span();
        let base_indent = self.current_indent();
        self.bump(); // 'struct'
        let block = if self.at_brace('{') {
            self.parse_braced_structure_block()
        } else if self.at(TokenKind::NewLine) && self.current().length <= base_indent {
            self.push(Node::new(NodeKind::Block { expressions: Vec::new() }, span))
        } else {
            self.parse_body(base_indent)
        };
        let full_span = span.merge(self.span_of(block));
        self.push(Node::new(NodeKind::Structure { block, struct_type: None }, full_span))
    }

    /// `{ assignment (, assignment)* }`. Members may also be newline- rather
    /// than comma-separated, and a trailing separator before `}` is allowed,
    /// matching the leniency `parse_indented_block` already gives
    /// `;`/`NewLine` (§4.3.4).
    fn parse_braced_structure_block(&mut self) -> NodeId {
        let span = self.current_span();
        self.bump(); // '{'
        self.skip_newlines();
        let mut expressions = Vec::new();
        while !self.at_brace('}') && !self.is_at_end() {
            expressions.push(self.parse_statement());
            self.skip_newlines();
            if !self.eat(TokenKind::Comma) {
                break;
            }
            self.skip_newlines();
        }
        self.skip_newlines();
        if self.at_brace('}') {
            self.bump();
        } else {
            let here = self.current_span();
            self.error(here, "expected '}' to close struct body");
        }
        let end_span = self.current_span();
        self.push(Node::new(NodeKind::Block { expressions }, span.merge(end_span)))
    }

    /// Whether the current token is the `MapLiteral` brace matching `which`
    /// (`{` or `}`); both braces share one token kind, disambiguated by the
    /// byte carried in `int_value` (§4.1).
    fn at_brace(&self, which: char) -> bool {
        self.at(TokenKind::MapLiteral) && self.current().int_value == Some(which as i64)
    }

    /// The body of a `func`/`if`/`else`/`struct` form: either the single
    /// expression that follows directly, or (when the next token is a
    /// `NewLine` indented deeper than `base_indent`) a run of statements
    /// collected until the indentation drops back to `base_indent` or
    /// shallower.
    pub(crate) fn parse_body(&mut self, base_indent: u32) -> NodeId {
        if self.at(TokenKind::NewLine) && self.current().length > base_indent {
            self.bump();
            return self.parse_indented_block(base_indent);
        }
        let single = self.parse_statement();
        let span = self.span_of(single);
        self.push(Node::new(NodeKind::Block { expressions: vec![single] }, span))
    }

    fn parse_indented_block(&mut self, base_indent: u32) -> NodeId {
        let start = self.current_span();
        let mut expressions = Vec::new();
        loop {
            expressions.push(self.parse_statement());
            if self.eat(TokenKind::Semicolon) {
                self.skip_newlines();
                continue;
            }
            if self.at(TokenKind::NewLine) && self.current().length > base_indent {
                self.bump();
                continue;
            }
            break;
        }
        let end = expressions.last().map(|&e| self.span_of(e)).unwrap_or(start);
        self.push(Node::new(NodeKind::Block { expressions }, start.merge(end)))
    }

    /// Whether `kind` can begin a type annotation (§3's closed `Type` set,
    /// plus `[` for `Array` and a bare `Identifier` for `Named`).
    pub(crate) fn is_type_start(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::IntSymbol
                | TokenKind::FloatSymbol
                | TokenKind::Bool
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Nil
                | TokenKind::LeftSqBracket
                | TokenKind::Identifier
        )
    }

    pub(crate) fn parse_type(&mut self) -> Type {
        match self.current().kind {
            TokenKind::IntSymbol => {
                self.bump();
                Type::Int
            }
            TokenKind::FloatSymbol => {
                self.bump();
                Type::Float
            }
            TokenKind::Bool => {
                self.bump();
                Type::Bool
            }
            TokenKind::Byte => {
                self.bump();
                Type::Byte
            }
            TokenKind::Char => {
                self.bump();
                Type::Char
            }
            TokenKind::Nil => {
                self.bump();
                Type::Nil
            }
            TokenKind::LeftSqBracket => {
                self.bump();
                let inner = self.parse_type();
                self.expect(TokenKind::RightSqBracket, "to close array type");
                Type::Array(Box::new(inner))
            }
            TokenKind::Identifier => {
                let tok = self.bump();
                Type::Named(tok.text_value.unwrap_or_else(|| Symbol::intern("")))
            }
            other => {
                let span = self.current_span();
                self.error(span, &format!("expected type, found {other:?}"));
                Type::Unknown
            }
        }
    }

    fn expect_identifier_symbol(&mut self, context: &str) -> Symbol {
        if self.at(TokenKind::Identifier) {
            let tok = self.bump();
            tok.text_value.unwrap_or_else(|| Symbol::intern(""))
        } else {
            let span = self.current_span();
            self.error(span, &format!("expected identifier {context}"));
            Symbol::intern("")
        }
    }

    pub(crate) fn error_code(&self, span: Span, code: hue_util::diagnostic::DiagnosticCode, message: &str) {
        self.handler().build_error(span, message.to_string()).code(code).emit(self.handler());
    }
}
