//! AST node definitions (§3).
//!
//! Nodes live in a single per-module arena (`Ast`) and refer to each other
//! by [`NodeId`] rather than by pointer or `Rc` — the back-references the
//! semantic pass installs (`Call.resolved_callee`, a `Symbol`'s resolved
//! target) are then just another `NodeId`, non-owning by construction,
//! instead of a weak reference type that has to be built and upheld by
//! convention.

use hue_util::index_vec::IndexVec;
use hue_util::{define_idx, Span, Symbol};

use crate::types::Type;

define_idx!(NodeId);

/// A parsed module: its node arena plus the id of the implicit top-level
/// `Function` that §4.3.1's `parseModule` wraps every module in.
#[derive(Debug, Clone)]
pub struct Ast {
    pub nodes: IndexVec<NodeId, Node>,
    pub root: NodeId,
}

impl Ast {
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn result_type(&self, id: NodeId) -> Type {
        self.nodes[id].result_type.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub result_type: Type,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, result_type: Type::Unknown, span }
    }

    pub fn with_type(kind: NodeKind, result_type: Type, span: Span) -> Self {
        Self { kind, result_type, span }
    }
}

/// Whether a `BinaryOp` associates like arithmetic (`+ - * /`) or like a
/// chain of equality/ordering tests. Both are left-associative (§4.3.3);
/// the split exists because the semantic pass widens arithmetic operands
/// but never widens the *result* of a comparison past `Bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    SimpleLTR,
    EqualityLTR,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The `nil` keyword used as a primary expression; result type `Nil`.
    NilLiteral,
    IntLiteral { text: Symbol, radix: IntRadix },
    FloatLiteral { text: Symbol },
    BoolLiteral { value: bool },
    DataLiteral { bytes: Vec<u8> },
    TextLiteral { scalars: Vec<char> },
    ListLiteral { elements: Vec<NodeId> },
    /// `pathname` is the dotted/colon-joined path (`a:b:c` -> 3 components);
    /// `is_path` is false for a plain single-segment name.
    Symbol { pathname: Vec<Symbol>, is_path: bool },
    Variable { name: Symbol, is_mutable: bool, declared_type: Option<Type> },
    Assignment { variable: NodeId, rhs: NodeId },
    BinaryOp { op: char, kind: BinaryOpKind, lhs: NodeId, rhs: NodeId },
    Call { callee_name: NodeId, arguments: Vec<NodeId>, resolved_callee: Option<NodeId> },
    Conditional { branches: Vec<(NodeId, NodeId)>, default_block: Option<NodeId> },
    Block { expressions: Vec<NodeId> },
    Function { function_type: crate::types::FunctionType, body: NodeId },
    ExternalFunction { name: Symbol, function_type: crate::types::FunctionType },
    Structure { block: NodeId, struct_type: Option<crate::types::StructTypeId> },
}

/// Mirrors `hue_lex::Radix` but is owned by the AST layer so `hue-par`
/// doesn't need to depend on lexer internals beyond the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntRadix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

impl From<hue_lex::Radix> for IntRadix {
    fn from(radix: hue_lex::Radix) -> Self {
        match radix {
            hue_lex::Radix::Binary => IntRadix::Binary,
            hue_lex::Radix::Octal => IntRadix::Octal,
            hue_lex::Radix::Decimal => IntRadix::Decimal,
            hue_lex::Radix::Hex => IntRadix::Hex,
        }
    }
}
