//! Scope stack and `Target` resolution (§4.4, §9).
//!
//! §9 asks for "a tagged-variant `Target` rather than a base class with
//! virtual dispatch" — `ScopedValue | StructValue | StructType` is a sum
//! type here, and the polymorphic "result type" query
//! ([`Target::result_type`]) is a single method matching on the variant.
//! Destroying a scope frame (`ScopeStack::exit`) only drops map entries; it
//! never touches the AST nodes those entries point at.

use std::collections::HashMap;
use std::rc::Rc;

use hue_par::types::{StructType, Type};
use hue_par::{Ast, NodeId};
use hue_util::Symbol;

/// What kind of construct introduced a [`Rib`]. Tracked for diagnostics and
/// for `struct` bodies, whose block is resolved like any other but whose
/// bindings additionally feed `StructType` construction (§4.3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibKind {
    Module,
    Function,
    Block,
    Struct,
}

/// A single scope frame. Bindings map a name to *every* node bound to it in
/// this frame, in declaration order — §4.5's manual function overloading
/// is exactly "more than one `Function` bound to the same name in the same
/// rib", so the list itself doubles as the overload set.
#[derive(Debug, Default)]
pub struct Rib {
    bindings: HashMap<Symbol, Vec<NodeId>>,
    kind_is_struct: bool,
}

/// The stack of [`Rib`]s live during a single top-to-bottom walk of the
/// module (§4.4: "A stack of `Scope` frames maps `Text` symbols to
/// `Target`s"). Owned by the semantic pass and dropped when it completes
/// (§5).
pub struct ScopeStack {
    ribs: Vec<Rib>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { ribs: vec![Rib::default()] }
    }

    pub fn enter(&mut self, kind: RibKind) {
        let mut rib = Rib::default();
        rib.kind_is_struct = kind == RibKind::Struct;
        self.ribs.push(rib);
    }

    pub fn exit(&mut self) {
        self.ribs.pop();
        debug_assert!(!self.ribs.is_empty(), "popped the module rib");
    }

    /// Binds `name` to `node` in the innermost rib, preserving any earlier
    /// bindings under the same name so overload sets accumulate rather than
    /// being clobbered (§4.5).
    pub fn bind(&mut self, name: Symbol, node: NodeId) {
        self.ribs.last_mut().expect("non-empty scope stack").bindings.entry(name).or_default().push(node);
    }

    /// The innermost rib currently open is a `struct` body — used by the
    /// `Structure` visitor to tell its own bindings apart from an outer
    /// function's.
    pub fn in_struct_body(&self) -> bool {
        self.ribs.last().map(|r| r.kind_is_struct).unwrap_or(false)
    }

    /// The single most recent binding of `name`, searching outward from the
    /// innermost rib — what a bare `Symbol` reference resolves to (§4.4's
    /// "resolve `n0` by the usual scope stack").
    pub fn resolve(&self, name: Symbol) -> Option<NodeId> {
        self.ribs.iter().rev().find_map(|rib| rib.bindings.get(&name).and_then(|v| v.last().copied()))
    }

    /// Every node ever bound to `name` in the nearest rib that binds it at
    /// all (§4.5's overload candidate set). Shadowing an outer overload set
    /// with even one same-named inner binding hides the outer set entirely,
    /// matching ordinary lexical scoping.
    pub fn candidates(&self, name: Symbol) -> Vec<NodeId> {
        self.ribs
            .iter()
            .rev()
            .find_map(|rib| rib.bindings.get(&name))
            .cloned()
            .unwrap_or_default()
    }
}

/// A tagged reference to a named entity a `Symbol` path can resolve to
/// (§4.4's `Target`, §9's glossary entry). `result_type` is the single
/// polymorphic query every variant answers.
#[derive(Debug, Clone)]
pub enum Target {
    /// A local/global binding: the AST node whose `result_type` this
    /// target reports (§4.4).
    ScopedValue { node: NodeId },
    /// A field reached via a path expression (§4.4's path resolution,
    /// `a:b`). `parent` is kept for provenance even though resolving a
    /// further path segment only needs `ty`.
    StructValue { member: Symbol, ty: Type },
    /// A named struct type resolved as a value in its own right (e.g. a
    /// path segment that names a struct rather than one of its fields).
    StructType { struct_type: Rc<StructType> },
}

impl Target {
    pub fn result_type(&self, ast: &Ast) -> Type {
        match self {
            Target::ScopedValue { node } => ast.result_type(*node),
            Target::StructValue { ty, .. } => ty.clone(),
            Target::StructType { struct_type } => Type::Struct(struct_type.clone()),
        }
    }
}

/// Why `ScopeStack::resolve_path` couldn't produce a `Target` (§4.4's
/// path-resolution rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The path's first segment has no binding at all.
    UnboundName,
    /// A later segment named a field the struct type doesn't have.
    UnknownMember(Symbol),
    /// A later segment stepped into a value that is neither a struct nor a
    /// function (§4.4: "Otherwise the path is invalid").
    InvalidSegment(Symbol),
}

impl ScopeStack {
    /// Resolves a dotted/colon-joined path to the `Target` it denotes
    /// (§4.4, §9). The first segment goes through the ordinary scope
    /// stack; each further segment either steps into a struct member,
    /// passes through a function opaquely (resolved fully at the call
    /// site instead), or is an error.
    pub fn resolve_path(&self, ast: &Ast, pathname: &[Symbol]) -> Result<Target, PathError> {
        let (&first, rest) = pathname.split_first().ok_or(PathError::UnboundName)?;
        let node = self.resolve(first).ok_or(PathError::UnboundName)?;
        let mut target = Target::ScopedValue { node };
        for &segment in rest {
            target = match target.result_type(ast) {
                Type::Struct(struct_type) => match struct_type.type_of(segment) {
                    Some(ty) => Target::StructValue { member: segment, ty: ty.clone() },
                    None => return Err(PathError::UnknownMember(segment)),
                },
                // Function-returned structs carry field names opaquely;
                // the call site is what actually resolves them.
                Type::Func(_) => Target::StructValue { member: segment, ty: Type::Unknown },
                _ => return Err(PathError::InvalidSegment(segment)),
            };
        }
        Ok(target)
    }
}
