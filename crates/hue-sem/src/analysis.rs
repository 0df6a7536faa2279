//! The semantic pass driver (§4.4, §4.5, §5).
//!
//! `Analyzer` walks the `Ast` in place, the way §5's "mutation discipline"
//! asks: `result_type`, `Call.resolved_callee` and `Structure.struct_type`
//! are written directly onto the existing nodes, never copied into a
//! parallel HIR. [`analyze_with_config`] is the public entry point; it runs
//! the walk to a fixed point (§4.4 step 4) before letting a final pass
//! report whatever never resolved.

use std::collections::HashMap;
use std::rc::Rc;

use hue_par::types::{FunctionArg, StructType, StructTypeId, Type};
use hue_par::{Ast, Node, NodeId, NodeKind};
use hue_util::diagnostic::DiagnosticCode;
use hue_util::index_vec::IndexVec;
use hue_util::{Handler, Span, Symbol};

use crate::config::SemaConfig;
use crate::overload::{self, OverloadError};
use crate::scope::{PathError, RibKind, ScopeStack};
use crate::types::{check_declared, widen, Declared, Widen};
use crate::{mangle, Worklist};

/// Every `StructType` interned over the course of the pass, indexed by the
/// id stashed in each `Structure` node (§3, §9). The IR emitter (out of
/// scope here) is the eventual consumer.
#[derive(Debug, Clone, Default)]
pub struct SemaResult {
    pub struct_types: IndexVec<StructTypeId, Rc<StructType>>,
}

/// Runs the semantic pass with [`SemaConfig::default`].
pub fn analyze(ast: &mut Ast, handler: &Handler) -> SemaResult {
    analyze_with_config(ast, handler, SemaConfig::default())
}

/// §4.4 step 4's fixed point, run as a bounded number of silent passes
/// followed by one pass with diagnostics enabled. A silent pass mutates
/// `result_type` exactly like the real one; the loop just stops re-running
/// once a pass changes nothing, at which point what's left unresolved is a
/// genuine error rather than a forward reference still waiting its turn.
pub fn analyze_with_config(ast: &mut Ast, handler: &Handler, config: SemaConfig) -> SemaResult {
    const MAX_PASSES: usize = 8;

    let mut arg_nodes: HashMap<(NodeId, usize), NodeId> = HashMap::new();
    let mut struct_cache: HashMap<String, StructTypeId> = HashMap::new();
    let mut struct_table: IndexVec<StructTypeId, Rc<StructType>> = IndexVec::new();

    let mut previous_snapshot: Option<Vec<Type>> = None;
    for _ in 0..MAX_PASSES {
        let mut analyzer = Analyzer::new(ast, handler, config.clone(), &mut arg_nodes, &mut struct_cache, &mut struct_table);
        analyzer.suppress_diagnostics = true;
        analyzer.run();
        let snapshot = snapshot_result_types(ast);
        let stable = previous_snapshot.as_ref() == Some(&snapshot);
        previous_snapshot = Some(snapshot);
        if stable {
            break;
        }
    }

    let mut analyzer = Analyzer::new(ast, handler, config, &mut arg_nodes, &mut struct_cache, &mut struct_table);
    analyzer.run();

    SemaResult { struct_types: struct_table }
}

fn snapshot_result_types(ast: &Ast) -> Vec<Type> {
    ast.nodes.as_slice().iter().map(|node| node.result_type.clone()).collect()
}

/// One walk of the module. Owns the scope stack and the deferred-call
/// worklist for this walk only; `arg_nodes`/`struct_cache`/`struct_table`
/// are threaded in from [`analyze_with_config`] so synthetic argument
/// nodes and interned struct types survive across passes instead of being
/// rebuilt (and re-pushed into the arena) every time.
struct Analyzer<'a> {
    ast: &'a mut Ast,
    handler: &'a Handler,
    config: SemaConfig,
    scopes: ScopeStack,
    /// A `Variable` node bound by `name = func ... -> ...` maps here to the
    /// `Function`/`ExternalFunction` node that is its actual callable
    /// signature (§4.5's overload candidates need the signature, not the
    /// binding).
    binding_rhs: HashMap<NodeId, NodeId>,
    arg_nodes: &'a mut HashMap<(NodeId, usize), NodeId>,
    struct_cache: &'a mut HashMap<String, StructTypeId>,
    struct_table: &'a mut IndexVec<StructTypeId, Rc<StructType>>,
    worklist: Worklist,
    suppress_diagnostics: bool,
}

impl<'a> Analyzer<'a> {
    fn new(
        ast: &'a mut Ast,
        handler: &'a Handler,
        config: SemaConfig,
        arg_nodes: &'a mut HashMap<(NodeId, usize), NodeId>,
        struct_cache: &'a mut HashMap<String, StructTypeId>,
        struct_table: &'a mut IndexVec<StructTypeId, Rc<StructType>>,
    ) -> Self {
        Self {
            ast,
            handler,
            config,
            scopes: ScopeStack::new(),
            binding_rhs: HashMap::new(),
            arg_nodes,
            struct_cache,
            struct_table,
            worklist: Worklist::new(),
            suppress_diagnostics: false,
        }
    }

    fn run(&mut self) {
        let root = self.ast.root;
        self.visit(root);
        loop {
            let progress = self.retry_worklist_once();
            if !progress {
                break;
            }
        }
        self.report_unresolved_functions();
    }

    fn error(&self, code: DiagnosticCode, span: Span, message: String) {
        if self.suppress_diagnostics {
            return;
        }
        self.handler.build_error(span, message).code(code).emit(self.handler);
    }

    fn warn(&self, code: DiagnosticCode, span: Span, message: String) {
        if self.suppress_diagnostics {
            return;
        }
        self.handler.build_warning(span, message).code(code).emit(self.handler);
    }

    fn visit(&mut self, id: NodeId) -> Type {
        self.visit_with_expected(id, None)
    }

    fn visit_with_expected(&mut self, id: NodeId, expected: Option<Type>) -> Type {
        let kind = self.ast.get(id).kind.clone();
        let ty = match kind {
            NodeKind::NilLiteral => Type::Nil,
            NodeKind::IntLiteral { .. } => Type::Int,
            NodeKind::FloatLiteral { .. } => Type::Float,
            NodeKind::BoolLiteral { .. } => Type::Bool,
            NodeKind::DataLiteral { .. } => Type::Array(Box::new(Type::Byte)),
            NodeKind::TextLiteral { .. } => Type::Array(Box::new(Type::Char)),
            NodeKind::ListLiteral { elements } => self.visit_list_literal(id, &elements),
            NodeKind::Symbol { pathname, is_path } => self.visit_symbol(id, &pathname, is_path),
            NodeKind::Variable { .. } => self.ast.result_type(id),
            NodeKind::Assignment { variable, rhs } => self.visit_assignment(id, variable, rhs),
            NodeKind::BinaryOp { op, kind, lhs, rhs } => self.visit_binary(id, op, kind, lhs, rhs),
            NodeKind::Call { callee_name, arguments, .. } => self.visit_call(id, callee_name, &arguments, expected.clone()),
            NodeKind::Conditional { branches, default_block } => {
                self.visit_conditional(id, &branches, default_block, expected.clone())
            }
            NodeKind::Block { expressions } => self.visit_block(&expressions, expected.clone()),
            NodeKind::Function { function_type, body } => self.visit_function(id, function_type, body),
            NodeKind::ExternalFunction { function_type, .. } => Type::Func(Rc::new(function_type)),
            NodeKind::Structure { block, .. } => self.visit_structure(id, block),
        };
        self.ast.get_mut(id).result_type = ty.clone();
        ty
    }

    /// Binds every `Assignment`/`ExternalFunction` at this block's top level
    /// before any of them are visited, so a call earlier in the block can
    /// resolve to a function defined later in the same block (S2's two
    /// overloads both need to be visible to every call in the block
    /// regardless of position).
    ///
    /// A bound name is only useful as an overload candidate once
    /// `resolve_candidate_signature` can find its argument/result types, and
    /// that lookup goes through `binding_rhs`, not the `Variable` node's own
    /// (not yet computed) `result_type`. So a `name = func ... -> ...`
    /// assignment's `binding_rhs` entry is recorded right here, before any
    /// sibling expression is visited, rather than waiting for
    /// `visit_assignment` to reach it later in program order (§4.4: "forward
    /// references within the same block are [supported]").
    fn pre_declare(&mut self, expressions: &[NodeId]) {
        for &expr in expressions {
            match self.ast.get(expr).kind.clone() {
                NodeKind::Assignment { variable, rhs } => {
                    if let NodeKind::Variable { name, .. } = self.ast.get(variable).kind {
                        self.scopes.bind(name, variable);
                    }
                    if matches!(self.ast.get(rhs).kind, NodeKind::Function { .. } | NodeKind::ExternalFunction { .. }) {
                        self.binding_rhs.insert(variable, rhs);
                    }
                }
                NodeKind::ExternalFunction { name, .. } => {
                    self.scopes.bind(name, expr);
                }
                _ => {}
            }
        }
    }

    fn visit_block(&mut self, expressions: &[NodeId], expected: Option<Type>) -> Type {
        self.scopes.enter(RibKind::Block);
        self.pre_declare(expressions);
        let last_index = expressions.len().checked_sub(1);
        for (index, &expr) in expressions.iter().enumerate() {
            let expr_expected = if Some(index) == last_index { expected.clone() } else { None };
            self.visit_with_expected(expr, expr_expected);
        }
        self.retry_worklist_once();
        let result = match expressions.last() {
            Some(&last) => self.ast.result_type(last),
            None => Type::Unknown,
        };
        self.scopes.exit();
        result
    }

    fn visit_assignment(&mut self, id: NodeId, variable: NodeId, rhs: NodeId) -> Type {
        let (name, declared_type) = match self.ast.get(variable).kind.clone() {
            NodeKind::Variable { name, declared_type, .. } => (name, declared_type),
            _ => unreachable!("Assignment.variable is always a Variable node"),
        };

        let rhs_type = self.visit_with_expected(rhs, declared_type.clone());
        if matches!(self.ast.get(rhs).kind, NodeKind::Function { .. } | NodeKind::ExternalFunction { .. }) {
            self.binding_rhs.insert(variable, rhs);
        }

        let span = self.ast.get(id).span;
        let final_type = match &declared_type {
            None => rhs_type.clone(),
            Some(declared) => match check_declared(declared, &rhs_type) {
                Declared::Matches => {
                    if !rhs_type.is_unknown() {
                        self.warn(
                            DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION,
                            span,
                            format!("type annotation on '{}' is redundant; it already matches the initializer", name.as_str()),
                        );
                    }
                    declared.clone()
                }
                Declared::WidenedToFloat => {
                    if let Some(magnitude) = self.literal_int_magnitude(rhs) {
                        if magnitude.abs() > self.config.max_precise_int_float {
                            self.warn(
                                DiagnosticCode::W_SEM_INT_EXCEEDS_PRECISE_FLOAT,
                                span,
                                format!("integer literal assigned to '{}' exceeds the precisely representable Float range", name.as_str()),
                            );
                        }
                    }
                    declared.clone()
                }
                Declared::NarrowingFloatToInt => {
                    self.error(
                        DiagnosticCode::E_SEM_INCOMPATIBLE_TYPES,
                        span,
                        format!("cannot assign a Float initializer to '{}' declared Int", name.as_str()),
                    );
                    declared.clone()
                }
                Declared::Mismatch => {
                    if !rhs_type.is_unknown() {
                        self.error(
                            DiagnosticCode::E_SEM_INCOMPATIBLE_TYPES,
                            span,
                            format!("'{}' declared {:?} but initializer has type {:?}", name.as_str(), declared, rhs_type),
                        );
                    }
                    declared.clone()
                }
            },
        };

        self.ast.get_mut(variable).result_type = final_type.clone();
        final_type
    }

    fn visit_binary(&mut self, id: NodeId, op: char, kind: hue_par::ast::BinaryOpKind, lhs: NodeId, rhs: NodeId) -> Type {
        let lhs_type = self.visit(lhs);
        let rhs_type = self.visit(rhs);
        let magnitude = self.literal_int_magnitude(lhs).or_else(|| self.literal_int_magnitude(rhs));
        let span = self.ast.get(id).span;
        let is_equality = kind == hue_par::ast::BinaryOpKind::EqualityLTR;
        match widen(&lhs_type, &rhs_type, magnitude, self.config.max_precise_int_float) {
            Widen::Same(ty) => {
                if is_equality {
                    Type::Bool
                } else {
                    ty
                }
            }
            Widen::WidenedToFloat { precision_risk } => {
                if precision_risk {
                    self.warn(
                        DiagnosticCode::W_SEM_INT_EXCEEDS_PRECISE_FLOAT,
                        span,
                        format!("integer literal operand of '{}' exceeds the precisely representable Float range", op),
                    );
                }
                if is_equality {
                    Type::Bool
                } else {
                    Type::Float
                }
            }
            Widen::Incompatible => {
                self.error(
                    DiagnosticCode::E_SEM_INCOMPATIBLE_TYPES,
                    span,
                    format!("incompatible operand types {:?} and {:?} for '{}'", lhs_type, rhs_type, op),
                );
                Type::Unknown
            }
        }
    }

    fn visit_list_literal(&mut self, id: NodeId, elements: &[NodeId]) -> Type {
        let element_types: Vec<Type> = elements.iter().map(|&element| self.visit(element)).collect();
        let span = self.ast.get(id).span;
        let element_type = self.merge_all(&element_types, span);
        Type::Array(Box::new(element_type))
    }

    fn visit_conditional(&mut self, id: NodeId, branches: &[(NodeId, NodeId)], default_block: Option<NodeId>, expected: Option<Type>) -> Type {
        let mut branch_types = Vec::with_capacity(branches.len() + 1);
        for &(test, block) in branches {
            self.visit(test);
            branch_types.push(self.visit_with_expected(block, expected.clone()));
        }
        if let Some(default_block) = default_block {
            branch_types.push(self.visit_with_expected(default_block, expected.clone()));
        }
        let span = self.ast.get(id).span;
        self.merge_all(&branch_types, span)
    }

    /// §4.4's numeric-widening reconciliation, generalized to an arbitrary
    /// number of operands (a conditional's branches, a list literal's
    /// elements). An empty set merges to `Unknown`; a single operand merges
    /// to itself.
    fn merge_all(&self, types: &[Type], span: Span) -> Type {
        let mut accumulated: Option<Type> = None;
        for ty in types {
            accumulated = Some(match accumulated {
                None => ty.clone(),
                Some(previous) => match widen(&previous, ty, None, self.config.max_precise_int_float) {
                    Widen::Same(merged) => merged,
                    Widen::WidenedToFloat { .. } => Type::Float,
                    Widen::Incompatible => {
                        self.error(
                            DiagnosticCode::E_SEM_INCOMPATIBLE_TYPES,
                            span,
                            format!("branch/element types do not merge: {:?} and {:?}", previous, ty),
                        );
                        return Type::Unknown;
                    }
                },
            });
        }
        accumulated.unwrap_or(Type::Unknown)
    }

    fn visit_function(&mut self, id: NodeId, function_type: hue_par::types::FunctionType, body: NodeId) -> Type {
        self.scopes.enter(RibKind::Function);
        for (index, arg) in function_type.args.iter().enumerate() {
            let arg_node = self.arg_node(id, index, arg);
            self.scopes.bind(arg.name, arg_node);
        }
        let declared_result = if function_type.result_type.is_unknown() { None } else { Some(function_type.result_type.clone()) };
        let body_type = self.visit_with_expected(body, declared_result);
        self.scopes.exit();

        let result_type = if function_type.result_type.is_unknown() { body_type } else { function_type.result_type.clone() };

        if let NodeKind::Function { function_type: stored, .. } = &mut self.ast.get_mut(id).kind {
            stored.result_type = result_type.clone();
        }

        Type::Func(Rc::new(hue_par::types::FunctionType {
            args: function_type.args,
            result_type,
            is_public: function_type.is_public,
        }))
    }

    /// A synthetic `Variable` node standing in for a function argument, so
    /// it can be bound and resolved through the same `Target::ScopedValue`
    /// path as any other binding. Cached per `(function, index)` so repeated
    /// passes over the same function reuse one node instead of growing the
    /// arena every pass (§4.4 step 4's fixed point has to actually reach
    /// quiescence).
    fn arg_node(&mut self, function: NodeId, index: usize, arg: &FunctionArg) -> NodeId {
        if let Some(&existing) = self.arg_nodes.get(&(function, index)) {
            return existing;
        }
        let span = self.ast.get(function).span;
        let node = self.ast.nodes.push(Node::with_type(
            NodeKind::Variable { name: arg.name, is_mutable: arg.is_mutable, declared_type: Some(arg.ty.clone()) },
            arg.ty.clone(),
            span,
        ));
        self.arg_nodes.insert((function, index), node);
        node
    }

    fn visit_structure(&mut self, id: NodeId, block: NodeId) -> Type {
        self.visit(block);
        let expressions = match &self.ast.get(block).kind {
            NodeKind::Block { expressions } => expressions.clone(),
            _ => Vec::new(),
        };
        let mut members = Vec::new();
        for &expr in &expressions {
            if let NodeKind::Assignment { variable, .. } = self.ast.get(expr).kind {
                if let NodeKind::Variable { name, .. } = self.ast.get(variable).kind {
                    members.push((name, self.ast.result_type(variable)));
                }
            }
        }
        let (struct_type_id, struct_type) = self.intern_struct(StructType::new(members));
        if let NodeKind::Structure { struct_type: slot, .. } = &mut self.ast.get_mut(id).kind {
            *slot = Some(struct_type_id);
        }
        Type::Struct(struct_type)
    }

    /// Interns a `StructType` by §6's canonical name (§9: two structurally
    /// identical struct literals share one `StructType`). Returns both the
    /// id stored on the `Structure` node and the `Rc` the rest of the pass
    /// uses for `Type::Struct`.
    fn intern_struct(&mut self, struct_type: StructType) -> (StructTypeId, Rc<StructType>) {
        let canonical = mangle::struct_canonical_name(&struct_type);
        if let Some(&existing) = self.struct_cache.get(&canonical) {
            return (existing, self.struct_table[existing].clone());
        }
        let rc = Rc::new(struct_type);
        let id = self.struct_table.push(rc.clone());
        self.struct_cache.insert(canonical, id);
        (id, rc)
    }

    /// §4.4's path resolution, via `ScopeStack::resolve_path`'s `Target`
    /// (§9: "a tagged-variant `Target`, not virtual dispatch"): the first
    /// segment resolves through the scope stack like a bare symbol; every
    /// further segment steps into the current target's `Struct` members
    /// (E7001 if the member doesn't exist), passes through opaquely if it
    /// names a `Func` (resolved fully at the call site instead), or is an
    /// error for anything else (E7002).
    fn visit_symbol(&mut self, id: NodeId, pathname: &[Symbol], is_path: bool) -> Type {
        debug_assert_eq!(is_path, pathname.len() > 1, "Symbol.is_path disagrees with pathname length");
        let span = self.ast.get(id).span;
        match self.scopes.resolve_path(self.ast, pathname) {
            Ok(target) => target.result_type(self.ast),
            Err(PathError::UnboundName) => {
                let first = pathname.first().map(|s| s.as_str()).unwrap_or("");
                self.error(DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR, span, format!("unknown symbol '{first}'"));
                Type::Unknown
            }
            Err(PathError::UnknownMember(segment)) => {
                self.error(
                    DiagnosticCode::E_SEM_UNKNOWN_SYMBOL_IN_STRUCT,
                    span,
                    format!("unknown symbol '{}' in structure", segment.as_str()),
                );
                Type::Unknown
            }
            Err(PathError::InvalidSegment(segment)) => {
                self.error(
                    DiagnosticCode::E_SEM_INVALID_PATH,
                    span,
                    format!("path segment '{}' traverses a non-structure, non-function value", segment.as_str()),
                );
                Type::Unknown
            }
        }
    }

    fn visit_call(&mut self, id: NodeId, callee_name: NodeId, arguments: &[NodeId], expected: Option<Type>) -> Type {
        let arg_types: Vec<Type> = arguments.iter().map(|&argument| self.visit(argument)).collect();
        let span = self.ast.get(id).span;

        let (pathname, is_path) = match self.ast.get(callee_name).kind.clone() {
            NodeKind::Symbol { pathname, is_path } => (pathname, is_path),
            _ => return Type::Unknown,
        };

        if pathname.len() > 1 {
            let resolved = self.visit_symbol(callee_name, &pathname, is_path);
            self.ast.get_mut(callee_name).result_type = resolved.clone();
            return match resolved {
                Type::Func(function_type) => {
                    if function_type.args.len() != arguments.len() {
                        self.error(
                            DiagnosticCode::E_SEM_NO_MATCHING_FUNCTION,
                            span,
                            "argument count does not match the path's function signature".to_string(),
                        );
                        Type::Unknown
                    } else {
                        function_type.result_type.clone()
                    }
                }
                Type::Unknown => Type::Unknown,
                other => {
                    self.error(
                        DiagnosticCode::E_SEM_INVALID_PATH,
                        span,
                        format!("path resolves to {:?}, which is not callable", other),
                    );
                    Type::Unknown
                }
            };
        }

        let Some(&name) = pathname.first() else {
            return Type::Unknown;
        };
        self.ast.get_mut(callee_name).result_type = Type::Unknown;

        let candidate_nodes = self.scopes.candidates(name);
        let mut signatures: Vec<(NodeId, Vec<FunctionArg>, Type)> = Vec::new();
        for candidate in candidate_nodes {
            if let Some((target, args, result_type)) = self.resolve_candidate_signature(candidate) {
                signatures.push((target, args.to_vec(), result_type.clone()));
            }
        }

        if signatures.is_empty() {
            self.error(DiagnosticCode::E_SEM_NO_MATCHING_FUNCTION, span, format!("no function matching '{}'", name.as_str()));
            return Type::Unknown;
        }

        let candidates: Vec<overload::Candidate> = signatures
            .iter()
            .map(|(node, args, result_type)| overload::Candidate { node: *node, args, result_type })
            .collect();

        match overload::resolve(&candidates, &arg_types, expected.as_ref()) {
            Ok(resolved) => {
                if let NodeKind::Call { resolved_callee, .. } = &mut self.ast.get_mut(id).kind {
                    *resolved_callee = Some(resolved);
                }
                let result_type = self.function_signature(resolved).map(|(_, _, rt)| rt.clone()).unwrap_or(Type::Unknown);
                if result_type.is_unknown() {
                    self.worklist.push(id, expected);
                    Type::Unknown
                } else {
                    result_type
                }
            }
            Err(OverloadError::NoMatch { .. }) => {
                self.error(DiagnosticCode::E_SEM_NO_MATCHING_FUNCTION, span, format!("no function matching '{}'", name.as_str()));
                Type::Unknown
            }
            Err(OverloadError::Ambiguous { .. }) => {
                self.error(DiagnosticCode::E_SEM_AMBIGUOUS_CALL, span, format!("ambiguous call to '{}'", name.as_str()));
                Type::Unknown
            }
        }
    }

    fn function_signature(&self, node: NodeId) -> Option<(NodeId, &[FunctionArg], &Type)> {
        match &self.ast.get(node).kind {
            NodeKind::Function { function_type, .. } => Some((node, &function_type.args, &function_type.result_type)),
            NodeKind::ExternalFunction { function_type, .. } => Some((node, &function_type.args, &function_type.result_type)),
            _ => None,
        }
    }

    fn resolve_candidate_signature(&self, bound: NodeId) -> Option<(NodeId, &[FunctionArg], &Type)> {
        if let Some(&target) = self.binding_rhs.get(&bound) {
            return self.function_signature(target);
        }
        self.function_signature(bound)
    }

    fn literal_int_magnitude(&self, id: NodeId) -> Option<i64> {
        if let NodeKind::IntLiteral { text, radix } = &self.ast.get(id).kind {
            let radix_value = match radix {
                hue_par::ast::IntRadix::Binary => 2,
                hue_par::ast::IntRadix::Octal => 8,
                hue_par::ast::IntRadix::Decimal => 10,
                hue_par::ast::IntRadix::Hex => 16,
            };
            i64::from_str_radix(text.as_str(), radix_value).ok()
        } else {
            None
        }
    }

    /// §4.4 step 3's retry: a `Call` already resolved to one candidate but
    /// whose result type was `Unknown` at the time (the callee's own body
    /// hadn't been visited yet) is re-read, not re-resolved — only the
    /// result type can have changed since.
    fn retry_worklist_once(&mut self) -> bool {
        let mut worklist = std::mem::take(&mut self.worklist);
        let progress = worklist.drain_retry(|deferred| self.retry_call(deferred.call));
        self.worklist = worklist;
        progress
    }

    fn retry_call(&mut self, call: NodeId) -> bool {
        let resolved_callee = match self.ast.get(call).kind.clone() {
            NodeKind::Call { resolved_callee, .. } => resolved_callee,
            _ => return true,
        };
        let Some(resolved) = resolved_callee else { return true };
        let Some((_, _, result_type)) = self.function_signature(resolved) else { return true };
        if result_type.is_unknown() {
            return false;
        }
        let result_type = result_type.clone();
        self.ast.get_mut(call).result_type = result_type;
        true
    }

    /// §4.4 step 4: once the fixed point is reached, any `Function` whose
    /// result type is still `Unknown` never had a visitable body that
    /// resolved it — that's E7003, not a forward reference waiting its turn.
    fn report_unresolved_functions(&mut self) {
        for id in self.ast.nodes.indices() {
            let is_unresolved = matches!(
                &self.ast.get(id).kind,
                NodeKind::Function { function_type, .. } if function_type.result_type.is_unknown()
            );
            if !is_unresolved {
                continue;
            }
            let span = self.ast.get(id).span;
            let name = self
                .binding_rhs
                .iter()
                .find(|(_, &target)| target == id)
                .and_then(|(&variable, _)| match &self.ast.get(variable).kind {
                    NodeKind::Variable { name, .. } => Some(name.as_str().to_string()),
                    _ => None,
                })
                .unwrap_or_else(|| "<anonymous>".to_string());
            self.error(DiagnosticCode::E_SEM_CANNOT_INFER_RESULT, span, format!("cannot infer the result type of function '{}'", name));
        }
    }
}
