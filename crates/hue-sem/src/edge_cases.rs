//! End-to-end edge-case coverage for the semantic pass (§8
//! scenarios S2-S5, plus the diagnostic boundary behaviors those scenarios
//! imply). Each test parses real Hue source and runs [`crate::analyze`] over
//! it, rather than poking `Analyzer` internals directly.

#[cfg(test)]
mod tests {
    use hue_par::types::Type;
    use hue_par::{NodeKind, Parser};
    use hue_util::Handler;

    use crate::analyze;

    fn run(source: &str) -> (hue_par::Ast, Handler) {
        let handler = Handler::new();
        let mut ast = {
            let mut parser = Parser::new(source, &handler);
            parser.parse_module()
        };
        analyze(&mut ast, &handler);
        (ast, handler)
    }

    fn root_block<'a>(ast: &'a hue_par::Ast) -> &'a [hue_par::NodeId] {
        match &ast.get(ast.root).kind {
            NodeKind::Function { body, .. } => match &ast.get(*body).kind {
                NodeKind::Block { expressions } => expressions,
                other => panic!("expected root function body to be a block, found {other:?}"),
            },
            other => panic!("expected root to be a Function, found {other:?}"),
        }
    }

    /// §8 S1: a bare literal module's body has result type `Int`.
    #[test]
    fn s1_module_body_result_type_is_int() {
        let (ast, handler) = run("42");
        assert!(!handler.has_errors());
        let body = root_block(&ast);
        assert_eq!(ast.result_type(body[0]), Type::Int);
    }

    /// §8 S2: two overloads differing by argument type, selected by the
    /// actual argument's type.
    #[test]
    fn s2_overload_selected_by_argument_type() {
        let source = "f = func (x Int) Int -> x ; f = func (x Float) Float -> x ; f 3\n";
        let (ast, handler) = run(source);
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        let body = root_block(&ast);
        let call = body[2];
        assert_eq!(ast.result_type(call), Type::Int);
    }

    /// §8 S3: a conditional whose branches are `Int` and `Float` widens to
    /// `Float` with no diagnostics.
    #[test]
    fn s3_conditional_widens_int_and_float_branches() {
        let (ast, handler) = run("if true 1 else 2.5");
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 0);
        let body = root_block(&ast);
        assert_eq!(ast.result_type(body[0]), Type::Float);
    }

    /// §8 S4: lazy return-type inference resolves an undeclared result
    /// type from the function body.
    #[test]
    fn s4_lazy_return_type_inference_resolves_to_int() {
        let (ast, _handler) = run("g = func (n Int) -> n * 2\n");
        let body = root_block(&ast);
        match &ast.get(body[0]).kind {
            NodeKind::Assignment { variable, .. } => match ast.result_type(*variable) {
                Type::Func(function_type) => assert_eq!(function_type.result_type, Type::Int),
                other => panic!("expected a Func type, found {other:?}"),
            },
            other => panic!("expected an Assignment, found {other:?}"),
        }
    }

    /// §8 S5: a struct path symbol resolves to the member's type.
    #[test]
    fn s5_struct_path_resolves_to_member_type() {
        let source = "p = struct { x = 1, y = 2.5 }\np:y\n";
        let (ast, handler) = run(source);
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        let body = root_block(&ast);
        assert_eq!(ast.result_type(body[1]), Type::Float);
    }

    #[test]
    fn unknown_symbol_is_reported_and_types_as_unknown() {
        let (ast, handler) = run("nosuchvar");
        assert!(handler.has_errors());
        let body = root_block(&ast);
        assert_eq!(ast.result_type(body[0]), Type::Unknown);
    }

    #[test]
    fn unknown_struct_member_is_reported() {
        let source = "p = struct { x = 1 }\np:missing\n";
        let (_ast, handler) = run(source);
        assert!(handler.has_errors());
    }

    #[test]
    fn ambiguous_same_signature_overload_without_expected_type_is_an_error() {
        let source = "f = func (x Int) Int -> x ; f = func (x Int) Float -> 1.0 ; f 3\n";
        let (_ast, handler) = run(source);
        assert!(handler.has_errors());
    }

    #[test]
    fn no_matching_overload_is_reported() {
        let source = "f = func (x Int) Int -> x ; f true\n";
        let (_ast, handler) = run(source);
        assert!(handler.has_errors());
    }

    #[test]
    fn declared_narrower_int_type_rejects_float_initializer() {
        let (_ast, handler) = run("x Int = 2.5\n");
        assert!(handler.has_errors());
    }

    #[test]
    fn declared_float_type_accepts_int_initializer_by_widening() {
        let (ast, handler) = run("x Float = 2\n");
        assert!(!handler.has_errors());
        let body = root_block(&ast);
        match &ast.get(body[0]).kind {
            NodeKind::Assignment { variable, .. } => assert_eq!(ast.result_type(*variable), Type::Float),
            other => panic!("expected an Assignment, found {other:?}"),
        }
    }

    #[test]
    fn redundant_type_annotation_warns_but_does_not_error() {
        let (_ast, handler) = run("x Int = 1\n");
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
    }

    /// §8 property 2: re-running `analyze` on an already-analyzed AST
    /// reaches a fixed point and adds no further diagnostics.
    #[test]
    fn second_analysis_pass_is_a_fixed_point() {
        let handler = Handler::new();
        let mut ast = {
            let mut parser = Parser::new("g = func (n Int) -> n * 2\ng 5\n", &handler);
            parser.parse_module()
        };
        analyze(&mut ast, &handler);
        let first_errors = handler.error_count();
        let first_warnings = handler.warning_count();
        analyze(&mut ast, &handler);
        assert_eq!(handler.error_count(), first_errors);
        assert_eq!(handler.warning_count(), first_warnings);
    }

    #[test]
    fn forward_reference_call_within_same_block_resolves() {
        // `h` is called before its own assignment is visited in program
        // order; pre-declaration binds the name first (§4.4 step 1).
        let source = "call_h = h 1\nh = func (n Int) Int -> n\n";
        let (ast, handler) = run(source);
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        let body = root_block(&ast);
        match &ast.get(body[0]).kind {
            NodeKind::Assignment { variable, .. } => assert_eq!(ast.result_type(*variable), Type::Int),
            other => panic!("expected an Assignment, found {other:?}"),
        }
    }

    #[test]
    fn incompatible_binary_operand_types_are_reported() {
        let (_ast, handler) = run("true + 1\n");
        assert!(handler.has_errors());
    }

    #[test]
    fn equality_operator_result_type_is_bool() {
        let (ast, handler) = run("1 == 2\n");
        assert!(!handler.has_errors());
        let body = root_block(&ast);
        assert_eq!(ast.result_type(body[0]), Type::Bool);
    }
}
