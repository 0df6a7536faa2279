//! Overload resolution for `Call` (§4.5).
//!
//! Each stage narrows a `Vec` of candidate nodes; no stage mutates the AST
//! itself; `analysis.rs` is the only caller and is the one that writes the
//! winner into `Call.resolved_callee`.

use hue_par::types::{FunctionArg, Type};
use hue_par::NodeId;

use crate::types::types_equal;

/// Why a call failed to resolve to exactly one candidate (§4.5 step 4).
#[derive(Debug, Clone)]
pub enum OverloadError {
    /// Zero candidates survived; carries the original candidate count
    /// before filtering, for the "no function matching" diagnostic.
    NoMatch { original_candidate_count: usize },
    /// More than one candidate survived every filter.
    Ambiguous { candidates: Vec<NodeId> },
}

/// One candidate's signature, as seen by the resolver. `node` is the
/// `Function`/`ExternalFunction` AST node the candidate would resolve to.
pub struct Candidate<'a> {
    pub node: NodeId,
    pub args: &'a [FunctionArg],
    pub result_type: &'a Type,
}

/// Runs §4.5's four-stage pipeline and returns the single winning node id.
///
/// `expected_return_type` is `None` when the call site carries no
/// expectation at all (distinct from `Some(Type::Unknown)`, which still
/// participates in the step-3 "single candidate" tiebreaker).
pub fn resolve<'a>(
    candidates: &[Candidate<'a>],
    arg_types: &[Type],
    expected_return_type: Option<&Type>,
) -> Result<NodeId, OverloadError> {
    let original_candidate_count = candidates.len();

    // Stage 1: arity.
    let mut remaining: Vec<&Candidate> = candidates.iter().filter(|c| c.args.len() == arg_types.len()).collect();

    // Stage 2: strict positional type equality. `Type::Unknown` on a
    // candidate's declared argument (the source omitted an explicit type)
    // matches anything, since there is nothing to check against.
    remaining.retain(|c| {
        c.args.iter().zip(arg_types.iter()).all(|(param, actual)| param.ty.is_unknown() || types_equal(&param.ty, actual))
    });

    // Stage 3: return-type filter.
    if let Some(expected) = expected_return_type {
        if expected.is_unknown() {
            if remaining.len() == 1 {
                return Ok(remaining[0].node);
            }
            // Not a single survivor: expected-type filtering can't help
            // (there's no concrete type to filter by), so fall through to
            // stage 4's uniqueness check on the arity/type-filtered set.
        } else {
            remaining.retain(|c| types_equal(c.result_type, expected));
        }
    }

    // Stage 4: uniqueness.
    match remaining.len() {
        0 => Err(OverloadError::NoMatch { original_candidate_count }),
        1 => Ok(remaining[0].node),
        _ => Err(OverloadError::Ambiguous { candidates: remaining.iter().map(|c| c.node).collect() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_util::Symbol;

    fn arg(ty: Type) -> FunctionArg {
        FunctionArg { name: Symbol::intern("x"), is_mutable: false, ty }
    }

    #[test]
    fn arity_filters_out_mismatched_candidates() {
        let one_arg = vec![arg(Type::Int)];
        let two_args = vec![arg(Type::Int), arg(Type::Int)];
        let candidates = vec![
            Candidate { node: NodeId(0), args: &one_arg, result_type: &Type::Int },
            Candidate { node: NodeId(1), args: &two_args, result_type: &Type::Int },
        ];
        let result = resolve(&candidates, &[Type::Int], None).unwrap();
        assert_eq!(result, NodeId(0));
    }

    #[test]
    fn strict_arg_types_do_not_widen() {
        let args = vec![arg(Type::Float)];
        let candidates = vec![Candidate { node: NodeId(0), args: &args, result_type: &Type::Float }];
        // S2-like: an Int actual must not match a Float-typed parameter.
        let err = resolve(&candidates, &[Type::Int], None).unwrap_err();
        assert!(matches!(err, OverloadError::NoMatch { .. }));
    }

    /// §8 S2: two single-arg overloads differing only by argument type.
    #[test]
    fn selects_by_argument_type_scenario_s2() {
        let int_args = vec![arg(Type::Int)];
        let float_args = vec![arg(Type::Float)];
        let candidates = vec![
            Candidate { node: NodeId(0), args: &int_args, result_type: &Type::Int },
            Candidate { node: NodeId(1), args: &float_args, result_type: &Type::Float },
        ];
        let result = resolve(&candidates, &[Type::Int], None).unwrap();
        assert_eq!(result, NodeId(0));
    }

    #[test]
    fn unknown_expected_type_with_single_survivor_infers_it() {
        let args = vec![arg(Type::Int)];
        let candidates = vec![Candidate { node: NodeId(0), args: &args, result_type: &Type::Int }];
        let result = resolve(&candidates, &[Type::Int], Some(&Type::Unknown)).unwrap();
        assert_eq!(result, NodeId(0));
    }

    #[test]
    fn ambiguous_same_args_different_return_requires_expected_type() {
        let args = vec![arg(Type::Int)];
        let candidates = vec![
            Candidate { node: NodeId(0), args: &args, result_type: &Type::Int },
            Candidate { node: NodeId(1), args: &args, result_type: &Type::Float },
        ];
        let err = resolve(&candidates, &[Type::Int], None).unwrap_err();
        assert!(matches!(err, OverloadError::Ambiguous { .. }));
        let ok = resolve(&candidates, &[Type::Int], Some(&Type::Float)).unwrap();
        assert_eq!(ok, NodeId(1));
    }

    #[test]
    fn zero_candidates_reports_original_count() {
        let args = vec![arg(Type::Int)];
        let candidates = vec![Candidate { node: NodeId(0), args: &args, result_type: &Type::Int }];
        let err = resolve(&candidates, &[Type::Bool], None).unwrap_err();
        match err {
            OverloadError::NoMatch { original_candidate_count } => assert_eq!(original_candidate_count, 1),
            _ => panic!("expected NoMatch"),
        }
    }
}
