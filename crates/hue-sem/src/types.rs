//! Numeric widening and type merging (§4.4, "Numeric widening").
//!
//! The `Type` lattice itself lives in `hue_par::types` — the AST and the
//! semantic pass share one definition rather than the semantic pass
//! re-deriving its own HIR types, since Hue mutates `result_type` in place
//! on the existing AST nodes (§5, "Mutation discipline") instead of
//! building a parallel typed tree.

use hue_par::types::Type;

/// The result of attempting to reconcile two types under §4.4's rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Widen {
    /// The types agree exactly (or one side was `Unknown`), yielding this type.
    Same(Type),
    /// `Int` combined with `Float` widens to `Float`; `true` if the `Int`
    /// side is a literal whose magnitude risks losing precision once
    /// represented as a `Float` (§4.4's "+-2^53" warning).
    WidenedToFloat { precision_risk: bool },
    /// Neither side is `Unknown` and they are neither equal nor the
    /// Int/Float pair above.
    Incompatible,
}

/// The default threshold beyond which a constant `Int` loses precision
/// once represented as an IEEE-754 `Float` (§4.4, §12's `SemaConfig`).
pub const DEFAULT_MAX_PRECISE_INT_FLOAT: i64 = 1i64 << 53;

/// Attempts to reconcile `lhs` and `rhs` for a block result, conditional
/// branch merge, or binary operator (§4.4). `literal_int_magnitude` is the
/// decoded value of `lhs`/`rhs` when one side is a literal `IntLiteral`,
/// used only to decide the precision-loss warning.
pub fn widen(lhs: &Type, rhs: &Type, literal_int_magnitude: Option<i64>, max_precise: i64) -> Widen {
    if lhs.is_unknown() {
        return Widen::Same(rhs.clone());
    }
    if rhs.is_unknown() {
        return Widen::Same(lhs.clone());
    }
    if types_equal(lhs, rhs) {
        return Widen::Same(lhs.clone());
    }
    match (lhs, rhs) {
        (Type::Int, Type::Float) | (Type::Float, Type::Int) => {
            let precision_risk = literal_int_magnitude.map(|n| n.abs() > max_precise).unwrap_or(false);
            Widen::WidenedToFloat { precision_risk }
        }
        _ => Widen::Incompatible,
    }
}

/// Structural equality over the closed `Type` set. `Type` only derives
/// `PartialEq` via its field-by-field `Rc`/`Box` structure, which is
/// exactly the "same shape" comparison §4.4 wants (two distinct `Rc`s
/// wrapping equal `FunctionType`s/`StructType`s still compare equal).
pub fn types_equal(a: &Type, b: &Type) -> bool {
    a == b
}

/// An explicit `Variable` type declaration is only ever allowed to equal
/// the RHS type or be a wider numeric (§3's invariant: "Int->Float
/// widening is implicit; Float->Int is an error").
#[derive(Debug, Clone, PartialEq)]
pub enum Declared {
    /// The declared type matches the RHS exactly. `redundant` is set when
    /// the annotation therefore added no information (§7's W7002).
    Matches,
    /// `Int` RHS widened to a declared `Float`.
    WidenedToFloat,
    /// `Float` RHS with a declared `Int` — §3 calls this an error outright.
    NarrowingFloatToInt,
    /// Any other mismatch.
    Mismatch,
}

pub fn check_declared(declared: &Type, rhs: &Type) -> Declared {
    if types_equal(declared, rhs) {
        return Declared::Matches;
    }
    match (declared, rhs) {
        (Type::Float, Type::Int) => Declared::WidenedToFloat,
        (Type::Int, Type::Float) => Declared::NarrowingFloatToInt,
        _ => Declared::Mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_types_reconcile_to_themselves() {
        assert_eq!(widen(&Type::Int, &Type::Int, None, DEFAULT_MAX_PRECISE_INT_FLOAT), Widen::Same(Type::Int));
    }

    #[test]
    fn unknown_defers_to_the_other_side() {
        assert_eq!(widen(&Type::Unknown, &Type::Bool, None, DEFAULT_MAX_PRECISE_INT_FLOAT), Widen::Same(Type::Bool));
        assert_eq!(widen(&Type::Bool, &Type::Unknown, None, DEFAULT_MAX_PRECISE_INT_FLOAT), Widen::Same(Type::Bool));
    }

    #[test]
    fn int_and_float_widen_without_precision_risk() {
        let w = widen(&Type::Int, &Type::Float, Some(2), DEFAULT_MAX_PRECISE_INT_FLOAT);
        assert_eq!(w, Widen::WidenedToFloat { precision_risk: false });
    }

    #[test]
    fn large_int_literal_widening_flags_precision_risk() {
        let huge = (1i64 << 54) + 1;
        let w = widen(&Type::Float, &Type::Int, Some(huge), DEFAULT_MAX_PRECISE_INT_FLOAT);
        assert_eq!(w, Widen::WidenedToFloat { precision_risk: true });
    }

    #[test]
    fn bool_and_int_are_incompatible() {
        assert_eq!(widen(&Type::Bool, &Type::Int, None, DEFAULT_MAX_PRECISE_INT_FLOAT), Widen::Incompatible);
    }

    #[test]
    fn declared_float_widens_int_rhs() {
        assert_eq!(check_declared(&Type::Float, &Type::Int), Declared::WidenedToFloat);
    }

    #[test]
    fn declared_int_rejects_float_rhs() {
        assert_eq!(check_declared(&Type::Int, &Type::Float), Declared::NarrowingFloatToInt);
    }
}
