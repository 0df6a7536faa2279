//! Name mangling (§6): a stable textual encoding of a `Type`/`FunctionType`
//! used as an identifier in external linkage.
//!
//! The IR emitter (out of scope here) is the consumer of mangled names for
//! external linkage; this module exists in `hue-sem` because `StructType`'s
//! canonical name — used to intern struct types within a compilation unit
//! (§3, §9) — is itself a mangled string.

use thiserror::Error;

use hue_par::types::{FunctionType, StructType, Type};

/// Malformed `StructType`/`Type` state reaching the mangler. A `Type::Unknown`
/// should never survive the semantic pass into a struct member, so hitting
/// one here means an internal bug upstream, not bad user input — hence a
/// typed error rather than silently mangling to an empty string, and
/// definitely not a panic on a path the semantic pass's own fixed point can
/// legitimately retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MangleError {
    #[error("cannot mangle a struct with an unresolved ({0}) member type")]
    UnresolvedMember(&'static str),
}

pub type MangleResult<T> = std::result::Result<T, MangleError>;

/// Fallible counterpart to [`struct_canonical_name`] for callers (the IR
/// emitter, out of scope here) that must not intern a struct type whose
/// members never finished inferring.
pub fn try_struct_canonical_name(struct_type: &StructType) -> MangleResult<String> {
    if struct_type.members.iter().any(|(_, ty)| ty.is_unknown()) {
        return Err(MangleError::UnresolvedMember("member"));
    }
    Ok(struct_canonical_name(struct_type))
}

/// `Named(name) -> N<len><utf8-bytes>`, every other primitive to its fixed
/// letter, `Func` to `$<arg-manglings>$<result-mangling>` (§6).
pub fn mangle_type(ty: &Type) -> String {
    match ty {
        Type::Unknown => String::new(),
        Type::Nil => "n".to_string(),
        Type::Float => "d".to_string(),
        Type::Int => "x".to_string(),
        Type::Char => "j".to_string(),
        Type::Byte => "a".to_string(),
        Type::Bool => "b".to_string(),
        Type::Named(name) => {
            let s = name.as_str();
            format!("N{}{}", s.len(), s)
        }
        Type::Func(func_type) => mangle_function_type(func_type),
        Type::Array(elem) => format!("A{}", mangle_type(elem)),
        Type::Struct(struct_type) => struct_canonical_name(struct_type),
    }
}

/// `$ <arg-types...> $ <result-type>` (§6). The `F` tag distinguishing
/// "this is a function type" from its mangled body is attached by callers
/// that embed a `Func` inside a larger mangling (`mangle_type` above); a
/// function type mangled on its own is just this string.
pub fn mangle_function_type(function_type: &FunctionType) -> String {
    let mut out = String::from("$");
    for arg in &function_type.args {
        out.push_str(&mangle_type(&arg.ty));
    }
    out.push('$');
    out.push_str(&mangle_type(&function_type.result_type));
    out
}

/// A `StructType`'s canonical name: `type.` followed by the concatenation
/// of its members' type manglings (§6). Two structurally identical struct
/// literals produce the same canonical name and therefore intern to the
/// same `StructType` (§9).
pub fn struct_canonical_name(struct_type: &StructType) -> String {
    let mut out = String::from("type.");
    for (_, ty) in &struct_type.members {
        out.push_str(&mangle_type(ty));
    }
    out
}
