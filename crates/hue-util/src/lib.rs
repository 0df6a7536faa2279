//! Foundation types shared by every Hue compiler crate: interned symbols,
//! source spans, diagnostics, typed index vectors, and definition ids.
//!
//! None of this module is specific to Hue's grammar or type system — it is
//! the same infrastructure a lexer, parser, or semantic pass needs in any
//! hand-written compiler, split out so `hue-lex`, `hue-par`, and `hue-sem`
//! share one implementation instead of three.

pub mod config;
pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod logging;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, LabelStyle, Level,
};
pub use error::{DiagnosticError, IndexVecError, SourceMapError, SymbolError};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
