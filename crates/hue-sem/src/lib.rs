//! Semantic analysis for Hue (§4.4, §4.5).
//!
//! The pass visits a parsed [`hue_par::Ast`] and mutates it in place: scope
//! resolution, numeric widening, manual overload resolution and lazy
//! return-type inference all end up as `result_type`/`resolved_callee`
//! writes on the existing nodes rather than a second typed tree (§5's
//! "mutation discipline"). [`analyze`] is the entry point; [`mangle`]
//! exposes the name-mangling scheme the IR emitter (out of scope here)
//! would use for external linkage.

mod analysis;
mod config;
mod edge_cases;
mod infer;
pub mod mangle;
pub mod overload;
pub mod scope;
pub mod types;

pub use analysis::{analyze, analyze_with_config, SemaResult};
pub use config::SemaConfig;
pub use infer::{Deferred, Worklist};
pub use mangle::{MangleError, MangleResult};
pub use scope::{RibKind, ScopeStack, Target};
pub use types::{check_declared, widen, Declared, Widen};
