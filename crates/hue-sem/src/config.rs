//! Semantic-pass configuration (§12).

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_MAX_PRECISE_INT_FLOAT;

/// Tunables for the semantic pass. `max_precise_int_float` is the only knob
/// §4.4's numeric widening needs exposed: the magnitude beyond which an
/// `Int` literal widened to `Float` is flagged with W7001.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemaConfig {
    #[serde(default = "default_max_precise_int_float")]
    pub max_precise_int_float: i64,
}

impl Default for SemaConfig {
    fn default() -> Self {
        Self { max_precise_int_float: default_max_precise_int_float() }
    }
}

fn default_max_precise_int_float() -> i64 {
    DEFAULT_MAX_PRECISE_INT_FLOAT
}
