//! Parser-level configuration, a plain struct in the same shape as
//! `hue_lex::LexerConfig` (§12).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParserConfig {
    /// `TokenBuffer` ring capacity handed to `hue_lex::TokenBuffer::with_capacity`
    /// (§4.2, "fixed-capacity (>= 16)").
    #[serde(default = "default_token_lookback")]
    pub token_lookback: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { token_lookback: default_token_lookback() }
    }
}

fn default_token_lookback() -> usize {
    hue_lex::buffer::MIN_CAPACITY
}
