//! Lexer-level configuration: a plain `#[serde(default = "...")]` struct a
//! host program can build by hand, load from TOML, or accept as a literal.

use serde::{Deserialize, Serialize};

use crate::buffer::MIN_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// `TokenBuffer` ring capacity (§4.2, "fixed-capacity (>= 16)").
    #[serde(default = "default_token_buffer_capacity")]
    pub token_buffer_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            token_buffer_capacity: default_token_buffer_capacity(),
        }
    }
}

fn default_token_buffer_capacity() -> usize {
    MIN_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_minimum() {
        assert_eq!(LexerConfig::default().token_buffer_capacity, MIN_CAPACITY);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = LexerConfig { token_buffer_capacity: 32 };
        let text = toml::to_string(&cfg).unwrap();
        let parsed: LexerConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg, parsed);
    }
}
