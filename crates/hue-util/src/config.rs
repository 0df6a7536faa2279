//! Shared TOML configuration loading.
//!
//! Each pass crate defines its own `*Config` struct (`hue_lex::LexerConfig`,
//! `hue_par::ParserConfig`, `hue_sem::SemaConfig`) deriving `serde::Deserialize`.
//! This module supplies the one generic routine that turns a config file on
//! disk into any of them, so the loading code isn't duplicated three times.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and deserialize a TOML config file.
pub fn load_toml<T: DeserializeOwned>(path: &str) -> ConfigResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
