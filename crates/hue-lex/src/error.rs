//! Error type for failures that prevent a token stream from being
//! constructed at all (§11).
//!
//! Ordinary malformed source is never an `Err` here — it becomes an
//! `Error` *token* (§4.1) that the lexer emits and keeps scanning past.
//! `LexError` is reserved for the one case that happens before there is
//! any token stream to scan: the raw bytes handed to the compiler aren't
//! valid UTF-8, so there is no `Text` (§3) to lex in the first place.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// `bytes` was rejected by UTF-8 decoding at `valid_up_to`.
    #[error("source is not valid UTF-8 (valid up to byte offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

pub type LexResult<T> = std::result::Result<T, LexError>;

/// Decodes raw source bytes into the `Text` the lexer actually scans (§3).
/// `Lexer::new` takes an already-validated `&str`; this is the fallible step
/// that gets you there from a file's or stdin's raw bytes.
pub fn decode_source(bytes: &[u8]) -> LexResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| LexError::InvalidUtf8 { valid_up_to: e.valid_up_to() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_decodes() {
        assert_eq!(decode_source("func x -> x".as_bytes()).unwrap(), "func x -> x");
    }

    #[test]
    fn invalid_utf8_reports_the_offending_offset() {
        let bytes = [b'f', b'o', b'o', 0xff, 0xfe];
        let err = decode_source(&bytes).unwrap_err();
        assert_eq!(err, LexError::InvalidUtf8 { valid_up_to: 3 });
    }
}
