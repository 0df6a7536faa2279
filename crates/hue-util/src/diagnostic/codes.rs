//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings.
//!
//! # Examples
//!
//! ```
//! use hue_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 5001);
//! assert_eq!(code.as_str(), "E5001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is typically "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// This allows users to reference specific diagnostics in documentation
/// and suppression attributes.
///
/// # Examples
///
/// ```
/// use hue_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1);
/// assert_eq!(code.as_str(), "E0001");
///
/// let warning = DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION;
/// assert_eq!(warning.prefix(), "W");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Arguments
    ///
    /// * `prefix` - The code prefix (typically "E" or "W")
    /// * `number` - The numeric identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E_SEM_INVALID_PATH.prefix(), "E");
    /// assert_eq!(DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION.prefix(), "W");
    /// ```
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E_LEXER_MALFORMED_NUMBER.number(), 5001);
    /// assert_eq!(DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION.number(), 7002);
    /// ```
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001", "W0001")
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E_LEXER_MALFORMED_NUMBER.as_str(), "E5001");
    /// assert_eq!(DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION.as_str(), "W7002");
    /// ```
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E3002: Semantic - Undefined variable
    pub const E_SEMANTIC_UNDEFINED_VAR: Self = Self::new("E", 3002);

    // =========================================================================
    // HUE-SPECIFIC CODES (§7)
    // =========================================================================

    /// E5001: two dots, a trailing dot, or a malformed exponent in a numeric literal.
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 5001);
    /// E5002: text/data literal missing its closing quote.
    pub const E_LEXER_UNTERMINATED_LITERAL: Self = Self::new("E", 5002);
    /// E5003: unknown escape sequence in a text/data literal.
    pub const E_LEXER_BAD_ESCAPE: Self = Self::new("E", 5003);

    /// E6001: function interface not followed by `->` and body is not a brace block.
    pub const E_PARSER_EXPECTED_ARROW: Self = Self::new("E", 6001);
    /// E6002: external declaration missing its terminating newline.
    pub const E_PARSER_EXPECTED_TERMINATOR: Self = Self::new("E", 6002);
    /// E6003: malformed path symbol (`:`/`/` in an invalid position).
    pub const E_PARSER_BAD_PATH: Self = Self::new("E", 6003);

    /// E7001: §4.4 path resolution, "Unknown symbol in structure".
    pub const E_SEM_UNKNOWN_SYMBOL_IN_STRUCT: Self = Self::new("E", 7001);
    /// E7002: §4.4 path resolution, path traverses a non-struct, non-function target.
    pub const E_SEM_INVALID_PATH: Self = Self::new("E", 7002);
    /// E7003: §4.4 step 4, fixed point reached with `Unknown` remaining.
    pub const E_SEM_CANNOT_INFER_RESULT: Self = Self::new("E", 7003);
    /// E7004: §4.4 numeric widening, incompatible pair.
    pub const E_SEM_INCOMPATIBLE_TYPES: Self = Self::new("E", 7004);
    /// E7005: §4.5 step 4, zero candidates.
    pub const E_SEM_NO_MATCHING_FUNCTION: Self = Self::new("E", 7005);
    /// E7006: §4.5 step 4, more than one candidate.
    pub const E_SEM_AMBIGUOUS_CALL: Self = Self::new("E", 7006);

    /// W7001: §4.4, constant `Int` widened to `Float` exceeds +-2^53.
    pub const W_SEM_INT_EXCEEDS_PRECISE_FLOAT: Self = Self::new("W", 7001);
    /// W7002: explicit `Variable.type` equals the inferred RHS type.
    pub const W_SEM_REDUNDANT_TYPE_ANNOTATION: Self = Self::new("W", 7002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience
pub const E_SEMANTIC_UNDEFINED_VAR: DiagnosticCode = DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR;
pub const E_LEXER_MALFORMED_NUMBER: DiagnosticCode = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
pub const E_LEXER_UNTERMINATED_LITERAL: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL;
pub const E_LEXER_BAD_ESCAPE: DiagnosticCode = DiagnosticCode::E_LEXER_BAD_ESCAPE;
pub const E_PARSER_EXPECTED_ARROW: DiagnosticCode = DiagnosticCode::E_PARSER_EXPECTED_ARROW;
pub const E_PARSER_EXPECTED_TERMINATOR: DiagnosticCode = DiagnosticCode::E_PARSER_EXPECTED_TERMINATOR;
pub const E_PARSER_BAD_PATH: DiagnosticCode = DiagnosticCode::E_PARSER_BAD_PATH;
pub const E_SEM_UNKNOWN_SYMBOL_IN_STRUCT: DiagnosticCode = DiagnosticCode::E_SEM_UNKNOWN_SYMBOL_IN_STRUCT;
pub const E_SEM_INVALID_PATH: DiagnosticCode = DiagnosticCode::E_SEM_INVALID_PATH;
pub const E_SEM_CANNOT_INFER_RESULT: DiagnosticCode = DiagnosticCode::E_SEM_CANNOT_INFER_RESULT;
pub const E_SEM_INCOMPATIBLE_TYPES: DiagnosticCode = DiagnosticCode::E_SEM_INCOMPATIBLE_TYPES;
pub const E_SEM_NO_MATCHING_FUNCTION: DiagnosticCode = DiagnosticCode::E_SEM_NO_MATCHING_FUNCTION;
pub const E_SEM_AMBIGUOUS_CALL: DiagnosticCode = DiagnosticCode::E_SEM_AMBIGUOUS_CALL;
pub const W_SEM_INT_EXCEEDS_PRECISE_FLOAT: DiagnosticCode = DiagnosticCode::W_SEM_INT_EXCEEDS_PRECISE_FLOAT;
pub const W_SEM_REDUNDANT_TYPE_ANNOTATION: DiagnosticCode = DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str() {
        let code = DiagnosticCode::new("E", 1);
        assert_eq!(code.as_str(), "E0001");

        let code = DiagnosticCode::new("W", 1);
        assert_eq!(code.as_str(), "W0001");

        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.as_str(), "E1001");
    }

    #[test]
    fn test_display() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(format!("{}", code), "E1001");
    }

    #[test]
    fn test_debug() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1001)");
    }

    #[test]
    fn test_predefined_hue_codes() {
        assert_eq!(DiagnosticCode::E_SEM_UNKNOWN_SYMBOL_IN_STRUCT.prefix(), "E");
        assert_eq!(DiagnosticCode::E_SEM_UNKNOWN_SYMBOL_IN_STRUCT.number(), 7001);
        assert_eq!(DiagnosticCode::E_SEM_UNKNOWN_SYMBOL_IN_STRUCT.as_str(), "E7001");

        assert_eq!(DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION.prefix(), "W");
        assert_eq!(DiagnosticCode::W_SEM_REDUNDANT_TYPE_ANNOTATION.number(), 7002);
    }

    #[test]
    fn test_code_equality() {
        let code1 = DiagnosticCode::new("E", 1001);
        let code2 = DiagnosticCode::new("E", 1001);
        let code3 = DiagnosticCode::new("E", 1002);

        assert_eq!(code1, code2);
        assert_ne!(code1, code3);
    }

    #[test]
    fn test_const_codes() {
        const CODE: DiagnosticCode = DiagnosticCode::E_PARSER_EXPECTED_ARROW;
        assert_eq!(CODE.prefix(), "E");
        assert_eq!(CODE.number(), 6001);
    }
}
