//! Token kinds and the `Token` value produced by the lexer.

use hue_util::Symbol;

/// The tag of a lexed token (§4.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Error,
    Comment,
    Func,
    External,
    Mutable,
    Nil,
    If,
    Else,
    Structure,
    Identifier,
    BinaryOperator,
    BinaryComparisonOperator,
    Assignment,
    LeftArrow,
    RightArrow,
    LeftParen,
    RightParen,
    LeftSqBracket,
    RightSqBracket,
    Colon,
    Semicolon,
    Comma,
    Stop,
    Question,
    Backslash,
    MapLiteral,
    NewLine,
    IntLiteral,
    FloatLiteral,
    BoolLiteral,
    DataLiteral,
    TextLiteral,
    IntSymbol,
    FloatSymbol,
    Byte,
    Char,
    Bool,
    End,
}

impl TokenKind {
    /// Whether a token of this kind can *begin* a call argument or a
    /// primary expression (§4.3.2).
    pub fn can_start_call_argument(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BoolLiteral
                | TokenKind::DataLiteral
                | TokenKind::TextLiteral
                | TokenKind::LeftParen
                | TokenKind::LeftSqBracket
                | TokenKind::Func
                | TokenKind::Nil
                | TokenKind::If
        )
    }
}

/// Radix of an `IntLiteral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

/// A single lexed token.
///
/// At most one of `text_value`, `int_value`, `double_value` is populated,
/// depending on `kind` (§3).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
    pub length: u32,
    pub text_value: Option<Symbol>,
    pub int_value: Option<i64>,
    pub double_value: Option<f64>,
    pub radix: Option<Radix>,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, column: u32, length: u32) -> Self {
        Self {
            kind,
            line,
            column,
            length,
            text_value: None,
            int_value: None,
            double_value: None,
            radix: None,
        }
    }

    pub fn with_text(mut self, text: Symbol) -> Self {
        self.text_value = Some(text);
        self
    }

    pub fn with_int(mut self, value: i64) -> Self {
        self.int_value = Some(value);
        self
    }

    pub fn with_double(mut self, value: f64) -> Self {
        self.double_value = Some(value);
        self
    }

    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = Some(radix);
        self
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}
