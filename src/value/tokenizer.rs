//! logos-based lexer for legacy shorthand strings.
//!
//! Older design documents store some properties as plain CSS-ish strings
//! (`"10px 20px"`, `"1px solid #ccc"`, `"50%"`). This lexer splits them into
//! typed lexemes so the normalizers can rebuild the canonical objects.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (`10px` as Dimension beats `10` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`], not an error + `Ident`
//! - `1.5rem` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `rgb(0, 0, 0)` matches [`Token::Function`], not `Ident` + garbage

use logos::Logos;

/// Token produced by the shorthand lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f,]+")]
pub enum Token {
    /// CSS hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Functional notation: `rgb(0, 0, 0)`, `hsl(200 50% 50%)`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*\([^)]*\)")]
    Function,

    /// Number with a unit suffix: `10px`, `1.5rem`, `50%`, `100vw`, `1fr`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|em|rem|%|vw|vh|fr)")]
    Dimension,

    /// Unitless number, possibly negative or fractional.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Identifier or dotted token path: `solid`, `auto`, `primary.500`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.-]*")]
    Ident,
}

/// Tokenize a shorthand string into `(Token, text)` pairs.
///
/// Fragments that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

/// Split dimension text like `"1.5rem"` into its number and unit suffix.
pub fn split_dimension(text: &str) -> Option<(f64, &str)> {
    let boundary = text
        .char_indices()
        .find(|(i, c)| c.is_ascii_alphabetic() || *c == '%' || (*c == '-' && *i > 0))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(boundary);
    let number: f64 = number.trim().parse().ok()?;
    number.is_finite().then_some((number, unit))
}
