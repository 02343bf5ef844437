//! Typography values: font size/weight tokens, line height, letter spacing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::Theme;
use crate::value::color::TokenKind;
use crate::value::length::{
    format_number, numeric_text, with_unit, LetterSpacingUnit, LineHeightUnit,
};
use crate::value::tokenizer::split_dimension;
use crate::value::{from_canonical, loose, Normalize};

/// Font size: a key into `typography.fontSize` or a literal size.
///
/// Bare numeric custom sizes are treated as pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSize {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(deserialize_with = "loose::string")]
    pub value: String,
}

impl FontSize {
    pub fn theme(key: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Theme,
            value: key.into(),
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Custom,
            value: value.into(),
        }
    }

    /// The `font-size` value, or `""` if unset or the theme has no such size.
    pub fn css_value(&self, theme: &Theme) -> String {
        let value = self.value.trim();
        if value.is_empty() {
            return String::new();
        }
        match self.kind {
            TokenKind::Theme => theme.resolve_font_size(value, ""),
            TokenKind::Custom => match numeric_text(value) {
                Some(n) => format!("{n}px"),
                None => value.to_string(),
            },
        }
    }
}

impl Normalize for FontSize {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical(raw, "font size"),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Self::custom(format_number(n)))
                .unwrap_or_default(),
            Value::String(s) if starts_numeric(s) => Self::custom(s.trim()),
            Value::String(s) if !s.trim().is_empty() => Self::theme(s.trim()),
            _ => Self::default(),
        }
    }
}

/// Font weight: a key into `typography.fontWeight` or a literal weight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontWeight {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(deserialize_with = "loose::string")]
    pub value: String,
}

impl FontWeight {
    pub fn theme(key: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Theme,
            value: key.into(),
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Custom,
            value: value.into(),
        }
    }

    /// The `font-weight` value, or `""` if unset or unresolvable.
    pub fn css_value(&self, theme: &Theme) -> String {
        let value = self.value.trim();
        if value.is_empty() {
            return String::new();
        }
        match self.kind {
            TokenKind::Theme => theme.resolve_font_weight(value, ""),
            TokenKind::Custom => numeric_text(value).unwrap_or_else(|| value.to_string()),
        }
    }
}

impl Normalize for FontWeight {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical(raw, "font weight"),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Self::custom(format_number(n)))
                .unwrap_or_default(),
            Value::String(s) if starts_numeric(s) => Self::custom(s.trim()),
            Value::String(s) if !s.trim().is_empty() => Self::theme(s.trim()),
            _ => Self::default(),
        }
    }
}

/// Line height as a multiplier or a length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineHeight {
    #[serde(deserialize_with = "loose::string")]
    pub value: String,
    pub unit: LineHeightUnit,
}

impl LineHeight {
    pub fn new(value: impl Into<String>, unit: LineHeightUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    /// `"1.5"` for unitless, `"24px"` otherwise; `""` if malformed.
    pub fn css_value(&self) -> String {
        with_unit(&self.value, self.unit.suffix())
    }
}

impl Normalize for LineHeight {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical(raw, "line height"),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Self::new(format_number(n), LineHeightUnit::Unitless))
                .unwrap_or_default(),
            Value::String(s) => match split_dimension(s.trim()) {
                Some((n, suffix)) => match LineHeightUnit::from_keyword(suffix) {
                    Some(unit) => Self::new(format_number(n), unit),
                    None => Self::default(),
                },
                None => Self::default(),
            },
            _ => Self::default(),
        }
    }
}

/// Letter spacing as a length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterSpacing {
    #[serde(deserialize_with = "loose::string")]
    pub value: String,
    pub unit: LetterSpacingUnit,
}

impl LetterSpacing {
    pub fn new(value: impl Into<String>, unit: LetterSpacingUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    pub fn css_value(&self) -> String {
        with_unit(&self.value, self.unit.as_str())
    }
}

impl Normalize for LetterSpacing {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical(raw, "letter spacing"),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Self::new(format_number(n), LetterSpacingUnit::Px))
                .unwrap_or_default(),
            Value::String(s) => match split_dimension(s.trim()) {
                Some((n, suffix)) => {
                    let unit = if suffix.is_empty() {
                        Some(LetterSpacingUnit::Px)
                    } else {
                        LetterSpacingUnit::from_keyword(suffix)
                    };
                    unit.map(|unit| Self::new(format_number(n), unit))
                        .unwrap_or_default()
                }
                None => Self::default(),
            },
            _ => Self::default(),
        }
    }
}

fn starts_numeric(text: &str) -> bool {
    text.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::from_value(json!({
            "typography": {
                "fontSize": { "lg": "1.125rem" },
                "fontWeight": { "bold": "700" }
            }
        }))
    }

    // ── Font size ────────────────────────────────────────────────────

    #[test]
    fn font_size_theme() {
        let theme = theme();
        assert_eq!(FontSize::theme("lg").css_value(&theme), "1.125rem");
        assert_eq!(FontSize::theme("typography.fontSize.lg").css_value(&theme), "1.125rem");
        assert_eq!(FontSize::theme("huge").css_value(&theme), "");
    }

    #[test]
    fn font_size_custom() {
        let theme = theme();
        assert_eq!(FontSize::custom("18").css_value(&theme), "18px");
        assert_eq!(FontSize::custom("2rem").css_value(&theme), "2rem");
        assert_eq!(FontSize::custom("").css_value(&theme), "");
    }

    #[test]
    fn font_size_normalize() {
        assert_eq!(FontSize::normalize(&json!("lg")), FontSize::theme("lg"));
        assert_eq!(FontSize::normalize(&json!("14px")), FontSize::custom("14px"));
        assert_eq!(FontSize::normalize(&json!(20)), FontSize::custom("20"));
        assert_eq!(
            FontSize::normalize(&json!({ "type": "theme", "value": "lg" })),
            FontSize::theme("lg")
        );
    }

    // ── Font weight ──────────────────────────────────────────────────

    #[test]
    fn font_weight() {
        let theme = theme();
        assert_eq!(FontWeight::theme("bold").css_value(&theme), "700");
        assert_eq!(FontWeight::custom("600").css_value(&theme), "600");
        assert_eq!(FontWeight::custom("bolder").css_value(&theme), "bolder");
        assert_eq!(FontWeight::normalize(&json!(500)), FontWeight::custom("500"));
        assert_eq!(FontWeight::normalize(&json!("bold")), FontWeight::theme("bold"));
    }

    // ── Line height & letter spacing ─────────────────────────────────

    #[test]
    fn line_height() {
        assert_eq!(LineHeight::new("1.5", LineHeightUnit::Unitless).css_value(), "1.5");
        assert_eq!(LineHeight::new("24", LineHeightUnit::Px).css_value(), "24px");
        assert_eq!(LineHeight::new("tall", LineHeightUnit::Em).css_value(), "");
        assert_eq!(
            LineHeight::normalize(&json!("1.25rem")),
            LineHeight::new("1.25", LineHeightUnit::Rem)
        );
        assert_eq!(
            LineHeight::normalize(&json!(1.4)),
            LineHeight::new("1.4", LineHeightUnit::Unitless)
        );
    }

    #[test]
    fn letter_spacing() {
        assert_eq!(LetterSpacing::new("0.05", LetterSpacingUnit::Em).css_value(), "0.05em");
        assert_eq!(LetterSpacing::new("-1", LetterSpacingUnit::Px).css_value(), "-1px");
        assert_eq!(
            LetterSpacing::normalize(&json!("2px")),
            LetterSpacing::new("2", LetterSpacingUnit::Px)
        );
        assert_eq!(LetterSpacing::normalize(&json!("wide")), LetterSpacing::default());
    }
}
