//! Sizing dimensions (width, height and their min/max variants, gaps).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::length::{format_number, has_unit_key, numeric_text, strip_unit_suffixes, DimensionUnit};
use crate::value::tokenizer::{split_dimension, tokenize, Token};
use crate::value::{from_canonical, loose, Normalize};

/// The six sizing properties a component exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeProperty {
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

impl SizeProperty {
    /// Emission order.
    pub const ALL: [SizeProperty; 6] = [
        SizeProperty::Width,
        SizeProperty::Height,
        SizeProperty::MinWidth,
        SizeProperty::MaxWidth,
        SizeProperty::MinHeight,
        SizeProperty::MaxHeight,
    ];

    /// Property bag key.
    pub fn key(self) -> &'static str {
        match self {
            SizeProperty::Width => "width",
            SizeProperty::Height => "height",
            SizeProperty::MinWidth => "minWidth",
            SizeProperty::MaxWidth => "maxWidth",
            SizeProperty::MinHeight => "minHeight",
            SizeProperty::MaxHeight => "maxHeight",
        }
    }

    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            SizeProperty::Width => "width",
            SizeProperty::Height => "height",
            SizeProperty::MinWidth => "min-width",
            SizeProperty::MaxWidth => "max-width",
            SizeProperty::MinHeight => "min-height",
            SizeProperty::MaxHeight => "max-height",
        }
    }

    /// Keyword a sentinel unit renders as: `none` for limits, `auto` otherwise.
    pub fn sentinel(self) -> &'static str {
        match self {
            SizeProperty::MaxWidth | SizeProperty::MaxHeight => "none",
            _ => "auto",
        }
    }
}

/// A number with a sizing unit. `auto` / `none` units ignore the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    #[serde(deserialize_with = "loose::string")]
    pub value: String,
    /// Missing units in stored objects mean pixels, unless `value` carries a suffix.
    #[serde(default)]
    pub unit: DimensionUnit,
}

impl Default for Dimension {
    fn default() -> Self {
        Self::auto()
    }
}

impl Dimension {
    pub fn new(value: impl Into<String>, unit: DimensionUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    pub fn px(value: impl Into<String>) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    pub fn auto() -> Self {
        Self::new("", DimensionUnit::Auto)
    }

    pub fn none() -> Self {
        Self::new("", DimensionUnit::None)
    }

    /// Returns `true` if the unit is `auto` or `none`.
    pub fn is_sentinel(&self) -> bool {
        self.unit.is_sentinel()
    }

    /// Parse legacy text: `"50%"`, `"12rem"`, `"100"` (pixels), `"auto"`, `"none"`.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if let Some(unit) = DimensionUnit::from_keyword(trimmed).filter(|u| u.is_sentinel()) {
            return Self::new("", unit);
        }
        let parsed = tokenize(trimmed).into_iter().find_map(|(token, text)| match token {
            Token::Number | Token::Dimension => split_dimension(&text).map(|(n, suffix)| {
                let unit = if suffix.is_empty() {
                    Some(DimensionUnit::Px)
                } else {
                    DimensionUnit::from_keyword(suffix)
                };
                unit.map(|unit| Self::new(format_number(n), unit))
            }),
            _ => None,
        });
        match parsed.flatten() {
            Some(dimension) => dimension,
            None => {
                tracing::debug!(text, "unparseable dimension, using auto");
                Self::auto()
            }
        }
    }

    /// CSS value for a sizing property. Sentinels render as the property's
    /// sentinel keyword; malformed numbers render `""`.
    pub fn css_value_for(&self, property: SizeProperty) -> String {
        if self.is_sentinel() || self.value.trim().eq_ignore_ascii_case("auto") {
            return property.sentinel().to_string();
        }
        self.css_length()
    }

    /// CSS length with unit, or `""` for sentinels and malformed numbers.
    pub fn css_length(&self) -> String {
        if self.is_sentinel() {
            return String::new();
        }
        match numeric_text(&self.value) {
            Some(n) => format!("{n}{}", self.unit),
            None => String::new(),
        }
    }
}

impl Normalize for Dimension {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => {
                let mut dimension: Self = from_canonical(raw, "dimension");
                dimension.unit = strip_unit_suffixes(
                    &mut [&mut dimension.value],
                    dimension.unit,
                    has_unit_key(raw),
                    |suffix| DimensionUnit::from_keyword(suffix).filter(|u| !u.is_sentinel()),
                );
                dimension
            }
            Value::String(s) => Self::from_text(s),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Self::px(format_number(n)))
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
