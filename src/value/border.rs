//! Per-side borders with shorthand collapse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::css::model::Declaration;
use crate::theme::Theme;
use crate::value::color::ColorToken;
use crate::value::length::{
    format_number, has_unit_key, parse_number, strip_unit_suffixes, with_unit, BorderUnit,
};
use crate::value::spacing::Side;
use crate::value::tokenizer::{split_dimension, tokenize, Token};
use crate::value::{from_canonical, loose, Normalize};

keyword_enum! {
    /// Border line style.
    pub enum BorderStyle {
        None => "none",
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        Double => "double",
    }
    default = None;
}

/// One side of a border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSide {
    #[serde(deserialize_with = "loose::string")]
    pub width: String,
    pub style: BorderStyle,
    pub color: ColorToken,
}

impl Default for BorderSide {
    fn default() -> Self {
        Self {
            width: "0".to_string(),
            style: BorderStyle::None,
            color: ColorToken::custom("#000000"),
        }
    }
}

impl BorderSide {
    pub fn new(width: impl Into<String>, style: BorderStyle, color: ColorToken) -> Self {
        Self {
            width: width.into(),
            style,
            color,
        }
    }

    /// Returns `true` if this side draws nothing (`none` style or zero width).
    pub fn is_empty(&self) -> bool {
        self.style == BorderStyle::None || parse_number(&self.width).is_none_or(|w| w == 0.0)
    }

    /// The `<width> <style> <color>` value, or `""` if the side draws nothing.
    pub fn css_value(&self, unit: BorderUnit, theme: &Theme, color_fallback: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        let width = with_unit(&self.width, unit.as_str());
        let color = self.color.resolve(theme, color_fallback);
        if color.is_empty() {
            format!("{width} {}", self.style)
        } else {
            format!("{width} {} {color}", self.style)
        }
    }

    /// Parse a legacy `"1px solid #ccc"` string. Returns the side and the
    /// unit found on the width, if any.
    fn from_shorthand(text: &str) -> (Self, Option<BorderUnit>) {
        let mut side = BorderSide {
            style: BorderStyle::Solid,
            ..BorderSide::default()
        };
        let mut unit = None;
        let mut saw_width = false;

        for (token, text) in tokenize(text) {
            match token {
                Token::Number | Token::Dimension if !saw_width => {
                    if let Some((n, suffix)) = split_dimension(&text) {
                        side.width = format_number(n);
                        unit = BorderUnit::from_keyword(suffix);
                        saw_width = true;
                    }
                }
                Token::HexColor | Token::Function => side.color = ColorToken::custom(text),
                Token::Ident => match BorderStyle::from_keyword(&text) {
                    Some(style) => side.style = style,
                    None => side.color = ColorToken::theme(text),
                },
                _ => {}
            }
        }

        (side, unit)
    }
}

/// Four border sides with a shared width unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderValue {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
    pub unit: BorderUnit,
    #[serde(deserialize_with = "loose::boolean")]
    pub linked: bool,
}

impl BorderValue {
    /// A linked border with the same side everywhere.
    pub fn uniform(side: BorderSide, unit: BorderUnit) -> Self {
        Self {
            top: side.clone(),
            right: side.clone(),
            bottom: side.clone(),
            left: side,
            unit,
            linked: true,
        }
    }

    pub fn side(&self, side: Side) -> &BorderSide {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Return a copy with `side` replaced. A linked border updates all four.
    pub fn with_side(&self, side: Side, value: BorderSide) -> Self {
        if self.linked {
            return Self::uniform(value, self.unit);
        }
        let mut next = self.clone();
        match side {
            Side::Top => next.top = value,
            Side::Right => next.right = value,
            Side::Bottom => next.bottom = value,
            Side::Left => next.left = value,
        }
        next
    }

    /// Return a copy with the link toggled. Linking copies `top` everywhere.
    pub fn with_linked(&self, linked: bool) -> Self {
        if linked {
            Self::uniform(self.top.clone(), self.unit)
        } else {
            Self {
                linked: false,
                ..self.clone()
            }
        }
    }

    pub fn with_unit(&self, unit: BorderUnit) -> Self {
        Self {
            unit,
            ..self.clone()
        }
    }

    /// Border declarations, collapsed to a single `border` shorthand when all
    /// four sides resolve identically. Sides that draw nothing are omitted.
    pub fn declarations(&self, theme: &Theme, color_fallback: &str) -> Vec<Declaration> {
        let values: Vec<(Side, String)> = Side::ALL
            .iter()
            .map(|side| {
                let value = self.side(*side).css_value(self.unit, theme, color_fallback);
                (*side, value)
            })
            .collect();

        let first = &values[0].1;
        if !first.is_empty() && values.iter().all(|(_, v)| v == first) {
            return vec![Declaration::new("border", first.clone())];
        }

        values
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(side, value)| Declaration::new(format!("border-{}", side.as_str()), value))
            .collect()
    }

    /// Strip unit suffixes typed into side widths (`"2px"`).
    fn without_width_units(mut self, explicit_unit: bool) -> Self {
        self.unit = strip_unit_suffixes(
            &mut [
                &mut self.top.width,
                &mut self.right.width,
                &mut self.bottom.width,
                &mut self.left.width,
            ],
            self.unit,
            explicit_unit,
            BorderUnit::from_keyword,
        );
        self
    }

    fn relinked(self) -> Self {
        if self.linked {
            Self::uniform(self.top, self.unit)
        } else {
            self
        }
    }
}

fn has_side_keys(raw: &Value) -> bool {
    raw.as_object().is_some_and(|map| {
        Side::ALL
            .iter()
            .any(|side| map.contains_key(side.as_str()))
    })
}

impl Normalize for BorderValue {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) if has_side_keys(raw) => from_canonical::<Self>(raw, "border")
                .without_width_units(has_unit_key(raw))
                .relinked(),
            Value::Object(map) => {
                // A single side object applies to all four sides.
                let mut side = from_canonical::<BorderSide>(raw, "border side");
                let unit = map
                    .get("unit")
                    .map(BorderUnit::normalize)
                    .unwrap_or_default();
                let unit = strip_unit_suffixes(
                    &mut [&mut side.width],
                    unit,
                    has_unit_key(raw),
                    BorderUnit::from_keyword,
                );
                Self::uniform(side, unit)
            }
            Value::String(s) if !s.trim().is_empty() => {
                let (side, unit) = BorderSide::from_shorthand(s);
                Self::uniform(side, unit.unwrap_or_default())
            }
            _ => Self::default(),
        }
    }
}
