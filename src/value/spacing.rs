//! Box-model spacing (padding and margin).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::length::{format_number, has_unit_key, numeric_text, strip_unit_suffixes, SpacingUnit};
use crate::value::tokenizer::{split_dimension, tokenize, Token};
use crate::value::{from_canonical, loose, Normalize};

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in CSS shorthand order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Side name as used in longhand property names (`border-top`).
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// Four-sided spacing with a shared unit.
///
/// When `linked` is true all four sides are equal; every mutation keeps them so.
/// `"auto"` is accepted per side and is emitted literally for margins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxModelValue {
    #[serde(deserialize_with = "loose::string")]
    pub top: String,
    #[serde(deserialize_with = "loose::string")]
    pub right: String,
    #[serde(deserialize_with = "loose::string")]
    pub bottom: String,
    #[serde(deserialize_with = "loose::string")]
    pub left: String,
    pub unit: SpacingUnit,
    #[serde(deserialize_with = "loose::boolean")]
    pub linked: bool,
}

impl Default for BoxModelValue {
    fn default() -> Self {
        Self::new("0", "0", "0", "0", SpacingUnit::Px)
    }
}

impl BoxModelValue {
    /// Create an unlinked value with explicit sides.
    pub fn new(
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
        unit: SpacingUnit,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
            unit,
            linked: false,
        }
    }

    /// Create a linked value with the same amount on every side.
    pub fn uniform(value: impl Into<String>, unit: SpacingUnit) -> Self {
        let value = value.into();
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
            unit,
            linked: true,
        }
    }

    /// Build from CSS shorthand text such as `"10px 20px"`.
    ///
    /// - 1 value: all sides
    /// - 2 values: vertical, horizontal
    /// - 3 values: top, horizontal, bottom
    /// - 4 values: top, right, bottom, left
    pub fn from_shorthand(text: &str) -> Self {
        let mut unit = None;
        let mut parts = Vec::new();
        for (token, text) in tokenize(text) {
            match token {
                Token::Number => parts.push(text),
                Token::Dimension => {
                    if let Some((n, suffix)) = split_dimension(&text) {
                        unit = unit.or_else(|| SpacingUnit::from_keyword(suffix));
                        parts.push(format_number(n));
                    }
                }
                Token::Ident if text.eq_ignore_ascii_case("auto") => parts.push("auto".into()),
                _ => {}
            }
        }

        let unit = unit.unwrap_or_default();
        let value = match parts.as_slice() {
            [] => {
                tracing::debug!(text, "unparseable spacing shorthand, using default");
                return Self::default();
            }
            [all] => Self::uniform(all.clone(), unit),
            [v, h] => Self::new(v.clone(), h.clone(), v.clone(), h.clone(), unit),
            [t, h, b] => Self::new(t.clone(), h.clone(), b.clone(), h.clone(), unit),
            [t, r, b, l, ..] => Self::new(t.clone(), r.clone(), b.clone(), l.clone(), unit),
        };
        value.with_linked_if_uniform()
    }

    /// The stored text for `side`.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Return a copy with `side` set. A linked value updates all four sides.
    pub fn with_side(&self, side: Side, value: impl Into<String>) -> Self {
        let value = value.into();
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

    /// Return a copy with the link toggled. Linking copies `top` to every side.
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

    /// Return a copy with a different unit.
    pub fn with_unit(&self, unit: SpacingUnit) -> Self {
        Self {
            unit,
            ..self.clone()
        }
    }

    /// Strip unit suffixes typed into side text (`"10px"`).
    fn without_side_units(mut self, explicit_unit: bool) -> Self {
        self.unit = strip_unit_suffixes(
            &mut [&mut self.top, &mut self.right, &mut self.bottom, &mut self.left],
            self.unit,
            explicit_unit,
            SpacingUnit::from_keyword,
        );
        self
    }

    /// Re-establish the linked invariant after reading untrusted input.
    fn relinked(self) -> Self {
        if self.linked {
            Self::uniform(self.top, self.unit)
        } else {
            self
        }
    }

    fn with_linked_if_uniform(mut self) -> Self {
        self.linked = self.top == self.right && self.top == self.bottom && self.top == self.left;
        self
    }

    fn format_side(&self, side: Side, allow_auto: bool) -> String {
        let raw = self.side(side).trim();
        if raw.eq_ignore_ascii_case("auto") {
            return if allow_auto {
                "auto".to_string()
            } else {
                format!("0{}", self.unit)
            };
        }
        let number = numeric_text(raw).unwrap_or_else(|| "0".to_string());
        format!("{number}{}", self.unit)
    }

    fn format(&self, allow_auto: bool) -> String {
        Side::ALL
            .iter()
            .map(|side| self.format_side(*side, allow_auto))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Margin value: always the 4-value shorthand; `auto` sides pass through.
    pub fn css_margin(&self) -> String {
        self.format(true)
    }

    /// Padding value: always the 4-value shorthand; `auto` sides render as zero.
    pub fn css_padding(&self) -> String {
        self.format(false)
    }
}

impl Normalize for BoxModelValue {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical::<Self>(raw, "spacing")
                .without_side_units(has_unit_key(raw))
                .relinked(),
            Value::String(s) => Self::from_shorthand(s),
            Value::Number(n) => match n.as_f64() {
                Some(n) => Self::uniform(format_number(n), SpacingUnit::Px),
                None => Self::default(),
            },
            _ => Self::default(),
        }
    }
}
