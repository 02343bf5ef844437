//! Per-corner border radius with shorthand collapse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::css::model::Declaration;
use crate::value::length::{
    format_number, has_unit_key, parse_number, strip_unit_suffixes, with_unit, SpacingUnit,
};
use crate::value::tokenizer::{split_dimension, tokenize, Token};
use crate::value::{from_canonical, loose, Normalize};

/// A box corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Corners in CSS shorthand order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Longhand property name, e.g. `border-top-left-radius`.
    pub fn property(self) -> &'static str {
        match self {
            Corner::TopLeft => "border-top-left-radius",
            Corner::TopRight => "border-top-right-radius",
            Corner::BottomRight => "border-bottom-right-radius",
            Corner::BottomLeft => "border-bottom-left-radius",
        }
    }
}

/// Four corner radii with a shared unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderRadiusValue {
    #[serde(deserialize_with = "loose::string")]
    pub top_left: String,
    #[serde(deserialize_with = "loose::string")]
    pub top_right: String,
    #[serde(deserialize_with = "loose::string")]
    pub bottom_right: String,
    #[serde(deserialize_with = "loose::string")]
    pub bottom_left: String,
    pub unit: SpacingUnit,
    #[serde(deserialize_with = "loose::boolean")]
    pub linked: bool,
}

impl Default for BorderRadiusValue {
    fn default() -> Self {
        Self::new("0", "0", "0", "0", SpacingUnit::Px)
    }
}

impl BorderRadiusValue {
    pub fn new(
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_right: impl Into<String>,
        bottom_left: impl Into<String>,
        unit: SpacingUnit,
    ) -> Self {
        Self {
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_right: bottom_right.into(),
            bottom_left: bottom_left.into(),
            unit,
            linked: false,
        }
    }

    /// A linked value with the same radius on every corner.
    pub fn uniform(value: impl Into<String>, unit: SpacingUnit) -> Self {
        let value = value.into();
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_right: value.clone(),
            bottom_left: value,
            unit,
            linked: true,
        }
    }

    /// Build from CSS shorthand text (`"8px"`, `"4px 8px"`, …).
    pub fn from_shorthand(text: &str) -> Self {
        let mut unit = None;
        let mut parts = Vec::new();
        for (token, text) in tokenize(text) {
            if let Token::Number | Token::Dimension = token {
                if let Some((n, suffix)) = split_dimension(&text) {
                    unit = unit.or_else(|| SpacingUnit::from_keyword(suffix));
                    parts.push(format_number(n));
                }
            }
        }

        let unit = unit.unwrap_or_default();
        match parts.as_slice() {
            [] => {
                tracing::debug!(text, "unparseable radius shorthand, using default");
                Self::default()
            }
            [all] => Self::uniform(all.clone(), unit),
            [a, b] => Self::new(a.clone(), b.clone(), a.clone(), b.clone(), unit),
            [a, b, c] => Self::new(a.clone(), b.clone(), c.clone(), b.clone(), unit),
            [a, b, c, d, ..] => Self::new(a.clone(), b.clone(), c.clone(), d.clone(), unit),
        }
    }

    pub fn corner(&self, corner: Corner) -> &str {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    /// Return a copy with `corner` set. A linked value updates all four corners.
    pub fn with_corner(&self, corner: Corner, value: impl Into<String>) -> Self {
        let value = value.into();
        if self.linked {
            return Self::uniform(value, self.unit);
        }
        let mut next = self.clone();
        match corner {
            Corner::TopLeft => next.top_left = value,
            Corner::TopRight => next.top_right = value,
            Corner::BottomRight => next.bottom_right = value,
            Corner::BottomLeft => next.bottom_left = value,
        }
        next
    }

    /// Return a copy with the link toggled. Linking copies `topLeft` everywhere.
    pub fn with_linked(&self, linked: bool) -> Self {
        if linked {
            Self::uniform(self.top_left.clone(), self.unit)
        } else {
            Self {
                linked: false,
                ..self.clone()
            }
        }
    }

    pub fn with_unit(&self, unit: SpacingUnit) -> Self {
        Self {
            unit,
            ..self.clone()
        }
    }

    /// CSS value for one corner, or `""` for zero or malformed input.
    pub fn css_corner(&self, corner: Corner) -> String {
        let raw = self.corner(corner);
        match parse_number(raw) {
            Some(n) if n != 0.0 => with_unit(raw, self.unit.as_str()),
            _ => String::new(),
        }
    }

    /// Radius declarations, collapsed to one `border-radius` when all
    /// corners agree. All-zero radii emit nothing.
    pub fn declarations(&self) -> Vec<Declaration> {
        let values: Vec<(Corner, String)> = Corner::ALL
            .iter()
            .map(|corner| (*corner, self.css_corner(*corner)))
            .collect();

        let first = &values[0].1;
        if values.iter().all(|(_, v)| v == first) {
            if first.is_empty() {
                return Vec::new();
            }
            return vec![Declaration::new("border-radius", first.clone())];
        }

        values
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(corner, value)| Declaration::new(corner.property(), value))
            .collect()
    }

    fn without_corner_units(mut self, explicit_unit: bool) -> Self {
        self.unit = strip_unit_suffixes(
            &mut [
                &mut self.top_left,
                &mut self.top_right,
                &mut self.bottom_right,
                &mut self.bottom_left,
            ],
            self.unit,
            explicit_unit,
            SpacingUnit::from_keyword,
        );
        self
    }

    fn relinked(self) -> Self {
        if self.linked {
            Self::uniform(self.top_left, self.unit)
        } else {
            self
        }
    }
}

impl Normalize for BorderRadiusValue {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical::<Self>(raw, "border radius")
                .without_corner_units(has_unit_key(raw))
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: &BorderRadiusValue) -> String {
        value
            .declarations()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn uniform_collapses() {
        assert_eq!(
            render(&BorderRadiusValue::uniform("8", SpacingUnit::Px)),
            "border-radius: 8px;"
        );
    }

    #[test]
    fn unlinked_but_equal_still_collapses() {
        let v = BorderRadiusValue::new("50", "50", "50", "50", SpacingUnit::Percent);
        assert_eq!(render(&v), "border-radius: 50%;");
    }

    #[test]
    fn all_zero_emits_nothing() {
        assert!(BorderRadiusValue::default().declarations().is_empty());
    }

    #[test]
    fn mixed_corners_emit_longhands() {
        let v = BorderRadiusValue::new("4", "0", "4", "0", SpacingUnit::Rem);
        assert_eq!(
            render(&v),
            "border-top-left-radius: 4rem; border-bottom-right-radius: 4rem;"
        );
    }

    #[test]
    fn malformed_corner_is_omitted() {
        let v = BorderRadiusValue::new("big", "2", "2", "2", SpacingUnit::Px);
        assert_eq!(
            render(&v),
            "border-top-right-radius: 2px; border-bottom-right-radius: 2px; border-bottom-left-radius: 2px;"
        );
    }

    #[test]
    fn linked_edit() {
        let v = BorderRadiusValue::uniform("2", SpacingUnit::Px).with_corner(Corner::BottomLeft, "6");
        assert_eq!(v, BorderRadiusValue::uniform("6", SpacingUnit::Px));
        let v = BorderRadiusValue::default().with_corner(Corner::BottomLeft, "6");
        assert_eq!(v.bottom_left, "6");
        assert_eq!(v.top_left, "0");
    }

    #[test]
    fn normalize_canonical() {
        let v = BorderRadiusValue::normalize(&json!({
            "topLeft": "8", "topRight": "8", "bottomRight": "8", "bottomLeft": "8", "unit": "px"
        }));
        assert_eq!(render(&v), "border-radius: 8px;");
    }

    #[test]
    fn normalize_legacy() {
        assert_eq!(
            BorderRadiusValue::normalize(&json!("4px 8px")),
            BorderRadiusValue::new("4", "8", "4", "8", SpacingUnit::Px)
        );
        assert_eq!(
            BorderRadiusValue::normalize(&json!(12)),
            BorderRadiusValue::uniform("12", SpacingUnit::Px)
        );
        assert_eq!(BorderRadiusValue::normalize(&json!(true)), BorderRadiusValue::default());
    }

    #[test]
    fn normalize_corner_text_with_units() {
        let v = BorderRadiusValue::normalize(&json!({
            "topLeft": "8px", "topRight": "8px", "bottomRight": "8px", "bottomLeft": "8px"
        }));
        assert_eq!(render(&v), "border-radius: 8px;");

        let v = BorderRadiusValue::normalize(&json!({ "topLeft": "50%", "linked": true }));
        assert_eq!(render(&v), "border-radius: 50%;");
    }
}
