//! Layout keywords and the small scalar layout values (z-index, opacity,
//! grid column count).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::length::{format_number, parse_number};
use crate::value::Normalize;

keyword_enum! {
    /// CSS `display`.
    pub enum Display {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        InlineGrid => "inline-grid",
        None => "none",
    }
    default = Block;
}

impl Display {
    /// `flex` or `inline-flex`.
    pub fn is_flex(self) -> bool {
        matches!(self, Display::Flex | Display::InlineFlex)
    }

    /// `grid` or `inline-grid`.
    pub fn is_grid(self) -> bool {
        matches!(self, Display::Grid | Display::InlineGrid)
    }
}

keyword_enum! {
    /// CSS `flex-direction`.
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
    default = Row;
}

keyword_enum! {
    /// Named main-axis alignment, mapped to `justify-content` keywords.
    pub enum JustifyContent {
        Start => "start" | "flex-start",
        Center => "center",
        End => "end" | "flex-end",
        Between => "between" | "space-between",
        Around => "around" | "space-around",
        Evenly => "evenly" | "space-evenly",
    }
    default = Start;
}

impl JustifyContent {
    pub fn css_value(self) -> &'static str {
        match self {
            JustifyContent::Start => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::End => "flex-end",
            JustifyContent::Between => "space-between",
            JustifyContent::Around => "space-around",
            JustifyContent::Evenly => "space-evenly",
        }
    }
}

keyword_enum! {
    /// Cross-axis alignment, shared by flex and grid containers.
    pub enum AlignItems {
        Stretch => "stretch",
        Start => "start" | "flex-start",
        Center => "center",
        End => "end" | "flex-end",
        Baseline => "baseline",
    }
    default = Stretch;
}

impl AlignItems {
    pub fn css_value(self) -> &'static str {
        match self {
            AlignItems::Stretch => "stretch",
            AlignItems::Start => "flex-start",
            AlignItems::Center => "center",
            AlignItems::End => "flex-end",
            AlignItems::Baseline => "baseline",
        }
    }
}

keyword_enum! {
    /// CSS `flex-wrap`.
    pub enum FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
    default = NoWrap;
}

keyword_enum! {
    /// CSS `position`. `static` is the default and is never emitted.
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
    default = Static;
}

impl Position {
    pub fn css_value(self) -> &'static str {
        match self {
            Position::Static => "",
            other => other.as_str(),
        }
    }
}

keyword_enum! {
    /// CSS `overflow`. `visible` is the default and is never emitted.
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
        Auto => "auto",
    }
    default = Visible;
}

impl Overflow {
    pub fn css_value(self) -> &'static str {
        match self {
            Overflow::Visible => "",
            other => other.as_str(),
        }
    }
}

keyword_enum! {
    /// CSS `text-align`.
    pub enum TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
    default = Left;
}

/// Stacking order: `auto` or an integer (negatives allowed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZIndex {
    #[default]
    Auto,
    Value(i64),
}

impl ZIndex {
    /// `"auto"` or the integer as text.
    pub fn css_value(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ZIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZIndex::Auto => f.write_str("auto"),
            ZIndex::Value(n) => write!(f, "{n}"),
        }
    }
}

impl Normalize for ZIndex {
    fn normalize(raw: &Value) -> Self {
        let parsed = match raw {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| parse_number(s).map(|f| f.trunc() as i64))
            }
            _ => None,
        };
        if parsed.is_none() && !raw.is_null() && raw.as_str() != Some("auto") {
            tracing::debug!(value = %raw, "malformed z-index, using auto");
        }
        parsed.map(ZIndex::Value).unwrap_or_default()
    }
}

impl Serialize for ZIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ZIndex::Auto => serializer.serialize_str("auto"),
            ZIndex::Value(n) => serializer.serialize_i64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for ZIndex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

/// Opacity as an integer percentage, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(100);

    /// Create from a percentage, clamped to 0..=100.
    pub fn new(percent: i64) -> Self {
        Opacity(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Decimal text in 0..=1: `50` → `"0.5"`, `100` → `"1"`.
    pub fn css_value(self) -> String {
        format_number(f64::from(self.0) / 100.0)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl Normalize for Opacity {
    fn normalize(raw: &Value) -> Self {
        let parsed = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_number(s.trim().trim_end_matches('%')),
            _ => None,
        };
        match parsed.filter(|n| n.is_finite()) {
            Some(n) => Self::new(n.round() as i64),
            None => {
                if !raw.is_null() {
                    tracing::debug!(value = %raw, "malformed opacity, using 100");
                }
                Self::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Opacity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

/// Number of equal-width grid columns, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GridColumns(u16);

impl GridColumns {
    pub fn new(count: i64) -> Self {
        GridColumns(count.clamp(1, i64::from(u16::MAX)) as u16)
    }

    pub fn count(self) -> u16 {
        self.0
    }

    /// `repeat(n, 1fr)`.
    pub fn css_value(self) -> String {
        format!("repeat({}, 1fr)", self.0)
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        GridColumns(1)
    }
}

impl Normalize for GridColumns {
    fn normalize(raw: &Value) -> Self {
        let parsed = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_number(s),
            _ => None,
        };
        parsed
            .map(|n| Self::new(n.trunc() as i64))
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for GridColumns {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Keywords ─────────────────────────────────────────────────────

    #[test]
    fn display_families() {
        assert!(Display::Flex.is_flex());
        assert!(Display::InlineFlex.is_flex());
        assert!(Display::InlineGrid.is_grid());
        assert!(!Display::Block.is_flex());
        assert_eq!(Display::normalize(&json!("inline-block")), Display::InlineBlock);
        assert_eq!(Display::normalize(&json!("table")), Display::Block);
    }

    #[test]
    fn justify_named_map() {
        assert_eq!(JustifyContent::Between.css_value(), "space-between");
        assert_eq!(JustifyContent::Start.css_value(), "flex-start");
        assert_eq!(
            JustifyContent::normalize(&json!("space-evenly")),
            JustifyContent::Evenly
        );
        assert_eq!(JustifyContent::Evenly.as_str(), "evenly");
    }

    #[test]
    fn default_sentinels_are_omitted() {
        assert_eq!(Position::Static.css_value(), "");
        assert_eq!(Position::Sticky.css_value(), "sticky");
        assert_eq!(Overflow::Visible.css_value(), "");
        assert_eq!(Overflow::Hidden.css_value(), "hidden");
    }

    // ── Z-index ──────────────────────────────────────────────────────

    #[test]
    fn z_index() {
        assert_eq!(ZIndex::Auto.css_value(), "auto");
        assert_eq!(ZIndex::Value(-2).css_value(), "-2");
        assert_eq!(ZIndex::normalize(&json!(10)), ZIndex::Value(10));
        assert_eq!(ZIndex::normalize(&json!("-5")), ZIndex::Value(-5));
        assert_eq!(ZIndex::normalize(&json!("auto")), ZIndex::Auto);
        assert_eq!(ZIndex::normalize(&json!("top")), ZIndex::Auto);
        assert_eq!(serde_json::to_value(ZIndex::Value(3)).unwrap(), json!(3));
    }

    // ── Opacity ──────────────────────────────────────────────────────

    #[test]
    fn opacity_decimal() {
        assert_eq!(Opacity::new(100).css_value(), "1");
        assert_eq!(Opacity::new(50).css_value(), "0.5");
        assert_eq!(Opacity::new(0).css_value(), "0");
        assert_eq!(Opacity::new(5).css_value(), "0.05");
    }

    #[test]
    fn opacity_tolerates_bad_input() {
        assert_eq!(Opacity::normalize(&json!(150)), Opacity::new(100));
        assert_eq!(Opacity::normalize(&json!(-3)), Opacity::new(0));
        assert_eq!(Opacity::normalize(&json!("40")), Opacity::new(40));
        assert_eq!(Opacity::normalize(&json!("75%")), Opacity::new(75));
        assert_eq!(Opacity::normalize(&json!("half")), Opacity::OPAQUE);
    }

    // ── Grid ─────────────────────────────────────────────────────────

    #[test]
    fn grid_columns() {
        assert_eq!(GridColumns::new(3).css_value(), "repeat(3, 1fr)");
        assert_eq!(GridColumns::normalize(&json!("4")), GridColumns::new(4));
        assert_eq!(GridColumns::normalize(&json!(0)), GridColumns::new(1));
        assert_eq!(GridColumns::normalize(&json!("many")), GridColumns::default());
    }
}
