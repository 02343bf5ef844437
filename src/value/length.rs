//! Units and numeric text handling shared by the compound value types.

use std::fmt;

use serde_json::Value;

use crate::value::tokenizer::split_dimension;

keyword_enum! {
    /// Unit for spacing and corner radii.
    pub enum SpacingUnit {
        Px => "px",
        Em => "em",
        Rem => "rem",
        Percent => "%",
    }
    default = Px;
}

keyword_enum! {
    /// Unit for border widths.
    pub enum BorderUnit {
        Px => "px",
        Em => "em",
        Rem => "rem",
    }
    default = Px;
}

keyword_enum! {
    /// Unit for sizing properties. `Auto` and `None` are sentinels that
    /// disable the numeric value.
    pub enum DimensionUnit {
        Px => "px",
        Percent => "%",
        Rem => "rem",
        Em => "em",
        Vw => "vw",
        Vh => "vh",
        Fr => "fr",
        Auto => "auto",
        None => "none",
    }
    default = Px;
}

impl DimensionUnit {
    /// Returns `true` for `auto` and `none`.
    pub fn is_sentinel(self) -> bool {
        matches!(self, DimensionUnit::Auto | DimensionUnit::None)
    }
}

keyword_enum! {
    /// Unit for line height. `Unitless` renders the bare multiplier.
    pub enum LineHeightUnit {
        Unitless => "unitless" | "",
        Em => "em",
        Rem => "rem",
        Px => "px",
    }
    default = Unitless;
}

impl LineHeightUnit {
    /// Suffix appended to the number in CSS output.
    pub fn suffix(self) -> &'static str {
        match self {
            LineHeightUnit::Unitless => "",
            other => other.as_str(),
        }
    }
}

keyword_enum! {
    /// Unit for letter spacing.
    pub enum LetterSpacingUnit {
        Em => "em",
        Rem => "rem",
        Px => "px",
    }
    default = Px;
}

/// Parse user-entered numeric text. Returns `None` for empty, malformed or
/// non-finite input.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Canonical text for user-entered numeric input, or `None` if malformed.
///
/// `"10"` stays `"10"`, `" 2.50 "` becomes `"2.5"`, `"abc"` is rejected.
pub fn numeric_text(text: &str) -> Option<String> {
    parse_number(text).map(format_number)
}

/// Format `text` with `unit` appended, or `""` if the text is not numeric.
pub fn with_unit(text: &str, unit: &str) -> String {
    match numeric_text(text) {
        Some(n) => format!("{n}{unit}"),
        None => String::new(),
    }
}

/// Split number text that carries its own unit suffix, e.g. `"10px"`.
///
/// Returns the canonical number and the suffix. Bare numbers, keywords and
/// malformed text return `None`.
pub fn suffixed_number(text: &str) -> Option<(String, &str)> {
    let (number, suffix) = split_dimension(text.trim())?;
    let suffix = suffix.trim();
    (!suffix.is_empty()).then(|| (format_number(number), suffix))
}

/// Returns `true` if a stored object names its unit.
pub(crate) fn has_unit_key(raw: &Value) -> bool {
    raw.get("unit").is_some_and(|unit| !unit.is_null())
}

/// Move unit suffixes off per-side number text read from a stored object.
///
/// A suffix naming `unit` is stripped. When the object carried no unit of
/// its own (`explicit` is false) the first recognised suffix becomes the
/// unit. A side whose suffix names a different unit is left as is and reads
/// as malformed. Returns the unit to use.
pub(crate) fn strip_unit_suffixes<U>(
    sides: &mut [&mut String],
    unit: U,
    explicit: bool,
    parse_unit: impl Fn(&str) -> Option<U>,
) -> U
where
    U: Copy + PartialEq + fmt::Display,
{
    let mut unit = unit;
    let mut settled = explicit;
    for side in sides.iter_mut() {
        let Some((number, suffix)) = suffixed_number(side.as_str()) else {
            continue;
        };
        let Some(found) = parse_unit(suffix) else {
            continue;
        };
        if !settled {
            unit = found;
            settled = true;
        }
        if found == unit {
            **side = number;
        } else {
            tracing::warn!(side = %side, %unit, "side unit differs from the value's unit, ignoring side");
        }
    }
    unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Normalize;
    use serde_json::json;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn test_numeric_text() {
        assert_eq!(numeric_text("10").as_deref(), Some("10"));
        assert_eq!(numeric_text(" 2.50 ").as_deref(), Some("2.5"));
        assert_eq!(numeric_text("abc"), None);
        assert_eq!(numeric_text(""), None);
        assert_eq!(numeric_text("NaN"), None);
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit("8", "px"), "8px");
        assert_eq!(with_unit("1.5", ""), "1.5");
        assert_eq!(with_unit("auto", "px"), "");
    }

    #[test]
    fn test_suffixed_number() {
        assert_eq!(suffixed_number(" 10px "), Some(("10".to_string(), "px")));
        assert_eq!(suffixed_number("2.50rem"), Some(("2.5".to_string(), "rem")));
        assert_eq!(suffixed_number("50%"), Some(("50".to_string(), "%")));
        assert_eq!(suffixed_number("10"), None);
        assert_eq!(suffixed_number("auto"), None);
    }

    #[test]
    fn test_strip_unit_suffixes() {
        let (mut a, mut b, mut c) = ("8px".to_string(), "4".to_string(), "1rem".to_string());
        let unit = strip_unit_suffixes(&mut [&mut a, &mut b, &mut c], SpacingUnit::Px, true, SpacingUnit::from_keyword);
        assert_eq!(unit, SpacingUnit::Px);
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("8", "4", "1rem"));

        let mut d = "50%".to_string();
        let unit = strip_unit_suffixes(&mut [&mut d], SpacingUnit::Px, false, SpacingUnit::from_keyword);
        assert_eq!(unit, SpacingUnit::Percent);
        assert_eq!(d, "50");
    }

    #[test]
    fn test_unit_keywords() {
        assert_eq!(SpacingUnit::from_keyword("%"), Some(SpacingUnit::Percent));
        assert_eq!(SpacingUnit::from_keyword("REM"), Some(SpacingUnit::Rem));
        assert_eq!(DimensionUnit::from_keyword("vw"), Some(DimensionUnit::Vw));
        assert!(DimensionUnit::Auto.is_sentinel());
        assert!(!DimensionUnit::Fr.is_sentinel());
    }

    #[test]
    fn test_unknown_unit_normalizes_to_default() {
        assert_eq!(SpacingUnit::normalize(&json!("pt")), SpacingUnit::Px);
        assert_eq!(LineHeightUnit::normalize(&json!(null)), LineHeightUnit::Unitless);
    }

    #[test]
    fn test_line_height_suffix() {
        assert_eq!(LineHeightUnit::Unitless.suffix(), "");
        assert_eq!(LineHeightUnit::Px.suffix(), "px");
    }
}
