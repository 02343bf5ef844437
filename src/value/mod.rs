//! Compound style values: typed shapes, normalizers and CSS formatters.
//!
//! Every type implements [`Normalize`], which accepts the canonical object,
//! a legacy bare string or number, or `null`, and returns the canonical shape
//! with safe defaults. Normalization happens once on read; formatters only
//! ever see canonical values and return `""` to mean "omit this declaration".

use serde::de::DeserializeOwned;
use serde_json::Value;

#[macro_use]
mod keyword;

pub mod tokenizer;
pub mod length;
pub mod color;
pub mod spacing;
pub mod border;
pub mod radius;
pub mod shadow;
pub mod dimension;
pub mod typography;
pub mod layout;
pub mod background;

pub use background::{BackgroundImage, BackgroundRepeat};
pub use border::{BorderSide, BorderStyle, BorderValue};
pub use color::{ColorToken, TokenKind};
pub use dimension::{Dimension, SizeProperty};
pub use layout::{
    AlignItems, Display, FlexDirection, FlexWrap, GridColumns, JustifyContent, Opacity, Overflow,
    Position, TextAlign, ZIndex,
};
pub use length::{BorderUnit, DimensionUnit, LetterSpacingUnit, LineHeightUnit, SpacingUnit};
pub use radius::{BorderRadiusValue, Corner};
pub use shadow::{ShadowPreset, ShadowValue};
pub use spacing::{BoxModelValue, Side};
pub use typography::{FontSize, FontWeight, LetterSpacing, LineHeight};

/// Conversion from a raw (possibly legacy) JSON value to a canonical value.
///
/// Never fails: unrecognized input yields the type's documented default.
pub trait Normalize: Sized {
    fn normalize(raw: &Value) -> Self;
}

impl Normalize for String {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }
}

impl Normalize for Value {
    fn normalize(raw: &Value) -> Self {
        raw.clone()
    }
}

/// Deserialize a canonical object, falling back to `T::default()` when the
/// shape does not match.
pub(crate) fn from_canonical<T: DeserializeOwned + Default>(raw: &Value, kind: &'static str) -> T {
    match serde_json::from_value(raw.clone()) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(kind, error = %err, "malformed value object, using default");
            T::default()
        }
    }
}

/// Lenient serde field helpers for values that older documents stored with
/// mixed types.
pub(crate) mod loose {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Normalize;

    /// Accept a string, number, boolean or null as a string field.
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(String::normalize(&raw))
    }

    /// Accept a boolean, or the strings `"true"` / `"false"`.
    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }

    /// Accept a string or null as an optional string field.
    pub fn option_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = String::normalize(&raw);
        Ok((!text.trim().is_empty()).then_some(text))
    }
}
