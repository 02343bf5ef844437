//! The property bag: a component's raw style values keyed by property name.
//!
//! Values are stored as persisted (canonical or legacy JSON) and normalized
//! on read through [`PropertyBag::get`]. Edits return a new bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::breakpoint::Breakpoint;
use crate::responsive::ResponsiveValue;
use crate::value::{Display, Normalize};

/// Property keys understood by the layout builder.
pub mod keys {
    pub const DISPLAY: &str = "display";
    pub const FLEX_DIRECTION: &str = "flexDirection";
    pub const JUSTIFY_CONTENT: &str = "justifyContent";
    pub const ALIGN_ITEMS: &str = "alignItems";
    pub const FLEX_WRAP: &str = "flexWrap";
    pub const GAP: &str = "gap";
    pub const GRID_COLUMNS: &str = "gridColumns";
    pub const POSITION: &str = "position";
    pub const Z_INDEX: &str = "zIndex";
    pub const OPACITY: &str = "opacity";
    pub const OVERFLOW: &str = "overflow";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const MIN_WIDTH: &str = "minWidth";
    pub const MAX_WIDTH: &str = "maxWidth";
    pub const MIN_HEIGHT: &str = "minHeight";
    pub const MAX_HEIGHT: &str = "maxHeight";
    pub const PADDING: &str = "padding";
    pub const MARGIN: &str = "margin";
    pub const BORDER: &str = "border";
    pub const BORDER_RADIUS: &str = "borderRadius";
    pub const SHADOW: &str = "shadow";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const BACKGROUND_IMAGE: &str = "backgroundImage";
    pub const BACKGROUND_SIZE: &str = "backgroundSize";
    pub const BACKGROUND_POSITION: &str = "backgroundPosition";
    pub const BACKGROUND_REPEAT: &str = "backgroundRepeat";
    pub const FONT_SIZE: &str = "fontSize";
    pub const FONT_WEIGHT: &str = "fontWeight";
    pub const LINE_HEIGHT: &str = "lineHeight";
    pub const LETTER_SPACING: &str = "letterSpacing";
    pub const COLOR: &str = "color";
    pub const TEXT_ALIGN: &str = "textAlign";
}

/// A component's style properties, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: Map<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object. Any other value yields an empty bag.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            Value::Null => Self::default(),
            other => {
                tracing::warn!(value = %other, "property bag is not an object, ignoring");
                Self::default()
            }
        }
    }

    /// The stored value for `key`. `null` counts as absent.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Read and normalize `key`. Returns `None` when the key is absent.
    pub fn get<T: Normalize>(&self, key: &str) -> Option<ResponsiveValue<T>> {
        self.raw(key).map(ResponsiveValue::normalize)
    }

    /// Read and normalize `key`, using the type's default when absent.
    pub fn get_or_default<T: Normalize + Default>(&self, key: &str) -> ResponsiveValue<T> {
        self.get(key).unwrap_or_default()
    }

    /// Property keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Return a copy with `key` set to `value`.
    pub fn with_raw(&self, key: impl Into<String>, value: Value) -> Self {
        let mut values = self.values.clone();
        values.insert(key.into(), value);
        Self { values }
    }

    /// Return a copy with `key` set to the serialized `value`.
    pub fn with_value<T: Serialize>(&self, key: impl Into<String>, value: &T) -> Self {
        let raw = match serde_json::to_value(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "property value did not serialize, storing null");
                Value::Null
            }
        };
        self.with_raw(key, raw)
    }

    /// Return a copy with `key`'s entry at `breakpoint` replaced by `value`.
    ///
    /// The existing value (or the type's default when absent) is normalized
    /// first, so a bare legacy value is promoted to object form.
    pub fn set_at_breakpoint<T>(&self, key: &str, breakpoint: Breakpoint, value: T) -> Self
    where
        T: Normalize + Default + Clone + Serialize,
    {
        let current: ResponsiveValue<T> = self.get_or_default(key);
        self.with_value(key, &current.set_at_breakpoint(breakpoint, value))
    }

    /// The normalized `display` property, `block` when absent.
    pub fn display(&self) -> ResponsiveValue<Display> {
        self.get_or_default(keys::DISPLAY)
    }

    /// Returns `true` if `display` is a flex value at any breakpoint.
    pub fn has_flex_in_any_breakpoint(&self) -> bool {
        crate::visibility::has_flex_in_any_breakpoint(&self.display())
    }

    /// Returns `true` if `display` is a grid value at any breakpoint.
    pub fn has_grid_in_any_breakpoint(&self) -> bool {
        crate::visibility::has_grid_in_any_breakpoint(&self.display())
    }
}

impl From<Map<String, Value>> for PropertyBag {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::BoxModelValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn null_is_absent() {
        let bag = PropertyBag::from_value(json!({ "display": null, "gap": "8px" }));
        assert!(!bag.contains("display"));
        assert!(bag.contains("gap"));
        assert!(bag.get::<Display>("display").is_none());
    }

    #[test]
    fn get_normalizes_legacy() {
        let bag = PropertyBag::from_value(json!({ "padding": "10px 20px" }));
        let padding = bag.get::<BoxModelValue>("padding").unwrap();
        assert_eq!(
            padding.get_effective(Breakpoint::Desktop).css_padding(),
            "10px 20px 10px 20px"
        );
    }

    #[test]
    fn set_at_breakpoint_promotes_and_keeps_input() {
        let bag = PropertyBag::from_value(json!({ "display": "block" }));
        let next = bag.set_at_breakpoint(keys::DISPLAY, Breakpoint::Desktop, Display::Flex);

        assert_eq!(bag.raw("display"), Some(&json!("block")));
        assert_eq!(
            next.raw("display"),
            Some(&json!({ "mobile": "block", "desktop": "flex" }))
        );
        assert!(next.has_flex_in_any_breakpoint());
        assert!(!bag.has_flex_in_any_breakpoint());
    }

    #[test]
    fn set_on_absent_key_uses_default() {
        let next = PropertyBag::new().set_at_breakpoint(keys::DISPLAY, Breakpoint::Tablet, Display::Grid);
        assert_eq!(
            next.raw("display"),
            Some(&json!({ "mobile": "block", "tablet": "grid" }))
        );
        assert!(next.has_grid_in_any_breakpoint());
    }

    #[test]
    fn non_object_bag_is_empty() {
        assert_eq!(PropertyBag::from_value(json!([1, 2])), PropertyBag::new());
    }

    #[test]
    fn keys_keep_order() {
        let bag = PropertyBag::new()
            .with_raw("width", json!("10px"))
            .with_raw("color", json!("#fff"));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["width", "color"]);
    }
}
