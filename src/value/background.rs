//! Background image and repeat values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::Normalize;

keyword_enum! {
    /// CSS `background-repeat`.
    pub enum BackgroundRepeat {
        NoRepeat => "no-repeat",
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        Space => "space",
        Round => "round",
    }
    default = NoRepeat;
}

/// A background image source: a URL, an existing `url(…)`, or a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundImage(String);

impl BackgroundImage {
    pub fn new(source: impl Into<String>) -> Self {
        BackgroundImage(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The `background-image` value, or `""` when no image is set.
    ///
    /// Plain URLs are wrapped as `url("…")` with quotes and backslashes escaped.
    pub fn css_value(&self) -> String {
        let source = self.0.trim();
        if source.is_empty() {
            return String::new();
        }
        if source.starts_with("url(") || source.contains("gradient(") {
            return source.to_string();
        }
        let escaped = source.replace('\\', "\\\\").replace('"', "\\\"");
        format!("url(\"{escaped}\")")
    }
}

impl Normalize for BackgroundImage {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Self::new(s.trim()),
            // Media picker objects carry the address under `url` or `src`.
            Value::Object(map) => map
                .get("url")
                .or_else(|| map.get("src"))
                .and_then(Value::as_str)
                .map(|s| Self::new(s.trim()))
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
