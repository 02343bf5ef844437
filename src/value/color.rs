//! Color tokens: theme references or literal colors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::Theme;
use crate::value::{loose, Normalize};

keyword_enum! {
    /// Whether a token refers into the theme or carries a literal value.
    pub enum TokenKind {
        Theme => "theme",
        Custom => "custom",
    }
    default = Custom;
}

/// A color chosen in the editor: a dotted theme path or a literal color.
///
/// Theme paths may be written with or without the `colors.` prefix
/// (`"colors.primary.500"` and `"primary.500"` are equivalent).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColorToken {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
}

impl ColorToken {
    /// A reference into the theme's color table.
    pub fn theme(path: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Theme,
            value: path.into(),
        }
    }

    /// A literal color (hex or functional notation).
    pub fn custom(color: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Custom,
            value: color.into(),
        }
    }

    /// Classify a legacy bare string: `#…` or `fn(…)` is custom, anything
    /// else is a theme path.
    pub fn from_legacy(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Self::default()
        } else if looks_literal(text) {
            Self::custom(text)
        } else {
            Self::theme(text)
        }
    }

    /// Returns `true` if there is no color to emit.
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Resolve to CSS color text. Theme misses yield `fallback`.
    pub fn resolve(&self, theme: &Theme, fallback: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        match self.kind {
            TokenKind::Custom => self.value.trim().to_string(),
            TokenKind::Theme => theme.resolve_color(self.value.trim(), fallback),
        }
    }
}

fn looks_literal(text: &str) -> bool {
    text.starts_with('#') || text.contains('(')
}

/// Canonical object shape; `type` may be missing in older documents.
#[derive(Deserialize)]
struct RawColorToken {
    #[serde(rename = "type", default)]
    kind: Option<TokenKind>,
    #[serde(default, deserialize_with = "loose::string")]
    value: String,
}

impl Normalize for ColorToken {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Self::from_legacy(s),
            Value::Object(_) => match serde_json::from_value::<RawColorToken>(raw.clone()) {
                Ok(RawColorToken {
                    kind: Some(kind),
                    value,
                }) => Self { kind, value },
                Ok(RawColorToken { kind: None, value }) => Self::from_legacy(&value),
                Err(err) => {
                    tracing::debug!(error = %err, "malformed color token, using default");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
