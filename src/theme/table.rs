//! The theme table and dotted token-path resolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors from loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme root must be an object, got {0}")]
    NotAnObject(&'static str),
}

/// A read-only nested token table (`colors`, `typography.fontSize`,
/// `typography.fontWeight`, `borderRadius`, …).
///
/// Every lookup degrades to a caller-supplied fallback when a branch is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    table: Map<String, Value>,
}

impl Theme {
    /// An empty theme: every lookup falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. A non-object root degrades to an empty theme.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(table) => Self { table },
            other => {
                tracing::warn!(kind = json_kind(&other), "theme root is not an object, using empty theme");
                Self::default()
            }
        }
    }

    /// Parse a theme from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(table) => Ok(Self { table }),
            other => Err(ThemeError::NotAnObject(json_kind(&other))),
        }
    }

    /// The top-level table.
    pub fn table(&self) -> &Map<String, Value> {
        &self.table
    }

    /// Walk `path` (split on `.`) and return the node it addresses, if any.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut node = self.table.get(segments.next()?)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Resolve a dotted token path to a string.
    ///
    /// Walks the table segment by segment and returns the first non-object
    /// leaf reached. Returns `fallback` if a segment is absent, the path ends
    /// on a table, or the leaf is not a string.
    pub fn resolve(&self, path: &str, fallback: &str) -> String {
        let mut table = &self.table;
        for segment in path.split('.') {
            match table.get(segment) {
                Some(Value::Object(next)) => table = next,
                Some(Value::String(leaf)) => return leaf.clone(),
                Some(_) | None => break,
            }
        }
        tracing::trace!(path, fallback, "theme token not found");
        fallback.to_string()
    }

    /// Resolve `token` under the sub-table `scope`. Tokens already carrying
    /// the scope prefix are used as-is.
    pub fn resolve_scoped(&self, scope: &str, token: &str, fallback: &str) -> String {
        let prefixed = token
            .strip_prefix(scope)
            .is_some_and(|rest| rest.starts_with('.'));
        if prefixed {
            self.resolve(token, fallback)
        } else {
            self.resolve(&format!("{scope}.{token}"), fallback)
        }
    }

    /// Resolve a color token (`primary.500` or `colors.primary.500`).
    pub fn resolve_color(&self, token: &str, fallback: &str) -> String {
        self.resolve_scoped("colors", token, fallback)
    }

    /// Resolve a font size key (`lg` or `typography.fontSize.lg`).
    pub fn resolve_font_size(&self, token: &str, fallback: &str) -> String {
        self.resolve_scoped("typography.fontSize", token, fallback)
    }

    /// Resolve a font weight key (`bold` or `typography.fontWeight.bold`).
    pub fn resolve_font_weight(&self, token: &str, fallback: &str) -> String {
        self.resolve_scoped("typography.fontWeight", token, fallback)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
