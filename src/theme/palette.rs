//! Color picker choices derived from a theme's `colors` table.
//!
//! ```text
//! colors.primary = { "500": "#13315c", … }  → "primary 500"  colors.primary.500
//! colors.white   = "#ffffff"                → "white"        colors.white
//! colors.semantic = { "danger": … }         → semantic group colors.semantic.danger
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::theme::Theme;

/// One selectable color in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorChoice {
    /// Human-readable label, e.g. `"primary 500"`.
    pub label: String,
    /// Token path stored in a theme [`ColorToken`](crate::value::ColorToken).
    pub token: String,
    /// Resolved color, for the swatch.
    pub value: String,
}

impl ColorChoice {
    fn new(label: impl Into<String>, token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
            value: value.into(),
        }
    }
}

/// Picker choices, split into the palette and the semantic alias group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorChoices {
    pub palette: Vec<ColorChoice>,
    pub semantic: Vec<ColorChoice>,
}

impl ColorChoices {
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty() && self.semantic.is_empty()
    }

    /// All choices, palette first.
    pub fn iter(&self) -> impl Iterator<Item = &ColorChoice> {
        self.palette.iter().chain(self.semantic.iter())
    }
}

const SEMANTIC: &str = "semantic";

impl Theme {
    /// Build the color picker's choice list, in theme document order.
    pub fn color_choices(&self) -> ColorChoices {
        let mut choices = ColorChoices::default();
        let Some(colors) = self.table().get("colors").and_then(Value::as_object) else {
            return choices;
        };

        for (key, entry) in colors {
            match entry {
                Value::Object(group) if key == SEMANTIC => {
                    for (alias, value) in group {
                        if let Value::String(color) = value {
                            choices.semantic.push(ColorChoice::new(
                                alias.as_str(),
                                format!("colors.{SEMANTIC}.{alias}"),
                                color.as_str(),
                            ));
                        }
                    }
                }
                Value::Object(shades) => {
                    for (shade, value) in shades {
                        if let Value::String(color) = value {
                            choices.palette.push(ColorChoice::new(
                                format!("{key} {shade}"),
                                format!("colors.{key}.{shade}"),
                                color.as_str(),
                            ));
                        }
                    }
                }
                Value::String(color) => {
                    choices.palette.push(ColorChoice::new(
                        key.as_str(),
                        format!("colors.{key}"),
                        color.as_str(),
                    ));
                }
                _ => {}
            }
        }

        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn expands_shades_and_leaves() {
        let theme = Theme::from_value(json!({
            "colors": {
                "primary": { "100": "#d0e1f9", "500": "#13315c" },
                "white": "#ffffff",
                "semantic": { "danger": "#dc2626", "nested": { "x": "#000" } }
            }
        }));
        let choices = theme.color_choices();

        assert_eq!(
            choices.palette,
            vec![
                ColorChoice::new("primary 100", "colors.primary.100", "#d0e1f9"),
                ColorChoice::new("primary 500", "colors.primary.500", "#13315c"),
                ColorChoice::new("white", "colors.white", "#ffffff"),
            ]
        );
        assert_eq!(
            choices.semantic,
            vec![ColorChoice::new("danger", "colors.semantic.danger", "#dc2626")]
        );
    }

    #[test]
    fn tokens_resolve_back() {
        let theme = Theme::from_value(json!({
            "colors": { "accent": { "300": "#f4d35e" }, "semantic": { "info": "#2563eb" } }
        }));
        for choice in theme.color_choices().iter() {
            assert_eq!(theme.resolve(&choice.token, ""), choice.value);
        }
    }

    #[test]
    fn missing_colors_table() {
        assert!(Theme::new().color_choices().is_empty());
    }
}
