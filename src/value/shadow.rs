//! Box shadow presets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ShadowPresets;
use crate::value::{from_canonical, loose, Normalize};

keyword_enum! {
    /// Named shadow preset. `Custom` uses the literal in [`ShadowValue::custom`].
    pub enum ShadowPreset {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Custom => "custom",
    }
    default = None;
}

/// A shadow choice: a preset, or a literal `box-shadow` value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowValue {
    pub preset: ShadowPreset,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "loose::option_string"
    )]
    pub custom: Option<String>,
}

impl ShadowValue {
    pub fn preset(preset: ShadowPreset) -> Self {
        Self {
            preset,
            custom: None,
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            preset: ShadowPreset::Custom,
            custom: Some(value.into()),
        }
    }

    /// The `box-shadow` value, or `""` for `none` or an empty custom shadow.
    pub fn css_value(&self, presets: &ShadowPresets) -> String {
        match self.preset {
            ShadowPreset::None => String::new(),
            ShadowPreset::Custom => self
                .custom
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            preset => presets.get(preset).unwrap_or_default().to_string(),
        }
    }
}

impl Normalize for ShadowValue {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(_) => from_canonical(raw, "shadow"),
            Value::String(s) => match ShadowPreset::from_keyword(s) {
                Some(preset) => Self::preset(preset),
                None if s.trim().is_empty() => Self::default(),
                None => Self::custom(s.trim()),
            },
            _ => Self::default(),
        }
    }
}
