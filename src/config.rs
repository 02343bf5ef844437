//! Compile options: fallbacks and preset tables the builder reads.

use serde::{Deserialize, Serialize};

use crate::value::{BackgroundRepeat, ShadowPreset};

/// Errors from loading [`CompileOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid compile options: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// ShadowPresets
// ---------------------------------------------------------------------------

/// `box-shadow` values for the named shadow presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowPresets {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for ShadowPresets {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".into(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)".into(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)".into(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)".into(),
        }
    }
}

impl ShadowPresets {
    /// The table entry for a named preset; `None` for `none` and `custom`.
    pub fn get(&self, preset: ShadowPreset) -> Option<&str> {
        match preset {
            ShadowPreset::Sm => Some(&self.sm),
            ShadowPreset::Md => Some(&self.md),
            ShadowPreset::Lg => Some(&self.lg),
            ShadowPreset::Xl => Some(&self.xl),
            ShadowPreset::None | ShadowPreset::Custom => None,
        }
    }
}

// ---------------------------------------------------------------------------
// BackgroundDefaults
// ---------------------------------------------------------------------------

/// Values emitted for background size, position and repeat when an image is
/// set but the bag leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundDefaults {
    pub size: String,
    pub position: String,
    pub repeat: BackgroundRepeat,
}

impl Default for BackgroundDefaults {
    fn default() -> Self {
        Self {
            size: "cover".into(),
            position: "center".into(),
            repeat: BackgroundRepeat::NoRepeat,
        }
    }
}

// ---------------------------------------------------------------------------
// CompileOptions
// ---------------------------------------------------------------------------

/// Options for a builder run. Every field has a default, so partial JSON works.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Color emitted when a theme color token does not resolve. Empty omits
    /// the declaration.
    pub color_fallback: String,
    pub shadow_presets: ShadowPresets,
    pub background: BackgroundDefaults,
}

impl CompileOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Set the unresolved-color fallback (builder).
    pub fn with_color_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.color_fallback = fallback.into();
        self
    }

    /// Replace the shadow preset table (builder).
    pub fn with_shadow_presets(mut self, presets: ShadowPresets) -> Self {
        self.shadow_presets = presets;
        self
    }

    /// Replace the background defaults (builder).
    pub fn with_background(mut self, background: BackgroundDefaults) -> Self {
        self.background = background;
        self
    }
}
