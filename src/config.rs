//! Engine configuration: default styles for newly created shapes.
//!
//! Every field has a default, so an empty JSON object is a valid config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::shape::{StrokeStyle, TextStyle};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_TEXT_FILL: &str = "#000000";
pub const DEFAULT_FONT_SIZE: f64 = 20.0;
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stroke width must be positive and finite, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("font size must be positive and finite, got {0}")]
    InvalidFontSize(f64),
    #[error("font family must not be empty")]
    EmptyFontFamily,
}

/// Style and placeholder content for text placed with the text tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub family: String,
    pub fill: String,
    pub size: f64,
    /// Initial content of a freshly placed label.
    pub content: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.into(),
            fill: DEFAULT_TEXT_FILL.into(),
            size: DEFAULT_FONT_SIZE,
            content: DEFAULT_TEXT_CONTENT.into(),
        }
    }
}

impl TextDefaults {
    #[must_use]
    pub fn style(&self) -> TextStyle {
        TextStyle::new(self.family.clone(), self.fill.clone(), self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stroke applied to new polylines until the host changes it.
    pub stroke: StrokeStyle,
    pub text: TextDefaults,
}

impl EngineConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and a validation variant for
    /// out-of-range values (see [`EngineConfig::validate`]).
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are positive and finite and the font family is set.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_finite(self.stroke.width) {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke.width));
        }
        if !is_positive_finite(self.text.size) {
            return Err(ConfigError::InvalidFontSize(self.text.size));
        }
        if self.text.family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        Ok(())
    }
}

pub(crate) fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
