//! Engine configuration
//!
//! ```toml
//! cache_capacity = 128
//!
//! [default_font]
//! family = "Dialog"
//! size = 12.0
//! bold = false
//! italic = false
//! ```

use serde::{Deserialize, Serialize};
use synth_core::{Font, FontStyle};

use crate::error::ConfigError;

/// Style engine settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Font of the style returned when no rule matches
    pub default_font: FontConfig,
    /// Initial capacity of the resolved-style cache
    pub cache_capacity: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            default_font: FontConfig::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    64
}

/// Serializable font description
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Dialog".to_string(),
            size: 12.0,
            bold: false,
            italic: false,
        }
    }
}

impl FontConfig {
    pub fn to_font(&self) -> Font {
        let mut style = FontStyle::PLAIN;
        if self.bold {
            style |= FontStyle::BOLD;
        }
        if self.italic {
            style |= FontStyle::ITALIC;
        }
        Font::new(self.family.as_str(), self.size, style)
    }
}

impl SynthConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
