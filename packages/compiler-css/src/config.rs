use serde::{Deserialize, Serialize};
use std::path::Path;
use stylist_common::{CommonError, CommonResult};

pub const DEFAULT_CONFIG_NAME: &str = "stylist.config.json";

/// Base decoration scheme a configuration starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Pretty,
    Compact,
}

/// How color values are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hsl,
    Rgb,
    Hex,
}

/// Formatter configuration file format
///
/// Every decoration left out keeps the preset's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    #[serde(default)]
    pub preset: Preset,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_selector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_selector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_start_brace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_end_brace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_end_brace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_property_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_property_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_property_line: Option<String>,

    /// Write each rule's description as a comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<bool>,

    /// Write rules that declare nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_empty_style: Option<bool>,

    #[serde(default)]
    pub color_format: ColorFormat,
}

impl FormatterConfig {
    /// Load config from a directory
    pub fn load(dir: impl AsRef<Path>) -> CommonResult<Self> {
        let config_path = dir.as_ref().join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            // Return default config if none exists
            Ok(Self::default())
        }
    }

    pub fn from_json(json: &str) -> CommonResult<Self> {
        serde_json::from_str(json).map_err(|error| CommonError::config(error.to_string()))
    }
}
