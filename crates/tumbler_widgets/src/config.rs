//! Picker configuration files
//!
//! [`PickerConfig`] is the data half of the picker's boundary contract:
//! everything a caller can express without code (callbacks and custom
//! components stay in Rust). It loads from TOML or JSON.
//!
//! ```toml
//! value = 2
//! useNativeInlineStyle = false
//! doneText = "OK"
//!
//! [[items]]
//! label = "Football"
//! value = 1
//!
//! [[items]]
//! label = "Baseball"
//! value = 2
//! color = "#FF9500"
//!
//! [placeholder]
//! label = "Select a sport..."
//!
//! [style.inputIOS]
//! fontSize = 16
//! ```
//!
//! `placeholder = {}` disables the placeholder; leaving it out keeps the default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use tumbler_core::{default_placeholder, Color, HostColor, Item, PickerValue};

use crate::components::{DEFAULT_DONE_TEXT, DEFAULT_PLACEHOLDER_TEXT_COLOR};
use crate::style::{ModalProps, PickerStyle, Props};

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML
    #[error("Invalid picker config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON
    #[error("Invalid picker config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Placeholder configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaceholderFields", into = "PlaceholderFields")]
pub enum PlaceholderSetting {
    /// The built-in "Select an item..." placeholder
    #[default]
    Default,
    /// No placeholder (configured as an empty table / object)
    Disabled,
    /// A caller-defined placeholder item
    Custom(Item),
}

impl PlaceholderSetting {
    /// The placeholder item, if any
    pub fn resolve(&self) -> Option<Item> {
        match self {
            PlaceholderSetting::Default => Some(default_placeholder()),
            PlaceholderSetting::Disabled => None,
            PlaceholderSetting::Custom(item) => Some(item.clone()),
        }
    }
}

/// Wire form of a placeholder
///
/// Every field tracks presence separately from `null`, so only a truly empty
/// table / object reads as "disabled".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceholderFields {
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<PickerValue>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Option<HostColor>>,
    /// Keys the picker does not interpret
    #[serde(flatten)]
    pub extra: Props,
}

impl PlaceholderFields {
    fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.value.is_none()
            && self.key.is_none()
            && self.color.is_none()
            && self.extra.is_empty()
    }
}

impl From<PlaceholderFields> for PlaceholderSetting {
    fn from(fields: PlaceholderFields) -> Self {
        if fields.is_empty() {
            return PlaceholderSetting::Disabled;
        }
        PlaceholderSetting::Custom(Item {
            label: fields.label.flatten().unwrap_or_default(),
            value: fields.value.unwrap_or_default(),
            key: fields.key.flatten(),
            color: fields.color.flatten(),
        })
    }
}

impl From<PlaceholderSetting> for PlaceholderFields {
    fn from(setting: PlaceholderSetting) -> Self {
        match setting.resolve() {
            None => PlaceholderFields::default(),
            Some(item) => PlaceholderFields {
                label: Some(Some(item.label)),
                value: Some(item.value),
                key: item.key.map(Some),
                color: item.color.map(Some),
                extra: Props::new(),
            },
        }
    }
}

/// Distinguishes an explicit `null` from a missing field
fn deserialize_some<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Data-only picker configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    pub items: Vec<Item>,
    /// Controlled value; absent means unset
    #[serde(
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<PickerValue>,
    pub placeholder: PlaceholderSetting,
    pub disabled: bool,
    #[serde(alias = "useNativeAndroidPickerStyle")]
    pub use_native_inline_style: bool,
    pub done_text: String,
    /// Deprecated
    pub hide_done_bar: bool,
    /// Deprecated
    pub placeholder_text_color: HostColor,
    pub style: PickerStyle,
    pub text_input_props: Props,
    pub picker_props: Props,
    pub modal_props: ModalProps,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            value: None,
            placeholder: PlaceholderSetting::Default,
            disabled: false,
            use_native_inline_style: true,
            done_text: DEFAULT_DONE_TEXT.to_string(),
            hide_done_bar: false,
            placeholder_text_color: Color::from_hex(DEFAULT_PLACEHOLDER_TEXT_COLOR).into(),
            style: PickerStyle::default(),
            text_input_props: Props::new(),
            picker_props: Props::new(),
            modal_props: ModalProps::default(),
        }
    }
}

impl PickerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from JSON text
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file; `.json` files are JSON, anything else TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            items = config.items.len(),
            "loaded picker config"
        );
        Ok(config)
    }
}
