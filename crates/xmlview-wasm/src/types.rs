//! TypeScript-friendly type definitions for WASM bindings.

use serde::{Deserialize, Serialize};
use xmlview_codegen::{ConversionOptions, SerializationMode};
use xmlview_core::{ConvertError, Result, AVAILABLE_NAMESPACES};

/// Conversion options from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsJs {
    /// `"compact"` (default) or `"annotated"`.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub layout_hints: Option<bool>,
}

impl OptionsJs {
    pub fn into_core(self) -> Result<ConversionOptions> {
        let mode = match self.mode.as_deref() {
            Some(mode) => mode
                .parse::<SerializationMode>()
                .map_err(ConvertError::InvalidInput)?,
            None => SerializationMode::default(),
        };
        Ok(ConversionOptions::new(mode).with_layout_hints(self.layout_hints.unwrap_or(false)))
    }
}

impl From<ConversionOptions> for OptionsJs {
    fn from(options: ConversionOptions) -> Self {
        Self {
            mode: Some(options.mode.as_str().to_string()),
            layout_hints: Some(options.layout_hints),
        }
    }
}

/// One entry of the namespace menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceJs {
    pub key: String,
    pub value: String,
}

/// Namespace declarations offered by the settings form.
pub fn available_namespaces() -> Vec<NamespaceJs> {
    AVAILABLE_NAMESPACES
        .iter()
        .map(|(key, value)| NamespaceJs {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}
