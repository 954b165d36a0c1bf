//! WebAssembly bindings for the xmlview generator.
//!
//! The design-tool plugin hands over the current selection and the settings
//! form values; this crate returns the generated view or the tree chart.
//!
//! ## Example
//!
//! ```js
//! import { XmlViewEngine, defaultConfiguration } from 'xmlview';
//!
//! const engine = new XmlViewEngine();
//! engine.setOptions({ mode: 'compact', layoutHints: true });
//!
//! const xml = engine.generateXml(selection, defaultConfiguration());
//! const chart = engine.generateTreeChart(selection);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;
use xmlview_codegen::{outline, ConversionOptions, ViewGenerator};
use xmlview_core::{ConvertError, DesignNode, Result, ViewConfiguration, VisualizationNode};

mod types;

pub use types::*;

/// Shown when the user asks for a view without selecting anything.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one layer to generate XML.";

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Decode a selection from its JSON form.
pub fn decode_nodes(json: &str) -> Result<Vec<DesignNode>> {
    serde_json::from_str(json).map_err(|e| ConvertError::InvalidInput(format!("nodes: {}", e)))
}

/// Decode settings form values from their JSON form.
pub fn decode_configuration(json: &str) -> Result<ViewConfiguration> {
    serde_json::from_str(json)
        .map_err(|e| ConvertError::InvalidInput(format!("configuration: {}", e)))
}

/// Generate the full view, rejecting an empty selection up front.
pub fn generate_xml(
    nodes: &[DesignNode],
    config: &ViewConfiguration,
    options: ConversionOptions,
) -> Result<String> {
    if nodes.is_empty() {
        return Err(ConvertError::InvalidInput(EMPTY_SELECTION_MESSAGE.to_string()));
    }
    Ok(ViewGenerator::new()
        .with_options(options)
        .generate_view(nodes, config))
}

/// Build the tree chart for a selection.
pub fn generate_tree_chart(
    nodes: &[DesignNode],
    options: ConversionOptions,
) -> Result<VisualizationNode> {
    ViewGenerator::new()
        .with_options(options)
        .generate_tree_chart(nodes)
}

fn to_js_error(error: ConvertError) -> JsError {
    JsError::new(&error.to_string())
}

fn from_js<T: serde::de::DeserializeOwned>(
    value: JsValue,
    what: &str,
) -> std::result::Result<T, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| to_js_error(ConvertError::InvalidInput(format!("{}: {}", what, e))))
}

/// Maps become plain objects so the host can read keys as properties.
fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The main generator interface for JavaScript.
#[wasm_bindgen]
pub struct XmlViewEngine {
    options: ConversionOptions,
}

#[wasm_bindgen]
impl XmlViewEngine {
    /// Create an engine with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            options: ConversionOptions::default(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Set conversion options (`{ mode, layoutHints }`).
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> std::result::Result<(), JsError> {
        let options: OptionsJs = from_js(options, "options")?;
        self.options = options.into_core().map_err(to_js_error)?;
        Ok(())
    }

    /// Current conversion options.
    #[wasm_bindgen(js_name = getOptions)]
    pub fn get_options(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&OptionsJs::from(self.options))
    }

    /// Generate the complete view for a selection.
    #[wasm_bindgen(js_name = generateXml)]
    pub fn generate_xml(
        &self,
        nodes: JsValue,
        config: JsValue,
    ) -> std::result::Result<String, JsError> {
        let nodes: Vec<DesignNode> = from_js(nodes, "nodes")?;
        let config: ViewConfiguration = from_js(config, "configuration")?;
        generate_xml(&nodes, &config, self.options).map_err(to_js_error)
    }

    /// Generate only the body markup for a selection.
    #[wasm_bindgen(js_name = generateBody)]
    pub fn generate_body(&self, nodes: JsValue) -> std::result::Result<String, JsError> {
        let nodes: Vec<DesignNode> = from_js(nodes, "nodes")?;
        Ok(ViewGenerator::new()
            .with_options(self.options)
            .generate_body(&nodes))
    }

    /// Build the tree chart for a selection.
    #[wasm_bindgen(js_name = generateTreeChart)]
    pub fn generate_tree_chart(&self, nodes: JsValue) -> std::result::Result<JsValue, JsError> {
        let nodes: Vec<DesignNode> = from_js(nodes, "nodes")?;
        let chart = generate_tree_chart(&nodes, self.options).map_err(to_js_error)?;
        to_js(&chart)
    }

    /// Indented outline of a node, for debugging selections.
    #[wasm_bindgen(js_name = outline)]
    pub fn outline(&self, node: JsValue) -> std::result::Result<String, JsError> {
        let node: DesignNode = from_js(node, "node")?;
        Ok(outline(&node))
    }
}

impl Default for XmlViewEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-indent an XML string.
#[wasm_bindgen(js_name = formatXml)]
pub fn format_xml(xml: &str) -> String {
    xmlview_codegen::format_xml(xml)
}

/// The settings form's initial values.
#[wasm_bindgen(js_name = defaultConfiguration)]
pub fn default_configuration() -> std::result::Result<JsValue, JsError> {
    to_js(&ViewConfiguration::default())
}

/// Namespace declarations the settings form offers.
#[wasm_bindgen(js_name = availableNamespaces)]
pub fn available_namespaces_js() -> std::result::Result<JsValue, JsError> {
    to_js(&available_namespaces())
}
