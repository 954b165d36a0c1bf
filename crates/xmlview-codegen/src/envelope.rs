//! Root view envelope.

use xmlview_core::ViewConfiguration;

use crate::escape::escape_xml;
use crate::format::format_xml;

/// Namespace declarations every view carries unless the caller set them.
pub const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "sap.m"),
    ("xmlns:core", "sap.ui.core"),
    ("xmlns:mvc", "sap.ui.core.mvc"),
];

/// Header and footer surrounding the view body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub header: String,
    pub footer: String,
    /// Whether the body must be wrapped in a `<content>` aggregation.
    /// Always `true` for the page layout produced here.
    pub requires_content_wrapper: bool,
}

/// Build the view envelope for a configuration.
pub fn build_envelope(config: &ViewConfiguration) -> Envelope {
    let mut attributes = vec![("controllerName", config.controller_name.as_str())];

    if let Some(display_block) = config.display_block.as_deref().filter(|d| !d.is_empty()) {
        attributes.push(("displayBlock", display_block));
    }
    attributes.extend(config.namespaces());
    for &(key, value) in DEFAULT_NAMESPACES {
        if !config.declares(key) {
            attributes.push((key, value));
        }
    }

    let rendered: String = attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(value)))
        .collect();

    Envelope {
        header: format!(
            "<mvc:View{}><App><Page title=\"{}\">",
            rendered,
            escape_xml(&config.page_title)
        ),
        footer: "</Page></App></mvc:View>".to_string(),
        requires_content_wrapper: true,
    }
}

/// Wrap body markup in the envelope and pretty-print the result.
pub fn assemble_view(body: &str, config: &ViewConfiguration) -> String {
    let Envelope {
        header,
        footer,
        requires_content_wrapper,
    } = build_envelope(config);

    let content = if !requires_content_wrapper {
        body.to_string()
    } else if body.trim().is_empty() {
        "    <content></content>".to_string()
    } else {
        let indented: Vec<String> = body.lines().map(|line| format!("    {}", line)).collect();
        format!("    <content>\n{}\n    </content>", indented.join("\n"))
    };

    format_xml(&format!("{}\n{}\n{}", header, content, footer))
}
