//! Visualization tree for diagnostic display.

use indexmap::IndexMap;

/// Attribute key carrying the source node kind.
pub const NODE_TYPE_KEY: &str = "figmaNodeType";
/// Attribute key carrying the resolved control identifier.
pub const CONTROL_KEY: &str = "ui5Control";
/// Node type of the synthetic wrapper around a multi-node selection.
pub const ROOT_WRAPPER: &str = "ROOT_WRAPPER";

/// A display-oriented mirror of a design node.
///
/// Built for inspection only; it is never parsed back into markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizationNode {
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "IndexMap::is_empty")
    )]
    pub attributes: IndexMap<String, String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<VisualizationNode>,
}

impl VisualizationNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_children(mut self, children: Vec<VisualizationNode>) -> Self {
        self.children = children;
        self
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let chart = VisualizationNode::new("Root").with_children(vec![
            VisualizationNode::new("a").with_children(vec![VisualizationNode::new("b")]),
            VisualizationNode::new("c"),
        ]);
        assert_eq!(chart.node_count(), 4);
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let chart = VisualizationNode::new("Save")
            .with_attribute(NODE_TYPE_KEY, "INSTANCE")
            .with_attribute(CONTROL_KEY, "sap.m.Button")
            .with_attribute("text", "Save");

        let keys: Vec<_> = chart.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![NODE_TYPE_KEY, CONTROL_KEY, "text"]);
        assert_eq!(chart.attribute(CONTROL_KEY), Some("sap.m.Button"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_skips_empty_fields() {
        let chart = VisualizationNode::new("Leaf");
        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(json, r#"{"name":"Leaf"}"#);
    }
}
