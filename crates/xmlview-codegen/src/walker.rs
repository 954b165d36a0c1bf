//! Design tree traversal.
//!
//! A single walk produces both the XML markup of a subtree and its
//! visualization node, so the two outputs never disagree about structure.

use xmlview_core::{DesignNode, NodeKind, VisualizationNode, CONTROL_KEY, NODE_TYPE_KEY};
use xmlview_resolver::ControlResolver;

use crate::attributes::{identity_of, AttributeInference, AttributeSet};
use crate::options::ConversionOptions;
use crate::tags::{TagBuilder, TagPair};

/// Result of walking one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walked {
    /// Markup of the subtree; empty when nothing is emitted.
    pub markup: String,
    pub chart: VisualizationNode,
}

/// Join markup fragments with newlines, skipping blank ones.
pub fn join_markup<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .filter(|fragment| !fragment.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walks design trees into markup and visualization nodes.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'c> {
    resolver: ControlResolver<'c>,
    tags: TagBuilder,
    inference: AttributeInference<'c>,
    options: ConversionOptions,
}

impl<'c> TreeWalker<'c> {
    pub fn new(resolver: ControlResolver<'c>, options: ConversionOptions) -> Self {
        Self {
            resolver,
            tags: TagBuilder::new(),
            inference: AttributeInference::new(resolver, options),
            options,
        }
    }

    /// Markup of one subtree.
    pub fn markup(&self, node: &DesignNode) -> String {
        self.walk(node).markup
    }

    /// Visualization of one subtree.
    pub fn chart(&self, node: &DesignNode) -> VisualizationNode {
        self.walk(node).chart
    }

    /// Walk one node.
    pub fn walk(&self, node: &DesignNode) -> Walked {
        let chart = VisualizationNode::new(node.name.as_str())
            .with_attribute(NODE_TYPE_KEY, node.kind.as_str());

        match node.kind {
            NodeKind::Instance => self.walk_instance(node, chart),
            NodeKind::Text => Walked {
                markup: self.text_markup(node),
                chart,
            },
            _ if node.has_children() => {
                let (markup, children) = self.walk_children(node);
                Walked {
                    markup,
                    chart: chart.with_children(children),
                }
            }
            _ => Walked {
                markup: String::new(),
                chart,
            },
        }
    }

    fn walk_children(&self, node: &DesignNode) -> (String, Vec<VisualizationNode>) {
        let walked: Vec<Walked> = node.children().iter().map(|c| self.walk(c)).collect();
        let markup = join_markup(walked.iter().map(|w| w.markup.as_str()));
        let charts = walked.into_iter().map(|w| w.chart).collect();
        (markup, charts)
    }

    fn walk_instance(&self, node: &DesignNode, mut chart: VisualizationNode) -> Walked {
        let control = self.resolver.resolve(&node.name);
        let attributes = self.inference.infer(node, &control);

        if let Some(fqn) = control.name() {
            chart.set_attribute(CONTROL_KEY, fqn);
        }
        for (name, value) in attributes.iter() {
            chart.set_attribute(name, value);
        }

        let (body, children) = self.walk_children(node);
        chart.children = children;

        let markup = match self.tags.build(&control).with_attributes(&attributes.to_markup()) {
            TagPair::SelfClosing(tag) => {
                if !body.is_empty() {
                    tracing::warn!(
                        node = %node.name,
                        tag = %control.tag_name,
                        "self-closing control has child markup; children dropped"
                    );
                }
                tag
            }
            TagPair::Pair { open, close } if body.is_empty() => format!("{}{}", open, close),
            TagPair::Pair { open, close } => format!("{}\n{}\n{}", open, body, close),
            TagPair::Empty => {
                if !body.is_empty() {
                    tracing::warn!(
                        node = %node.name,
                        "no control for instance; flattening children"
                    );
                }
                body
            }
        };

        Walked { markup, chart }
    }

    fn text_markup(&self, node: &DesignNode) -> String {
        if !self.options.mode.emits_text_leaves() {
            return String::new();
        }
        let Some(text) = node.characters() else {
            return String::new();
        };

        let mut attrs = AttributeSet::new();
        if let Some(id) = node.id.as_deref() {
            attrs.insert("id", &identity_of(id));
        }
        if !attrs.insert("text", text) {
            return String::new();
        }
        format!("<Text{} />", attrs.to_markup())
    }
}

/// Indented outline of a subtree, one `-- name (KIND)` line per node.
pub fn outline(node: &DesignNode) -> String {
    let mut lines = Vec::new();
    outline_into(node, 0, &mut lines);
    let outline = lines.join("\n");
    tracing::debug!("design tree outline:\n{}", outline);
    outline
}

fn outline_into(node: &DesignNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} {} ({})",
        "  ".repeat(depth),
        "-".repeat(depth + 1),
        node.name,
        node.kind
    ));
    for child in node.children() {
        outline_into(child, depth + 1, lines);
    }
}

/// Name-only visualization of a subtree; nodes with children carry their
/// kind.
pub fn structure_chart(node: &DesignNode) -> VisualizationNode {
    let chart = VisualizationNode::new(node.name.as_str());
    if !node.has_children() {
        return chart;
    }
    chart
        .with_attribute(NODE_TYPE_KEY, node.kind.as_str())
        .with_children(node.children().iter().map(structure_chart).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xmlview_resolver::ControlCatalog;

    fn walker() -> TreeWalker<'static> {
        TreeWalker::new(ControlResolver::builtin(), ConversionOptions::default())
    }

    #[test]
    fn test_join_skips_blank() {
        assert_eq!(join_markup(["<A />", "", "  \n", "<B />"]), "<A />\n<B />");
    }

    #[test]
    fn test_containers_emit_no_tags() {
        let tree = DesignNode::frame("Page").with_child(
            DesignNode::group("Row")
                .with_child(
                    DesignNode::instance("Button").with_child(DesignNode::text("t", "Save")),
                )
                .with_child(DesignNode::section("Empty")),
        );
        assert_eq!(walker().markup(&tree), r#"<Button text="Save" />"#);
    }

    #[test]
    fn test_self_closing_drops_children() {
        let node = DesignNode::instance("Button")
            .with_child(DesignNode::text("t", "Go"))
            .with_child(DesignNode::instance("Label").with_child(DesignNode::text("l", "inner")));
        assert_eq!(walker().markup(&node), r#"<Button text="Go" />"#);
    }

    #[test]
    fn test_pair_without_body() {
        assert_eq!(walker().markup(&DesignNode::instance("VBox")), "<VBox></VBox>");
    }

    #[test]
    fn test_pair_with_body() {
        let node = DesignNode::instance("Panel")
            .with_child(DesignNode::instance("Label").with_child(DesignNode::text("l", "Name")))
            .with_child(
                DesignNode::instance("Input").with_child(DesignNode::text("placeholder", "Type")),
            );

        assert_eq!(
            walker().markup(&node),
            "<Panel>\n<Label text=\"Name\" />\n<Input placeholder=\"Type\" />\n</Panel>"
        );
    }

    #[test]
    fn test_unresolved_instance_is_flattened() {
        let node = DesignNode::instance("WeirdWidget42")
            .with_child(DesignNode::instance("OkButton").with_child(DesignNode::text("OK", "OK")));
        assert_eq!(walker().markup(&node), r#"<Button text="OK" />"#);
    }

    #[test]
    fn test_text_leaves_by_mode() {
        let leaf = DesignNode::text("Hint", "Fill <all> fields").with_id("9:1");
        assert_eq!(walker().markup(&leaf), "");

        let annotated = TreeWalker::new(ControlResolver::builtin(), ConversionOptions::annotated());
        assert_eq!(
            annotated.markup(&leaf),
            r#"<Text id="node_9_1" text="Fill &lt;all&gt; fields" />"#
        );
        assert_eq!(annotated.markup(&DesignNode::text("blank", "   ")), "");
    }

    #[test]
    fn test_chart_mirrors_tree() {
        let node = DesignNode::instance("Save Button")
            .with_child(DesignNode::text("Caption", "Save"));
        let chart = walker().chart(&node);

        assert_eq!(chart.name, "Save Button");
        assert_eq!(chart.attribute(NODE_TYPE_KEY), Some("INSTANCE"));
        assert_eq!(chart.attribute(CONTROL_KEY), Some("sap.m.Button"));
        assert_eq!(chart.attribute("text"), Some("Save"));
        assert_eq!(chart.children.len(), 1);
        assert_eq!(chart.children[0].attribute(NODE_TYPE_KEY), Some("TEXT"));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = ControlCatalog::from_entries([("Btn", "ns.m.Button")]);
        let walker = TreeWalker::new(ControlResolver::new(&catalog), ConversionOptions::default());
        let node = DesignNode::instance("MyBtn").with_child(DesignNode::text("t", "Go"));

        // Only the built-in button id is self-closing.
        assert_eq!(walker.markup(&node), r#"<Button text="Go"></Button>"#);
    }

    #[test]
    fn test_outline() {
        let tree = DesignNode::frame("Form")
            .with_child(DesignNode::instance("Input").with_child(DesignNode::text("Value", "x")));
        assert_eq!(outline(&tree), "- Form (FRAME)\n  -- Input (INSTANCE)\n    --- Value (TEXT)");
    }

    #[test]
    fn test_structure_chart() {
        let tree = DesignNode::frame("Form").with_child(DesignNode::text("Title", "Hi"));
        let chart = structure_chart(&tree);
        assert_eq!(chart.attribute(NODE_TYPE_KEY), Some("FRAME"));
        assert!(chart.children[0].attributes.is_empty());
    }
}
