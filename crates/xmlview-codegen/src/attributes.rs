//! Attribute inference.
//!
//! Attributes are synthesized from a node's layer name and its text
//! children, driven by the resolved control id. The rules live in a single
//! ordered table; earlier rules win when two rules produce the same
//! attribute name.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use xmlview_core::DesignNode;
use xmlview_resolver::{ControlResolver, ResolvedControl};

use crate::escape::escape_xml;
use crate::options::ConversionOptions;
use crate::tags::ICON_CONTROL;

/// URI scheme of UI5 icon sources.
pub const ICON_SCHEME: &str = "sap-icon://";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static PARENTHESES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[()]").unwrap());

/// Ordered, first-writer-wins attribute list for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: IndexMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trimmed value unless it is blank or `name` is already set.
    ///
    /// Returns whether the value was stored.
    pub fn insert(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), value.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as ` name="value"` pairs with escaped values; empty when the
    /// set is empty.
    pub fn to_markup(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_xml(value)))
            .collect()
    }
}

/// Build an icon source token.
///
/// Tokens that already carry a URI scheme are kept; anything else is
/// lower-cased, whitespace runs become `-`, parentheses are dropped and the
/// result is prefixed with [`ICON_SCHEME`].
pub fn icon_uri(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") {
        return raw.to_string();
    }
    let lowered = raw.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    format!("{}{}", ICON_SCHEME, PARENTHESES.replace_all(&hyphenated, ""))
}

/// Identity attribute value for a design-tool node id.
///
/// Characters outside `[A-Za-z0-9_.-]` become `_`; ids not starting with a
/// letter or `_` get a `node_` prefix.
pub fn identity_of(id: &str) -> String {
    let cleaned: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => cleaned,
        _ => format!("node_{}", cleaned),
    }
}

/// Everything a rule may look at.
pub struct RuleContext<'n, 'c> {
    pub node: &'n DesignNode,
    pub control: &'n ResolvedControl,
    pub resolver: ControlResolver<'c>,
    pub options: ConversionOptions,
}

/// One entry of the rule table.
pub struct AttributeRule {
    pub name: &'static str,
    pub applies: fn(&RuleContext<'_, '_>) -> bool,
    pub apply: fn(&RuleContext<'_, '_>, &mut AttributeSet),
}

/// Rules in evaluation order.
pub static RULES: &[AttributeRule] = &[
    AttributeRule {
        name: "identity",
        applies: |ctx| ctx.options.mode.emits_identity() && ctx.node.id.is_some(),
        apply: identity,
    },
    AttributeRule {
        name: "flex-layout",
        applies: |ctx| ctx.options.layout_hints && ctx.control.is("sap.m.FlexBox"),
        apply: flex_layout,
    },
    AttributeRule {
        name: "label-text",
        applies: |ctx| ctx.control.is_a("Label"),
        apply: label_text,
    },
    AttributeRule {
        name: "action-text",
        applies: |ctx| {
            ctx.control.is_a("Button") || ctx.control.is_a("Link") || ctx.control.is_a("Title")
        },
        apply: action_text,
    },
    AttributeRule {
        name: "input-value",
        applies: |ctx| ctx.control.is_a("Input") || ctx.control.is_a("TextArea"),
        apply: input_value,
    },
    AttributeRule {
        name: "icon-source",
        applies: |ctx| ctx.control.is(ICON_CONTROL),
        apply: icon_source,
    },
    AttributeRule {
        name: "button-icon",
        applies: |ctx| ctx.control.is_a("Button") && ctx.node.has_children(),
        apply: button_icon,
    },
];

fn identity(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    if let Some(id) = ctx.node.id.as_deref() {
        attrs.insert("id", &identity_of(id));
    }
}

fn flex_layout(_ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    attrs.insert("fitContainer", "true");
    attrs.insert("direction", "Column");
    attrs.insert("justifyContent", "Center");
    attrs.insert("alignItems", "Center");
    attrs.insert("class", "sapUiSmallMargin");
}

fn label_text(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    if ctx.options.layout_hints {
        attrs.insert("class", "sapUiSmallMarginBottom");
    }

    let children = ctx.node.children();
    let Some(text) = children.iter().find_map(DesignNode::characters) else {
        return;
    };
    let asterisk = children
        .iter()
        .find(|c| c.is_text() && c.lower_name() == "asterisk");

    let mut full = text.to_string();
    if let Some(marker) = asterisk.and_then(|a| a.text.as_deref()) {
        full.push_str(marker);
    }
    attrs.insert("text", &full);
    if asterisk.is_some() {
        attrs.insert("required", "true");
    }
}

fn action_text(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    let first_text = ctx.node.children().iter().find(|c| c.is_text());
    if let Some(text) = first_text.and_then(DesignNode::characters) {
        attrs.insert("text", text);
        return;
    }

    // Icon-only buttons have no caption.
    let icon_only = ctx.control.is_a("Button") && ctx.node.lower_name().contains("icon");
    if !icon_only {
        attrs.insert("text", &ctx.node.name);
    }
}

fn input_value(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    if ctx.options.layout_hints {
        attrs.insert("width", "18rem");
    }

    let mut classify = |leaf: &DesignNode| {
        if let Some(text) = leaf.characters() {
            let name = if leaf.lower_name().contains("placeholder") {
                "placeholder"
            } else {
                "value"
            };
            attrs.insert(name, text);
        }
    };

    for child in ctx.node.children() {
        if child.is_text() {
            classify(child);
        } else if child.kind.is_container() {
            child.children().iter().filter(|g| g.is_text()).for_each(&mut classify);
        }
    }
}

fn icon_source(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    attrs.insert(ctx.options.mode.icon_attribute(), &icon_token(ctx.node));
}

fn button_icon(ctx: &RuleContext<'_, '_>, attrs: &mut AttributeSet) {
    if ctx.options.layout_hints {
        attrs.insert("class", "sapUiMediumMarginTop");
    }

    for child in ctx.node.children() {
        let found = if child.is_text() {
            child
                .characters()
                .filter(|text| {
                    child.lower_name().contains("icon") || text.starts_with(ICON_SCHEME)
                })
                .map(str::to_string)
        } else if child.is_instance() && ctx.resolver.resolve(&child.name).is(ICON_CONTROL) {
            Some(icon_token(child))
        } else {
            None
        };

        if let Some(token) = found.filter(|t| !t.trim().is_empty()) {
            attrs.insert("icon", &icon_uri(&token));
            break;
        }
    }
}

/// Icon token of an icon node: a descendant text already in URI form, or
/// one synthesized from the layer name.
fn icon_token(node: &DesignNode) -> String {
    node.descendants()
        .filter_map(DesignNode::characters)
        .find(|text| text.starts_with(ICON_SCHEME))
        .map(str::to_string)
        .unwrap_or_else(|| icon_uri(&node.name))
}

/// Applies the rule table to nodes.
#[derive(Debug, Clone, Copy)]
pub struct AttributeInference<'c> {
    resolver: ControlResolver<'c>,
    options: ConversionOptions,
}

impl<'c> AttributeInference<'c> {
    pub fn new(resolver: ControlResolver<'c>, options: ConversionOptions) -> Self {
        Self { resolver, options }
    }

    /// Infer the attributes of `node` rendered as `control`.
    ///
    /// Unresolved controls get no attributes.
    pub fn infer(&self, node: &DesignNode, control: &ResolvedControl) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        if !control.is_resolved() {
            return attrs;
        }

        let ctx = RuleContext {
            node,
            control,
            resolver: self.resolver,
            options: self.options,
        };
        for rule in RULES.iter().filter(|rule| (rule.applies)(&ctx)) {
            tracing::trace!(rule = rule.name, node = %node.name, "applying attribute rule");
            (rule.apply)(&ctx, &mut attrs);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SerializationMode;

    fn infer_with(node: &DesignNode, options: ConversionOptions) -> AttributeSet {
        let resolver = ControlResolver::builtin();
        let control = resolver.resolve(&node.name);
        AttributeInference::new(resolver, options).infer(node, &control)
    }

    fn infer(node: &DesignNode) -> AttributeSet {
        infer_with(node, ConversionOptions::default())
    }

    #[test]
    fn test_first_writer_wins() {
        let mut attrs = AttributeSet::new();
        assert!(attrs.insert("value", " first "));
        assert!(!attrs.insert("value", "second"));
        assert!(!attrs.insert("placeholder", "   "));
        assert_eq!(attrs.get("value"), Some("first"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_markup_escapes_values() {
        let mut attrs = AttributeSet::new();
        attrs.insert("text", "O'Brien & Co");
        assert_eq!(attrs.to_markup(), r#" text="O&apos;Brien &amp; Co""#);
    }

    #[test]
    fn test_icon_uri() {
        assert_eq!(icon_uri("Add Employee (Small)"), "sap-icon://add-employee-small");
        assert_eq!(icon_uri("sap-icon://home"), "sap-icon://home");
        assert_eq!(icon_uri("  Search  "), "sap-icon://search");
    }

    #[test]
    fn test_identity_of() {
        assert_eq!(identity_of("12:34"), "node_12_34");
        assert_eq!(identity_of("submit"), "submit");
        assert_eq!(identity_of("I1;2"), "I1_2");
    }

    #[test]
    fn test_label_with_asterisk() {
        let node = DesignNode::instance("Label")
            .with_child(DesignNode::text("Caption", "Email"))
            .with_child(DesignNode::text("Asterisk", "*"));

        let attrs = infer(&node);
        assert_eq!(attrs.get("text"), Some("Email*"));
        assert_eq!(attrs.get("required"), Some("true"));
    }

    #[test]
    fn test_label_without_text_child() {
        let attrs = infer(&DesignNode::instance("Label"));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_button_text_from_child() {
        let node =
            DesignNode::instance("PrimaryButton").with_child(DesignNode::text("Submit", "Submit"));
        assert_eq!(infer(&node).get("text"), Some("Submit"));
    }

    #[test]
    fn test_link_falls_back_to_name() {
        let attrs = infer(&DesignNode::instance("Link"));
        assert_eq!(attrs.get("text"), Some("Link"));
    }

    #[test]
    fn test_icon_button_has_no_fallback_text() {
        let attrs = infer(&DesignNode::instance("Icon Button"));
        assert_eq!(attrs.get("text"), None);
    }

    #[test]
    fn test_input_placeholder_and_value() {
        let node = DesignNode::instance("Input")
            .with_child(DesignNode::text("Placeholder", "Enter name"))
            .with_child(
                DesignNode::frame("Content")
                    .with_child(DesignNode::text("Value", "Jane"))
                    .with_child(DesignNode::text("Value 2", "ignored")),
            );

        let attrs = infer(&node);
        assert_eq!(attrs.get("placeholder"), Some("Enter name"));
        assert_eq!(attrs.get("value"), Some("Jane"));
        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["placeholder", "value"]);
    }

    #[test]
    fn test_icon_source_variants() {
        let from_name = DesignNode::instance("Icon Home");
        assert_eq!(infer(&from_name).get("src"), Some("sap-icon://icon-home"));

        let from_text = DesignNode::instance("Icon").with_child(
            DesignNode::frame("glyph").with_child(DesignNode::text("t", "sap-icon://add")),
        );
        assert_eq!(infer(&from_text).get("src"), Some("sap-icon://add"));

        let annotated = infer_with(&from_text, ConversionOptions::annotated());
        assert_eq!(annotated.get("icon"), Some("sap-icon://add"));
        assert_eq!(annotated.get("src"), None);
    }

    #[test]
    fn test_button_icon_from_named_text() {
        let node = DesignNode::instance("Button")
            .with_child(DesignNode::text("Caption", "Save"))
            .with_child(DesignNode::text("icon", "Save As"));

        let attrs = infer(&node);
        assert_eq!(attrs.get("text"), Some("Save"));
        assert_eq!(attrs.get("icon"), Some("sap-icon://save-as"));
    }

    #[test]
    fn test_button_icon_from_nested_icon_instance() {
        let node = DesignNode::instance("Icon Button").with_child(
            DesignNode::instance("Icon").with_child(DesignNode::text("glyph", "sap-icon://delete")),
        );

        let attrs = infer(&node);
        assert_eq!(attrs.get("text"), None);
        assert_eq!(attrs.get("icon"), Some("sap-icon://delete"));
    }

    #[test]
    fn test_layout_hints() {
        let options = ConversionOptions::default().with_layout_hints(true);
        let flex = infer_with(&DesignNode::instance("FlexBox"), options);
        assert_eq!(flex.get("direction"), Some("Column"));
        assert_eq!(flex.get("class"), Some("sapUiSmallMargin"));

        let input = infer_with(&DesignNode::instance("Input"), options);
        assert_eq!(input.get("width"), Some("18rem"));
        assert!(infer(&DesignNode::instance("FlexBox")).is_empty());
    }

    #[test]
    fn test_identity_only_in_annotated_mode() {
        let node = DesignNode::instance("Panel").with_id("3:7");
        assert!(infer(&node).is_empty());

        let options = ConversionOptions::new(SerializationMode::Annotated);
        let attrs = infer_with(&node, options);
        assert_eq!(attrs.iter().next(), Some(("id", "node_3_7")));
    }

    #[test]
    fn test_unresolved_has_no_attributes() {
        let node = DesignNode::instance("WeirdWidget42").with_child(DesignNode::text("t", "x"));
        assert!(infer(&node).is_empty());
    }
}
