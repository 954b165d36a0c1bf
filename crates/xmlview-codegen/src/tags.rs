//! Opening, closing and self-closing tag fragments.

use xmlview_resolver::ResolvedControl;

/// Controls that never contain a body.
///
/// Their markup is always one empty-element tag; children of such nodes are
/// dropped at the markup level.
pub const SELF_CLOSING_CONTROLS: &[&str] = &[
    // Text display
    "sap.m.Text",
    "sap.m.Label",
    "sap.m.Title",
    "sap.m.ObjectStatus",
    "sap.m.MessageStrip",
    // Input
    "sap.m.Input",
    "sap.m.TextArea",
    "sap.m.MultiInput",
    "sap.m.StepInput",
    "sap.m.SearchField",
    "sap.m.DatePicker",
    "sap.m.TimePicker",
    "sap.ui.unified.FileUploader",
    // Icons and media
    "sap.ui.core.Icon",
    "sap.m.Avatar",
    "sap.m.Image",
    // Indicators
    "sap.m.ProgressIndicator",
    "sap.m.BusyIndicator",
    "sap.m.RatingIndicator",
    // Actions and selection
    "sap.m.Button",
    "sap.m.ToggleButton",
    "sap.m.Link",
    "sap.m.CheckBox",
    "sap.m.RadioButton",
    "sap.m.Switch",
    "sap.m.Slider",
];

/// Id of the icon control.
pub const ICON_CONTROL: &str = "sap.ui.core.Icon";

/// Tag fragments for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPair {
    /// Unresolved control: the node contributes no tag of its own.
    Empty,
    /// A single `<Tag />` fragment.
    SelfClosing(String),
    /// Matching `<Tag>` and `</Tag>` fragments.
    Pair { open: String, close: String },
}

impl TagPair {
    /// Number of fragments.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::SelfClosing(_) => 1,
            Self::Pair { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Splice rendered attributes (` a="1" b="2"`) in front of the closing
    /// `/>` or `>` of the opening fragment.
    pub fn with_attributes(self, attributes: &str) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::SelfClosing(tag) => {
                let head = tag.strip_suffix("/>").unwrap_or(tag.as_str()).trim_end();
                Self::SelfClosing(format!("{}{} />", head, attributes))
            }
            Self::Pair { open, close } => {
                let head = open.strip_suffix('>').unwrap_or(open.as_str());
                Self::Pair {
                    open: format!("{}{}>", head, attributes),
                    close,
                }
            }
        }
    }
}

/// Decides the tag shape for resolved controls.
#[derive(Debug, Clone, Copy)]
pub struct TagBuilder {
    self_closing: &'static [&'static str],
}

impl TagBuilder {
    pub fn new() -> Self {
        Self {
            self_closing: SELF_CLOSING_CONTROLS,
        }
    }

    pub fn is_self_closing(&self, fully_qualified_name: &str) -> bool {
        self.self_closing.iter().any(|c| *c == fully_qualified_name)
    }

    /// Build the tag fragments for a control.
    ///
    /// Whether the node has children does not matter: self-closing controls
    /// stay self-closing and every other control gets an open/close pair.
    /// Unresolved controls and ids without a usable tag name yield
    /// [`TagPair::Empty`].
    pub fn build(&self, control: &ResolvedControl) -> TagPair {
        let Some(fqn) = control.name() else {
            return TagPair::Empty;
        };
        let tag = control.tag_name.as_str();
        if tag.is_empty() {
            tracing::warn!(control = fqn, "control id has no tag name");
            return TagPair::Empty;
        }

        if self.is_self_closing(fqn) {
            TagPair::SelfClosing(format!("<{} />", tag))
        } else {
            TagPair::Pair {
                open: format!("<{}>", tag),
                close: format!("</{}>", tag),
            }
        }
    }
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmlview_resolver::{ControlResolver, MatchKind};

    fn control(fqn: &str) -> ResolvedControl {
        ResolvedControl::new(fqn, MatchKind::Exact)
    }

    #[test]
    fn test_self_closing_set_is_exhaustive() {
        let builder = TagBuilder::new();
        for fqn in SELF_CLOSING_CONTROLS {
            let tags = builder.build(&control(fqn));
            assert_eq!(tags.len(), 1, "{fqn} should be self-closing");
        }
    }

    #[test]
    fn test_container_gets_pair_without_children() {
        let tags = TagBuilder::new().build(&control("sap.m.VBox"));
        assert_eq!(
            tags,
            TagPair::Pair {
                open: "<VBox>".into(),
                close: "</VBox>".into()
            }
        );
    }

    #[test]
    fn test_unresolved_and_malformed_are_empty() {
        let builder = TagBuilder::new();
        assert!(builder.build(&ResolvedControl::unresolved()).is_empty());
        assert!(builder.build(&control("NoSeparator")).is_empty());
    }

    #[test]
    fn test_splice_attributes() {
        let single = TagPair::SelfClosing("<Button />".into()).with_attributes(r#" text="OK""#);
        assert_eq!(single, TagPair::SelfClosing(r#"<Button text="OK" />"#.into()));

        let pair = TagBuilder::new()
            .build(&ControlResolver::builtin().resolve("Panel"))
            .with_attributes(r#" headerText="Details""#);
        assert_eq!(
            pair,
            TagPair::Pair {
                open: r#"<Panel headerText="Details">"#.into(),
                close: "</Panel>".into()
            }
        );

        let bare = TagPair::SelfClosing("<Icon />".into()).with_attributes("");
        assert_eq!(bare, TagPair::SelfClosing("<Icon />".into()));
    }
}
