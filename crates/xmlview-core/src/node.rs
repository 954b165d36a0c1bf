//! Design tree nodes.
//!
//! A [`DesignNode`] mirrors one layer of the design tool's selection. Trees
//! are handed over wholesale for each conversion and never mutated.

/// The kind of a design node.
///
/// On the wire these use the design tool's upper-case type names; any type
/// the engine has no special handling for becomes [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// An instance of a reusable component.
    #[cfg_attr(feature = "serde", serde(rename = "INSTANCE"))]
    Instance,
    /// A text leaf.
    #[cfg_attr(feature = "serde", serde(rename = "TEXT"))]
    Text,
    #[cfg_attr(feature = "serde", serde(rename = "FRAME"))]
    Frame,
    #[cfg_attr(feature = "serde", serde(rename = "GROUP"))]
    Group,
    #[cfg_attr(feature = "serde", serde(rename = "SECTION"))]
    Section,
    /// Any other container-capable layer.
    #[cfg_attr(feature = "serde", serde(rename = "OTHER", other))]
    Other,
}

impl NodeKind {
    /// The design tool's type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "INSTANCE",
            Self::Text => "TEXT",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Other => "OTHER",
        }
    }

    /// Whether nodes of this kind may hold children.
    pub fn supports_children(&self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Plain layout containers: everything that holds children but is not a
    /// component instance.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Frame | Self::Group | Self::Section | Self::Other)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the design tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignNode {
    /// Stable identifier assigned by the design tool.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,
    /// Author-assigned layer name, used as the matching key.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<DesignNode>,
    /// Text content, only present on text leaves.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "characters", default, skip_serializing_if = "Option::is_none")
    )]
    pub text: Option<String>,
}

impl DesignNode {
    /// Create a childless node.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a component instance node.
    pub fn instance(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Instance)
    }

    /// Create a text leaf.
    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        let mut node = Self::new(name, NodeKind::Text);
        node.text = Some(characters.into());
        node
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Frame)
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    pub fn section(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Section)
    }

    /// Set the node identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a child node. Text leaves ignore children.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        if self.kind.supports_children() {
            self.children.push(child);
        }
        self
    }

    /// Add several child nodes. Text leaves ignore children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = DesignNode>) -> Self {
        if self.kind.supports_children() {
            self.children.extend(children);
        }
        self
    }

    /// Children as seen by the engine; always empty for text leaves.
    pub fn children(&self) -> &[DesignNode] {
        if self.kind.supports_children() {
            &self.children
        } else {
            &[]
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn is_instance(&self) -> bool {
        self.kind == NodeKind::Instance
    }

    /// Non-empty text content of a text leaf.
    pub fn characters(&self) -> Option<&str> {
        if !self.is_text() {
            return None;
        }
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Lower-cased layer name for case-insensitive matching.
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Depth-first iterator over all descendants (excluding self).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().iter().rev().collect(),
        }
    }
}

/// Depth-first, pre-order iterator over a node's descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a DesignNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DesignNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
