//! Instance-name resolution against a [`ControlCatalog`].

use crate::catalog::ControlCatalog;

/// How a control was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The instance name is a catalog key.
    Exact,
    /// A catalog key occurs inside the instance name, ignoring case.
    Substring,
}

/// Result of resolving one instance name.
///
/// An unresolved control is a normal outcome: the node's own tag is dropped
/// and its children are flattened into the parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedControl {
    /// Fully-qualified control id, e.g. `sap.m.Button`.
    pub fully_qualified_name: Option<String>,
    /// Last path segment of the id; empty when unresolved or malformed.
    pub tag_name: String,
    pub match_kind: Option<MatchKind>,
}

impl ResolvedControl {
    /// The unresolved outcome.
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Wrap a fully-qualified id that was found by `kind`.
    pub fn new(fully_qualified_name: impl Into<String>, kind: MatchKind) -> Self {
        let fully_qualified_name = fully_qualified_name.into();
        Self {
            tag_name: tag_name_of(&fully_qualified_name).to_string(),
            fully_qualified_name: Some(fully_qualified_name),
            match_kind: Some(kind),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.fully_qualified_name.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.fully_qualified_name.as_deref()
    }

    /// Whether the control id equals `fqn` exactly.
    pub fn is(&self, fqn: &str) -> bool {
        self.name() == Some(fqn)
    }

    /// Whether the control's final path segment is `segment`, e.g.
    /// `Button` for both `sap.m.Button` and `custom.lib.Button`.
    pub fn is_a(&self, segment: &str) -> bool {
        self.name()
            .and_then(|n| n.strip_suffix(segment))
            .is_some_and(|head| head.ends_with('.'))
    }
}

/// Tag name of a fully-qualified id: everything after the final `.`.
///
/// Ids without a separator are malformed and yield an empty tag name.
pub fn tag_name_of(fully_qualified_name: &str) -> &str {
    fully_qualified_name
        .rsplit_once('.')
        .map(|(_, tag)| tag)
        .unwrap_or("")
}

/// Resolves design-tool instance names to controls.
#[derive(Debug, Clone, Copy)]
pub struct ControlResolver<'a> {
    catalog: &'a ControlCatalog,
}

impl<'a> ControlResolver<'a> {
    pub fn new(catalog: &'a ControlCatalog) -> Self {
        Self { catalog }
    }

    /// Resolver over the built-in catalog.
    pub fn builtin() -> ControlResolver<'static> {
        ControlResolver::new(ControlCatalog::builtin())
    }

    pub fn catalog(&self) -> &'a ControlCatalog {
        self.catalog
    }

    /// Resolve an instance name.
    ///
    /// Exact keys win. Otherwise the first key, in catalog order, contained
    /// in the lower-cased name is used. There is no ranking by specificity:
    /// when several keys match, catalog order alone decides.
    pub fn resolve(&self, instance_name: &str) -> ResolvedControl {
        if let Some(fqn) = self.catalog.get(instance_name) {
            return ResolvedControl::new(fqn, MatchKind::Exact);
        }

        let lowered = instance_name.to_lowercase();
        let found = self
            .catalog
            .iter()
            .find(|(key, _)| lowered.contains(&key.to_lowercase()));

        match found {
            Some((key, fqn)) => {
                tracing::debug!(instance = instance_name, key, control = fqn, "substring match");
                ResolvedControl::new(fqn, MatchKind::Substring)
            }
            None => {
                tracing::debug!(instance = instance_name, "no control matched");
                ResolvedControl::unresolved()
            }
        }
    }
}
