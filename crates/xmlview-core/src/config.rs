//! View configuration collected from the settings form.

use indexmap::IndexMap;

/// Prefix shared by every namespace declaration key.
pub const NAMESPACE_PREFIX: &str = "xmlns";

/// Settings key stored in [`ViewConfiguration::display_block`].
pub const DISPLAY_BLOCK_KEY: &str = "displayBlock";

/// Namespace declarations offered to the user, in menu order.
pub const AVAILABLE_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "sap.m"),
    ("xmlns:core", "sap.ui.core"),
    ("xmlns:l", "sap.ui.layout"),
    ("xmlns:f", "sap.f"),
    ("xmlns:form", "sap.ui.layout.form"),
    ("xmlns:unified", "sap.ui.unified"),
];

/// Whether `key` is a namespace declaration (`xmlns` or `xmlns:*`).
pub fn is_namespace_key(key: &str) -> bool {
    key == NAMESPACE_PREFIX
        || key
            .strip_prefix(NAMESPACE_PREFIX)
            .is_some_and(|rest| rest.starts_with(':'))
}

/// Settings for the root view element.
///
/// Values are immutable in spirit: every update method consumes the value
/// and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewConfiguration {
    pub controller_name: String,
    pub page_title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub display_block: Option<String>,
    /// Every other key in caller order: namespace declarations and anything
    /// the envelope does not understand.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: IndexMap<String, String>,
}

impl ViewConfiguration {
    /// Create a configuration with only the required keys.
    pub fn new(controller_name: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            page_title: page_title.into(),
            display_block: None,
            extra: IndexMap::new(),
        }
    }

    pub fn with_display_block(mut self, display_block: impl Into<String>) -> Self {
        self.display_block = Some(display_block.into());
        self
    }

    pub fn with_controller_name(mut self, controller_name: impl Into<String>) -> Self {
        self.controller_name = controller_name.into();
        self
    }

    pub fn with_page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = page_title.into();
        self
    }

    /// Set a key, replacing an existing value in place.
    ///
    /// The named settings (`controllerName`, `pageTitle`, `displayBlock`)
    /// land in their fields; everything else goes to `extra`.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "controllerName" => self.controller_name = value,
            "pageTitle" => self.page_title = value,
            DISPLAY_BLOCK_KEY => self.display_block = Some(value),
            _ => {
                self.extra.insert(key, value);
            }
        }
        self
    }

    /// Remove an additional key, keeping the order of the rest.
    pub fn without(mut self, key: &str) -> Self {
        if key == DISPLAY_BLOCK_KEY {
            self.display_block = None;
        } else {
            self.extra.shift_remove(key);
        }
        self
    }

    /// Look up a key, named settings included.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "controllerName" => Some(self.controller_name.as_str()),
            "pageTitle" => Some(self.page_title.as_str()),
            DISPLAY_BLOCK_KEY => self.display_block.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// Namespace declarations with a non-empty value, in caller order.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra
            .iter()
            .filter(|(key, value)| is_namespace_key(key) && !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Whether the caller declared `key` with a non-empty value.
    pub fn declares(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::new("sap.ui.demo.todo.controller.App", "My Application")
            .with_display_block("true")
            .with_entry("xmlns", "sap.m")
            .with_entry("xmlns:mvc", "sap.ui.core.mvc")
    }
}
