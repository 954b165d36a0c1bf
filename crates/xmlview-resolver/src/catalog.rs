//! Control catalog: design-tool instance names to UI5 control identifiers.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Built-in catalog entries.
///
/// Order matters for substring matching: the first key contained in an
/// instance name wins, so longer and more specific names come first.
pub const BUILTIN_CONTROLS: &[(&str, &str)] = &[
    // Composite and multi-word names
    ("IconTabBar", "sap.m.IconTabBar"),
    ("IconTabFilter", "sap.m.IconTabFilter"),
    ("RadioButtonGroup", "sap.m.RadioButtonGroup"),
    ("RadioButton", "sap.m.RadioButton"),
    ("SegmentedButton", "sap.m.SegmentedButton"),
    ("ToggleButton", "sap.m.ToggleButton"),
    ("MenuButton", "sap.m.MenuButton"),
    ("StandardListItem", "sap.m.StandardListItem"),
    ("SimpleForm", "sap.ui.layout.form.SimpleForm"),
    ("FileUploader", "sap.ui.unified.FileUploader"),
    ("MessageStrip", "sap.m.MessageStrip"),
    ("ObjectStatus", "sap.m.ObjectStatus"),
    ("ProgressIndicator", "sap.m.ProgressIndicator"),
    ("BusyIndicator", "sap.m.BusyIndicator"),
    ("RatingIndicator", "sap.m.RatingIndicator"),
    // Actions
    ("Button", "sap.m.Button"),
    ("Link", "sap.m.Link"),
    // Selection
    ("CheckBox", "sap.m.CheckBox"),
    ("Switch", "sap.m.Switch"),
    ("ComboBox", "sap.m.ComboBox"),
    ("Select", "sap.m.Select"),
    ("Dropdown", "sap.m.Select"),
    ("Slider", "sap.m.Slider"),
    // Input
    ("Text Area", "sap.m.TextArea"),
    ("TextArea", "sap.m.TextArea"),
    ("Text Field", "sap.m.Input"),
    ("SearchField", "sap.m.SearchField"),
    ("Search", "sap.m.SearchField"),
    ("DatePicker", "sap.m.DatePicker"),
    ("Date Picker", "sap.m.DatePicker"),
    ("TimePicker", "sap.m.TimePicker"),
    ("StepInput", "sap.m.StepInput"),
    ("MultiInput", "sap.m.MultiInput"),
    ("Input", "sap.m.Input"),
    // Display
    ("Avatar", "sap.m.Avatar"),
    ("Image", "sap.m.Image"),
    ("Label", "sap.m.Label"),
    ("Title", "sap.m.Title"),
    ("Icon", "sap.ui.core.Icon"),
    ("Text", "sap.m.Text"),
    // Layout and containers
    ("FlexBox", "sap.m.FlexBox"),
    ("VBox", "sap.m.VBox"),
    ("HBox", "sap.m.HBox"),
    ("Panel", "sap.m.Panel"),
    ("Card", "sap.f.Card"),
    ("Toolbar", "sap.m.Toolbar"),
    ("Dialog", "sap.m.Dialog"),
    ("List", "sap.m.List"),
    ("Table", "sap.m.Table"),
    ("Bar", "sap.m.Bar"),
];

static BUILTIN: Lazy<ControlCatalog> =
    Lazy::new(|| ControlCatalog::from_entries(BUILTIN_CONTROLS.iter().copied()));

/// An ordered, read-only association of instance names to control ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlCatalog {
    entries: IndexMap<String, String>,
}

impl ControlCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static ControlCatalog {
        &BUILTIN
    }

    /// Build a catalog from entries, keeping their order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, instance_name: &str) -> Option<&str> {
        self.entries.get(instance_name).map(String::as_str)
    }

    pub fn contains(&self, instance_name: &str) -> bool {
        self.entries.contains_key(instance_name)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
