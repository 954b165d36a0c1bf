//! XML view generation from design trees.
//!
//! This crate turns a selection of design nodes into a SAPUI5 XML view:
//!
//! - [`tags`] decides the tag shape of a resolved control
//! - [`attributes`] infers attributes from layer names and text children
//! - [`walker`] traverses the tree into markup and a visualization tree
//! - [`envelope`] wraps the body in the root view element
//! - [`format`] re-indents the result
//!
//! # Example
//!
//! ```
//! use xmlview_codegen::ViewGenerator;
//! use xmlview_core::{DesignNode, ViewConfiguration};
//!
//! let nodes = vec![
//!     DesignNode::instance("PrimaryButton").with_child(DesignNode::text("Label", "Submit")),
//! ];
//! let generator = ViewGenerator::new();
//! assert_eq!(generator.generate_body(&nodes), r#"<Button text="Submit" />"#);
//!
//! let view = generator.generate_view(&nodes, &ViewConfiguration::new("c.App", "Home"));
//! assert!(view.contains("\t\t\t\t<Button text=\"Submit\" />"));
//! ```

pub mod attributes;
pub mod envelope;
pub mod escape;
pub mod format;
pub mod generator;
pub mod options;
pub mod tags;
pub mod walker;

pub use attributes::{icon_uri, AttributeInference, AttributeSet, ICON_SCHEME};
pub use envelope::{assemble_view, build_envelope, Envelope, DEFAULT_NAMESPACES};
pub use escape::escape_xml;
pub use format::format_xml;
pub use generator::ViewGenerator;
pub use options::{ConversionOptions, SerializationMode};
pub use tags::{TagBuilder, TagPair, ICON_CONTROL, SELF_CLOSING_CONTROLS};
pub use walker::{outline, structure_chart, TreeWalker, Walked};
