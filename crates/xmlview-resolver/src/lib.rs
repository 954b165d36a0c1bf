//! Control resolution for xmlview.
//!
//! Maps design-tool instance names onto fully-qualified UI5 control ids
//! using an ordered catalog: exact keys first, then a case-insensitive
//! substring scan in catalog order.

pub mod catalog;
pub mod resolver;

pub use catalog::{ControlCatalog, BUILTIN_CONTROLS};
pub use resolver::{tag_name_of, ControlResolver, MatchKind, ResolvedControl};
