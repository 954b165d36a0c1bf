//! Entry point tying resolution, inference, traversal and formatting
//! together.

use xmlview_core::{
    ConvertError, DesignNode, Result, ViewConfiguration, VisualizationNode, NODE_TYPE_KEY,
    ROOT_WRAPPER,
};
use xmlview_resolver::{ControlCatalog, ControlResolver};

use crate::envelope::assemble_view;
use crate::options::ConversionOptions;
use crate::walker::{join_markup, TreeWalker};

/// Generates XML views from design node selections.
///
/// A generator holds no per-call state; build one per conversion or share
/// it freely.
#[derive(Debug, Clone, Copy)]
pub struct ViewGenerator<'c> {
    catalog: &'c ControlCatalog,
    options: ConversionOptions,
}

impl ViewGenerator<'static> {
    /// Generator over the built-in catalog with default options.
    pub fn new() -> Self {
        Self::with_catalog(ControlCatalog::builtin())
    }
}

impl Default for ViewGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> ViewGenerator<'c> {
    pub fn with_catalog(catalog: &'c ControlCatalog) -> Self {
        Self {
            catalog,
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ConversionOptions {
        self.options
    }

    pub fn walker(&self) -> TreeWalker<'c> {
        TreeWalker::new(ControlResolver::new(self.catalog), self.options)
    }

    /// Body markup of a selection: each root's markup, blank ones skipped.
    pub fn generate_body(&self, nodes: &[DesignNode]) -> String {
        let walker = self.walker();
        let fragments: Vec<String> = nodes.iter().map(|node| walker.markup(node)).collect();
        join_markup(fragments.iter().map(String::as_str))
    }

    /// Complete, pretty-printed view for a selection.
    ///
    /// An empty selection yields a view with an empty content aggregation.
    pub fn generate_view(&self, nodes: &[DesignNode], config: &ViewConfiguration) -> String {
        assemble_view(&self.generate_body(nodes), config)
    }

    /// Visualization tree of a selection.
    ///
    /// Several roots are grouped under a synthetic `Root` node. Fails with
    /// [`ConvertError::EmptySelection`] when there is nothing to show.
    pub fn generate_tree_chart(&self, nodes: &[DesignNode]) -> Result<VisualizationNode> {
        let walker = self.walker();
        match nodes {
            [] => Err(ConvertError::EmptySelection),
            [single] => Ok(walker.chart(single)),
            many => Ok(VisualizationNode::new("Root")
                .with_attribute(NODE_TYPE_KEY, ROOT_WRAPPER)
                .with_children(many.iter().map(|node| walker.chart(node)).collect())),
        }
    }
}
