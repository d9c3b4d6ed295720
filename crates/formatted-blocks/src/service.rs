//! FormattedBlocks - the main entry point for tree conversion.

use formatted_blocks_core::{Container, FormattedNode};

use crate::convert;
use crate::handlers::{Handler, Handlers};
use crate::node::Node;
use crate::options::ConvertOptions;
use crate::Result;

/// The main service for converting node trees to formatted text documents.
///
/// The handler table is configured while building the service and is only
/// read during conversion.
pub struct FormattedBlocks {
    options: ConvertOptions,
    handlers: Handlers,
}

impl FormattedBlocks {
    /// Create a new FormattedBlocks with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            handlers: Handlers::new(),
        }
    }

    /// Create a FormattedBlocks with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            handlers: Handlers::new(),
        }
    }

    /// Convert a node tree. `Ok(None)` means the node produced no output.
    pub fn convert(&self, node: &Node) -> Result<Option<FormattedNode>> {
        convert::convert(node, &self.handlers, &self.options)
    }

    /// Convert a node tree to a document root container
    pub fn convert_document(&self, node: &Node) -> Result<Container> {
        convert::convert_document(node, &self.handlers, &self.options)
    }

    /// Parse an HTML fragment and convert it to a document
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<Container> {
        self.convert_document(&crate::html::parse_html(html))
    }

    /// Render Markdown to HTML, then convert it to a document
    #[cfg(feature = "markdown")]
    pub fn convert_markdown(&self, markdown: &str) -> Result<Container> {
        self.convert_document(&crate::markdown::parse_markdown(markdown))
    }

    /// Add a custom handler for its tag
    pub fn add_handler(&mut self, handler: Handler) -> &mut Self {
        self.handlers.add(handler);
        self
    }

    /// Remove the custom handler for a tag
    pub fn remove_handler(&mut self, tag: &str) -> &mut Self {
        self.handlers.remove(tag);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

impl Default for FormattedBlocks {
    fn default() -> Self {
        Self::new()
    }
}
