//! # formatted-blocks
//!
//! Convert HTML-like element trees to formatted text documents.
//!
//! The input is a generic [`Node`] tree (root, element and text nodes). Each
//! element is looked up in a handler table that decides whether it becomes an
//! inline span (`em`, `strong`, `i`, `b`, `a`) or a container (`p`, `h1`-`h6`,
//! `ul`, `ol`, `li`). Elements without a handler are passed through with their
//! converted children.
//!
//! ## Design
//!
//! The converter does no parsing of its own. Any producer can build a
//! [`Node`] tree; the optional `html` and `markdown` features provide
//! adapters for HTML fragments (via scraper) and CommonMark (via
//! pulldown-cmark).
//!
//! Input trees must be acyclic. Nesting deeper than
//! [`ConvertOptions::max_depth`] fails with [`ConvertError::TooDeep`].
//!
//! ## Example
//!
//! ```rust
//! use formatted_blocks::{FormattedBlocks, Node};
//!
//! let service = FormattedBlocks::new();
//!
//! let p = Node::element("p")
//!     .with_child(Node::text("Hello "))
//!     .with_child(Node::element("strong").with_child(Node::text("world")));
//!
//! let result = service.convert(&p).unwrap().unwrap();
//! assert_eq!(result.plain_text(), "Hello world");
//! ```

mod convert;
pub mod handlers;
#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod node;
mod options;
mod service;

pub use formatted_blocks_core::{Body, Container, Destination, Format, FormattedNode, Span};
pub use handlers::{Handler, Handlers, Seed, SeedKind};
#[cfg(feature = "html")]
pub use html::parse_html;
#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use node::{Element, Node, NodeKind};
pub use options::{ConvertOptions, DEFAULT_MAX_DEPTH};
pub use service::FormattedBlocks;

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input nested too deeply: depth {depth} exceeds maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert a node tree using the built-in handlers and default options
pub fn convert(node: &Node) -> Result<Option<FormattedNode>> {
    convert::convert(node, Handlers::defaults(), &ConvertOptions::default())
}

/// Convert a node tree to a document root using the built-in handlers and
/// default options
pub fn convert_document(node: &Node) -> Result<Container> {
    convert::convert_document(node, Handlers::defaults(), &ConvertOptions::default())
}
