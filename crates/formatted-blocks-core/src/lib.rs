//! formatted-blocks-core - Formatted text document model
//!
//! This crate provides the output data structures produced by the
//! `formatted-blocks` converter. A document is a tree of containers, each
//! holding either plain text or a list of inline spans.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──▶ HTML ──▶ ┌──────────────┐
//!                       │  Node tree   │ ──convert──▶ FormattedNode tree
//! Any other producer ──▶│              │
//!                       └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use formatted_blocks_core::{Container, Format, FormattedNode, Span};
//!
//! let paragraph = Container::with_spans(
//!     Some("p".to_string()),
//!     vec![
//!         FormattedNode::Span(Span::new("Hello ")),
//!         FormattedNode::Span(Span::new("world").with_format(Format::bold())),
//!     ],
//! );
//!
//! let doc = FormattedNode::Container(Container::root(vec![paragraph.into()]));
//! assert_eq!(doc.plain_text(), "Hello world");
//! ```

mod ast;

pub use ast::{Body, Container, Destination, Format, FormattedNode, Span};
