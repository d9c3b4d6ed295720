//! Handler and Seed types.

use formatted_blocks_core::{Body, Container, Destination, Format, FormattedNode, Span};
use indexmap::IndexMap;

use crate::node::Element;

/// Type alias for seed construction functions
pub type BuildFn = Box<dyn Fn(&Element) -> Seed + Send + Sync>;

/// A handler maps an element with a given tag to the seed of its output node.
///
/// Handlers only look at the element itself; children are converted by the
/// converter afterwards.
pub struct Handler {
    /// Exact tag name this handler is registered for
    pub tag: String,
    /// Seed construction function
    pub build: BuildFn,
}

impl Handler {
    /// Create a handler for a single tag
    pub fn for_tag<F>(tag: &str, build: F) -> Self
    where
        F: Fn(&Element) -> Seed + Send + Sync + 'static,
    {
        Self {
            tag: tag.to_string(),
            build: Box::new(build),
        }
    }

    /// Build the seed for an element
    pub fn seed(&self, element: &Element) -> Seed {
        (self.build)(element)
    }
}

/// Output shape a seed starts out as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    Span,
    Container,
}

/// Partially described output node, before children are incorporated.
///
/// A seed is consumed by exactly one of [`Seed::into_text`] or
/// [`Seed::into_spans`], which build the final immutable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub kind: SeedKind,
    pub tag: Option<String>,
    pub format: Option<Format>,
    pub destination: Option<Destination>,
}

impl Seed {
    /// Seed for an inline span
    pub fn span() -> Self {
        Self {
            kind: SeedKind::Span,
            tag: None,
            format: None,
            destination: None,
        }
    }

    /// Seed for a container carrying the given tag
    pub fn container(tag: impl Into<String>) -> Self {
        Self {
            kind: SeedKind::Container,
            tag: Some(tag.into()),
            format: None,
            destination: None,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Finish the seed with direct text, keeping its kind
    pub fn into_text(self, text: String) -> FormattedNode {
        match self.kind {
            SeedKind::Span => FormattedNode::Span(Span {
                text,
                format: self.format,
                destination: self.destination,
            }),
            SeedKind::Container => self.into_container(Body::Text(text)),
        }
    }

    /// Finish the seed with a span list. The result is always a container.
    pub fn into_spans(self, spans: Vec<FormattedNode>) -> FormattedNode {
        self.into_container(Body::Spans(spans))
    }

    fn into_container(self, body: Body) -> FormattedNode {
        FormattedNode::Container(Container {
            tag: self.tag,
            attributes: IndexMap::new(),
            format: self.format,
            destination: self.destination,
            body,
        })
    }
}
