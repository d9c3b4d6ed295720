//! Formatted text document tree
//!
//! This module defines the output nodes produced by the converter. The tree
//! only ever has two node shapes: a [`Container`] grouping text, spans or
//! child nodes, and an inline [`Span`] carrying text plus optional formatting
//! and link metadata.

use indexmap::IndexMap;

/// A node of the formatted text document
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedNode {
    /// Block-level grouping
    Container(Container),

    /// Inline leaf with optional formatting
    Span(Span),
}

impl FormattedNode {
    /// Discriminator name of this node shape
    pub fn discriminator(&self) -> &'static str {
        match self {
            FormattedNode::Container(_) => "container",
            FormattedNode::Span(_) => "span",
        }
    }

    /// Text held directly by this node, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            FormattedNode::Container(container) => container.text(),
            FormattedNode::Span(span) => Some(&span.text),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, FormattedNode::Container(_))
    }

    pub fn is_span(&self) -> bool {
        matches!(self, FormattedNode::Span(_))
    }

    pub fn format(&self) -> Option<&Format> {
        match self {
            FormattedNode::Container(container) => container.format.as_ref(),
            FormattedNode::Span(span) => span.format.as_ref(),
        }
    }

    pub fn destination(&self) -> Option<&Destination> {
        match self {
            FormattedNode::Container(container) => container.destination.as_ref(),
            FormattedNode::Span(span) => span.destination.as_ref(),
        }
    }

    /// Concatenated text of this node and all its descendants
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            FormattedNode::Span(span) => out.push_str(&span.text),
            FormattedNode::Container(container) => match &container.body {
                Body::Text(text) => out.push_str(text),
                Body::Spans(nodes) | Body::Children(nodes) => {
                    for node in nodes {
                        node.push_plain_text(out);
                    }
                }
            },
        }
    }
}

impl From<Container> for FormattedNode {
    fn from(container: Container) -> Self {
        FormattedNode::Container(container)
    }
}

impl From<Span> for FormattedNode {
    fn from(span: Span) -> Self {
        FormattedNode::Span(span)
    }
}

/// Content of a container.
///
/// Exactly one kind of content is held at a time, so a container can never
/// carry both direct text and a span list.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Direct text, produced when an element collapses to its single child
    Text(String),

    /// Ordered inline content of a paragraph-like element
    Spans(Vec<FormattedNode>),

    /// Nested nodes of the document root or of a passthrough element
    Children(Vec<FormattedNode>),
}

/// A block-level grouping node
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Source tag name (e.g. "p", "h1"); `None` for the document root
    pub tag: Option<String>,

    /// Source attributes copied by passthrough conversion
    pub attributes: IndexMap<String, String>,

    /// Formatting kept from an inline element that expanded into spans
    pub format: Option<Format>,

    /// Link target kept from an inline element that expanded into spans
    pub destination: Option<Destination>,

    pub body: Body,
}

impl Container {
    /// Create the document root
    pub fn root(children: Vec<FormattedNode>) -> Self {
        Self::with_body(None, Body::Children(children))
    }

    pub fn with_text(tag: Option<String>, text: impl Into<String>) -> Self {
        Self::with_body(tag, Body::Text(text.into()))
    }

    pub fn with_spans(tag: Option<String>, spans: Vec<FormattedNode>) -> Self {
        Self::with_body(tag, Body::Spans(spans))
    }

    pub fn with_children(tag: Option<String>, children: Vec<FormattedNode>) -> Self {
        Self::with_body(tag, Body::Children(children))
    }

    fn with_body(tag: Option<String>, body: Body) -> Self {
        Self {
            tag,
            attributes: IndexMap::new(),
            format: None,
            destination: None,
            body,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn spans(&self) -> Option<&[FormattedNode]> {
        match &self.body {
            Body::Spans(spans) => Some(spans),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[FormattedNode]> {
        match &self.body {
            Body::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Get a copied attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// An inline text span
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    /// Span text, possibly empty
    pub text: String,
    pub format: Option<Format>,
    pub destination: Option<Destination>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
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
}

/// Named formatting toggles of a span.
///
/// `italic` (set by `<em>`) and `italics` (set by `<i>`) are separate flags
/// and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Format {
    pub bold: bool,
    pub italic: bool,
    pub italics: bool,
    pub link: bool,
}

impl Format {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn italics() -> Self {
        Self {
            italics: true,
            ..Self::default()
        }
    }

    /// Check if no toggle is set
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.italics || self.link)
    }
}

/// Link target of a span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Web URL (may be empty when the source link had no href)
    Web { url: String },
}

impl Destination {
    pub fn web(url: impl Into<String>) -> Self {
        Destination::Web { url: url.into() }
    }

    /// Kind name of this destination
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Web { .. } => "web",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Destination::Web { url } => url,
        }
    }
}
