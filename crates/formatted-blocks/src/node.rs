//! Generic HTML-like input tree.
//!
//! Producers (an HTML parser, a Markdown renderer, a hand-built tree) convert
//! their output to this structure. Each variant only carries the fields that
//! are meaningful for its kind; missing data is represented as `None` or an
//! empty collection and never treated as an error.

use std::fmt;

use indexmap::IndexMap;

/// Kind of an input node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element,
    Text,
    Comment,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Root => "root",
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A node of the input tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Document root
    Root(Vec<Node>),

    /// Element with a tag, attributes and children
    Element(Element),

    /// Text node; the value may be absent
    Text(Option<String>),

    /// Comment node
    Comment(String),

    /// Any other node kind, identified by name (e.g. "doctype")
    Other(String),
}

/// An element node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name as supplied by the producer; may be absent
    pub tag: Option<String>,

    /// Attributes in source order
    pub attributes: IndexMap<String, String>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty document root
    pub fn root() -> Self {
        Node::Root(Vec::new())
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(Some(content.to_string()))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::Other(_) => NodeKind::Other,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Raw value of a text node. Other kinds have no value.
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            Node::Text(value) => value.as_deref(),
            _ => None,
        }
    }

    /// Child nodes; empty for kinds that cannot have children
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children) => children,
            Node::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Add a child node. Has no effect on text, comment and other nodes.
    pub fn add_child(&mut self, child: Node) {
        match self {
            Node::Root(children) => children.push(child),
            Node::Element(element) => element.children.push(child),
            _ => {}
        }
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(value) => value.clone().unwrap_or_default(),
            _ => self
                .children()
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag: Some(tag_name.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
