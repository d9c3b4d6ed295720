//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts them to the
//! Node structure consumed by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node};

/// Parse an HTML fragment into a root Node.
///
/// The children of the returned root are the top-level nodes of the
/// fragment. Whitespace text between elements is kept as-is.
///
/// # Example
///
/// ```rust
/// use formatted_blocks::{parse_html, FormattedBlocks};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = FormattedBlocks::new();
/// let doc = service.convert_document(&node).unwrap();
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    Node::Root(scraper_children(document.root_element()))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let value = element.value();

    let mut node = Element::new(value.name());
    for (name, attr_value) in value.attrs() {
        node.set_attr(name, attr_value);
    }
    node.children = scraper_children(element);

    Node::Element(node)
}

fn scraper_children(element: ElementRef) -> Vec<Node> {
    let mut children = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => children.push(Node::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(scraper_to_node(child_element));
                }
            }
            ScraperNode::Comment(comment) => {
                children.push(Node::Comment(comment.comment.to_string()));
            }
            ScraperNode::Doctype(_) => children.push(Node::Other("doctype".to_string())),
            ScraperNode::ProcessingInstruction(_) => {
                children.push(Node::Other("processing-instruction".to_string()));
            }
            _ => {}
        }
    }

    children
}
