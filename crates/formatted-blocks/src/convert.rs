//! Convert an input Node tree to a formatted text document
//!
//! Elements with a registered handler become spans or containers; elements
//! without one are passed through with their converted children. Text nodes
//! become spans. Any node whose text is exactly a single newline is dropped,
//! as are comments and other unknown node kinds.

use formatted_blocks_core::{Body, Container, FormattedNode, Span};

use crate::handlers::Handlers;
use crate::node::{Element, Node};
use crate::options::ConvertOptions;
use crate::{ConvertError, Result};

/// Convert a node tree to a formatted node.
///
/// Returns `Ok(None)` when the node itself converts to nothing (a newline
/// text node, a comment, an unknown kind).
pub fn convert(
    node: &Node,
    handlers: &Handlers,
    options: &ConvertOptions,
) -> Result<Option<FormattedNode>> {
    Converter { handlers, options }.convert_node(node, 0)
}

/// Convert a node tree to a document root container.
///
/// A non-root node is converted as the single child of an implicit root.
pub fn convert_document(
    node: &Node,
    handlers: &Handlers,
    options: &ConvertOptions,
) -> Result<Container> {
    let converter = Converter { handlers, options };
    match node {
        Node::Root(children) => Ok(Container::root(converter.convert_children(children, 0)?)),
        other => Ok(Container::root(
            converter.convert_node(other, 1)?.into_iter().collect(),
        )),
    }
}

struct Converter<'a> {
    handlers: &'a Handlers,
    options: &'a ConvertOptions,
}

impl Converter<'_> {
    fn convert_node(&self, node: &Node, depth: usize) -> Result<Option<FormattedNode>> {
        if depth > self.options.max_depth {
            tracing::debug!(depth, max = self.options.max_depth, "input tree too deep");
            return Err(ConvertError::TooDeep {
                depth,
                max: self.options.max_depth,
            });
        }

        let converted: Option<FormattedNode> = match node {
            Node::Root(children) => {
                Some(Container::root(self.convert_children(children, depth)?).into())
            }
            Node::Element(element) => Some(self.convert_element(element, depth)?),
            Node::Text(value) => Some(Span::new(value.as_deref().unwrap_or_default()).into()),
            Node::Comment(_) | Node::Other(_) => {
                tracing::trace!(kind = %node.kind(), "dropping node without output");
                None
            }
        };

        Ok(converted.filter(|node| !self.is_dropped(node)))
    }

    /// Convert children in order, skipping those that convert to nothing
    fn convert_children(&self, children: &[Node], depth: usize) -> Result<Vec<FormattedNode>> {
        let mut converted = Vec::with_capacity(children.len());
        for child in children {
            if let Some(node) = self.convert_node(child, depth + 1)? {
                converted.push(node);
            }
        }
        Ok(converted)
    }

    fn convert_element(&self, element: &Element, depth: usize) -> Result<FormattedNode> {
        let Some(handler) = self.handlers.for_element(element) else {
            return self.passthrough(element, depth);
        };

        let seed = handler.seed(element);

        // A single child collapses to its raw text; element children have none.
        if let [only] = element.children.as_slice() {
            let text = only.raw_value().unwrap_or_default().to_string();
            return Ok(seed.into_text(text));
        }

        Ok(seed.into_spans(self.convert_children(&element.children, depth)?))
    }

    fn passthrough(&self, element: &Element, depth: usize) -> Result<FormattedNode> {
        tracing::trace!(
            tag = element.tag.as_deref().unwrap_or_default(),
            "no handler registered, passing element through"
        );

        Ok(FormattedNode::Container(Container {
            tag: element.tag.clone(),
            attributes: element.attributes.clone(),
            format: None,
            destination: None,
            body: Body::Children(self.convert_children(&element.children, depth)?),
        }))
    }

    fn is_dropped(&self, node: &FormattedNode) -> bool {
        self.options.drop_newline_text && node.text() == Some("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_MAX_DEPTH;
    use formatted_blocks_core::{Destination, Format};
    use pretty_assertions::assert_eq;

    fn convert_default(node: &Node) -> Option<FormattedNode> {
        convert(node, Handlers::defaults(), &ConvertOptions::default()).unwrap()
    }

    fn p(text: &str) -> FormattedNode {
        Container::with_text(Some("p".to_string()), text).into()
    }

    #[test]
    fn test_root_with_children() {
        let root = Node::root().with_child(Node::element("p").with_child(Node::text("Hello world")));

        assert_eq!(
            convert_default(&root),
            Some(Container::root(vec![p("Hello world")]).into())
        );
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(
            convert_default(&Node::root()),
            Some(Container::root(Vec::new()).into())
        );
    }

    #[test]
    fn test_single_text_child_collapses() {
        let node = Node::element("p").with_child(Node::text("Hello world"));
        assert_eq!(convert_default(&node), Some(p("Hello world")));
    }

    #[test]
    fn test_single_element_child_collapses_to_empty_text() {
        let node = Node::element("p")
            .with_child(Node::element("strong").with_child(Node::text("bold")));
        assert_eq!(convert_default(&node), Some(p("")));
    }

    #[test]
    fn test_multiple_children_build_spans() {
        let node = Node::element("p")
            .with_child(Node::text("Hello "))
            .with_child(Node::element("strong").with_child(Node::text("world")));

        assert_eq!(
            convert_default(&node),
            Some(
                Container::with_spans(
                    Some("p".to_string()),
                    vec![
                        Span::new("Hello ").into(),
                        Span::new("world").with_format(Format::bold()).into(),
                    ],
                )
                .into()
            )
        );
    }

    #[test]
    fn test_zero_children_give_empty_spans() {
        let node = Node::element("p");
        assert_eq!(
            convert_default(&node),
            Some(Container::with_spans(Some("p".to_string()), Vec::new()).into())
        );
    }

    #[test]
    fn test_inline_element_with_many_children_is_promoted() {
        let node = Node::element("em")
            .with_child(Node::text("a"))
            .with_child(Node::element("b").with_child(Node::text("b")));

        let Some(FormattedNode::Container(container)) = convert_default(&node) else {
            panic!("expected container");
        };
        assert_eq!(container.tag, None);
        assert_eq!(container.format, Some(Format::italic()));
        assert_eq!(
            container.body,
            Body::Spans(vec![
                Span::new("a").into(),
                Span::new("b").with_format(Format::bold()).into(),
            ])
        );
    }

    #[test]
    fn test_link() {
        let node = Node::element_with_attrs("a", vec![("href", "https://example.com")])
            .with_child(Node::text("link text"));

        assert_eq!(
            convert_default(&node),
            Some(
                Span::new("link text")
                    .with_destination(Destination::web("https://example.com"))
                    .into()
            )
        );
    }

    #[test]
    fn test_passthrough_keeps_tag_and_attributes() {
        let node = Node::element_with_attrs("section", vec![("id", "intro"), ("class", "lead")])
            .with_child(Node::text("x"));

        let Some(FormattedNode::Container(container)) = convert_default(&node) else {
            panic!("expected container");
        };
        assert_eq!(container.tag.as_deref(), Some("section"));
        assert_eq!(container.attr("id"), Some("intro"));
        assert_eq!(
            container.attributes.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["id", "class"]
        );
        assert_eq!(container.children(), Some(&[FormattedNode::from(Span::new("x"))][..]));
    }

    #[test]
    fn test_uppercase_tag_passes_through() {
        let node = Node::element("H1").with_child(Node::text("x"));

        assert_eq!(
            convert_default(&node),
            Some(Container::with_children(Some("H1".to_string()), vec![Span::new("x").into()]).into())
        );
    }

    #[test]
    fn test_passthrough_without_tag() {
        let node = Node::Element(Element {
            tag: None,
            children: vec![Node::text("content")],
            ..Element::default()
        });

        assert_eq!(
            convert_default(&node),
            Some(Container::with_children(None, vec![Span::new("content").into()]).into())
        );
    }

    #[test]
    fn test_text_without_value() {
        assert_eq!(convert_default(&Node::Text(None)), Some(Span::new("").into()));
    }

    #[test]
    fn test_newline_text_dropped() {
        assert_eq!(convert_default(&Node::text("\n")), None);
    }

    #[test]
    fn test_collapsed_newline_element_dropped() {
        let node = Node::element("p").with_child(Node::text("\n"));
        assert_eq!(convert_default(&node), None);
    }

    #[test]
    fn test_other_whitespace_kept() {
        for value in [" ", "\t", "\n\n", " \n", "\t\r\n\u{c}\u{b}"] {
            assert_eq!(convert_default(&Node::text(value)), Some(Span::new(value).into()));
        }
    }

    #[test]
    fn test_comment_and_other_dropped() {
        assert_eq!(convert_default(&Node::Comment("note".to_string())), None);
        assert_eq!(convert_default(&Node::Other("doctype".to_string())), None);

        let node = Node::element("p")
            .with_child(Node::text("Valid text"))
            .with_child(Node::Other("unknown".to_string()))
            .with_child(Node::text("More valid text"));

        assert_eq!(
            convert_default(&node),
            Some(
                Container::with_spans(
                    Some("p".to_string()),
                    vec![Span::new("Valid text").into(), Span::new("More valid text").into()],
                )
                .into()
            )
        );
    }

    #[test]
    fn test_newline_filter_can_be_disabled() {
        let options = ConvertOptions {
            drop_newline_text: false,
            ..Default::default()
        };
        let result = convert(&Node::text("\n"), Handlers::defaults(), &options).unwrap();
        assert_eq!(result, Some(Span::new("\n").into()));
    }

    #[test]
    fn test_too_deep() {
        let mut node = Node::text("deep");
        for _ in 0..10 {
            node = Node::element("div").with_child(node);
        }

        let options = ConvertOptions {
            max_depth: 3,
            ..Default::default()
        };
        let err = convert(&node, Handlers::defaults(), &options).unwrap_err();
        assert!(matches!(err, ConvertError::TooDeep { depth: 4, max: 3 }));
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let node = Node::element("div").with_child(Node::element("div").with_child(Node::text("x")));
        let options = ConvertOptions {
            max_depth: 2,
            ..Default::default()
        };
        assert!(convert(&node, Handlers::defaults(), &options).is_ok());
    }

    fn nested_divs(levels: usize) -> Node {
        let mut node = Node::text("deep");
        for _ in 0..levels {
            node = Node::element("div").with_child(node);
        }
        node
    }

    /// Run `f` on a thread with the default 2 MiB test stack
    fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
        std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap()
    }

    #[test]
    fn test_default_max_depth_fits_small_stack() {
        let result = on_small_stack(|| {
            let node = nested_divs(DEFAULT_MAX_DEPTH);
            convert(&node, Handlers::defaults(), &ConvertOptions::default())
                .map(|converted| converted.map(|node| node.plain_text()))
        });
        assert_eq!(result.unwrap(), Some("deep".to_string()));
    }

    #[test]
    fn test_default_max_depth_exceeded() {
        let result = on_small_stack(|| {
            let node = nested_divs(DEFAULT_MAX_DEPTH + 1);
            convert(&node, Handlers::defaults(), &ConvertOptions::default())
        });
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ConvertError::TooDeep { depth, max } if depth == DEFAULT_MAX_DEPTH + 1 && max == DEFAULT_MAX_DEPTH
        ));
    }

    #[test]
    fn test_convert_document_wraps_non_root() {
        let node = Node::element("p").with_child(Node::text("hi"));
        let doc = convert_document(&node, Handlers::defaults(), &ConvertOptions::default()).unwrap();
        assert_eq!(doc, Container::root(vec![p("hi")]));
    }

    #[test]
    fn test_convert_document_dropped_node() {
        let doc = convert_document(&Node::text("\n"), Handlers::defaults(), &ConvertOptions::default())
            .unwrap();
        assert_eq!(doc, Container::root(Vec::new()));
    }
}
