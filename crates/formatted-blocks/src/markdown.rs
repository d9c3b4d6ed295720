//! Markdown input support.
//!
//! Markdown is rendered to HTML with pulldown-cmark and then parsed with the
//! HTML adapter, so block elements arrive separated by `"\n"` text nodes.
//! Those are dropped by the converter.

use pulldown_cmark::{html, Options, Parser};

use crate::html::parse_html;
use crate::node::Node;

/// Render CommonMark to an HTML string
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Parse Markdown into a root Node
pub fn parse_markdown(markdown: &str) -> Node {
    parse_html(&markdown_to_html(markdown))
}
