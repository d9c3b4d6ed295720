//! Built-in handlers for common HTML elements.

use formatted_blocks_core::{Destination, Format};

use super::{Handler, Seed};

/// Tags that produce containers carrying their own tag name
const CONTAINER_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li"];

/// Create all built-in handlers
pub fn default_handlers() -> Vec<Handler> {
    let mut handlers = vec![
        emphasis_handler(),
        strong_handler(),
        italics_handler(),
        bold_handler(),
        link_handler(),
    ];
    handlers.extend(CONTAINER_TAGS.iter().copied().map(container_handler));
    handlers
}

fn emphasis_handler() -> Handler {
    Handler::for_tag("em", |_| Seed::span().with_format(Format::italic()))
}

fn strong_handler() -> Handler {
    Handler::for_tag("strong", |_| Seed::span().with_format(Format::bold()))
}

// `<i>` sets `italics` while `<em>` sets `italic`. The split is likely unintended
// but both flags are kept as-is for compatibility.
fn italics_handler() -> Handler {
    Handler::for_tag("i", |_| Seed::span().with_format(Format::italics()))
}

fn bold_handler() -> Handler {
    Handler::for_tag("b", |_| Seed::span().with_format(Format::bold()))
}

fn link_handler() -> Handler {
    Handler::for_tag("a", |element| {
        let url = element.attr("href").unwrap_or_default();
        Seed::span().with_destination(Destination::web(url))
    })
}

fn container_handler(default_tag: &'static str) -> Handler {
    Handler::for_tag(default_tag, move |element| {
        let tag = element.tag.as_deref().unwrap_or(default_tag);
        Seed::container(tag)
    })
}
