//! Handler table mapping element tags to output seeds.

mod defaults;
mod handler;

pub use defaults::default_handlers;
pub use handler::{BuildFn, Handler, Seed, SeedKind};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::Element;

/// Process-wide default table, built once and never mutated
static DEFAULT_HANDLERS: Lazy<Handlers> = Lazy::new(Handlers::new);

/// Collection of handlers for conversion, keyed by exact tag name
pub struct Handlers {
    /// Custom handlers added by the user (checked first)
    custom_handlers: IndexMap<String, Handler>,
    /// Built-in handlers
    default_handlers: IndexMap<String, Handler>,
}

impl Handlers {
    /// Create a new Handlers instance with the built-in handlers
    pub fn new() -> Self {
        Self {
            custom_handlers: IndexMap::new(),
            default_handlers: default_handlers()
                .into_iter()
                .map(|handler| (handler.tag.clone(), handler))
                .collect(),
        }
    }

    /// Shared default table
    pub fn defaults() -> &'static Handlers {
        &DEFAULT_HANDLERS
    }

    /// Add a custom handler, replacing any custom handler for the same tag
    pub fn add(&mut self, handler: Handler) {
        self.custom_handlers.insert(handler.tag.clone(), handler);
    }

    /// Remove the custom handler for a tag. Built-in handlers stay in place.
    pub fn remove(&mut self, tag: &str) -> Option<Handler> {
        self.custom_handlers.shift_remove(tag)
    }

    /// Find the handler for a tag. Matching is exact, so `H1` is not `h1`.
    pub fn for_tag(&self, tag: &str) -> Option<&Handler> {
        self.custom_handlers
            .get(tag)
            .or_else(|| self.default_handlers.get(tag))
    }

    /// Find the handler for an element.
    ///
    /// Elements without a tag never match; they take the passthrough path.
    pub fn for_element(&self, element: &Element) -> Option<&Handler> {
        self.for_tag(element.tag.as_deref()?)
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}
