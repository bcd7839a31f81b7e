//! Name-to-function registries backing descriptor resolution.
//!
//! Descriptor files reference handlers and middlewares by name; applications
//! register the actual functions here before compiling a route directory.
//! Registering a name twice replaces the previous entry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::handler::{Handler, Request, Response};
use crate::middleware::Middleware;

/// Registry of terminal request handlers keyed by name.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under the given name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn Handler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            warn!(handler_name = %name, "Replaced existing handler registration");
        }
    }

    /// Register a plain function or closure as a handler.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.register(name, Arc::new(f));
    }

    /// Look up a handler by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(name).cloned()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Registry of middlewares keyed by name.
#[derive(Clone, Default)]
pub struct MiddlewareRegistry {
    middlewares: HashMap<String, Arc<dyn Middleware>>,
}

impl MiddlewareRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a middleware under the given name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, middleware: Arc<dyn Middleware>) {
        let name = name.into();
        if self.middlewares.insert(name.clone(), middleware).is_some() {
            warn!(middleware_name = %name, "Replaced existing middleware registration");
        }
    }

    /// Look up a middleware by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Middleware>> {
        self.middlewares.get(name).cloned()
    }

    /// Number of registered middlewares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}
