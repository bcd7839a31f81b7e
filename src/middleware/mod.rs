//! Middleware support for compiled route tables.
//!
//! Route descriptors reference middlewares by name; names resolve against a
//! [`MiddlewareRegistry`](crate::registry::MiddlewareRegistry) at load time
//! and the resulting chain travels with each
//! [`RouteEntry`](crate::compiler::RouteEntry) to the registration target.
//! The sibling [`load_middlewares`] function lists a flat middleware
//! directory and resolves its file stems the same way.

mod core;
mod loader;
mod tracing;

pub use core::Middleware;
pub use loader::{load_middlewares, DEFAULT_EXCLUSIONS};
pub use tracing::TracingMiddleware;
