//! Registration of compiled route tables onto router-like targets.
//!
//! The registrar is the last pipeline stage: it walks an already ordered
//! [`RouteTable`] and calls the target's method-named registration function
//! for each entry. It performs no sorting of its own — registration order is
//! exactly table order, which is what gives higher-priority routes precedence
//! in a first-match-wins router.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::compiler::{compile_routes, DescriptorLoader, RouteEntry, RouteTable};
use crate::error::Error;
use crate::handler::{DefaultHandler, Handler};
use crate::middleware::Middleware;

/// A router-like registration target: one registration function per
/// supported method name, each taking the route path, the middleware chain
/// and the terminal handler.
pub trait RouteTarget {
    fn get(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>);
    fn put(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>);
    fn post(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>);
    fn patch(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>);
    fn delete(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>);
}

fn register_entry<T: RouteTarget + ?Sized>(target: &mut T, entry: &RouteEntry) {
    let descriptor = &entry.descriptor;
    // The descriptor's own path wins even though derivation already applied
    // it; kept for parity with targets that re-read the descriptor.
    let path = descriptor
        .path
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(&entry.path);
    let middlewares = descriptor.middlewares.clone();
    let handler: Arc<dyn Handler> = match &descriptor.callback {
        Some(callback) => Arc::clone(callback),
        None => Arc::new(DefaultHandler::new(entry.path.clone())),
    };

    match entry.method.as_str() {
        "GET" => target.get(path, middlewares, handler),
        "PUT" => target.put(path, middlewares, handler),
        "POST" => target.post(path, middlewares, handler),
        "PATCH" => target.patch(path, middlewares, handler),
        "DELETE" => target.delete(path, middlewares, handler),
        other => warn!(method = other, path = %path, "No registration function for method"),
    }
}

/// Register every entry of an already ordered route table on `target`.
///
/// Entries without a callback get a [`DefaultHandler`] for their resolved
/// path. Returns the target for chaining.
pub fn apply_routes<'a, T: RouteTarget + ?Sized>(
    target: &'a mut T,
    table: &RouteTable,
) -> &'a mut T {
    for entry in table {
        register_entry(target, entry);
    }
    target
}

/// Compile the route directory at `root` and register the result on
/// `target`.
///
/// Convenience composition of [`compile_routes`] and [`apply_routes`];
/// returns the target for chaining.
pub fn load_and_apply_routes<'a, T: RouteTarget + ?Sized>(
    target: &'a mut T,
    root: &Path,
    loader: &dyn DescriptorLoader,
) -> Result<&'a mut T, Error> {
    let table = compile_routes(root, loader)?;
    info!(routes_count = table.len(), "Applying compiled routes");
    Ok(apply_routes(target, &table))
}
