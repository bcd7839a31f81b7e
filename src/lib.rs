//! # Plumber
//!
//! **Plumber** compiles a filesystem directory tree of route definition files
//! into an ordered table of HTTP route registrations — method, URL pattern,
//! middleware chain, handler, priority — ready to attach to any router with
//! first-match-wins semantics. Routes are colocated by file path instead of
//! declared imperatively.
//!
//! ## Overview
//!
//! The first-level folders of a route directory name the request method;
//! files beneath them derive their URL pattern from their relative path and
//! the options declared inside them. Compilation runs once at application
//! start, synchronously, and either produces a complete table or fails fast
//! with the offending path.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`compiler`]** - directory walking, descriptor loading, path
//!   derivation and table assembly (the core pipeline)
//! - **[`registrar`]** - applying an ordered table to a [`RouteTarget`]
//! - **[`registry`]** - name → function maps for handlers and middlewares
//! - **[`handler`]** - the request/response/handler model carried by tables
//! - **[`middleware`]** - the middleware trait and the flat directory loader
//! - **[`hot_reload`]** - recompilation on route directory changes
//! - **[`runtime_config`]** - environment variable configuration
//! - **[`cli`]** - the `plumber` inspection binary
//!
//! Data flows one way: walker → loader → derivation → assembler → registrar.
//! There is no feedback or re-entrancy, and nothing here performs request
//! matching — the compiler only *produces* the data a matching router
//! consumes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plumber::{
//!     load_and_apply_routes, FileDescriptorLoader, HandlerRegistry, MiddlewareRegistry,
//!     Response,
//! };
//! use serde_json::json;
//! use std::path::Path;
//!
//! # struct MyRouter;
//! # impl plumber::RouteTarget for MyRouter {
//! #     fn get(&mut self, _: &str, _: Vec<std::sync::Arc<dyn plumber::Middleware>>, _: std::sync::Arc<dyn plumber::Handler>) {}
//! #     fn put(&mut self, _: &str, _: Vec<std::sync::Arc<dyn plumber::Middleware>>, _: std::sync::Arc<dyn plumber::Handler>) {}
//! #     fn post(&mut self, _: &str, _: Vec<std::sync::Arc<dyn plumber::Middleware>>, _: std::sync::Arc<dyn plumber::Handler>) {}
//! #     fn patch(&mut self, _: &str, _: Vec<std::sync::Arc<dyn plumber::Middleware>>, _: std::sync::Arc<dyn plumber::Handler>) {}
//! #     fn delete(&mut self, _: &str, _: Vec<std::sync::Arc<dyn plumber::Middleware>>, _: std::sync::Arc<dyn plumber::Handler>) {}
//! # }
//! let mut handlers = HandlerRegistry::new();
//! handlers.register_fn("list_demos", |_req| Response::json(200, json!({ "demos": [] })));
//!
//! let loader = FileDescriptorLoader::new(handlers, MiddlewareRegistry::new());
//! let mut router = MyRouter;
//! load_and_apply_routes(&mut router, Path::new("routes"), &loader)?;
//! # Ok::<(), plumber::Error>(())
//! ```
//!
//! ## Route descriptor files
//!
//! Each route file is a declarative TOML, YAML or JSON document:
//!
//! ```toml
//! # routes/get/demo/byId/id.toml  →  GET /:demo/:byId/:id
//! handler = "get_by_id"
//! middlewares = ["auth"]
//! parametrize_path = true
//! priority = 0
//! ```
//!
//! All fields are optional; a file without a `handler` registers the default
//! handler, which acknowledges requests with
//! `{ "message": "Default for <path>" }`.

pub mod cli;
pub mod compiler;
pub mod error;
pub mod handler;
pub mod hot_reload;
pub mod middleware;
pub mod registrar;
pub mod registry;
pub mod runtime_config;

pub use compiler::{
    compile_routes, derive_entry, walk_route_files, DescriptorDoc, DescriptorLoader,
    FileDescriptorLoader, RouteDescriptor, RouteEntry, RouteFile, RouteTable,
    StaticDescriptorLoader,
};
pub use error::Error;
pub use handler::{DefaultHandler, Handler, Request, Response};
pub use middleware::{load_middlewares, Middleware, TracingMiddleware};
pub use registrar::{apply_routes, load_and_apply_routes, RouteTarget};
pub use registry::{HandlerRegistry, MiddlewareRegistry};
