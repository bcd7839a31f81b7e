//! # Compiler Module
//!
//! The compiler turns a filesystem directory tree of route definition files
//! into an ordered table of HTTP route registrations.
//!
//! ## Overview
//!
//! The pipeline runs once, synchronously, in four stages:
//!
//! 1. **Walk** — enumerate every descriptor file beneath the route root,
//!    relative to it, `/`-separated, extension stripped ([`walk_route_files`])
//! 2. **Load** — read each file's declarative descriptor through a pluggable
//!    [`DescriptorLoader`]
//! 3. **Derive** — convert each file's path segments plus its descriptor into
//!    a method and URL pattern ([`derive_entry`])
//! 4. **Assemble** — stable-sort the entries by descending priority into the
//!    final [`RouteTable`] ([`compile_routes`])
//!
//! Data flows one way through the stages; there is no feedback or
//! re-entrancy. Compilation either fully succeeds or fails on the first
//! error — a half-built table is never returned.
//!
//! ## Directory convention
//!
//! The first-level folders of the route root name the request method
//! (case-insensitive): `get`, `put`, `post`, `patch` or `delete`. Files
//! beneath them, at any depth, derive their URL pattern from their relative
//! path; a file named `index` contributes no path segment.
//!
//! ```text
//! routes/
//! ├── get/
//! │   ├── index.toml          → GET /
//! │   ├── catchall.toml       → GET *        (path = "*" override)
//! │   └── demo/
//! │       ├── index.toml      → GET /demo
//! │       └── byId/
//! │           └── id.toml     → GET /demo/byId/:id
//! └── post/
//!     └── index.toml          → POST /
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use plumber::compiler::{compile_routes, FileDescriptorLoader};
//! use plumber::registry::{HandlerRegistry, MiddlewareRegistry};
//!
//! let loader = FileDescriptorLoader::new(HandlerRegistry::new(), MiddlewareRegistry::new());
//! let table = compile_routes("routes".as_ref(), &loader)?;
//! for entry in &table {
//!     println!("{} {} (priority {})", entry.method, entry.path, entry.priority);
//! }
//! ```

mod build;
mod load;
mod types;
mod walk;

pub use build::{compile_routes, derive_entry, route_method};
pub use load::{DescriptorLoader, FileDescriptorLoader, StaticDescriptorLoader};
pub use types::{DescriptorDoc, RouteDescriptor, RouteEntry, RouteFile, RouteTable};
pub use walk::{walk_route_files, DESCRIPTOR_EXTENSIONS};
