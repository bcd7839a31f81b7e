use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use http::Method;
use serde::Deserialize;

use crate::handler::Handler;
use crate::middleware::Middleware;

/// A route definition file discovered beneath the route root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFile {
    /// Path relative to the route root, `/`-separated, extension stripped.
    /// The first segment is the method folder.
    pub relative_path: String,
    /// The components of `relative_path`. Never empty.
    pub segments: Vec<String>,
    /// Absolute path of the descriptor document on disk.
    pub source: PathBuf,
}

/// Raw on-disk form of a route descriptor, before handler and middleware
/// names are resolved against the registries.
///
/// Accepts TOML, YAML, or JSON documents; the camelCase aliases keep trees
/// written for the JavaScript convention loadable unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescriptorDoc {
    /// Name of the terminal handler; absent means the default handler.
    pub handler: Option<String>,
    /// Names of middlewares inserted before the handler, in order.
    pub middlewares: Vec<String>,
    /// Selects the path derivation mode.
    #[serde(alias = "parametrizePath")]
    pub parametrize_path: bool,
    /// Non-empty value overrides the derived pattern entirely.
    pub path: Option<String>,
    /// Registration ordering, descending.
    pub priority: i32,
}

/// The loaded contents of one route file. Read-only after load; each
/// descriptor is owned by exactly one [`RouteFile`] and shared by reference
/// into its [`RouteEntry`].
#[derive(Clone, Default)]
pub struct RouteDescriptor {
    /// Middlewares inserted before the callback in the registered chain.
    pub middlewares: Vec<Arc<dyn Middleware>>,
    /// Selects the path derivation mode (see the compiler docs).
    pub parametrize_path: bool,
    /// Non-empty value overrides the derived pattern entirely.
    pub path: Option<String>,
    /// Registration ordering, descending. Defaults to 0.
    pub priority: i32,
    /// Terminal request handler; absent means the default handler is
    /// substituted at registration time.
    pub callback: Option<Arc<dyn Handler>>,
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("middlewares", &self.middlewares.len())
            .field("parametrize_path", &self.parametrize_path)
            .field("path", &self.path)
            .field("priority", &self.priority)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// One compiled registration: the output of path derivation for a single
/// route file. Immutable after creation.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// HTTP method, one of GET/PUT/POST/PATCH/DELETE.
    pub method: Method,
    /// Final URL pattern: literal segments, `:name` parameters, or an
    /// explicit override.
    pub path: String,
    /// The owning descriptor (shared reference, not copied).
    pub descriptor: Arc<RouteDescriptor>,
    /// Resolved registration priority.
    pub priority: i32,
}

/// The ordered registration table: descending priority, ties in discovery
/// order. Built once per compilation run and not mutated after.
pub type RouteTable = Vec<RouteEntry>;
