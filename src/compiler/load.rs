use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context};
use tracing::warn;

use super::types::{DescriptorDoc, RouteDescriptor, RouteFile};
use crate::error::Error;
use crate::registry::{HandlerRegistry, MiddlewareRegistry};

/// Pluggable source of route descriptors.
///
/// The compiler only ever calls `load` once per discovered file; implementors
/// do not need to cache. Substituting a [`StaticDescriptorLoader`] makes the
/// derivation pipeline testable without touching the filesystem contents.
pub trait DescriptorLoader {
    /// Load the descriptor declared by one discovered route file.
    fn load(&self, root: &Path, file: &RouteFile) -> Result<RouteDescriptor, Error>;
}

/// Loads descriptors from the route files themselves.
///
/// Documents may be TOML, YAML, or JSON, dispatched on the file extension.
/// Handler and middleware names resolve against the registries given at
/// construction; an unknown name fails the load unless the loader was made
/// [`lenient`](Self::lenient).
pub struct FileDescriptorLoader {
    handlers: HandlerRegistry,
    middlewares: MiddlewareRegistry,
    lenient: bool,
}

impl FileDescriptorLoader {
    /// Create a strict loader over the given registries.
    #[must_use]
    pub fn new(handlers: HandlerRegistry, middlewares: MiddlewareRegistry) -> Self {
        FileDescriptorLoader {
            handlers,
            middlewares,
            lenient: false,
        }
    }

    /// Switch to lenient name resolution: an unresolved handler falls back to
    /// the default handler and unresolved middlewares are skipped with a
    /// warning. Used by the CLI, which compiles trees without the
    /// application's registries.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    fn parse_doc(path: &Path, contents: &str) -> anyhow::Result<DescriptorDoc> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(contents).context("invalid TOML descriptor"),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(contents).context("invalid YAML descriptor")
            }
            Some("json") => serde_json::from_str(contents).context("invalid JSON descriptor"),
            other => Err(anyhow!("unrecognized descriptor extension {other:?}")),
        }
    }

    fn resolve(&self, file: &RouteFile, doc: DescriptorDoc) -> Result<RouteDescriptor, Error> {
        let mut middlewares = Vec::with_capacity(doc.middlewares.len());
        for name in &doc.middlewares {
            match self.middlewares.get(name) {
                Some(mw) => middlewares.push(mw),
                None if self.lenient => {
                    warn!(
                        middleware = %name,
                        path = %file.relative_path,
                        "Skipping unregistered middleware"
                    );
                }
                None => {
                    return Err(Error::ModuleLoad {
                        path: file.relative_path.clone(),
                        cause: anyhow!("middleware `{name}` is not registered"),
                    })
                }
            }
        }

        let callback = match &doc.handler {
            Some(name) => match self.handlers.get(name) {
                Some(handler) => Some(handler),
                None if self.lenient => {
                    warn!(
                        handler = %name,
                        path = %file.relative_path,
                        "Handler not registered, falling back to default handler"
                    );
                    None
                }
                None => {
                    return Err(Error::ModuleLoad {
                        path: file.relative_path.clone(),
                        cause: anyhow!("handler `{name}` is not registered"),
                    })
                }
            },
            None => None,
        };

        Ok(RouteDescriptor {
            middlewares,
            parametrize_path: doc.parametrize_path,
            path: doc.path,
            priority: doc.priority,
            callback,
        })
    }
}

impl DescriptorLoader for FileDescriptorLoader {
    fn load(&self, _root: &Path, file: &RouteFile) -> Result<RouteDescriptor, Error> {
        let contents = std::fs::read_to_string(&file.source).map_err(|e| Error::ModuleLoad {
            path: file.relative_path.clone(),
            cause: e.into(),
        })?;
        let doc = Self::parse_doc(&file.source, &contents).map_err(|cause| Error::ModuleLoad {
            path: file.relative_path.clone(),
            cause,
        })?;
        self.resolve(file, doc)
    }
}

/// In-memory descriptor source keyed by root-relative path.
///
/// Paths without an explicit descriptor load as [`RouteDescriptor::default`],
/// so a test tree of empty files compiles with all-default routes.
#[derive(Clone, Default)]
pub struct StaticDescriptorLoader {
    descriptors: HashMap<String, RouteDescriptor>,
}

impl StaticDescriptorLoader {
    /// Create an empty static loader (every path loads as the default
    /// descriptor).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a descriptor with a root-relative path (extension stripped,
    /// `/`-separated, e.g. `get/demo/index`).
    pub fn insert(&mut self, relative_path: impl Into<String>, descriptor: RouteDescriptor) {
        self.descriptors.insert(relative_path.into(), descriptor);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, relative_path: impl Into<String>, descriptor: RouteDescriptor) -> Self {
        self.insert(relative_path, descriptor);
        self
    }
}

impl DescriptorLoader for StaticDescriptorLoader {
    fn load(&self, _root: &Path, file: &RouteFile) -> Result<RouteDescriptor, Error> {
        Ok(self
            .descriptors
            .get(&file.relative_path)
            .cloned()
            .unwrap_or_default())
    }
}
