use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while compiling a route directory.
///
/// Every variant is fatal to the compilation call: the pipeline aborts on the
/// first error and never exposes a partially built route table.
#[derive(Debug, Error)]
pub enum Error {
    /// The route root (or a middleware directory) does not exist.
    #[error("could not find directory `{}` containing routes", .path.display())]
    DirectoryNotFound {
        /// The directory that was expected to exist
        path: PathBuf,
    },

    /// A top-level segment of a route file is not one of the five
    /// recognized request methods.
    #[error("unknown or unsupported request method `{segment}` in `{path}`")]
    UnsupportedMethod {
        /// The offending method folder name
        segment: String,
        /// Root-relative path of the route file
        path: String,
    },

    /// A route descriptor could not be loaded: unreadable, unparsable, or
    /// referencing an unregistered handler or middleware.
    #[error("failed to load route descriptor `{path}`: {cause:#}")]
    ModuleLoad {
        /// Root-relative path of the failing route file
        path: String,
        /// Underlying cause (I/O, parse, or name resolution)
        cause: anyhow::Error,
    },
}
