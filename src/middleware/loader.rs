use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::anyhow;
use tracing::debug;

use super::Middleware;
use crate::error::Error;
use crate::registry::MiddlewareRegistry;

/// File stems that never name a middleware.
pub const DEFAULT_EXCLUSIONS: &[&str] = &["mod", "index"];

/// Load the middlewares named by the files of a flat directory.
///
/// The listing is non-recursive: subdirectories are ignored. Each remaining
/// file's stem (name without extension) is resolved against `registry`;
/// stems in `exclusions` are skipped. The result is keyed by stem and sorted
/// by name so repeated calls over an unchanged directory agree.
///
/// Fails with [`Error::DirectoryNotFound`] if `dir` does not exist and with
/// [`Error::ModuleLoad`] if a stem is not registered.
pub fn load_middlewares(
    dir: &Path,
    registry: &MiddlewareRegistry,
    exclusions: &[&str],
) -> Result<BTreeMap<String, Arc<dyn Middleware>>, Error> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| Error::ModuleLoad {
        path: dir.display().to_string(),
        cause: e.into(),
    })?;

    let mut loaded: BTreeMap<String, Arc<dyn Middleware>> = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::ModuleLoad {
            path: dir.display().to_string(),
            cause: e.into(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };
        if exclusions.contains(&stem.as_str()) {
            debug!(middleware = %stem, "Skipping excluded middleware file");
            continue;
        }
        let middleware = registry.get(&stem).ok_or_else(|| Error::ModuleLoad {
            path: path.display().to_string(),
            cause: anyhow!("middleware `{stem}` is not registered"),
        })?;
        loaded.insert(stem, middleware);
    }
    Ok(loaded)
}
