use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::types::RouteFile;
use crate::error::Error;

/// File extensions recognized as route descriptor documents.
pub const DESCRIPTOR_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Enumerate every route descriptor file beneath `root`.
///
/// Paths are returned relative to `root` with `/` separators on every
/// platform and the descriptor extension stripped. Files without a
/// recognized extension cannot be descriptors and are skipped. Entries are
/// sorted by file name at each level so discovery order — and therefore tie
/// order after the priority sort — is identical across runs and platforms.
///
/// Fails with [`Error::DirectoryNotFound`] if `root` does not exist.
pub fn walk_route_files(root: &Path) -> Result<Vec<RouteFile>, Error> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::ModuleLoad {
            path: root.display().to_string(),
            cause: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) if DESCRIPTOR_EXTENSIONS.contains(&e) => e,
            _ => {
                debug!(path = %path.display(), "Skipping non-descriptor file");
                continue;
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut segments: Vec<String> = relative
            .iter()
            .map(|c| c.to_string_lossy().into_owned())
            .collect();
        if let Some(last) = segments.last_mut() {
            last.truncate(last.len() - ext.len() - 1);
        }
        let relative_path = segments.join("/");

        files.push(RouteFile {
            relative_path,
            segments,
            source: path.to_path_buf(),
        });
    }
    Ok(files)
}
