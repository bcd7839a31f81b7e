#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create a temporary route directory populated with the given files.
///
/// Keys are root-relative paths (`/`-separated); parent directories are
/// created as needed. The tree is removed when the returned guard drops.
pub fn route_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp route dir");
    write_files(dir.path(), files);
    dir
}

/// Write additional files into an existing tree.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, contents).expect("write route file");
    }
}
