use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use http::Method;
use tracing::{debug, info, warn};

use super::load::DescriptorLoader;
use super::types::{RouteDescriptor, RouteEntry, RouteFile, RouteTable};
use super::walk::walk_route_files;
use crate::error::Error;

/// Resolve a method folder name, ASCII-case-insensitively, to one of the
/// five supported request methods.
fn method_from_segment(segment: &str) -> Option<Method> {
    match segment.to_ascii_lowercase().as_str() {
        "get" => Some(Method::GET),
        "put" => Some(Method::PUT),
        "post" => Some(Method::POST),
        "patch" => Some(Method::PATCH),
        "delete" => Some(Method::DELETE),
        _ => None,
    }
}

/// The request method a discovered file registers under, taken from its
/// first path segment.
///
/// Fails with [`Error::UnsupportedMethod`] naming the offending segment.
pub fn route_method(file: &RouteFile) -> Result<Method, Error> {
    let segment = file.segments.first().map(String::as_str).unwrap_or("");
    method_from_segment(segment).ok_or_else(|| Error::UnsupportedMethod {
        segment: segment.to_string(),
        path: file.relative_path.clone(),
    })
}

/// Derive the registration entry for one discovered route file.
///
/// The method comes from the first segment. Every remaining segment equal to
/// `index` is removed, so an `index` file stands for "no extra segment" at
/// any depth. The rest derive the pattern:
///
/// - default mode: all segments but the last are literal components and the
///   last becomes a `:name` parameter named after the file itself
///   (`[demo, byId, id]` → `/demo/byId/:id`); with zero or one segment the
///   pattern is the segments joined verbatim (`[]` → `/`, `[demo]` → `/demo`)
/// - `parametrize_path`: every segment becomes a `:name` parameter
///   (`[demo, byId, id]` → `/:demo/:byId/:id`)
///
/// A non-empty descriptor `path` replaces the derived pattern
/// unconditionally, which admits patterns the convention cannot express
/// (e.g. a catch-all marker).
pub fn derive_entry(file: &RouteFile, descriptor: Arc<RouteDescriptor>) -> Result<RouteEntry, Error> {
    let method = route_method(file)?;

    let path_parts: Vec<&str> = file.segments[1..]
        .iter()
        .map(String::as_str)
        .filter(|s| *s != "index")
        .collect();

    let derived = if descriptor.parametrize_path {
        let params: Vec<String> = path_parts.iter().map(|s| format!(":{s}")).collect();
        format!("/{}", params.join("/"))
    } else if let Some((last, init)) = path_parts.split_last().filter(|(_, init)| !init.is_empty())
    {
        format!("/{}/:{last}", init.join("/"))
    } else {
        format!("/{}", path_parts.join("/"))
    };

    let path = match descriptor.path.as_deref() {
        Some(explicit) if !explicit.is_empty() => explicit.to_string(),
        _ => derived,
    };

    Ok(RouteEntry {
        method,
        path,
        priority: descriptor.priority,
        descriptor,
    })
}

/// Compile a route directory into an ordered registration table.
///
/// Walks `root`, loads each file's descriptor through `loader`, derives one
/// [`RouteEntry`] per file and sorts the result by descending priority. The
/// sort is stable, so entries with equal priority keep their discovery
/// order — registration order decides precedence in a first-match-wins
/// router, which is why more specific routes carry higher priorities than
/// general ones such as catch-alls.
///
/// Fails fast on the first error; no partial table is ever returned.
/// Compiling the same unchanged directory twice yields element-wise equal
/// tables.
pub fn compile_routes(root: &Path, loader: &dyn DescriptorLoader) -> Result<RouteTable, Error> {
    let files = walk_route_files(root)?;

    let mut entries = Vec::with_capacity(files.len());
    for file in &files {
        // Method folders are validated before any descriptor is loaded.
        route_method(file)?;
        let descriptor = Arc::new(loader.load(root, file)?);
        let entry = derive_entry(file, descriptor)?;
        debug!(
            method = %entry.method,
            path = %entry.path,
            priority = entry.priority,
            file = %file.relative_path,
            "Route derived"
        );
        entries.push(entry);
    }

    entries.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert((entry.method.clone(), entry.path.clone())) {
            warn!(
                method = %entry.method,
                path = %entry.path,
                "Duplicate route pattern; the first registration wins"
            );
        }
    }

    info!(
        routes_count = entries.len(),
        root = %root.display(),
        "Route table compiled"
    );
    Ok(entries)
}
