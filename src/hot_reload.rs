//! Live recompilation of a route directory.
//!
//! Watches the route tree for changes and re-runs the one-shot compilation
//! pipeline, handing the fresh table to a callback so the caller can swap it
//! into whatever target consumes it. If recompilation fails the previous
//! table stays in effect — a transiently broken tree never takes the
//! application down.
//!
//! Intended for development workflows, not production deployment.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use crate::compiler::{compile_routes, DescriptorLoader, RouteTable};

/// Watch a route directory and recompile the table when it changes.
///
/// The callback receives each successfully recompiled [`RouteTable`]. The
/// returned watcher must be kept alive for events to be delivered.
pub fn watch_routes<P, F>(
    route_dir: P,
    loader: Arc<dyn DescriptorLoader + Send + Sync>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(RouteTable) + Send + 'static,
{
    let dir: PathBuf = route_dir.as_ref().to_path_buf();
    let watch_dir = dir.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) {
                    match compile_routes(&watch_dir, loader.as_ref()) {
                        Ok(table) => {
                            info!(
                                routes_count = table.len(),
                                "hot-reload: applying route updates"
                            );
                            on_reload(table);
                        }
                        Err(e) => warn!(
                            error = %e,
                            "hot-reload: recompilation failed, keeping previous table"
                        ),
                    }
                }
            }
            Err(e) => warn!(error = %e, "watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::Recursive)?;
    Ok(watcher)
}
