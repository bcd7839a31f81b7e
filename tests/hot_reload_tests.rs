#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use plumber::hot_reload::watch_routes;
use plumber::{DescriptorLoader, FileDescriptorLoader, HandlerRegistry, MiddlewareRegistry};

mod common;
use common::{route_tree, write_files};

#[test]
fn test_watch_recompiles_on_new_route_file() {
    let dir = route_tree(&[("get/index.toml", "")]);

    let loader: Arc<dyn DescriptorLoader + Send + Sync> = Arc::new(
        FileDescriptorLoader::new(HandlerRegistry::new(), MiddlewareRegistry::new()).lenient(),
    );

    let (tx, rx) = mpsc::channel();
    let _watcher = watch_routes(dir.path(), loader, move |table| {
        let _ = tx.send(table.len());
    })
    .expect("start watcher");

    // let the watcher settle before mutating the tree
    thread::sleep(Duration::from_millis(250));
    write_files(dir.path(), &[("get/demo.toml", "")]);

    // several events may fire for one write; wait until a reload sees both files
    let deadline = std::time::Instant::now() + Duration::from_secs(10);
    loop {
        let remaining = deadline
            .checked_duration_since(std::time::Instant::now())
            .expect("timed out waiting for reload");
        let count = rx.recv_timeout(remaining).expect("reload event");
        if count == 2 {
            break;
        }
    }
}
