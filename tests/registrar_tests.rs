#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use http::Method;
use plumber::{
    apply_routes, compile_routes, load_and_apply_routes, FileDescriptorLoader, Handler,
    HandlerRegistry, Middleware, MiddlewareRegistry, Request, Response, RouteTarget,
};
use serde_json::json;

mod common;
use common::route_tree;

/// Target that records every registration call in order.
#[derive(Default)]
struct RecordingRouter {
    registered: Vec<Registration>,
}

struct Registration {
    method: &'static str,
    path: String,
    middleware_count: usize,
    handler: Arc<dyn Handler>,
}

impl RecordingRouter {
    fn record(
        &mut self,
        method: &'static str,
        path: &str,
        middlewares: Vec<Arc<dyn Middleware>>,
        handler: Arc<dyn Handler>,
    ) {
        self.registered.push(Registration {
            method,
            path: path.to_string(),
            middleware_count: middlewares.len(),
            handler,
        });
    }
}

impl RouteTarget for RecordingRouter {
    fn get(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>) {
        self.record("get", path, middlewares, handler);
    }
    fn put(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>) {
        self.record("put", path, middlewares, handler);
    }
    fn post(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>) {
        self.record("post", path, middlewares, handler);
    }
    fn patch(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>) {
        self.record("patch", path, middlewares, handler);
    }
    fn delete(&mut self, path: &str, middlewares: Vec<Arc<dyn Middleware>>, handler: Arc<dyn Handler>) {
        self.record("delete", path, middlewares, handler);
    }
}

struct NoopMiddleware;

impl Middleware for NoopMiddleware {}

fn empty_loader() -> FileDescriptorLoader {
    FileDescriptorLoader::new(HandlerRegistry::new(), MiddlewareRegistry::new())
}

#[test]
fn test_registration_follows_table_order() {
    let dir = route_tree(&[
        ("get/catchall.toml", "path = \"*\"\npriority = -2\n"),
        ("get/index.toml", ""),
        ("post/index.toml", "priority = 5\n"),
    ]);

    let table = compile_routes(dir.path(), &empty_loader()).unwrap();
    let mut router = RecordingRouter::default();
    apply_routes(&mut router, &table);

    let calls: Vec<(&str, &str)> = router
        .registered
        .iter()
        .map(|r| (r.method, r.path.as_str()))
        .collect();
    // descending priority: 5, 0, -2
    assert_eq!(calls, vec![("post", "/"), ("get", "/"), ("get", "*")]);
}

#[test]
fn test_default_handler_substituted_when_callback_absent() {
    let dir = route_tree(&[("get/demo/index.toml", "")]);
    let table = compile_routes(dir.path(), &empty_loader()).unwrap();

    let mut router = RecordingRouter::default();
    apply_routes(&mut router, &table);

    let registration = &router.registered[0];
    let res = registration
        .handler
        .handle(&Request::new(Method::GET, "/demo"));
    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({ "message": "Default for /demo" }));
}

#[test]
fn test_declared_callback_is_registered() {
    let mut handlers = HandlerRegistry::new();
    handlers.register_fn("list_demos", |_req| {
        Response::json(200, json!({ "code": 200, "message": "DEMO" }))
    });
    let loader = FileDescriptorLoader::new(handlers, MiddlewareRegistry::new());

    let dir = route_tree(&[("get/demo/index.toml", "handler = \"list_demos\"\n")]);
    let table = compile_routes(dir.path(), &loader).unwrap();

    let mut router = RecordingRouter::default();
    apply_routes(&mut router, &table);

    let res = router.registered[0]
        .handler
        .handle(&Request::new(Method::GET, "/demo"));
    assert_eq!(res.body, json!({ "code": 200, "message": "DEMO" }));
}

#[test]
fn test_middleware_chain_travels_with_registration() {
    let mut middlewares = MiddlewareRegistry::new();
    middlewares.register("auth", Arc::new(NoopMiddleware));
    middlewares.register("log", Arc::new(NoopMiddleware));
    let loader = FileDescriptorLoader::new(HandlerRegistry::new(), middlewares);

    let dir = route_tree(&[(
        "get/demo.toml",
        "middlewares = [\"auth\", \"log\"]\n",
    )]);
    let table = compile_routes(dir.path(), &loader).unwrap();

    let mut router = RecordingRouter::default();
    apply_routes(&mut router, &table);
    assert_eq!(router.registered[0].middleware_count, 2);
}

#[test]
fn test_descriptor_path_override_used_at_registration() {
    let dir = route_tree(&[("get/anything.toml", "path = \"*\"\n")]);
    let table = compile_routes(dir.path(), &empty_loader()).unwrap();

    let mut router = RecordingRouter::default();
    apply_routes(&mut router, &table);
    assert_eq!(router.registered[0].path, "*");
}

#[test]
fn test_apply_routes_returns_target_for_chaining() {
    let dir = route_tree(&[("get/index.toml", "")]);
    let table = compile_routes(dir.path(), &empty_loader()).unwrap();

    let mut router = RecordingRouter::default();
    let returned = apply_routes(&mut router, &table);
    assert_eq!(returned.registered.len(), 1);
}

#[test]
fn test_load_and_apply_composes_compile_and_apply() {
    let dir = route_tree(&[
        ("get/index.toml", ""),
        ("delete/demo.toml", ""),
        ("patch/demo.toml", ""),
    ]);

    let mut router = RecordingRouter::default();
    load_and_apply_routes(&mut router, dir.path(), &empty_loader()).unwrap();

    assert_eq!(router.registered.len(), 3);
    let methods: Vec<&str> = router.registered.iter().map(|r| r.method).collect();
    // equal priorities keep discovery order: delete/demo, get/index, patch/demo
    assert_eq!(methods, vec!["delete", "get", "patch"]);
}

#[test]
fn test_load_and_apply_fails_without_registering_anything() {
    let mut router = RecordingRouter::default();
    let result = load_and_apply_routes(
        &mut router,
        std::path::Path::new("/definitely/not/a/route/root"),
        &empty_loader(),
    );
    assert!(result.is_err());
    assert!(router.registered.is_empty());
}
