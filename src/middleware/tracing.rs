use std::time::Duration;

use tracing::info;

use super::Middleware;
use crate::handler::{Request, Response};

/// Middleware that logs a structured event per handled request.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn before(&self, req: &Request) -> Option<Response> {
        info!(
            method = %req.method,
            path = %req.path,
            "request received"
        );
        None
    }

    fn after(&self, req: &Request, res: &mut Response, latency: Duration) {
        info!(
            method = %req.method,
            path = %req.path,
            status = res.status,
            latency_ms = latency.as_millis() as u64,
            "request complete"
        );
    }
}
