//! Handler model carried by compiled route tables.
//!
//! The compiler never invokes handlers; it only threads them from descriptor
//! files into [`RouteEntry`](crate::compiler::RouteEntry) values so a
//! registration target can attach them. The types here define the shape those
//! functions take and provide the default responder substituted when a
//! descriptor declares no callback.

use http::Method;
use serde_json::{json, Value};
use smallvec::SmallVec;

/// Maximum number of path/query parameters stored inline before spilling to
/// the heap. Most conventions produce routes with well under 8 parameters.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for requests.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// Request data passed to a handler by the consuming router.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path
    pub path: String,
    /// Path parameters extracted from the URL (e.g. `:id` → `("id", "123")`)
    pub path_params: ParamVec,
    /// Query string parameters
    pub query_params: ParamVec,
    /// Request body parsed as JSON (if present)
    pub body: Option<Value>,
}

impl Request {
    /// Create a request with no parameters or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Request {
            method,
            path: path.into(),
            path_params: ParamVec::new(),
            query_params: ParamVec::new(),
            body: None,
        }
    }

    /// Get a path parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths, returns the last occurrence.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name ("last write wins").
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Response data returned by a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code (200, 404, 500, etc.)
    pub status: u16,
    /// Response body as JSON
    pub body: Value,
}

impl Response {
    /// Create a JSON response.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Response { status, body }
    }

    /// Create an error response with a `{"error": message}` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }
}

/// A terminal request handler attached to a compiled route.
pub trait Handler: Send + Sync {
    /// Produce a response for the given request.
    fn handle(&self, req: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, req: &Request) -> Response {
        (self)(req)
    }
}

/// Fallback responder used when a route descriptor declares no callback.
///
/// Responds with a fixed acknowledgment payload referencing the resolved
/// route path; it has no other side effects.
pub struct DefaultHandler {
    path: String,
}

impl DefaultHandler {
    /// Create a default handler for the given resolved route path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        DefaultHandler { path: path.into() }
    }
}

impl Handler for DefaultHandler {
    fn handle(&self, _req: &Request) -> Response {
        Response::json(200, json!({ "message": format!("Default for {}", self.path) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handler_payload() {
        let handler = DefaultHandler::new("/demo/:id");
        let req = Request::new(Method::GET, "/demo/42");
        let res = handler.handle(&req);
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "message": "Default for /demo/:id" }));
    }

    #[test]
    fn test_param_lookup_last_write_wins() {
        let mut req = Request::new(Method::GET, "/org/1/user/2");
        req.path_params.push(("id".to_string(), "1".to_string()));
        req.path_params.push(("id".to_string(), "2".to_string()));
        req.query_params.push(("limit".to_string(), "10".to_string()));
        req.query_params.push(("limit".to_string(), "20".to_string()));
        assert_eq!(req.get_path_param("id"), Some("2"));
        assert_eq!(req.get_path_param("missing"), None);
        assert_eq!(req.get_query_param("limit"), Some("20"));
        assert_eq!(req.get_query_param("offset"), None);
    }
}
