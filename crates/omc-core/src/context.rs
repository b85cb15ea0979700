//! Request context with typed headers.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::lifecycle::TimingContext;

/// Unique request identifier used to correlate log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

static REQUEST_SEQ: AtomicU32 = AtomicU32::new(0);

impl RequestId {
    /// Generate a new request ID from the wall clock and a per-instance sequence.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = REQUEST_SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:04x}", nanos, seq))
    }

    /// Reuse an ID supplied by the caller (e.g. an upstream `x-request-id`).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP headers, keyed by lowercase name.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body encodings the workload understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Other,
}

/// Typed request context passed to route handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from a method and a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl AsRef<str>) -> Self {
        Self {
            request_id: RequestId::generate(),
            method,
            path: path_only(path_with_query.as_ref()),
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach headers. Names are normalized to lowercase.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers
                .insert(name.as_ref().to_ascii_lowercase(), value.into());
        }
        if let Some(id) = self.headers.get("x-request-id") {
            self.request_id = RequestId::from_string(id.clone());
        }
        self
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Classify the request body from its `content-type`.
    pub fn body_kind(&self) -> BodyKind {
        let content_type = self
            .header("content-type")
            .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase());

        match content_type.as_deref() {
            Some("application/json") => BodyKind::Json,
            Some("application/x-www-form-urlencoded") => BodyKind::Form,
            _ => BodyKind::Other,
        }
    }
}

/// Strip the query string. Routing only looks at the path.
fn path_only(raw: &str) -> String {
    let path = raw.split_once('?').map_or(raw, |(path, _)| path);
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Head.as_str(), "HEAD");
    }

    #[test]
    fn test_query_is_stripped_from_path() {
        let ctx = RequestContext::new(Method::Get, "/api/subscribe?utm_source=twitter&ref");
        assert_eq!(ctx.path, "/api/subscribe");
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(RequestContext::new(Method::Get, "").path, "/");
        assert_eq!(RequestContext::new(Method::Get, "?a=%40").path, "/");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let ctx = RequestContext::new(Method::Post, "/api/subscribe")
            .with_headers([("Content-Type", "application/json")]);
        assert_eq!(ctx.header("content-type"), Some("application/json"));
        assert_eq!(ctx.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_upstream_request_id_is_kept() {
        let ctx = RequestContext::new(Method::Get, "/")
            .with_headers([("X-Request-Id", "lb-42")]);
        assert_eq!(ctx.request_id.to_string(), "lb-42");
    }

    #[test]
    fn test_body_kind() {
        let json = RequestContext::new(Method::Post, "/api/subscribe")
            .with_headers([("content-type", "application/json; charset=utf-8")]);
        assert_eq!(json.body_kind(), BodyKind::Json);

        let form = RequestContext::new(Method::Post, "/api/subscribe")
            .with_headers([("content-type", "application/x-www-form-urlencoded")]);
        assert_eq!(form.body_kind(), BodyKind::Form);

        let none = RequestContext::new(Method::Post, "/api/subscribe");
        assert_eq!(none.body_kind(), BodyKind::Other);
    }
}
