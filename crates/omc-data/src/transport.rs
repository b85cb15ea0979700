//! Outbound HTTP seam.

use async_trait::async_trait;

use crate::dependency::DependencyTag;

/// Error type for outbound calls that did not produce a response.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Connection error for {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Request error: {0}")]
    Request(String),
}

/// An outbound HTTP POST. The only upstream call is the newsletter signup.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// Upstream the request goes to.
    pub tag: DependencyTag,
    pub url: String,
    /// Header pairs, sent in order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Build a JSON POST.
    pub fn post_json(tag: DependencyTag, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            tag,
            url: url.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response to an outbound request. The body is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
}

impl OutboundResponse {
    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends outbound HTTP requests.
///
/// Futures are not `Send`: Spin's outbound HTTP runs on a single-threaded
/// WASI executor.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_sets_content_type() {
        let req = OutboundRequest::post_json(DependencyTag::Newsletter, "https://example.com", b"{}".to_vec())
            .with_header("Authorization", "Bearer k");

        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("authorization"), Some("Bearer k"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_success_is_any_2xx() {
        assert!(OutboundResponse { status: 200 }.is_success());
        assert!(OutboundResponse { status: 201 }.is_success());
        assert!(OutboundResponse { status: 299 }.is_success());
        assert!(!OutboundResponse { status: 199 }.is_success());
        assert!(!OutboundResponse { status: 302 }.is_success());
        assert!(!OutboundResponse { status: 400 }.is_success());
        assert!(!OutboundResponse { status: 503 }.is_success());
    }
}
