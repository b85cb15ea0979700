//! Spin outbound HTTP transport.

use async_trait::async_trait;
use spin_sdk::http::{Method, Request, Response};

use crate::transport::{FetchError, HttpTransport, OutboundRequest, OutboundResponse};

/// Sends requests through Spin's outbound HTTP host interface.
///
/// The upstream host must be listed in the component's
/// `allowed_outbound_hosts`, otherwise every call fails with a
/// connection error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, FetchError> {
        let mut builder = Request::builder();
        builder.method(Method::Post).uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder.header(name.as_str(), value.as_str());
        }
        let outgoing = builder.body(request.body).build();

        let response: Response = spin_sdk::http::send(outgoing).await.map_err(|e| {
            tracing::debug!(dependency = %request.tag, error = %e, "outbound request failed");
            FetchError::Connection {
                url: request.url.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(OutboundResponse {
            status: *response.status(),
        })
    }
}
