//! Subscription client.

use omc_data::{DependencyTag, FetchError, HttpTransport, OutboundRequest};

use crate::config::NewsletterConfig;
use crate::email::EmailAddress;
use crate::request::SubscriptionRequest;

/// Why a subscription attempt failed.
///
/// Every variant surfaces to the visitor as the same error message; the
/// distinction only exists for logs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("No api key configured")]
    MissingApiKey,

    #[error("Subscription service rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("Subscription request could not be completed: {0}")]
    Transport(#[from] FetchError),

    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

/// Result of one subscription attempt.
#[derive(Debug, Clone)]
pub enum SubscriptionOutcome {
    Subscribed,
    Failed(SubscribeError),
}

impl SubscriptionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Subscribed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Subscribed => "success",
            Self::Failed(_) => "error",
        }
    }
}

impl From<Result<(), SubscribeError>> for SubscriptionOutcome {
    fn from(result: Result<(), SubscribeError>) -> Self {
        match result {
            Ok(()) => Self::Subscribed,
            Err(e) => Self::Failed(e),
        }
    }
}

/// Issues subscription requests through an `HttpTransport`.
///
/// One request per call. No retries.
pub struct SubscriptionClient<T> {
    config: NewsletterConfig,
    transport: T,
}

impl<T: HttpTransport> SubscriptionClient<T> {
    pub fn new(config: NewsletterConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &NewsletterConfig {
        &self.config
    }

    /// Subscribe an address, folding every failure into the outcome.
    pub async fn subscribe(&self, email: &EmailAddress) -> SubscriptionOutcome {
        let outcome = SubscriptionOutcome::from(self.try_subscribe(email).await);
        match &outcome {
            SubscriptionOutcome::Subscribed => {
                tracing::debug!(domain = email.domain(), "subscription accepted");
            }
            SubscriptionOutcome::Failed(e) => {
                tracing::warn!(domain = email.domain(), error = %e, "subscription failed");
            }
        }
        outcome
    }

    /// Subscribe an address, keeping the failure reason.
    pub async fn try_subscribe(&self, email: &EmailAddress) -> Result<(), SubscribeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SubscribeError::MissingApiKey)?;

        let body = SubscriptionRequest::new(email, &self.config.publication_id)
            .to_json()
            .map_err(|e| SubscribeError::Encode(e.to_string()))?;

        let request =
            OutboundRequest::post_json(DependencyTag::Newsletter, self.config.endpoint.as_str(), body)
                .with_header("authorization", format!("Bearer {}", api_key));

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(SubscribeError::Rejected {
                status: response.status,
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::MockTransport;
    use super::*;
    use futures::executor::block_on;

    fn client(transport: MockTransport) -> SubscriptionClient<MockTransport> {
        SubscriptionClient::new(NewsletterConfig::default().with_api_key("test-key"), transport)
    }

    fn email() -> EmailAddress {
        EmailAddress::parse("fan@example.com").unwrap()
    }

    #[test]
    fn test_request_shape() {
        let client = client(MockTransport::status(201));
        assert!(block_on(client.subscribe(&email())).is_success());

        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let req = &sent[0];
        assert_eq!(req.url, "https://api.beehiiv.com/v2/subscriptions");
        assert_eq!(req.tag, DependencyTag::Newsletter);
        assert_eq!(req.header("authorization"), Some("Bearer test-key"));
        assert_eq!(req.header("content-type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(body["email"], "fan@example.com");
        assert_eq!(body["publication_id"], "YOUR_PUBLICATION_ID");
        assert_eq!(body["reactivate_existing"], true);
    }

    #[test]
    fn test_non_2xx_is_rejected() {
        let client = client(MockTransport::status(400));
        let err = block_on(client.try_subscribe(&email())).unwrap_err();
        assert!(matches!(err, SubscribeError::Rejected { status: 400 }));
        assert!(!block_on(client.subscribe(&email())).is_success());
    }

    #[test]
    fn test_transport_failure_is_error() {
        let client = client(MockTransport::unreachable());
        let err = block_on(client.try_subscribe(&email())).unwrap_err();
        assert!(matches!(err, SubscribeError::Transport(_)));
        assert_eq!(block_on(client.subscribe(&email())).name(), "error");
    }

    #[test]
    fn test_missing_api_key_sends_nothing() {
        let client = SubscriptionClient::new(NewsletterConfig::default(), MockTransport::status(200));
        let err = block_on(client.try_subscribe(&email())).unwrap_err();
        assert!(matches!(err, SubscribeError::MissingApiKey));
        assert!(client.transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_one_request_per_attempt() {
        let client = client(MockTransport::status(503));
        block_on(client.subscribe(&email()));
        assert_eq!(client.transport.sent.borrow().len(), 1);
    }
}
