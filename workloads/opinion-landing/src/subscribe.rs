//! One newsletter submission, as seen by the `/api/subscribe` route.

use std::time::Duration;

use omc_core::BodyKind;
use omc_data::HttpTransport;
use omc_newsletter::{FormError, ResetTicket, SubscriptionClient, SubscriptionForm};
use omc_observability::StructuredLogger;

use crate::api::SubscribeReply;

/// Form state after a submission, plus what happened to it.
#[derive(Debug)]
pub struct Submission {
    pub form: SubscriptionForm,
    pub result: Result<ResetTicket, FormError>,
}

/// What the route sends back, chosen by how the request body was encoded.
#[derive(Debug)]
pub enum SubscribeResponse {
    /// JSON reply for the client script.
    Json { status: u16, body: Vec<u8> },
    /// The landing page with the outcome shown, refreshed after `refresh`
    /// seconds.
    Page { form: SubscriptionForm, refresh: u64 },
}

/// Submit `email` through a fresh form.
pub async fn submit_email<T: HttpTransport>(
    client: &SubscriptionClient<T>,
    email: String,
    logger: &StructuredLogger,
) -> Submission {
    let mut form = SubscriptionForm::new(client.config().reset_delay);
    form.set_email(email);

    let result = form.submit(client).await;
    match &result {
        Ok(ticket) => logger
            .info_builder("submission resolved")
            .field("status", form.status().as_str())
            .field_u64("submission_id", ticket.id.get())
            .emit(),
        Err(e) => logger
            .warn_builder("submission refused")
            .field("error", e.to_string())
            .emit(),
    }

    Submission { form, result }
}

impl Submission {
    pub fn reset_ms(&self) -> u64 {
        self.form.reset_delay().as_millis() as u64
    }

    /// JSON reply for the client script.
    pub fn json_reply(&self) -> (u16, SubscribeReply) {
        match &self.result {
            Ok(_) => SubscribeReply::for_status(self.form.status(), self.reset_ms()),
            Err(e) => SubscribeReply::for_form_error(e, self.reset_ms()),
        }
    }

    /// JSON bodies come from the client script and get JSON back. Anything
    /// else is a plain form POST and gets the page.
    pub fn into_response(self, kind: BodyKind) -> SubscribeResponse {
        match kind {
            BodyKind::Json => {
                let (status, reply) = self.json_reply();
                SubscribeResponse::Json {
                    status,
                    body: reply.to_json(),
                }
            }
            BodyKind::Form | BodyKind::Other => {
                let (form, refresh) = self.into_page_form();
                SubscribeResponse::Page { form, refresh }
            }
        }
    }

    /// Form to render after a plain form POST, and the refresh delay in
    /// whole seconds.
    ///
    /// A submission that never started is shown as an error.
    pub fn into_page_form(mut self) -> (SubscriptionForm, u64) {
        let seconds = refresh_seconds(self.form.reset_delay());
        if self.result.is_err() {
            self.form.reject();
        }
        (self.form, seconds)
    }
}

/// Round a reset delay up to whole seconds, at least one.
pub fn refresh_seconds(delay: Duration) -> u64 {
    let ms = delay.as_millis() as u64;
    ms.div_ceil(1000).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use omc_core::RequestId;
    use omc_data::{FetchError, OutboundRequest, OutboundResponse};
    use omc_newsletter::{NewsletterConfig, SubmissionStatus};

    struct FixedStatus(u16);

    #[async_trait(?Send)]
    impl HttpTransport for FixedStatus {
        async fn send(&self, _request: OutboundRequest) -> Result<OutboundResponse, FetchError> {
            Ok(OutboundResponse { status: self.0 })
        }
    }

    fn submit(status: u16, email: &str) -> Submission {
        let config = NewsletterConfig::default().with_api_key("test-key");
        let client = SubscriptionClient::new(config, FixedStatus(status));
        let logger = StructuredLogger::new(RequestId::from_string("test"));
        block_on(submit_email(&client, email.to_string(), &logger))
    }

    #[test]
    fn test_accepted_submission() {
        let submission = submit(201, "fan@example.com");
        assert_eq!(submission.form.status(), SubmissionStatus::Success);

        let (code, reply) = submission.json_reply();
        assert_eq!(code, 200);
        assert_eq!(reply.status, "success");
        assert_eq!(reply.reset_ms, 3000);

        let (form, seconds) = submission.into_page_form();
        assert_eq!(form.email(), "");
        assert_eq!(seconds, 3);
    }

    #[test]
    fn test_rejected_submission() {
        let submission = submit(400, "fan@example.com");
        let (code, reply) = submission.json_reply();
        assert_eq!(code, 502);
        assert_eq!(reply.message, Some("Something went wrong. Please try again."));

        let (form, _) = submission.into_page_form();
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.email(), "fan@example.com");
    }

    #[test]
    fn test_invalid_email_never_reaches_provider() {
        let submission = submit(201, "nope");
        assert!(submission.result.is_err());
        assert_eq!(submission.json_reply().0, 422);

        let (form, _) = submission.into_page_form();
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.email(), "nope");
    }

    #[test]
    fn test_json_body_gets_json_reply() {
        match submit(502, "fan@example.com").into_response(BodyKind::Json) {
            SubscribeResponse::Json { status, body } => {
                assert_eq!(status, 502);
                let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
                assert_eq!(value["status"], "error");
                assert_eq!(value["reset_ms"], 3000);
            }
            other => panic!("expected JSON reply, got {other:?}"),
        }

        match submit(201, "bad address").into_response(BodyKind::Json) {
            SubscribeResponse::Json { status, .. } => assert_eq!(status, 422),
            other => panic!("expected JSON reply, got {other:?}"),
        }
    }

    #[test]
    fn test_form_body_gets_page() {
        match submit(200, "fan@example.com").into_response(BodyKind::Form) {
            SubscribeResponse::Page { form, refresh } => {
                assert_eq!(form.status(), SubmissionStatus::Success);
                assert_eq!(refresh, 3);
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_refresh_seconds_round_up() {
        assert_eq!(refresh_seconds(Duration::from_millis(3000)), 3);
        assert_eq!(refresh_seconds(Duration::from_millis(2500)), 3);
        assert_eq!(refresh_seconds(Duration::from_millis(0)), 1);
    }
}
