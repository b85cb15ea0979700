//! `/api/subscribe` request and response bodies.

use omc_core::{BodyKind, WorkloadError};
use omc_newsletter::{FormError, SubmissionStatus};
use serde::{Deserialize, Serialize};

/// JSON body posted by the client script.
#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    #[serde(default)]
    pub email: String,
}

/// Extract the email from a JSON or form-encoded body.
pub fn parse_email(kind: BodyKind, body: &[u8]) -> Result<String, WorkloadError> {
    match kind {
        BodyKind::Json => serde_json::from_slice::<SubscribeBody>(body)
            .map(|b| b.email)
            .map_err(|e| WorkloadError::BadRequest(format!("invalid JSON body: {}", e))),
        BodyKind::Form => Ok(url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()),
        BodyKind::Other => Err(WorkloadError::BadRequest(
            "expected application/json or application/x-www-form-urlencoded".to_string(),
        )),
    }
}

/// JSON reply to the client script.
#[derive(Debug, Serialize)]
pub struct SubscribeReply {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// How long the client should keep the message up.
    pub reset_ms: u64,
}

impl SubscribeReply {
    /// Reply for a submission that ran to an outcome.
    pub fn for_status(status: SubmissionStatus, reset_ms: u64) -> (u16, Self) {
        let code = if status == SubmissionStatus::Success { 200 } else { 502 };
        (
            code,
            Self {
                status: status.as_str(),
                message: status.message(),
                reset_ms,
            },
        )
    }

    /// Reply for a submission that never started.
    pub fn for_form_error(err: &FormError, reset_ms: u64) -> (u16, Self) {
        let code = match err {
            FormError::InvalidEmail(_) => 422,
            FormError::AlreadyPending => 409,
        };
        (
            code,
            Self {
                status: SubmissionStatus::Error.as_str(),
                message: SubmissionStatus::Error.message(),
                reset_ms,
            },
        )
    }

    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|_| br#"{"status":"error"}"#.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omc_newsletter::EmailError;

    #[test]
    fn test_parse_json_body() {
        let email = parse_email(BodyKind::Json, br#"{"email":"fan@example.com"}"#).unwrap();
        assert_eq!(email, "fan@example.com");
    }

    #[test]
    fn test_parse_json_without_email_is_empty() {
        assert_eq!(parse_email(BodyKind::Json, b"{}").unwrap(), "");
    }

    #[test]
    fn test_parse_bad_json() {
        let err = parse_email(BodyKind::Json, b"email=x").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_parse_form_body_decodes() {
        let email = parse_email(BodyKind::Form, b"email=fan%2Bnews%40example.com&x=1").unwrap();
        assert_eq!(email, "fan+news@example.com");
    }

    #[test]
    fn test_parse_other_content_type() {
        assert!(parse_email(BodyKind::Other, b"fan@example.com").is_err());
    }

    #[test]
    fn test_reply_codes() {
        let (code, reply) = SubscribeReply::for_status(SubmissionStatus::Success, 3000);
        assert_eq!(code, 200);
        let json: serde_json::Value = serde_json::from_slice(&reply.to_json()).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "✓ Thanks for subscribing!");
        assert_eq!(json["reset_ms"], 3000);

        let (code, _) = SubscribeReply::for_status(SubmissionStatus::Error, 3000);
        assert_eq!(code, 502);

        let (code, reply) =
            SubscribeReply::for_form_error(&FormError::InvalidEmail(EmailError::Empty), 3000);
        assert_eq!(code, 422);
        assert_eq!(reply.status, "error");
    }
}
