//! Subscription request body.

use serde::Serialize;

use crate::email::EmailAddress;

/// JSON body sent to the subscription service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub email: String,
    pub publication_id: String,
    /// Re-subscribe addresses that previously unsubscribed.
    pub reactivate_existing: bool,
}

impl SubscriptionRequest {
    pub fn new(email: &EmailAddress, publication_id: &str) -> Self {
        Self {
            email: email.as_str().to_string(),
            publication_id: publication_id.to_string(),
            reactivate_existing: true,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let email = EmailAddress::parse("fan@example.com").unwrap();
        let body = SubscriptionRequest::new(&email, "pub_1").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "email": "fan@example.com",
                "publication_id": "pub_1",
                "reactivate_existing": true
            })
        );
    }
}
