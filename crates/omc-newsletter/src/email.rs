//! Email address validation.

use std::fmt;

/// Why an email was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,

    #[error("Email is not well-formed: {0}")]
    Malformed(String),
}

/// A trimmed, well-formed email address.
///
/// Accepts exactly what a browser's `type="email"` input accepts: a local
/// part of atext characters and dots, one `@`, and one or more domain
/// labels of at most 63 alphanumeric or hyphen characters, not starting or
/// ending with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

/// Punctuation allowed in the local part besides ASCII alphanumerics.
const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

const MAX_LABEL_LEN: usize = 63;

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        let malformed = || EmailError::Malformed(email.to_string());

        let (local, domain) = email.split_once('@').ok_or_else(malformed)?;
        if !is_local_part(local) || !is_domain(domain) {
            return Err(malformed());
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, for logs that must not carry the full address.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c))
}

fn is_domain(domain: &str) -> bool {
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
