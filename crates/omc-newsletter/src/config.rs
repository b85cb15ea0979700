//! Subscription service configuration.

use std::time::Duration;

/// Default subscription endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.beehiiv.com/v2/subscriptions";

/// Placeholder publication id shipped with the page.
pub const DEFAULT_PUBLICATION_ID: &str = "YOUR_PUBLICATION_ID";

/// How long a success or error message stays up.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Variable names, as declared in `spin.toml`.
pub const VAR_API_KEY: &str = "beehiiv_api_key";
pub const VAR_PUBLICATION_ID: &str = "beehiiv_publication_id";
pub const VAR_ENDPOINT: &str = "beehiiv_endpoint";
pub const VAR_RESET_MS: &str = "subscribe_reset_ms";

/// Error raised when a configuration value is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuration for the subscription handler.
#[derive(Clone)]
pub struct NewsletterConfig {
    pub endpoint: String,
    pub publication_id: String,
    /// Bearer token. Missing means every submission fails.
    pub api_key: Option<String>,
    pub reset_delay: Duration,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            publication_id: DEFAULT_PUBLICATION_ID.to_string(),
            api_key: None,
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

impl NewsletterConfig {
    /// Build configuration from a variable lookup.
    ///
    /// Absent or blank variables fall back to defaults. An unusable value
    /// falls back to the default for that field only and is reported next
    /// to the configuration, so one bad setting never drops the others.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(endpoint) = get(VAR_ENDPOINT) {
            if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
                config.endpoint = endpoint;
            } else {
                errors.push(ConfigError::InvalidValue {
                    name: VAR_ENDPOINT,
                    value: endpoint,
                });
            }
        }
        if let Some(publication_id) = get(VAR_PUBLICATION_ID) {
            config.publication_id = publication_id;
        }
        config.api_key = get(VAR_API_KEY);
        if let Some(raw) = get(VAR_RESET_MS) {
            match raw.parse::<u64>() {
                Ok(ms) => config.reset_delay = Duration::from_millis(ms),
                Err(_) => errors.push(ConfigError::InvalidValue {
                    name: VAR_RESET_MS,
                    value: raw,
                }),
            }
        }

        (config, errors)
    }

    /// Set the api key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for NewsletterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterConfig")
            .field("endpoint", &self.endpoint)
            .field("publication_id", &self.publication_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("reset_delay", &self.reset_delay)
            .finish()
    }
}
