//! Newsletter form state machine.

use std::fmt;
use std::time::Duration;

use omc_data::HttpTransport;

use crate::client::{SubscriptionClient, SubscriptionOutcome};
use crate::email::{EmailAddress, EmailError};

/// Status shown next to the form. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Inline message for the status, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✓ Thanks for subscribing!"),
            Self::Error => Some("Something went wrong. Please try again."),
            Self::Idle | Self::Pending => None,
        }
    }

    /// Success or error.
    pub fn is_outcome(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Monotonic identifier of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled return to idle, owned by one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    pub id: SubmissionId,
    /// Delay after resolution before the form returns to idle.
    pub after: Duration,
}

/// Why a submission could not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("A submission is already pending")]
    AlreadyPending,

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}

/// State of the newsletter form.
///
/// Transitions: idle → pending → success | error → idle. A new submission
/// may also start from success or error, which supersedes the previous
/// submission's pending reset.
#[derive(Debug, Clone)]
pub struct SubscriptionForm {
    email: String,
    status: SubmissionStatus,
    latest: Option<SubmissionId>,
    next_id: u64,
    reset_delay: Duration,
}

impl SubscriptionForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            email: String::new(),
            status: SubmissionStatus::Idle,
            latest: None,
            next_id: 1,
            reset_delay,
        }
    }

    /// Current contents of the email input.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// How long an outcome stays up before the form resets.
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Most recent submission, if any.
    pub fn latest(&self) -> Option<SubmissionId> {
        self.latest
    }

    /// The submit control is disabled exactly while a submission is pending.
    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Start a submission for the current email.
    ///
    /// On error the form is left untouched.
    pub fn begin(&mut self) -> Result<(SubmissionId, EmailAddress), FormError> {
        if self.status == SubmissionStatus::Pending {
            return Err(FormError::AlreadyPending);
        }
        let email = EmailAddress::parse(&self.email)?;

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.latest = Some(id);
        self.status = SubmissionStatus::Pending;
        Ok((id, email))
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Success clears the email; failure keeps it. Returns the reset ticket
    /// for this submission, or `None` if `id` is not the latest submission
    /// or is not pending.
    pub fn resolve(&mut self, id: SubmissionId, outcome: &SubscriptionOutcome) -> Option<ResetTicket> {
        if self.latest != Some(id) || self.status != SubmissionStatus::Pending {
            return None;
        }

        if outcome.is_success() {
            self.status = SubmissionStatus::Success;
            self.email.clear();
        } else {
            self.status = SubmissionStatus::Error;
        }

        Some(ResetTicket {
            id,
            after: self.reset_delay,
        })
    }

    /// Record a submission that failed before reaching the provider.
    ///
    /// Takes a fresh id so earlier reset tickets stay stale. The email is
    /// kept for correction. Returns `None` while another submission is
    /// pending.
    pub fn reject(&mut self) -> Option<ResetTicket> {
        if self.status == SubmissionStatus::Pending {
            return None;
        }
        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.latest = Some(id);
        self.status = SubmissionStatus::Error;
        Some(ResetTicket {
            id,
            after: self.reset_delay,
        })
    }

    /// Return to idle if the ticket still belongs to the latest submission.
    ///
    /// Returns whether the status changed.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.latest != Some(ticket.id) || !self.status.is_outcome() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Run one submission end to end: begin, subscribe, resolve.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        client: &SubscriptionClient<T>,
    ) -> Result<ResetTicket, FormError> {
        let (id, email) = self.begin()?;
        let outcome = client.subscribe(&email).await;
        tracing::debug!(submission = %id, outcome = outcome.name(), "submission resolved");

        // `id` is the latest and still pending: nothing else can touch the
        // form while `&mut self` is held.
        Ok(self.resolve(id, &outcome).unwrap_or(ResetTicket {
            id,
            after: self.reset_delay,
        }))
    }
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RESET_DELAY)
    }
}
