//! Newsletter subscription handler.
//!
//! A submission moves the form from idle to pending, issues one POST to the
//! subscription service, lands on success or error, and returns to idle after
//! a fixed delay:
//!
//! ```ignore
//! let mut form = SubscriptionForm::new(config.reset_delay);
//! form.set_email("satoshi@example.com");
//! let ticket = form.submit(&client).await?;
//! // ... after ticket.after has elapsed:
//! form.expire(ticket);
//! ```
//!
//! Each submission carries its own `SubmissionId`, so the reset scheduled by
//! an earlier submission never clears the status of a later one.

mod client;
mod config;
mod email;
mod form;
mod request;

pub use client::*;
pub use config::*;
pub use email::*;
pub use form::*;
pub use request::*;
