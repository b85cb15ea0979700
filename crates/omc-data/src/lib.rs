//! Data access for the landing workload.
//!
//! This crate provides:
//! - `HttpTransport` - Outbound HTTP seam, with `SpinTransport` for production
//! - `DependencyTag` - Names the upstream a call goes to, for logs and timing
//! - `QuestionSource` - Read-only access to the ranked market questions

mod dependency;
mod markets;
mod spin;
mod transport;

pub use dependency::*;
pub use markets::*;
pub use spin::*;
pub use transport::*;
