//! Observability for the landing workload.
//!
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent per-entry fields

mod logging;

pub use logging::*;

// Re-export for convenience
pub use omc_core::RequestId;
