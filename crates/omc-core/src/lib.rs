//! Core abstractions for the OpinionMarketCap landing workload.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `WorkloadManifest` / `RouteConfig` - Declared routes and their methods
//! - `RequestContext` - Typed view over an incoming request
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `WorkloadError` - Errors raised while serving a request

mod config;
mod context;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use lifecycle::*;
pub use workload::*;
