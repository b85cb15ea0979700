//! Workload definition and routing.

use crate::config::RouteConfig;
use crate::context::Method;

/// Workload manifest - explicit configuration for a deployable unit.
#[derive(Debug, Clone)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles, matched in order.
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve the route for a request.
    ///
    /// The first route whose pattern matches the path wins. If it does not
    /// accept the method, the error lists what it does accept.
    pub fn resolve(&self, method: Method, path: &str) -> Result<&RouteConfig, WorkloadError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.matches_path(path))
            .ok_or_else(|| WorkloadError::NotFound(path.to_string()))?;

        if route.allows(method) {
            Ok(route)
        } else {
            Err(WorkloadError::MethodNotAllowed {
                method,
                allowed: route.methods.clone(),
            })
        }
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("No route for {0}")]
    NotFound(String),

    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: Method, allowed: Vec<Method> },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl WorkloadError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::BadRequest(_) => 400,
            Self::ShellNotSent | Self::StreamError(_) => 500,
        }
    }
}
