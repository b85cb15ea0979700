//! Route configuration.

use crate::context::Method;

/// Configuration for a single route.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Route pattern. A trailing `*` matches any suffix.
    pub pattern: String,
    /// Handler name, used in logs.
    pub handler: String,
    /// HTTP methods this route accepts.
    pub methods: Vec<Method>,
}

impl RouteConfig {
    /// Create a GET route.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: vec![Method::Get],
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: &[Method]) -> Self {
        self.methods = methods.to_vec();
        self
    }

    /// Whether the pattern matches a path, ignoring the method.
    pub fn matches_path(&self, path: &str) -> bool {
        match self.pattern.strip_suffix('*') {
            Some(prefix) => path.starts_with(prefix),
            None => self.pattern == path,
        }
    }

    /// Whether this route accepts the method.
    pub fn allows(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }
}
