//! Dependency tagging for outbound calls.

/// Upstreams the workload talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Newsletter subscription service.
    Newsletter,
    /// Market question data.
    Markets,
}

impl DependencyTag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Newsletter => "newsletter",
            Self::Markets => "markets",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
