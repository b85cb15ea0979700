//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases for a streamed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, nothing written yet.
    Start,
    /// Shell HTML has been flushed to the client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Response completed.
    Completion,
}

impl LifecyclePhase {
    pub fn name(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::ShellSent => "shell_sent",
            Self::SectionSent(section) => section,
            Self::Completion => "completion",
        }
    }
}

/// Timing marks recorded while a request is served.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark. Re-marking a name overwrites it.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark section start.
    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    /// Mark section sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Offset of a mark from the start of the request.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.since_start("shell_sent")
    }

    /// Time until the first section went out.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("section_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }

    /// Timing for a specific section, if both marks exist.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.marks.get(&format!("section_{}_start", section))?;
        let sent = self.marks.get(&format!("section_{}_sent", section))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    /// Section name.
    pub name: String,
    /// Time from request start to section start.
    pub start: Duration,
    /// Time from request start to section sent.
    pub sent: Duration,
    /// Duration of section rendering and write.
    pub duration: Duration,
}
