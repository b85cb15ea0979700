//! Streaming sink that enforces shell-first output.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use omc_core::{LifecyclePhase, TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent, sections can be streamed.
    ShellSent,
    /// Closing markup written.
    Completed,
}

/// Streaming sink that writes the shell first, then named sections.
///
/// Generic over any `Sink<Vec<u8>>`, so the same code drives Spin's
/// `OutgoingBody` in production and a `Vec<Vec<u8>>` in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell opening. Must be called exactly once, before sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send the closing markup and mark the response complete.
    pub async fn finish(&mut self, closing: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.write(closing).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.timing.mark("complete");
        self.state = SinkState::Completed;
        Ok(())
    }

    /// Sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Timing marks recorded so far.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }
}
