//! Sinks for status events.

use std::io::{self, Write};

use crate::StatusEvent;

/// Receives status events as they happen.
///
/// Reporting never fails from the caller's point of view; writers that can
/// fail keep the first error and surface it from `finish`.
pub trait Reporter {
    /// Records one event.
    fn report(&mut self, event: StatusEvent);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: StatusEvent) {
        (**self).report(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, event: StatusEvent) {
        (**self).report(event);
    }
}

/// Writes each event as its human-readable status line.
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
    error: Option<io::Error>,
}

impl TextReporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextReporter<W> {
    /// Creates a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns it, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, event: StatusEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{event}") {
            tracing::warn!(error = %err, kind = event.kind(), "status line write failed");
            self.error = Some(err);
        }
    }
}

/// Writes each event as one JSON object per line.
#[derive(Debug)]
pub struct JsonReporter<W> {
    out: W,
    error: Option<io::Error>,
}

impl JsonReporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    /// Creates a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns it, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &StatusEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, event: StatusEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(&event) {
            tracing::warn!(error = %err, kind = event.kind(), "json event write failed");
            self.error = Some(err);
        }
    }
}

/// Keeps every event in memory, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    events: Vec<StatusEvent>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<StatusEvent> {
        std::mem::take(&mut self.events)
    }

    /// Status lines for the recorded events.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&StatusEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl Reporter for Recorder {
    fn report(&mut self, event: StatusEvent) {
        self.events.push(event);
    }
}
