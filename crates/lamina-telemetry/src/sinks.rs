//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (log via `tracing`, append to a JSON-lines file, capture for tests).

use std::io::Write;

use crate::events::AnalysisEvent;

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &AnalysisEvent);

    /// Called when the analysis batch ends. Flush buffers, close files.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A simple sink that logs events to a `Vec` for testing and inspection.
pub struct VecSink {
    /// Collected events.
    pub events: Vec<AnalysisEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &AnalysisEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    /// Minimum log level for events.
    _level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { _level: level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &AnalysisEvent) {
        tracing::info!(
            sequence = event.sequence,
            event = ?event.kind,
            "analysis_event"
        );
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// A sink that appends one JSON object per event to a writer.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Creates a sink writing JSON lines to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn handle(&mut self, event: &AnalysisEvent) {
        if let Ok(json) = serde_json::to_string(event) {
            // A failed write only loses telemetry, never analysis results.
            let _ = writeln!(self.writer, "{json}");
        }
    }

    fn finalize(&mut self) {
        let _ = self.writer.flush();
    }

    fn name(&self) -> &str {
        "json_lines_sink"
    }
}
