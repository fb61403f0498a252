//! # lamina-telemetry
//!
//! Event bus for analysis telemetry. Emits structured events
//! (evaluations, tessellations, faults) that can be consumed by
//! pluggable sinks (console, JSON-lines files, in-memory capture).
//!
//! The engine core stays pure; the bus is driven from the caller side
//! (CLI, optimizer loop) around engine calls.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{AnalysisEvent, EventKind};
pub use sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
