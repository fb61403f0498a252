//! Analysis event types.
//!
//! Structured events emitted around engine calls. Events are lightweight
//! value types carrying just enough data for monitoring and debugging.

use serde::{Deserialize, Serialize};

use lamina_types::Scalar;

/// An analysis event emitted by the caller around engine operations.
///
/// Events are tagged with a monotonically increasing sequence number
/// assigned by the emitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEvent {
    /// Emitter-assigned sequence number (0-indexed).
    pub sequence: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A criterion evaluation completed.
    Evaluation {
        /// Criterion name (e.g. "hashin").
        criterion: String,
        /// Material name.
        material: String,
        /// Reserve factor; `None` when infinite (undamaged).
        reserve_factor: Option<Scalar>,
        /// Broad failure mode ("fiber failure", ...).
        mode: String,
        /// Sub-mode label ("matrix shear", ...).
        label: String,
    },

    /// An envelope tessellation completed.
    Tessellation {
        /// Criterion name.
        criterion: String,
        /// Material name.
        material: String,
        /// Number of quads produced.
        quad_count: usize,
        /// Wall-clock time (seconds).
        wall_time: f64,
    },

    /// An evaluation failed with a numeric-domain or configuration fault.
    Fault {
        /// Criterion name.
        criterion: String,
        /// Rendered error message.
        detail: String,
    },
}
