//! # lamina-envelope
//!
//! Geometry output of the failure-analysis engine: the tessellated
//! failure-envelope surface in (σ11, σ22, τ12) stress space, plus the
//! patch-sampling and normal helpers the criteria build it with, and a
//! JSON exporter for the companion renderer.
//!
//! Envelope meshes are visualization-only; nothing here feeds back into
//! reserve-factor evaluation.

pub mod json_exporter;
pub mod mesh;
pub mod normals;
pub mod sampler;

pub use json_exporter::EnvelopeExporter;
pub use mesh::{EnvelopeMesh, EnvelopeQuad};
