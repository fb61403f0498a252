//! Scalar type alias for the analysis engine.
//!
//! Using `f64` — the engine is CPU-only closed-form analysis, and the
//! reserve-factor defining property (rescaled stress lands on the failure
//! surface) is verified to tight tolerances in tests.

/// The floating-point type used throughout the engine.
///
/// Set to `f64`. Change to `f32` if the envelope meshes ever need to be
/// uploaded to a GPU without conversion.
pub type Scalar = f64;
