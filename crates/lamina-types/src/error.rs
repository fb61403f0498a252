//! Error types for the lamina engine.
//!
//! All crates return `LaminaResult<T>` from fallible operations.

use thiserror::Error;

use crate::scalar::Scalar;

/// Unified error type for the lamina engine.
#[derive(Debug, Error)]
pub enum LaminaError {
    /// Material data is malformed (non-positive strength, NaN modulus...).
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A criterion-specific extension scalar is missing from the material.
    ///
    /// This is a configuration error at the material-definition boundary;
    /// criteria never silently default a key they declare as required.
    #[error("Criterion '{criterion}' requires material parameter '{key}'")]
    MissingParameter {
        criterion: &'static str,
        key: &'static str,
    },

    /// A closed-form solve left its numeric domain (e.g. negative
    /// discriminant in a quadratic reserve-factor solve).
    ///
    /// Callers must treat this as "cannot assess this ply under this
    /// stress state" — the value is never clamped or defaulted.
    #[error("Numeric domain fault in '{criterion}': {detail} (discriminant {discriminant:.6e})")]
    NumericDomain {
        criterion: &'static str,
        detail: &'static str,
        discriminant: Scalar,
    },

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, LaminaError>`.
pub type LaminaResult<T> = Result<T, LaminaError>;
