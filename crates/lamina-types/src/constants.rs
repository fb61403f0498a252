//! Numeric constants and tessellation defaults.

use crate::scalar::Scalar;

/// Strength scaling applied to transverse-tension and shear allowables
/// of an embedded ply (material on both faces) by criteria that model
/// the constraint effect, e.g. Sun.
pub const EMBEDDED_STRENGTH_FACTOR: Scalar = 1.5;

/// Central-difference step for envelope normals, in normalized stress
/// units (the stress axis is divided by the relevant strength first).
pub const FD_NORMAL_STEP: Scalar = 1.0e-4;

/// Base number of angular samples per tessellation patch at quality 1.
pub const BASE_ANGULAR_SAMPLES: usize = 24;

/// Base number of axial samples per cylinder patch at quality 1.
pub const BASE_AXIAL_SAMPLES: usize = 12;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-9;

/// Length below which a vector is treated as degenerate when normalizing.
pub const DEGENERATE_LENGTH: Scalar = 1.0e-12;
