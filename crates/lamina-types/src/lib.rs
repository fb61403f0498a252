//! # lamina-types
//!
//! Shared types, error types, and numeric constants for the lamina
//! ply failure-analysis engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other lamina crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{LaminaError, LaminaResult};
pub use scalar::Scalar;
