//! # lamina-io
//!
//! Material file contract and validation.
//!
//! Defines the boundary types that external systems (CLI, optimizer
//! scripts, asset pipelines) use to feed material data into the
//! failure-analysis core.

pub mod contract;
pub mod validator;

pub use contract::MaterialFile;
pub use validator::{validate_material, validate_materials};
