//! # lamina-material
//!
//! Ply-level material data for the lamina failure-analysis engine:
//! strength allowables with a named extension-scalar map, ply geometry
//! state, and the local-axis stress/strain state that criteria evaluate.
//!
//! All types here are plain value objects created by the caller; the
//! engine never retains references to them between calls.

pub mod database;
pub mod ply;
pub mod state;
pub mod strengths;

pub use database::MaterialDatabase;
pub use ply::PlyState;
pub use state::StressStrainState;
pub use strengths::MaterialStrengths;
