//! # lamina-criteria
//!
//! The failure-criterion engine: a family of interchangeable physical
//! failure models that each turn a ply's local stress/strain state into
//! a scalar reserve factor with a failure-mode label, and tessellate the
//! model's failure surface in (σ11, σ22, τ12) stress space for display.
//!
//! Every model implements [`FailureCriterion`]; callers bind one
//! criterion per ply and never branch on model identity. Evaluation is
//! the hot path (pure, allocation-free, thread-safe by statelessness);
//! tessellation is cold and visualization-only.

pub mod catalog;
pub mod numeric;
pub mod tessellation;
pub mod traits;

pub mod christensen;
pub mod cuntze;
pub mod edge;
pub mod fiber_only;
pub mod hashin;
pub mod max_strain;
pub mod mayes;
pub mod rotem;
pub mod sun;
pub mod tsai_hill;
pub mod ztl;

pub use catalog::CriterionCatalog;
pub use traits::{FailureCriterion, FailureMode, ReserveFactor};

pub use christensen::Christensen;
pub use cuntze::Cuntze;
pub use edge::Edge;
pub use fiber_only::FiberOnly;
pub use hashin::Hashin;
pub use max_strain::MaxStrain;
pub use mayes::Mayes;
pub use rotem::Rotem;
pub use sun::Sun;
pub use tsai_hill::TsaiHill;
pub use ztl::Ztl;
