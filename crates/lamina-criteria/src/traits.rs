//! Failure-criterion trait — the core strategy abstraction.
//!
//! Every failure model implements this trait, enabling callers (layer
//! editor, optimizer, viewer) to swap criteria without changing their
//! evaluation logic.

use serde::Serialize;

use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

/// Broad failure-mode classification of a reserve factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureMode {
    /// The stress state cannot fail the ply (all-zero stress, or the
    /// criterion does not apply to this state).
    Undamaged,
    /// Governed by stress along the fiber direction (σ11).
    FiberFailure,
    /// Governed by transverse normal stress (σ22) and/or in-plane shear.
    MatrixFailure,
}

impl FailureMode {
    /// Returns the mode name as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureMode::Undamaged => "undamaged",
            FailureMode::FiberFailure => "fiber failure",
            FailureMode::MatrixFailure => "matrix failure",
        }
    }
}

/// Result of one criterion evaluation.
///
/// The reserve factor is the load multiplier at which the scaled stress
/// state first reaches the failure surface: `> 1` is safe, `= 1` is at
/// the limit, `+∞` means "no load, cannot fail". Created fresh per
/// evaluation and immutable once returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReserveFactor {
    /// The load multiplier. Never NaN on valid input.
    pub value: Scalar,
    /// Broad failure-mode classification.
    pub mode: FailureMode,
    /// Human-readable sub-mode from the model's fixed vocabulary
    /// (e.g. "fiber tension", "matrix shear"). Empty when undamaged.
    pub label: &'static str,
}

impl ReserveFactor {
    /// The "cannot fail" result shared by every criterion.
    pub fn undamaged() -> Self {
        Self {
            value: Scalar::INFINITY,
            mode: FailureMode::Undamaged,
            label: "",
        }
    }

    /// A fiber-governed reserve factor.
    pub fn fiber(value: Scalar, label: &'static str) -> Self {
        Self {
            value,
            mode: FailureMode::FiberFailure,
            label,
        }
    }

    /// A matrix-governed reserve factor.
    pub fn matrix(value: Scalar, label: &'static str) -> Self {
        Self {
            value,
            mode: FailureMode::MatrixFailure,
            label,
        }
    }
}

/// Trait for ply failure criteria.
///
/// Both operations are pure and deterministic: no I/O, no mutation of
/// inputs, no retained state. Implementations may be called concurrently
/// from any number of threads.
///
/// # Strategy Pattern
///
/// This trait enables runtime swapping of failure models — linear-ratio
/// models (`Edge`, `FiberOnly`), quadratic-form models (`Christensen`,
/// `Ztl`), branch-selected models (`Hashin`, `Sun`), and power-law
/// models (`Cuntze`) all answer the same two questions: how far is this
/// stress state from failure, and what does the failure surface look like.
pub trait FailureCriterion: Send + Sync {
    /// Computes the reserve factor for one stress/strain state.
    ///
    /// The hot path: per-mode candidate reserve factors are computed on
    /// the stack and the minimum governs; exact ties keep the first
    /// computed candidate. An all-zero stress vector yields
    /// `ReserveFactor::undamaged()`. A closed-form solve leaving its
    /// numeric domain (negative discriminant) is a typed error, never a
    /// clamped or defaulted value.
    fn evaluate(
        &self,
        material: &MaterialStrengths,
        ply: &PlyState,
        state: &StressStrainState,
    ) -> LaminaResult<ReserveFactor>;

    /// Tessellates the failure surface for display.
    ///
    /// `quality` scales fixed base sample counts per parameter direction
    /// (O(quality²) quads). A non-positive or NaN quality yields an
    /// empty mesh; tessellation has no other error path. The result is
    /// never fed back into `evaluate`.
    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh;

    /// Returns the criterion's name.
    fn name(&self) -> &str;
}
