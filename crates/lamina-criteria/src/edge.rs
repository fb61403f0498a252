//! Edge criterion — independent maximum-stress ratios.
//!
//! Each stress component is compared against its own sign-selected
//! allowable with no interaction; the smallest linear ratio governs.
//! The failure surface is the axis-aligned strength box.

use lamina_envelope::sampler::{planar_patch, sample_count};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::constants::BASE_AXIAL_SAMPLES;
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::{governing, safe_ratio};
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The maximum-stress (edge) criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Edge;

impl Edge {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }
}

/// Emits the six faces of an axis-aligned stress box. Shared by the
/// edge and max-strain tessellations.
pub(crate) fn strength_box(
    s1_lo: Scalar,
    s1_hi: Scalar,
    s2_lo: Scalar,
    s2_hi: Scalar,
    t_hi: Scalar,
    quality: Scalar,
) -> EnvelopeMesh {
    let n = match sample_count(BASE_AXIAL_SAMPLES, quality) {
        Some(n) => n,
        None => return EnvelopeMesh::empty(),
    };
    let t_lo = -t_hi;

    let mut mesh = planar_patch(0, s1_hi, s2_lo, s2_hi, t_lo, t_hi, n, n, 1.0);
    mesh.extend(planar_patch(0, s1_lo, s2_lo, s2_hi, t_lo, t_hi, n, n, -1.0));
    mesh.extend(planar_patch(1, s2_hi, s1_lo, s1_hi, t_lo, t_hi, n, n, 1.0));
    mesh.extend(planar_patch(1, s2_lo, s1_lo, s1_hi, t_lo, t_hi, n, n, -1.0));
    mesh.extend(planar_patch(2, t_hi, s1_lo, s1_hi, s2_lo, s2_hi, n, n, 1.0));
    mesh.extend(planar_patch(2, t_lo, s1_lo, s1_hi, s2_lo, s2_hi, n, n, -1.0));
    mesh
}

impl FailureCriterion for Edge {
    fn evaluate(
        &self,
        material: &MaterialStrengths,
        _ply: &PlyState,
        state: &StressStrainState,
    ) -> LaminaResult<ReserveFactor> {
        if state.is_zero_stress() {
            return Ok(ReserveFactor::undamaged());
        }
        let [s1, s2, t12] = state.stress;

        let (fiber, fiber_label) = if s1 >= 0.0 {
            (safe_ratio(material.r_par_tension, s1), "fiber tension")
        } else {
            (
                safe_ratio(material.r_par_compression, -s1),
                "fiber compression",
            )
        };
        let (transverse, transverse_label) = if s2 >= 0.0 {
            (safe_ratio(material.r_nor_tension, s2), "matrix tension")
        } else {
            (
                safe_ratio(material.r_nor_compression, -s2),
                "matrix compression",
            )
        };
        let shear = safe_ratio(material.r_shear, t12.abs());

        Ok(governing(&[
            (fiber, FailureMode::FiberFailure, fiber_label),
            (transverse, FailureMode::MatrixFailure, transverse_label),
            (shear, FailureMode::MatrixFailure, "matrix shear"),
        ]))
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        strength_box(
            -material.r_par_compression,
            material.r_par_tension,
            -material.r_nor_compression,
            material.r_nor_tension,
            material.r_shear,
            quality,
        )
    }

    fn name(&self) -> &str {
        "edge"
    }
}
