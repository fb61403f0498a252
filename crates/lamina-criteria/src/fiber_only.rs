//! Fiber-only criterion.
//!
//! Ignores the matrix entirely: the reserve factor is the linear ratio
//! of the sign-selected fiber-direction strength to σ11. Used for
//! fiber-dominated sizing and as the simplest baseline model.

use lamina_envelope::sampler::sample_count;
use lamina_envelope::{EnvelopeMesh, sampler};
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::constants::BASE_AXIAL_SAMPLES;
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::safe_ratio;
use crate::traits::{FailureCriterion, ReserveFactor};

/// Extent factor for the open transverse edges of the two caps. The
/// fiber surface is unbounded in σ22 and τ12; the caps are drawn a bit
/// past the matrix strengths so the openness is visible.
const TRANSVERSE_EXTENT: Scalar = 1.2;

/// The fiber-direction-only linear criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct FiberOnly;

impl FiberOnly {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }
}

impl FailureCriterion for FiberOnly {
    fn evaluate(
        &self,
        material: &MaterialStrengths,
        _ply: &PlyState,
        state: &StressStrainState,
    ) -> LaminaResult<ReserveFactor> {
        if state.is_zero_stress() {
            return Ok(ReserveFactor::undamaged());
        }
        let s1 = state.stress[0];

        let result = if s1 > 0.0 {
            ReserveFactor::fiber(safe_ratio(material.r_par_tension, s1), "fiber tension")
        } else if s1 < 0.0 {
            ReserveFactor::fiber(
                safe_ratio(material.r_par_compression, -s1),
                "fiber compression",
            )
        } else {
            // No fiber-direction load: this criterion cannot fail.
            ReserveFactor::undamaged()
        };
        Ok(result)
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let n = match sample_count(BASE_AXIAL_SAMPLES, quality) {
            Some(n) => n,
            None => return EnvelopeMesh::empty(),
        };

        let s2_lo = -TRANSVERSE_EXTENT * material.r_nor_compression;
        let s2_hi = TRANSVERSE_EXTENT * material.r_nor_tension;
        let t_hi = TRANSVERSE_EXTENT * material.r_shear;

        // Two planes normal to the fiber axis; the sides stay open.
        let mut mesh = sampler::planar_patch(
            0,
            material.r_par_tension,
            s2_lo,
            s2_hi,
            -t_hi,
            t_hi,
            n,
            n,
            1.0,
        );
        mesh.extend(sampler::planar_patch(
            0,
            -material.r_par_compression,
            s2_lo,
            s2_hi,
            -t_hi,
            t_hi,
            n,
            n,
            -1.0,
        ));
        mesh
    }

    fn name(&self) -> &str {
        "fiber_only"
    }
}
