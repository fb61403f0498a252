//! Tsai-Hill criterion.
//!
//! A single quadratic failure index with sign-selected allowables:
//!
//! ```text
//! F = (σ11/X)² − σ11·σ22/X² + (σ22/Y)² + (τ12/S)²
//! ```
//!
//! where X and Y switch between tension and compression strength with
//! the sign of σ11 and σ22. F is homogeneous of degree 2, so the
//! reserve factor is `1/√F`. The failure mode is read from the dominant
//! index contribution.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::tessellation::quadrant_ray_patches;
use crate::traits::{FailureCriterion, ReserveFactor};

/// The Tsai-Hill interactive quadratic criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsaiHill;

impl TsaiHill {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn allowables(material: &MaterialStrengths, s1: Scalar, s2: Scalar) -> (Scalar, Scalar) {
        let x = if s1 >= 0.0 {
            material.r_par_tension
        } else {
            material.r_par_compression
        };
        let y = if s2 >= 0.0 {
            material.r_nor_tension
        } else {
            material.r_nor_compression
        };
        (x, y)
    }

    /// Failure index F at an arbitrary stress point.
    fn index(material: &MaterialStrengths, s1: Scalar, s2: Scalar, t12: Scalar) -> Scalar {
        let (x, y) = Self::allowables(material, s1, s2);
        let s = material.r_shear;
        (s1 / x) * (s1 / x) - s1 * s2 / (x * x) + (s2 / y) * (s2 / y) + (t12 / s) * (t12 / s)
    }
}

impl FailureCriterion for TsaiHill {
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
        let (x, y) = Self::allowables(material, s1, s2);
        let s = material.r_shear;

        let fiber_term = (s1 / x) * (s1 / x);
        let cross_term = -s1 * s2 / (x * x);
        let transverse_term = (s2 / y) * (s2 / y);
        let shear_term = (t12 / s) * (t12 / s);
        let f = fiber_term + cross_term + transverse_term + shear_term;

        if f <= 0.0 {
            // Interaction term cancels the quadratic index; the load ray
            // never reaches the surface.
            return Ok(ReserveFactor::undamaged());
        }
        let value = 1.0 / f.sqrt();

        let result = if fiber_term >= transverse_term + shear_term {
            if s1 >= 0.0 {
                ReserveFactor::fiber(value, "fiber tension")
            } else {
                ReserveFactor::fiber(value, "fiber compression")
            }
        } else if transverse_term >= shear_term {
            if s2 >= 0.0 {
                ReserveFactor::matrix(value, "matrix tension")
            } else {
                ReserveFactor::matrix(value, "matrix compression")
            }
        } else {
            ReserveFactor::matrix(value, "matrix shear")
        };
        Ok(result)
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let scale = |d: DVec3| {
            let f = Self::index(material, d.x, d.y, d.z);
            1.0 / f.sqrt()
        };
        // Analytic gradient of the quadratic index at the surface point.
        let normal = |p: DVec3, _d: DVec3| {
            let (x, y) = Self::allowables(material, p.x, p.y);
            let s = material.r_shear;
            let grad = DVec3::new(
                2.0 * p.x / (x * x) - p.y / (x * x),
                -p.x / (x * x) + 2.0 * p.y / (y * y),
                2.0 * p.z / (s * s),
            );
            orient_outward(unit(grad), p)
        };
        quadrant_ray_patches(quality, scale, normal)
    }

    fn name(&self) -> &str {
        "tsai_hill"
    }
}
