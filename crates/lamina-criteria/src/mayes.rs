//! Mayes criterion.
//!
//! Two elliptical modes with sign-selected allowables, each combining a
//! normal stress with the in-plane shear:
//!
//! - fiber:  `(σ11/X)² + (τ12/R∥⊥)² = 1`
//! - matrix: `(σ22/Y)² + (τ12/R∥⊥)² = 1`
//!
//! The smaller elliptical reserve factor governs.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::tessellation::quadrant_ray_patches;
use crate::traits::{FailureCriterion, ReserveFactor};

/// The Mayes elliptical two-mode criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mayes;

impl Mayes {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn fiber_index(material: &MaterialStrengths, s1: Scalar, t12: Scalar) -> Scalar {
        let x = if s1 >= 0.0 {
            material.r_par_tension
        } else {
            material.r_par_compression
        };
        let s = material.r_shear;
        (s1 / x) * (s1 / x) + (t12 / s) * (t12 / s)
    }

    #[inline]
    fn matrix_index(material: &MaterialStrengths, s2: Scalar, t12: Scalar) -> Scalar {
        let y = if s2 >= 0.0 {
            material.r_nor_tension
        } else {
            material.r_nor_compression
        };
        let s = material.r_shear;
        (s2 / y) * (s2 / y) + (t12 / s) * (t12 / s)
    }
}

impl FailureCriterion for Mayes {
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

        let fiber_index = Self::fiber_index(material, s1, t12);
        let matrix_index = Self::matrix_index(material, s2, t12);

        // Fiber computed first: exact ties stay with the fiber mode.
        if fiber_index >= matrix_index {
            if fiber_index <= 0.0 {
                return Ok(ReserveFactor::undamaged());
            }
            let value = 1.0 / fiber_index.sqrt();
            let label = if (s1 / material.r_par_tension).abs() >= (t12 / material.r_shear).abs() {
                if s1 >= 0.0 {
                    "fiber tension"
                } else {
                    "fiber compression"
                }
            } else {
                "fiber shear"
            };
            Ok(ReserveFactor::fiber(value, label))
        } else {
            let value = 1.0 / matrix_index.sqrt();
            let label = if (s2 / material.r_nor_tension).abs() >= (t12 / material.r_shear).abs() {
                if s2 >= 0.0 {
                    "matrix tension"
                } else {
                    "matrix compression"
                }
            } else {
                "matrix shear"
            };
            Ok(ReserveFactor::matrix(value, label))
        }
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let scale = |d: DVec3| {
            let index = Self::fiber_index(material, d.x, d.z)
                .max(Self::matrix_index(material, d.y, d.z));
            1.0 / index.sqrt()
        };
        let normal = |p: DVec3, _d: DVec3| {
            let s = material.r_shear;
            let fiber_index = Self::fiber_index(material, p.x, p.z);
            let matrix_index = Self::matrix_index(material, p.y, p.z);
            let grad = if fiber_index >= matrix_index {
                let x = if p.x >= 0.0 {
                    material.r_par_tension
                } else {
                    material.r_par_compression
                };
                DVec3::new(2.0 * p.x / (x * x), 0.0, 2.0 * p.z / (s * s))
            } else {
                let y = if p.y >= 0.0 {
                    material.r_nor_tension
                } else {
                    material.r_nor_compression
                };
                DVec3::new(0.0, 2.0 * p.y / (y * y), 2.0 * p.z / (s * s))
            };
            orient_outward(unit(grad), p)
        };
        quadrant_ray_patches(quality, scale, normal)
    }

    fn name(&self) -> &str {
        "mayes"
    }
}
