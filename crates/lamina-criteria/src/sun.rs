//! Sun criterion.
//!
//! A linear fiber ratio plus an elliptical matrix mode:
//!
//! - fiber:  `|σ11| = X` (sign-selected)
//! - matrix: `(σ22/Y)² + (τ12/S)² = 1`
//!
//! For an embedded ply (material on both faces) the transverse-tension
//! and shear allowables are raised by the constraint factor 1.5; the
//! free-surface allowables apply otherwise. The envelope is drawn for
//! the free-surface (unscaled) allowables.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::constants::EMBEDDED_STRENGTH_FACTOR;
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::{governing, safe_ratio};
use crate::tessellation::{cap_patch, cylinder_patch};
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The Sun linear/elliptical criterion with embedded-ply strengthening.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sun;

impl Sun {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }

    /// Matrix-mode cross-section point at an angle in the (σ22, τ12)
    /// plane, for the free-surface allowables.
    fn matrix_ring(material: &MaterialStrengths, angle: Scalar) -> (Scalar, Scalar) {
        let (c, sn) = (angle.cos(), angle.sin());
        let y = if c >= 0.0 {
            material.r_nor_tension
        } else {
            material.r_nor_compression
        };
        let s = material.r_shear;
        let index = (c / y) * (c / y) + (sn / s) * (sn / s);
        let r = 1.0 / index.sqrt();
        (r * c, r * sn)
    }
}

impl FailureCriterion for Sun {
    fn evaluate(
        &self,
        material: &MaterialStrengths,
        ply: &PlyState,
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

        let constraint = if ply.embedded {
            EMBEDDED_STRENGTH_FACTOR
        } else {
            1.0
        };
        let yt = material.r_nor_tension * constraint;
        let yc = material.r_nor_compression;
        let s = material.r_shear * constraint;

        let y = if s2 >= 0.0 { yt } else { yc };
        let matrix_index = (s2 / y) * (s2 / y) + (t12 / s) * (t12 / s);
        let (matrix, matrix_label) = if matrix_index > 0.0 {
            let label = if (s2 / y).abs() >= (t12 / s).abs() {
                if s2 >= 0.0 {
                    "matrix tension"
                } else {
                    "matrix compression"
                }
            } else {
                "matrix shear"
            };
            (1.0 / matrix_index.sqrt(), label)
        } else {
            (Scalar::INFINITY, "")
        };

        Ok(governing(&[
            (fiber, FailureMode::FiberFailure, fiber_label),
            (matrix, FailureMode::MatrixFailure, matrix_label),
        ]))
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let xt = material.r_par_tension;
        let xc = material.r_par_compression;
        let s = material.r_shear;

        let ring = |angle: Scalar| Self::matrix_ring(material, angle);

        let side_normal = move |p: DVec3| {
            let y = if p.y >= 0.0 {
                material.r_nor_tension
            } else {
                material.r_nor_compression
            };
            let grad = DVec3::new(0.0, 2.0 * p.y / (y * y), 2.0 * p.z / (s * s));
            orient_outward(unit(grad), p)
        };

        let mut mesh = cylinder_patch(-xc, xt, quality, ring, side_normal);
        mesh.extend(cap_patch(xt, 1.0, quality, ring));
        mesh.extend(cap_patch(-xc, -1.0, quality, ring));
        mesh
    }

    fn name(&self) -> &str {
        "sun"
    }
}
