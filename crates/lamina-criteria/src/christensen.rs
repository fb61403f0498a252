//! Christensen criterion.
//!
//! Two quadratic-form modes, each solved for the load factor with the
//! positive quadratic root:
//!
//! - fiber:  `(1/R∥t − 1/R∥c)·σ11 + σ11²/(R∥t·R∥c) = 1`
//! - matrix: `(1/R⊥t − 1/R⊥c)·σ22 + σ22²/(R⊥t·R⊥c) + (τ12/R∥⊥)² = 1`
//!
//! The fiber mode reduces to the two planes σ11 = R∥t and σ11 = −R∥c;
//! the matrix mode is a shifted elliptical cylinder along the σ11 axis.
//! The tessellation mirrors that decomposition: cylinder side plus two
//! end caps.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::{governing, positive_quadratic_root};
use crate::tessellation::{cap_patch, cylinder_patch};
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The Christensen quadratic-form criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Christensen;

impl Christensen {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }

    /// Matrix-mode cross-section point at an angle in the (σ22, τ12)
    /// plane: the positive quadratic root along that 2D ray.
    ///
    /// The quadratic coefficient is strictly positive for positive
    /// strengths, so the root always exists.
    fn matrix_ring(material: &MaterialStrengths, angle: Scalar) -> (Scalar, Scalar) {
        let yt = material.r_nor_tension;
        let yc = material.r_nor_compression;
        let s = material.r_shear;
        let (c, sn) = (angle.cos(), angle.sin());

        let a = c * c / (yt * yc) + sn * sn / (s * s);
        let b = (1.0 / yt - 1.0 / yc) * c;
        let r = ((b * b + 4.0 * a).sqrt() - b) / (2.0 * a);
        (r * c, r * sn)
    }
}

impl FailureCriterion for Christensen {
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
        let xt = material.r_par_tension;
        let xc = material.r_par_compression;
        let yt = material.r_nor_tension;
        let yc = material.r_nor_compression;
        let s = material.r_shear;

        let fiber = positive_quadratic_root(
            "christensen",
            s1 * s1 / (xt * xc),
            (1.0 / xt - 1.0 / xc) * s1,
        )?;
        let matrix = positive_quadratic_root(
            "christensen",
            s2 * s2 / (yt * yc) + (t12 / s) * (t12 / s),
            (1.0 / yt - 1.0 / yc) * s2,
        )?;

        let fiber_label = if s1 >= 0.0 {
            "fiber tension"
        } else {
            "fiber compression"
        };
        let matrix_label = if (s2 / yt).abs() >= (t12 / s).abs() {
            if s2 >= 0.0 {
                "matrix tension"
            } else {
                "matrix compression"
            }
        } else {
            "matrix shear"
        };

        Ok(governing(&[
            (fiber, FailureMode::FiberFailure, fiber_label),
            (matrix, FailureMode::MatrixFailure, matrix_label),
        ]))
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let xt = material.r_par_tension;
        let xc = material.r_par_compression;
        let yt = material.r_nor_tension;
        let yc = material.r_nor_compression;
        let s = material.r_shear;

        let ring = |angle: Scalar| Self::matrix_ring(material, angle);

        // Gradient of the matrix quadratic at a side-surface point.
        let side_normal = move |p: DVec3| {
            let grad = DVec3::new(
                0.0,
                2.0 * p.y / (yt * yc) + (1.0 / yt - 1.0 / yc),
                2.0 * p.z / (s * s),
            );
            orient_outward(unit(grad), p)
        };

        let mut mesh = cylinder_patch(-xc, xt, quality, ring, side_normal);
        mesh.extend(cap_patch(xt, 1.0, quality, ring));
        mesh.extend(cap_patch(-xc, -1.0, quality, ring));
        mesh
    }

    fn name(&self) -> &str {
        "christensen"
    }
}
