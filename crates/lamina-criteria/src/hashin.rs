//! Hashin criterion (1980, in-plane form).
//!
//! Four separate failure modes, branch-selected on stress signs:
//!
//! - fiber tension (σ11 > 0):      `(σ11/R∥t)² + (τ12/S)² = 1`
//! - fiber compression (σ11 < 0):  `−σ11 = R∥c`
//! - matrix tension (σ22 ≥ 0):     `(σ22/R⊥t)² + (τ12/S)² = 1`
//! - matrix compression (σ22 < 0): quadratic in the load factor,
//!   `[(σ22/2S)² + (τ12/S)²]·rf² + [(R⊥c/2S)² − 1]·(σ22/R⊥c)·rf = 1`
//!
//! The governing mode is the smallest candidate reserve factor.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::{governing, positive_quadratic_root, safe_ratio};
use crate::tessellation::quadrant_ray_patches;
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The Hashin branch-selected criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hashin;

impl Hashin {
    /// Creates the criterion.
    pub fn new() -> Self {
        Self
    }
}

impl FailureCriterion for Hashin {
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

        let mut candidates = [(Scalar::INFINITY, FailureMode::Undamaged, ""); 4];

        // Fiber modes first (evaluation order is the tie-break).
        if s1 > 0.0 {
            let f = (s1 / xt) * (s1 / xt) + (t12 / s) * (t12 / s);
            candidates[0] = (1.0 / f.sqrt(), FailureMode::FiberFailure, "fiber tension");
        } else if s1 < 0.0 {
            candidates[1] = (
                safe_ratio(xc, -s1),
                FailureMode::FiberFailure,
                "fiber compression",
            );
        }

        if s2 >= 0.0 {
            let f = (s2 / yt) * (s2 / yt) + (t12 / s) * (t12 / s);
            if f > 0.0 {
                candidates[2] = (1.0 / f.sqrt(), FailureMode::MatrixFailure, "matrix tension");
            }
        } else {
            let a = (s2 / (2.0 * s)) * (s2 / (2.0 * s)) + (t12 / s) * (t12 / s);
            let b = ((yc / (2.0 * s)) * (yc / (2.0 * s)) - 1.0) * s2 / yc;
            let rf = positive_quadratic_root("hashin", a, b)?;
            candidates[3] = (rf, FailureMode::MatrixFailure, "matrix compression");
        }

        Ok(governing(&candidates))
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        let xt = material.r_par_tension;
        let xc = material.r_par_compression;
        let yt = material.r_nor_tension;
        let yc = material.r_nor_compression;
        let s = material.r_shear;

        // Candidate ray scales of the fiber and matrix surfaces along a
        // unit direction; the governing surface is the nearer one.
        let fiber_scale = move |d: DVec3| {
            if d.x >= 0.0 {
                let f = (d.x / xt) * (d.x / xt) + (d.z / s) * (d.z / s);
                if f > 0.0 {
                    1.0 / f.sqrt()
                } else {
                    Scalar::INFINITY
                }
            } else {
                safe_ratio(xc, -d.x)
            }
        };
        let matrix_scale = move |d: DVec3| {
            if d.y >= 0.0 {
                let f = (d.y / yt) * (d.y / yt) + (d.z / s) * (d.z / s);
                if f > 0.0 {
                    1.0 / f.sqrt()
                } else {
                    Scalar::INFINITY
                }
            } else {
                let a = (d.y / (2.0 * s)) * (d.y / (2.0 * s)) + (d.z / s) * (d.z / s);
                let b = ((yc / (2.0 * s)) * (yc / (2.0 * s)) - 1.0) * d.y / yc;
                // a > 0 off the σ11 axis; the discriminant b² + 4a is
                // positive for any positive strengths.
                (( b * b + 4.0 * a).sqrt() - b) / (2.0 * a)
            }
        };

        let scale = move |d: DVec3| fiber_scale(d).min(matrix_scale(d));

        // Normal of whichever mode surface governs at this point.
        let normal = move |p: DVec3, d: DVec3| {
            let grad = if fiber_scale(d) <= matrix_scale(d) {
                if p.x >= 0.0 {
                    DVec3::new(2.0 * p.x / (xt * xt), 0.0, 2.0 * p.z / (s * s))
                } else {
                    DVec3::new(-1.0, 0.0, 0.0)
                }
            } else if p.y >= 0.0 {
                DVec3::new(0.0, 2.0 * p.y / (yt * yt), 2.0 * p.z / (s * s))
            } else {
                DVec3::new(
                    0.0,
                    2.0 * p.y / (4.0 * s * s) + ((yc / (2.0 * s)) * (yc / (2.0 * s)) - 1.0) / yc,
                    2.0 * p.z / (s * s),
                )
            };
            orient_outward(unit(grad), p)
        };

        quadrant_ray_patches(quality, scale, normal)
    }

    fn name(&self) -> &str {
        "hashin"
    }
}
