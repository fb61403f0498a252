//! Rotem criterion.
//!
//! A linear fiber ratio plus a matrix ellipse that includes the
//! fiber-direction stress carried by the matrix itself:
//!
//! ```text
//! (E_m·ε11 / R_m)² + (σ22/Y)² + (τ12/S)² = 1
//! ```
//!
//! with the matrix modulus `E_m` and matrix strengths `R_mt`/`R_mc`
//! taken from the extension map (all three required, no defaults). The
//! matrix normal stress allowable Y and R_m are sign-selected.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::{governing, safe_ratio};
use crate::tessellation::quadrant_ray_patches;
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The Rotem matrix-modulus criterion.
#[derive(Debug, Clone, Copy)]
pub struct Rotem {
    /// Matrix Young's modulus E_m.
    e_matrix: Scalar,
    /// Matrix tensile strength R_mt.
    r_matrix_tension: Scalar,
    /// Matrix compressive strength magnitude R_mc.
    r_matrix_compression: Scalar,
}

impl Rotem {
    /// Extension keys this model requires (no defaults).
    pub const REQUIRED_KEYS: &'static [&'static str] =
        &["Rotem.Em", "Rotem.Rmt", "Rotem.Rmc"];

    /// Creates the criterion from explicit matrix constants.
    pub fn new(e_matrix: Scalar, r_matrix_tension: Scalar, r_matrix_compression: Scalar) -> Self {
        Self {
            e_matrix,
            r_matrix_tension,
            r_matrix_compression,
        }
    }

    /// Resolves the matrix constants from the material.
    pub fn from_material(material: &MaterialStrengths) -> LaminaResult<Self> {
        Ok(Self {
            e_matrix: material.require_extension("rotem", "Rotem.Em")?,
            r_matrix_tension: material.require_extension("rotem", "Rotem.Rmt")?,
            r_matrix_compression: material.require_extension("rotem", "Rotem.Rmc")?,
        })
    }

    /// Matrix-mode index for a fiber-direction strain and transverse
    /// stress pair.
    fn matrix_index(
        &self,
        material: &MaterialStrengths,
        e1: Scalar,
        s2: Scalar,
        t12: Scalar,
    ) -> Scalar {
        let matrix_fiber_stress = self.e_matrix * e1;
        let r_m = if matrix_fiber_stress >= 0.0 {
            self.r_matrix_tension
        } else {
            self.r_matrix_compression
        };
        let y = if s2 >= 0.0 {
            material.r_nor_tension
        } else {
            material.r_nor_compression
        };
        let s = material.r_shear;
        let fm = matrix_fiber_stress / r_m;
        fm * fm + (s2 / y) * (s2 / y) + (t12 / s) * (t12 / s)
    }
}

impl FailureCriterion for Rotem {
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
        let e1 = state.strain[0];

        let (fiber, fiber_label) = if s1 >= 0.0 {
            (safe_ratio(material.r_par_tension, s1), "fiber tension")
        } else {
            (
                safe_ratio(material.r_par_compression, -s1),
                "fiber compression",
            )
        };

        let matrix_index = self.matrix_index(material, e1, s2, t12);
        let (matrix, matrix_label) = if matrix_index > 0.0 {
            let label = if (s2 / material.r_nor_tension).abs() >= (t12 / material.r_shear).abs() {
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
        let e_par = material.e_par;

        // Ray sampling happens in stress space; the fiber-direction
        // strain along a ray is σ11/E∥ for the uniaxial ply.
        let matrix_scale = move |d: DVec3| {
            let index = self.matrix_index(material, d.x / e_par, d.y, d.z);
            if index > 0.0 {
                1.0 / index.sqrt()
            } else {
                Scalar::INFINITY
            }
        };
        let fiber_scale = move |d: DVec3| {
            if d.x >= 0.0 {
                safe_ratio(xt, d.x)
            } else {
                safe_ratio(xc, -d.x)
            }
        };
        let scale = move |d: DVec3| fiber_scale(d).min(matrix_scale(d));

        let normal = move |p: DVec3, d: DVec3| {
            let grad = if fiber_scale(d) <= matrix_scale(d) {
                DVec3::new(if p.x >= 0.0 { 1.0 } else { -1.0 }, 0.0, 0.0)
            } else {
                let r_m = if p.x >= 0.0 {
                    self.r_matrix_tension
                } else {
                    self.r_matrix_compression
                };
                let y = if p.y >= 0.0 {
                    material.r_nor_tension
                } else {
                    material.r_nor_compression
                };
                let s = material.r_shear;
                let k = self.e_matrix / (e_par * r_m);
                DVec3::new(
                    2.0 * k * k * p.x,
                    2.0 * p.y / (y * y),
                    2.0 * p.z / (s * s),
                )
            };
            orient_outward(unit(grad), p)
        };

        quadrant_ray_patches(quality, scale, normal)
    }

    fn name(&self) -> &str {
        "rotem"
    }
}
