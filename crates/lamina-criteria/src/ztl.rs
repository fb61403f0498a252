//! ZTL criterion — a Tsai-Wu tensor-polynomial variant.
//!
//! One global quadratic form over all three stress components:
//!
//! ```text
//! F1·σ11 + F2·σ22 + F11·σ11² + F22·σ22² + F66·τ12² + 2·F12·σ11·σ22 = 1
//! ```
//!
//! with the interaction term `F12 = F12* · √(F11·F22)`. The load factor
//! comes from the positive quadratic root. `ZTL.f12star` defaults to
//! −0.5 (the standard Tsai-Wu recommendation); values outside [−1, 1]
//! can make the form indefinite, in which case the solve faults with a
//! negative discriminant for some stress states — that fault is
//! surfaced, never clamped.

use glam::DVec3;

use lamina_envelope::normals::{orient_outward, unit};
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::numeric::positive_quadratic_root;
use crate::tessellation::warped_sphere_patch;
use crate::traits::{FailureCriterion, ReserveFactor};

/// The quadratic-form coefficients of the ZTL polynomial.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    f1: Scalar,
    f2: Scalar,
    f11: Scalar,
    f22: Scalar,
    f66: Scalar,
    f12: Scalar,
}

/// The ZTL tensor-polynomial criterion.
#[derive(Debug, Clone, Copy)]
pub struct Ztl {
    /// Normalized interaction coefficient F12*.
    f12_star: Scalar,
}

impl Ztl {
    /// Optional keys with documented defaults.
    pub const OPTIONAL_KEYS: &'static [&'static str] = &["ZTL.f12star"];

    /// Default normalized interaction coefficient.
    pub const DEFAULT_F12_STAR: Scalar = -0.5;

    /// Creates the criterion with an explicit interaction coefficient.
    pub fn new(f12_star: Scalar) -> Self {
        Self { f12_star }
    }

    /// Resolves `ZTL.f12star` from the material, defaulting to −0.5.
    pub fn from_material(material: &MaterialStrengths) -> Self {
        Self {
            f12_star: material
                .extension("ZTL.f12star")
                .unwrap_or(Self::DEFAULT_F12_STAR),
        }
    }

    fn coefficients(&self, material: &MaterialStrengths) -> Coefficients {
        let xt = material.r_par_tension;
        let xc = material.r_par_compression;
        let yt = material.r_nor_tension;
        let yc = material.r_nor_compression;
        let s = material.r_shear;

        let f11 = 1.0 / (xt * xc);
        let f22 = 1.0 / (yt * yc);
        Coefficients {
            f1: 1.0 / xt - 1.0 / xc,
            f2: 1.0 / yt - 1.0 / yc,
            f11,
            f22,
            f66: 1.0 / (s * s),
            f12: self.f12_star * (f11 * f22).sqrt(),
        }
    }
}

impl FailureCriterion for Ztl {
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
        let k = self.coefficients(material);

        let a = k.f11 * s1 * s1 + k.f22 * s2 * s2 + k.f66 * t12 * t12 + 2.0 * k.f12 * s1 * s2;
        let b = k.f1 * s1 + k.f2 * s2;
        let value = positive_quadratic_root("ztl", a, b)?;
        if value.is_infinite() {
            return Ok(ReserveFactor::undamaged());
        }

        // Classify by the polynomial contributions at the failure point.
        let (fs1, fs2, ft) = (value * s1, value * s2, value * t12);
        let fiber_part = (k.f11 * fs1 * fs1 + k.f1 * fs1).abs();
        let matrix_part = (k.f22 * fs2 * fs2 + k.f66 * ft * ft + k.f2 * fs2).abs();

        let result = if fiber_part >= matrix_part {
            if s1 >= 0.0 {
                ReserveFactor::fiber(value, "fiber tension")
            } else {
                ReserveFactor::fiber(value, "fiber compression")
            }
        } else if (fs2 * fs2 * k.f22).abs() >= (ft * ft * k.f66).abs() {
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
        let k = self.coefficients(material);

        // The interaction term tilts the long principal axis a few
        // degrees off σ11; whitening the direction grid by the
        // geometric-mean strengths keeps that elongated axis resolved.
        // Stress-axis directions are fixed points of the warp.
        let white = DVec3::new(
            (material.r_par_tension * material.r_par_compression).sqrt(),
            (material.r_nor_tension * material.r_nor_compression).sqrt(),
            material.r_shear,
        );
        let warp = move |d: DVec3| unit(d * white);

        // The form is positive-definite for |F12*| ≤ 1, so the root
        // exists along every direction.
        let scale = move |d: DVec3| {
            let a = k.f11 * d.x * d.x
                + k.f22 * d.y * d.y
                + k.f66 * d.z * d.z
                + 2.0 * k.f12 * d.x * d.y;
            let b = k.f1 * d.x + k.f2 * d.y;
            ((b * b + 4.0 * a).sqrt() - b) / (2.0 * a)
        };
        let normal = move |p: DVec3, _d: DVec3| {
            let grad = DVec3::new(
                2.0 * k.f11 * p.x + 2.0 * k.f12 * p.y + k.f1,
                2.0 * k.f22 * p.y + 2.0 * k.f12 * p.x + k.f2,
                2.0 * k.f66 * p.z,
            );
            orient_outward(unit(grad), p)
        };
        warped_sphere_patch(quality, warp, scale, normal)
    }

    fn name(&self) -> &str {
        "ztl"
    }
}
