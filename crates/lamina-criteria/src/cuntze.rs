//! Cuntze failure-mode-concept (FMC) criterion.
//!
//! Five mode efforts, each a linear stress ratio, blended by a
//! power-law interaction with a curve-fit exponent `m`:
//!
//! ```text
//! Eff^m = Σ_i Eff_i^m ,   rf = (Σ_i Eff_i^m)^(−1/m)
//! ```
//!
//! The matrix-shear effort `(|τ12| + μ⊥∥·σ22) / R∥⊥` is guarded: when
//! internal friction closes the shear mode (`|τ12| + μ⊥∥·σ22 ≤ 0`) its
//! effort is zero, avoiding a negative base under a non-integer
//! exponent. Both `Cuntze.m` and `Cuntze.muesp` are required keys.

use glam::DVec3;

use lamina_envelope::normals::gradient_normal;
use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::tessellation::full_sphere_patch;
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The Cuntze FMC power-law criterion.
#[derive(Debug, Clone, Copy)]
pub struct Cuntze {
    /// Mode-interaction exponent (typically 2.5–3.1).
    exponent: Scalar,
    /// Internal friction coefficient μ⊥∥.
    mue_sp: Scalar,
}

impl Cuntze {
    /// Extension keys this model requires (no defaults).
    pub const REQUIRED_KEYS: &'static [&'static str] = &["Cuntze.m", "Cuntze.muesp"];

    /// Creates the criterion from explicit constants.
    pub fn new(exponent: Scalar, mue_sp: Scalar) -> Self {
        Self { exponent, mue_sp }
    }

    /// Resolves `Cuntze.m` and `Cuntze.muesp` from the material.
    pub fn from_material(material: &MaterialStrengths) -> LaminaResult<Self> {
        Ok(Self {
            exponent: material.require_extension("cuntze", "Cuntze.m")?,
            mue_sp: material.require_extension("cuntze", "Cuntze.muesp")?,
        })
    }

    /// The five mode efforts at a stress point. Inapplicable modes are
    /// zero. Order: FF tension, FF compression, IFF tension,
    /// IFF compression, IFF shear.
    fn efforts(&self, material: &MaterialStrengths, s1: Scalar, s2: Scalar, t12: Scalar) -> [Scalar; 5] {
        let mut eff = [0.0; 5];
        if s1 > 0.0 {
            eff[0] = s1 / material.r_par_tension;
        } else if s1 < 0.0 {
            eff[1] = -s1 / material.r_par_compression;
        }
        if s2 > 0.0 {
            eff[2] = s2 / material.r_nor_tension;
        } else if s2 < 0.0 {
            eff[3] = -s2 / material.r_nor_compression;
        }
        let shear_drive = t12.abs() + self.mue_sp * s2;
        if shear_drive > 0.0 {
            eff[4] = shear_drive / material.r_shear;
        }
        eff
    }

    /// The summed power-law failure index Σ Eff_i^m.
    fn index(&self, material: &MaterialStrengths, s1: Scalar, s2: Scalar, t12: Scalar) -> Scalar {
        self.efforts(material, s1, s2, t12)
            .iter()
            .map(|e| e.powf(self.exponent))
            .sum()
    }
}

impl FailureCriterion for Cuntze {
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
        let eff = self.efforts(material, s1, s2, t12);
        let sum: Scalar = eff.iter().map(|e| e.powf(self.exponent)).sum();
        if sum <= 0.0 {
            // Every mode closed (e.g. pure transverse compression with
            // the shear mode shut by friction and σ22 = 0 elsewhere).
            return Ok(ReserveFactor::undamaged());
        }
        let value = sum.powf(-1.0 / self.exponent);

        // The largest effort names the governing mode.
        let labels = [
            (FailureMode::FiberFailure, "fiber tension"),
            (FailureMode::FiberFailure, "fiber compression"),
            (FailureMode::MatrixFailure, "matrix tension"),
            (FailureMode::MatrixFailure, "matrix compression"),
            (FailureMode::MatrixFailure, "matrix shear"),
        ];
        let mut dominant = 0;
        for i in 1..5 {
            if eff[i] > eff[dominant] {
                dominant = i;
            }
        }
        let (mode, label) = labels[dominant];
        Ok(ReserveFactor { value, mode, label })
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        // Every effort is linear in the stress, so the summed index is
        // homogeneous of degree m and the surface is ray-scalable.
        let scale = |d: DVec3| {
            let sum = self.index(material, d.x, d.y, d.z);
            if sum > 0.0 {
                sum.powf(-1.0 / self.exponent)
            } else {
                0.0
            }
        };
        // No convenient closed-form gradient across the power-law blend:
        // central finite differences in normalized stress units.
        let step = DVec3::new(
            material.r_par_tension,
            material.r_nor_tension,
            material.r_shear,
        );
        let normal = |p: DVec3, _d: DVec3| {
            gradient_normal(|q| self.index(material, q.x, q.y, q.z), p, step)
        };
        full_sphere_patch(quality, scale, normal)
    }

    fn name(&self) -> &str {
        "cuntze"
    }
}
