//! Maximum-strain criterion.
//!
//! Independent linear ratios of strain components against strain
//! allowables. Normal-direction allowables default to strength/modulus
//! when their extension keys are absent; the shear strain allowable
//! `MaxStrain.gamma` is required (the material model carries no shear
//! modulus to derive it from).
//!
//! With `MaxStrain.global` set non-zero, the supplied strain vector is
//! taken in laminate axes and rotated into the ply frame before the
//! ratios are formed.

use lamina_envelope::EnvelopeMesh;
use lamina_material::{MaterialStrengths, PlyState, StressStrainState};
use lamina_types::{LaminaResult, Scalar};

use crate::edge::strength_box;
use crate::numeric::{governing, safe_ratio};
use crate::traits::{FailureCriterion, FailureMode, ReserveFactor};

/// The maximum-strain criterion.
///
/// Allowables are resolved from the material's extension map once at
/// construction, not per evaluation.
#[derive(Debug, Clone, Copy)]
pub struct MaxStrain {
    eps_par_tension: Scalar,
    eps_par_compression: Scalar,
    eps_nor_tension: Scalar,
    eps_nor_compression: Scalar,
    gamma: Scalar,
    rotate_to_local: bool,
}

impl MaxStrain {
    /// Extension keys this model understands.
    pub const REQUIRED_KEYS: &'static [&'static str] = &["MaxStrain.gamma"];
    /// Optional keys with documented defaults.
    pub const OPTIONAL_KEYS: &'static [&'static str] = &[
        "MaxStrain.eps_par_t",
        "MaxStrain.eps_par_c",
        "MaxStrain.eps_nor_t",
        "MaxStrain.eps_nor_c",
        "MaxStrain.global",
    ];

    /// Creates the criterion from explicit strain allowables.
    pub fn new(
        eps_par_tension: Scalar,
        eps_par_compression: Scalar,
        eps_nor_tension: Scalar,
        eps_nor_compression: Scalar,
        gamma: Scalar,
        rotate_to_local: bool,
    ) -> Self {
        Self {
            eps_par_tension,
            eps_par_compression,
            eps_nor_tension,
            eps_nor_compression,
            gamma,
            rotate_to_local,
        }
    }

    /// Resolves the model's extension keys against a material.
    ///
    /// Normal-direction allowables default to strength / modulus;
    /// `MaxStrain.gamma` must be present.
    pub fn from_material(material: &MaterialStrengths) -> LaminaResult<Self> {
        let gamma = material.require_extension("max_strain", "MaxStrain.gamma")?;
        Ok(Self {
            eps_par_tension: material
                .extension("MaxStrain.eps_par_t")
                .unwrap_or(material.r_par_tension / material.e_par),
            eps_par_compression: material
                .extension("MaxStrain.eps_par_c")
                .unwrap_or(material.r_par_compression / material.e_par),
            eps_nor_tension: material
                .extension("MaxStrain.eps_nor_t")
                .unwrap_or(material.r_nor_tension / material.e_nor),
            eps_nor_compression: material
                .extension("MaxStrain.eps_nor_c")
                .unwrap_or(material.r_nor_compression / material.e_nor),
            gamma,
            rotate_to_local: material.extension("MaxStrain.global").unwrap_or(0.0) != 0.0,
        })
    }
}

impl FailureCriterion for MaxStrain {
    fn evaluate(
        &self,
        _material: &MaterialStrengths,
        ply: &PlyState,
        state: &StressStrainState,
    ) -> LaminaResult<ReserveFactor> {
        if state.is_zero_stress() {
            return Ok(ReserveFactor::undamaged());
        }
        let [e1, e2, g12] = if self.rotate_to_local {
            state.strain_in_ply_frame(ply.angle_rad)
        } else {
            state.strain
        };

        let (fiber, fiber_label) = if e1 >= 0.0 {
            (safe_ratio(self.eps_par_tension, e1), "fiber tension")
        } else {
            (
                safe_ratio(self.eps_par_compression, -e1),
                "fiber compression",
            )
        };
        let (transverse, transverse_label) = if e2 >= 0.0 {
            (safe_ratio(self.eps_nor_tension, e2), "matrix tension")
        } else {
            (
                safe_ratio(self.eps_nor_compression, -e2),
                "matrix compression",
            )
        };
        let shear = safe_ratio(self.gamma, g12.abs());

        Ok(governing(&[
            (fiber, FailureMode::FiberFailure, fiber_label),
            (transverse, FailureMode::MatrixFailure, transverse_label),
            (shear, FailureMode::MatrixFailure, "matrix shear"),
        ]))
    }

    fn tessellate(&self, material: &MaterialStrengths, quality: Scalar) -> EnvelopeMesh {
        // Image of the strain box in stress space under the uncoupled
        // σ = E·ε map; the τ12 extent uses the shear strength since no
        // shear modulus is available.
        strength_box(
            -self.eps_par_compression * material.e_par,
            self.eps_par_tension * material.e_par,
            -self.eps_nor_compression * material.e_nor,
            self.eps_nor_tension * material.e_nor,
            material.r_shear,
            quality,
        )
    }

    fn name(&self) -> &str {
        "max_strain"
    }
}
