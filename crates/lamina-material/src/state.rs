//! In-plane stress/strain state of a ply in its local material axes.

use serde::{Deserialize, Serialize};

use lamina_types::Scalar;

/// The in-plane stress and strain vectors of one ply.
///
/// Both vectors have exactly 3 components in the ply's local axes:
/// stress `(σ11, σ22, τ12)` and engineering strain `(ε11, ε22, γ12)`.
/// No implicit unit conversion is performed anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressStrainState {
    /// Stress vector `(σ11, σ22, τ12)`.
    pub stress: [Scalar; 3],
    /// Engineering strain vector `(ε11, ε22, γ12)`.
    pub strain: [Scalar; 3],
}

impl StressStrainState {
    /// Creates a state from stress and strain vectors.
    pub fn new(stress: [Scalar; 3], strain: [Scalar; 3]) -> Self {
        Self { stress, strain }
    }

    /// Creates a pure stress state with zero strain.
    pub fn from_stress(stress: [Scalar; 3]) -> Self {
        Self {
            stress,
            strain: [0.0; 3],
        }
    }

    /// Returns true if the stress vector is exactly zero.
    ///
    /// Every criterion defines this case as "cannot fail" (reserve
    /// factor +∞, undamaged), not as an error.
    pub fn is_zero_stress(&self) -> bool {
        self.stress == [0.0; 3]
    }

    /// Returns the state with both vectors scaled by `k`.
    pub fn scaled(&self, k: Scalar) -> Self {
        Self {
            stress: [self.stress[0] * k, self.stress[1] * k, self.stress[2] * k],
            strain: [self.strain[0] * k, self.strain[1] * k, self.strain[2] * k],
        }
    }

    /// Rotates the strain vector from laminate axes into ply-local axes.
    ///
    /// Standard 2D tensor transformation by the ply angle, with the
    /// engineering-shear convention (γ = 2·ε12). Used by the max-strain
    /// criterion when its global-axes flag is set.
    pub fn strain_in_ply_frame(&self, angle_rad: Scalar) -> [Scalar; 3] {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        let [e1, e2, g12] = self.strain;
        let e12 = g12 / 2.0;

        let e1_local = c * c * e1 + s * s * e2 + 2.0 * c * s * e12;
        let e2_local = s * s * e1 + c * c * e2 - 2.0 * c * s * e12;
        let e12_local = -c * s * e1 + c * s * e2 + (c * c - s * s) * e12;

        [e1_local, e2_local, 2.0 * e12_local]
    }
}
