//! Ply strength allowables and elastic moduli.
//!
//! Strengths are stored as positive magnitudes even for compression
//! (compression acts in the negative stress direction; the criteria
//! apply the sign). Criterion-specific constants live in a named
//! extension-scalar map keyed by fixed `"<Model>.<key>"` strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lamina_types::{LaminaError, LaminaResult, Scalar};

/// Strength allowables and moduli of a unidirectional ply.
///
/// Axis convention: `par` (∥) is the fiber direction, `nor` (⊥) the
/// in-plane transverse direction. All strengths are > 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialStrengths {
    /// Human-readable name (e.g. "T300/epoxy").
    pub name: String,

    /// Tensile strength in the fiber direction (R∥t).
    pub r_par_tension: Scalar,

    /// Compressive strength magnitude in the fiber direction (R∥c).
    pub r_par_compression: Scalar,

    /// Tensile strength transverse to the fiber (R⊥t).
    pub r_nor_tension: Scalar,

    /// Compressive strength magnitude transverse to the fiber (R⊥c).
    pub r_nor_compression: Scalar,

    /// In-plane shear strength (R∥⊥).
    pub r_shear: Scalar,

    /// Young's modulus in the fiber direction (E∥).
    pub e_par: Scalar,

    /// Young's modulus transverse to the fiber (E⊥).
    pub e_nor: Scalar,

    /// Criterion-specific named constants, keyed `"<Model>.<key>"`
    /// (e.g. `"Cuntze.m"`, `"ZTL.f12star"`). Keys are unique.
    #[serde(default)]
    pub extensions: HashMap<String, Scalar>,
}

impl MaterialStrengths {
    /// Looks up an extension scalar. Returns `None` if the key is absent.
    pub fn extension(&self, key: &str) -> Option<Scalar> {
        self.extensions.get(key).copied()
    }

    /// Looks up an extension scalar a criterion declares as required.
    ///
    /// A missing key is a configuration error at the material-definition
    /// boundary, surfaced as [`LaminaError::MissingParameter`].
    pub fn require_extension(
        &self,
        criterion: &'static str,
        key: &'static str,
    ) -> LaminaResult<Scalar> {
        self.extension(key)
            .ok_or(LaminaError::MissingParameter { criterion, key })
    }

    /// Registers an extension scalar. Overwrites if the key exists.
    pub fn set_extension(&mut self, key: &str, value: Scalar) {
        self.extensions.insert(key.to_string(), value);
    }

    /// Validates the strength and modulus data.
    ///
    /// Checks that every strength magnitude and modulus is finite and
    /// strictly positive, and that extension values are finite.
    pub fn validate(&self) -> LaminaResult<()> {
        let positives = [
            ("r_par_tension", self.r_par_tension),
            ("r_par_compression", self.r_par_compression),
            ("r_nor_tension", self.r_nor_tension),
            ("r_nor_compression", self.r_nor_compression),
            ("r_shear", self.r_shear),
            ("e_par", self.e_par),
            ("e_nor", self.e_nor),
        ];
        for (field, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(LaminaError::InvalidMaterial(format!(
                    "'{}': {} must be finite and > 0, got {}",
                    self.name, field, value
                )));
            }
        }
        for (key, value) in &self.extensions {
            if !value.is_finite() {
                return Err(LaminaError::InvalidMaterial(format!(
                    "'{}': extension '{}' is not finite",
                    self.name, key
                )));
            }
        }
        Ok(())
    }
}
