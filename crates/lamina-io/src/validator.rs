//! Material validation.
//!
//! Validates material definitions before the criteria receive them,
//! catching data-level errors early with clear diagnostics.

use std::collections::HashSet;

use lamina_criteria::{Cuntze, MaxStrain, Rotem};
use lamina_material::MaterialStrengths;
use lamina_types::{LaminaError, LaminaResult};

/// Validates a single material definition.
///
/// Checks:
/// - Strength magnitudes and moduli are finite and positive
/// - Extension scalars are finite
/// - Extension keys required by the configurable criteria are present,
///   so the full catalog can be constructed from this material
pub fn validate_material(material: &MaterialStrengths) -> LaminaResult<()> {
    material.validate()?;

    let required = Cuntze::REQUIRED_KEYS
        .iter()
        .chain(Rotem::REQUIRED_KEYS)
        .chain(MaxStrain::REQUIRED_KEYS);
    for key in required {
        if material.extension(key).is_none() {
            return Err(LaminaError::InvalidMaterial(format!(
                "'{}': missing required extension '{}'",
                material.name, key
            )));
        }
    }

    Ok(())
}

/// Validates a batch of materials.
///
/// Applies [`validate_material`] to each entry and rejects duplicate
/// names, which would shadow each other in a database.
pub fn validate_materials(materials: &[MaterialStrengths]) -> LaminaResult<()> {
    let mut seen = HashSet::new();
    for material in materials {
        if !seen.insert(material.name.as_str()) {
            return Err(LaminaError::InvalidMaterial(format!(
                "Duplicate material name '{}'",
                material.name
            )));
        }
        validate_material(material)?;
    }
    Ok(())
}
