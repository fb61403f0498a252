//! Material input/output contract types.
//!
//! These types define the file boundary of the analysis engine.
//! They are serializable for CLI configuration and API transport.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lamina_material::MaterialStrengths;
use lamina_types::{LaminaError, LaminaResult};

/// Current material file format version.
pub const MATERIAL_FILE_VERSION: u32 = 1;

/// A JSON file carrying one or more material definitions.
///
/// Extension scalars ride along inside each material's `extensions`
/// map, so a single file fully configures every criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialFile {
    /// Format version for forward compatibility.
    pub version: u32,

    /// Material definitions. Names must be unique within the file.
    pub materials: Vec<MaterialStrengths>,
}

impl MaterialFile {
    /// Creates a file wrapper around a set of materials.
    pub fn new(materials: Vec<MaterialStrengths>) -> Self {
        Self {
            version: MATERIAL_FILE_VERSION,
            materials,
        }
    }

    /// Loads and parses a material file from disk.
    pub fn load(path: &Path) -> LaminaResult<Self> {
        let text = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&text)
            .map_err(|e| LaminaError::Serialization(e.to_string()))?;
        if file.version > MATERIAL_FILE_VERSION {
            return Err(LaminaError::InvalidConfig(format!(
                "Material file version {} is newer than supported version {}",
                file.version, MATERIAL_FILE_VERSION
            )));
        }
        Ok(file)
    }

    /// Serializes the materials to pretty-printed JSON on disk.
    pub fn save(&self, path: &Path) -> LaminaResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LaminaError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }
}
