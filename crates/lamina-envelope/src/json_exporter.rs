//! JSON envelope exporter — writes a tessellated envelope for the
//! companion renderer.
//!
//! Positions and normals are flattened to interleaved arrays
//! (`[x0,y0,z0, x1,y1,z1, ...]`, 4 vertices per quad) so the viewer can
//! upload them directly as vertex buffers.

use serde::Serialize;

use lamina_types::{LaminaError, LaminaResult, Scalar};

use crate::mesh::EnvelopeMesh;

/// Serialized envelope payload.
#[derive(Serialize)]
struct EnvelopeData<'a> {
    criterion: &'a str,
    material: &'a str,
    quad_count: usize,
    positions: Vec<Scalar>, // Interleaved, 12 scalars per quad
    normals: Vec<Scalar>,   // Interleaved, 12 scalars per quad
}

/// Exports an envelope mesh to a JSON file.
pub struct EnvelopeExporter {
    output_path: String,
}

impl EnvelopeExporter {
    /// Creates an exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
        }
    }

    /// Serializes the mesh and writes the JSON file.
    pub fn export(
        &self,
        mesh: &EnvelopeMesh,
        criterion: &str,
        material: &str,
    ) -> LaminaResult<()> {
        let json = Self::to_json(mesh, criterion, material)?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    /// Serializes the mesh to a JSON string without touching the
    /// filesystem. Used by tests and by callers streaming elsewhere.
    pub fn to_json(
        mesh: &EnvelopeMesh,
        criterion: &str,
        material: &str,
    ) -> LaminaResult<String> {
        let n = mesh.quad_count();
        let mut positions = Vec::with_capacity(n * 12);
        let mut normals = Vec::with_capacity(n * 12);
        for quad in &mesh.quads {
            for v in 0..4 {
                positions.extend_from_slice(&quad.positions[v]);
                normals.extend_from_slice(&quad.normals[v]);
            }
        }
        let data = EnvelopeData {
            criterion,
            material,
            quad_count: n,
            positions,
            normals,
        };
        serde_json::to_string(&data)
            .map_err(|e| LaminaError::Serialization(format!("JSON serialization failed: {e}")))
    }
}
