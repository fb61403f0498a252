//! Failure-envelope mesh: an ordered quad soup in stress space.
//!
//! Each quad carries 4 explicit vertex positions and 4 outward unit
//! normals — no index buffer. Intentional duplication at patch interiors
//! is acceptable; coordinates shared inside one patch are bit-identical
//! because each patch samples its vertex grid once and assembles quads
//! from it. Creases where two failure-mode surfaces meet are deliberate.

use serde::{Deserialize, Serialize};

use lamina_types::{LaminaError, LaminaResult, Scalar};

/// One quad of the envelope surface.
///
/// Vertices are ordered counter-clockwise when viewed from outside the
/// safe region. Coordinates are stresses `(σ11, σ22, τ12)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvelopeQuad {
    /// The 4 vertex positions in stress space.
    pub positions: [[Scalar; 3]; 4],
    /// The 4 per-vertex outward unit normals.
    pub normals: [[Scalar; 3]; 4],
}

/// A tessellated failure envelope: an ordered list of quads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvelopeMesh {
    /// The quads, in patch-generation order.
    pub quads: Vec<EnvelopeQuad>,
}

impl EnvelopeMesh {
    /// Creates an empty mesh.
    pub fn empty() -> Self {
        Self { quads: Vec::new() }
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(quad_capacity: usize) -> Self {
        Self {
            quads: Vec::with_capacity(quad_capacity),
        }
    }

    /// Returns the number of quads.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the mesh has no quads.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Appends all quads of another mesh (patch stitching).
    pub fn extend(&mut self, other: EnvelopeMesh) {
        self.quads.extend(other.quads);
    }

    /// Returns the axis-aligned bounding box as `(min, max)` corners,
    /// or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<([Scalar; 3], [Scalar; 3])> {
        if self.quads.is_empty() {
            return None;
        }
        let mut min = [Scalar::INFINITY; 3];
        let mut max = [Scalar::NEG_INFINITY; 3];
        for quad in &self.quads {
            for p in &quad.positions {
                for axis in 0..3 {
                    min[axis] = min[axis].min(p[axis]);
                    max[axis] = max[axis].max(p[axis]);
                }
            }
        }
        Some((min, max))
    }

    /// Validates mesh integrity.
    ///
    /// Checks that every coordinate is finite and every normal has unit
    /// length within 1e-6.
    pub fn validate(&self) -> LaminaResult<()> {
        for (q, quad) in self.quads.iter().enumerate() {
            for p in &quad.positions {
                if p.iter().any(|c| !c.is_finite()) {
                    return Err(LaminaError::InvalidConfig(format!(
                        "Quad {} has a non-finite vertex coordinate",
                        q
                    )));
                }
            }
            for n in &quad.normals {
                let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
                if !len.is_finite() || (len - 1.0).abs() > 1.0e-6 {
                    return Err(LaminaError::InvalidConfig(format!(
                        "Quad {} has a non-unit normal (length {})",
                        q, len
                    )));
                }
            }
        }
        Ok(())
    }
}
