//! Ply geometry state.

use serde::{Deserialize, Serialize};

use lamina_types::Scalar;

/// Orientation, thickness, and embedding state of one ply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlyState {
    /// Fiber orientation angle in radians, measured from the laminate
    /// reference axis.
    pub angle_rad: Scalar,

    /// Ply thickness (> 0), in the same length unit as the laminate.
    pub thickness: Scalar,

    /// True if the ply has material on both faces (not at a laminate
    /// free surface). Criteria that model the constraint effect grant
    /// embedded plies higher effective transverse/shear strength.
    pub embedded: bool,
}

impl PlyState {
    /// Creates a ply state from an angle in radians.
    pub fn new(angle_rad: Scalar, thickness: Scalar, embedded: bool) -> Self {
        Self {
            angle_rad,
            thickness,
            embedded,
        }
    }

    /// Creates a ply state from an angle in degrees.
    pub fn from_degrees(angle_deg: Scalar, thickness: Scalar, embedded: bool) -> Self {
        Self::new(angle_deg.to_radians(), thickness, embedded)
    }

    /// Returns the orientation angle in degrees.
    pub fn angle_deg(&self) -> Scalar {
        self.angle_rad.to_degrees()
    }
}
