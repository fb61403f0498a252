//! Patch sampling: regular parameter grids turned into envelope quads.
//!
//! Every patch samples its vertex grid exactly once and assembles quads
//! from the stored grid values, so coordinates shared by adjacent quads
//! of the same patch are bit-identical (no seam gaps). Parameter values
//! are computed as `lo * (1 - f) + hi * f`, which reproduces the range
//! endpoints exactly, so patch boundaries meant to coincide do.

use glam::DVec3;

use lamina_types::Scalar;

use crate::mesh::{EnvelopeMesh, EnvelopeQuad};

/// Scales a base sample count by the tessellation quality knob.
///
/// Returns `None` for `quality ≤ 0` or NaN — the caller emits an empty
/// mesh (rendering fidelity only, not an error). Otherwise at least 2
/// cells per direction.
pub fn sample_count(base: usize, quality: Scalar) -> Option<usize> {
    if !(quality > 0.0) {
        return None;
    }
    let n = (base as Scalar * quality).round() as usize;
    Some(n.max(2))
}

/// Interpolates a parameter range so that `f = 0` and `f = 1` reproduce
/// `lo` and `hi` bit-exactly.
#[inline]
pub fn lerp(lo: Scalar, hi: Scalar, f: Scalar) -> Scalar {
    lo * (1.0 - f) + hi * f
}

/// Samples a patch on an `nu × nv` parameter grid.
///
/// `vertex(i, j)` returns the position and outward unit normal at grid
/// node `(i, j)`, with `i ∈ 0..=nu`, `j ∈ 0..=nv`. One quad is emitted
/// per grid cell; all four corners come from the stored node values.
pub fn grid_patch<V>(nu: usize, nv: usize, vertex: V) -> EnvelopeMesh
where
    V: Fn(usize, usize) -> (DVec3, DVec3),
{
    let cols = nu + 1;
    let mut nodes = Vec::with_capacity(cols * (nv + 1));
    for j in 0..=nv {
        for i in 0..=nu {
            nodes.push(vertex(i, j));
        }
    }

    let mut mesh = EnvelopeMesh::with_capacity(nu * nv);
    for j in 0..nv {
        for i in 0..nu {
            let a = nodes[j * cols + i];
            let b = nodes[j * cols + i + 1];
            let c = nodes[(j + 1) * cols + i + 1];
            let d = nodes[(j + 1) * cols + i];
            mesh.quads.push(EnvelopeQuad {
                positions: [
                    a.0.to_array(),
                    b.0.to_array(),
                    c.0.to_array(),
                    d.0.to_array(),
                ],
                normals: [
                    a.1.to_array(),
                    b.1.to_array(),
                    c.1.to_array(),
                    d.1.to_array(),
                ],
            });
        }
    }
    mesh
}

/// Samples a flat rectangular patch with a constant normal.
///
/// The patch lies in the plane `position[axis] = level`; the remaining
/// two axes span `[u_lo, u_hi] × [v_lo, v_hi]` (axis order (σ11, σ22,
/// τ12) with `u`/`v` the two non-`axis` coordinates in ascending axis
/// order).
#[allow(clippy::too_many_arguments)]
pub fn planar_patch(
    axis: usize,
    level: Scalar,
    u_lo: Scalar,
    u_hi: Scalar,
    v_lo: Scalar,
    v_hi: Scalar,
    nu: usize,
    nv: usize,
    outward_sign: Scalar,
) -> EnvelopeMesh {
    let (ua, va) = match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let mut normal = DVec3::ZERO;
    normal[axis] = outward_sign;

    grid_patch(nu, nv, |i, j| {
        let u = lerp(u_lo, u_hi, i as Scalar / nu as Scalar);
        let v = lerp(v_lo, v_hi, j as Scalar / nv as Scalar);
        let mut p = DVec3::ZERO;
        p[axis] = level;
        p[ua] = u;
        p[va] = v;
        (p, normal)
    })
}
