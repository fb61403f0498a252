//! Normal helpers for envelope patches.
//!
//! Normals are computed either analytically from the implicit surface
//! gradient or by central finite differences where no closed form is
//! convenient, then unit-normalized and oriented away from the stress
//! origin (the safe region).

use glam::DVec3;

use lamina_types::constants::{DEGENERATE_LENGTH, FD_NORMAL_STEP};
use lamina_types::Scalar;

/// Normalizes a vector to unit length.
///
/// Degenerate (near-zero) vectors are returned unchanged; callers only
/// pass gradients of surfaces that are regular at the sample point.
pub fn unit(v: DVec3) -> DVec3 {
    let len = v.length();
    if len > DEGENERATE_LENGTH {
        v / len
    } else {
        v
    }
}

/// Flips `n` if it points toward the origin side of `p`.
///
/// Envelope normals must point outward, away from the safe region that
/// contains the stress origin.
pub fn orient_outward(n: DVec3, p: DVec3) -> DVec3 {
    if n.dot(p) < 0.0 {
        -n
    } else {
        n
    }
}

/// Outward unit normal of the implicit surface `f = const` at `p`,
/// by central finite differences.
///
/// `step_scale` gives the per-axis magnitude of one normalized stress
/// unit (typically the relevant strength), so the actual step on axis
/// `i` is `FD_NORMAL_STEP * step_scale[i]`.
pub fn gradient_normal<F>(f: F, p: DVec3, step_scale: DVec3) -> DVec3
where
    F: Fn(DVec3) -> Scalar,
{
    let hx = FD_NORMAL_STEP * step_scale.x;
    let hy = FD_NORMAL_STEP * step_scale.y;
    let hz = FD_NORMAL_STEP * step_scale.z;

    let gx = f(p + DVec3::new(hx, 0.0, 0.0)) - f(p - DVec3::new(hx, 0.0, 0.0));
    let gy = f(p + DVec3::new(0.0, hy, 0.0)) - f(p - DVec3::new(0.0, hy, 0.0));
    let gz = f(p + DVec3::new(0.0, 0.0, hz)) - f(p - DVec3::new(0.0, 0.0, hz));

    // The gradient of an increasing failure index already points away
    // from the safe region; orientation is re-checked anyway.
    let grad = DVec3::new(gx / (2.0 * hx), gy / (2.0 * hy), gz / (2.0 * hz));
    orient_outward(unit(grad), p)
}
