//! Shared surface builders for criterion tessellation.
//!
//! Three surface families cover the bundled criteria:
//!
//! - **Ray-scaled sphere patches** — for criteria whose reserve factor is
//!   homogeneous of degree −1 in the stress: the surface point along a
//!   unit direction `d` is `rf(d) · d`. Sign-branching criteria emit one
//!   patch per (σ11, σ22) sign quadrant so tension/compression creases
//!   fall on patch boundaries.
//! - **Cylinder + caps** — for criteria whose fiber modes are planes and
//!   whose matrix mode is a cylinder along the σ11 axis (angle × axial
//!   parameter grid).
//! - **Planar patches** — box faces and caps (`lamina_envelope::sampler`).
//!
//! Grids are sampled once per patch; quads are assembled from the stored
//! grid, so interior coordinates are bit-identical.

use std::f64::consts::PI;

use glam::DVec3;

use lamina_envelope::sampler::{grid_patch, lerp, sample_count};
use lamina_envelope::EnvelopeMesh;
use lamina_types::constants::{BASE_ANGULAR_SAMPLES, BASE_AXIAL_SAMPLES};
use lamina_types::Scalar;

/// Unit direction in stress space from an azimuth in the (σ11, σ22)
/// plane and a polar angle measured from the +τ12 axis.
#[inline]
pub fn sphere_direction(azimuth: Scalar, polar: Scalar) -> DVec3 {
    let sp = polar.sin();
    DVec3::new(azimuth.cos() * sp, azimuth.sin() * sp, polar.cos())
}

/// One ray-scaled sphere patch over `azimuth ∈ [az_lo, az_hi]`,
/// `polar ∈ [0, π]`.
///
/// `scale` maps a unit direction to the distance of the failure surface
/// along it; `normal` maps the surface point and its direction to the
/// outward unit normal.
pub fn ray_patch<S, N>(
    az_lo: Scalar,
    az_hi: Scalar,
    n_az: usize,
    n_polar: usize,
    scale: S,
    normal: N,
) -> EnvelopeMesh
where
    S: Fn(DVec3) -> Scalar,
    N: Fn(DVec3, DVec3) -> DVec3,
{
    grid_patch(n_az, n_polar, |i, j| {
        let az = lerp(az_lo, az_hi, i as Scalar / n_az as Scalar);
        let polar = lerp(0.0, PI, j as Scalar / n_polar as Scalar);
        let d = sphere_direction(az, polar);
        let p = d * scale(d);
        (p, normal(p, d))
    })
}

/// Four ray-scaled patches, one per (σ11, σ22) sign quadrant.
///
/// Quadrant boundaries lie on the σ11 = 0 and σ22 = 0 meridians where
/// sign-selected allowables switch — deliberate crease locations.
pub fn quadrant_ray_patches<S, N>(quality: Scalar, scale: S, normal: N) -> EnvelopeMesh
where
    S: Fn(DVec3) -> Scalar,
    N: Fn(DVec3, DVec3) -> DVec3,
{
    let (n_az, n_polar) = match (
        sample_count(BASE_ANGULAR_SAMPLES / 4, quality),
        sample_count(BASE_ANGULAR_SAMPLES / 2, quality),
    ) {
        (Some(a), Some(p)) => (a, p),
        _ => return EnvelopeMesh::empty(),
    };

    let mut mesh = EnvelopeMesh::empty();
    for q in 0..4 {
        let az_lo = q as Scalar * (PI / 2.0);
        let az_hi = az_lo + PI / 2.0;
        mesh.extend(ray_patch(az_lo, az_hi, n_az, n_polar, &scale, &normal));
    }
    mesh
}

/// A single ray-scaled patch covering the whole sphere of directions,
/// for criteria with smooth (sign-free) failure indices.
pub fn full_sphere_patch<S, N>(quality: Scalar, scale: S, normal: N) -> EnvelopeMesh
where
    S: Fn(DVec3) -> Scalar,
    N: Fn(DVec3, DVec3) -> DVec3,
{
    let (n_az, n_polar) = match (
        sample_count(BASE_ANGULAR_SAMPLES, quality),
        sample_count(BASE_ANGULAR_SAMPLES / 2, quality),
    ) {
        (Some(a), Some(p)) => (a, p),
        _ => return EnvelopeMesh::empty(),
    };
    ray_patch(0.0, 2.0 * PI, n_az, n_polar, scale, normal)
}

/// A full-sphere ray patch whose direction grid is warped before the
/// ray solve.
///
/// A uniform grid undersamples strongly anisotropic surfaces: when the
/// long principal axis falls between grid meridians, the box extent
/// keeps moving as quality rises instead of converging. `warp` remaps
/// each uniform grid direction to the unit direction actually sampled
/// (strength whitening concentrates rays along the long axis). Axis
/// directions must be fixed points of `warp` so the uniaxial strengths
/// stay on grid lines.
pub fn warped_sphere_patch<W, S, N>(quality: Scalar, warp: W, scale: S, normal: N) -> EnvelopeMesh
where
    W: Fn(DVec3) -> DVec3,
    S: Fn(DVec3) -> Scalar,
    N: Fn(DVec3, DVec3) -> DVec3,
{
    let (n_az, n_polar) = match (
        sample_count(BASE_ANGULAR_SAMPLES, quality),
        sample_count(BASE_ANGULAR_SAMPLES / 2, quality),
    ) {
        (Some(a), Some(p)) => (a, p),
        _ => return EnvelopeMesh::empty(),
    };
    grid_patch(n_az, n_polar, |i, j| {
        let az = lerp(0.0, 2.0 * PI, i as Scalar / n_az as Scalar);
        let polar = lerp(0.0, PI, j as Scalar / n_polar as Scalar);
        let d = warp(sphere_direction(az, polar));
        let p = d * scale(d);
        (p, normal(p, d))
    })
}

/// Side surface of a matrix-mode cylinder along the σ11 axis.
///
/// `ring(angle)` returns the (σ22, τ12) cross-section point at an angle
/// in `[0, 2π]`; the axial direction spans `[axial_lo, axial_hi]`.
pub fn cylinder_patch<R, N>(
    axial_lo: Scalar,
    axial_hi: Scalar,
    quality: Scalar,
    ring: R,
    normal: N,
) -> EnvelopeMesh
where
    R: Fn(Scalar) -> (Scalar, Scalar),
    N: Fn(DVec3) -> DVec3,
{
    let (n_angle, n_axial) = match (
        sample_count(BASE_ANGULAR_SAMPLES, quality),
        sample_count(BASE_AXIAL_SAMPLES, quality),
    ) {
        (Some(a), Some(x)) => (a, x),
        _ => return EnvelopeMesh::empty(),
    };

    grid_patch(n_angle, n_axial, |i, j| {
        let angle = lerp(0.0, 2.0 * PI, i as Scalar / n_angle as Scalar);
        let axial = lerp(axial_lo, axial_hi, j as Scalar / n_axial as Scalar);
        let (s2, t12) = ring(angle);
        let p = DVec3::new(axial, s2, t12);
        (p, normal(p))
    })
}

/// A cylinder end cap at `σ11 = level`, filled radially from the axis
/// out to the same `ring` the side surface uses.
///
/// The outer cap rim reproduces the side surface's end ring
/// bit-identically (same angle grid, same ring function); the crease
/// between fiber cap and matrix cylinder is deliberate.
pub fn cap_patch<R>(
    level: Scalar,
    outward_sign: Scalar,
    quality: Scalar,
    ring: R,
) -> EnvelopeMesh
where
    R: Fn(Scalar) -> (Scalar, Scalar),
{
    let (n_angle, n_radial) = match (
        sample_count(BASE_ANGULAR_SAMPLES, quality),
        sample_count(BASE_AXIAL_SAMPLES / 2, quality),
    ) {
        (Some(a), Some(r)) => (a, r),
        _ => return EnvelopeMesh::empty(),
    };
    let normal = DVec3::new(outward_sign, 0.0, 0.0);

    grid_patch(n_angle, n_radial, |i, j| {
        let angle = lerp(0.0, 2.0 * PI, i as Scalar / n_angle as Scalar);
        let rho = j as Scalar / n_radial as Scalar;
        let (s2, t12) = ring(angle);
        (DVec3::new(level, rho * s2, rho * t12), normal)
    })
}
