//! Integration tests for lamina-envelope.

use glam::DVec3;

use lamina_envelope::normals::{gradient_normal, orient_outward, unit};
use lamina_envelope::sampler::{grid_patch, lerp, planar_patch, sample_count};
use lamina_envelope::{EnvelopeExporter, EnvelopeMesh, EnvelopeQuad};

// ─── Sampler Tests ───────────────────────────────────────────

#[test]
fn sample_count_scales_with_quality() {
    assert_eq!(sample_count(24, 1.0), Some(24));
    assert_eq!(sample_count(24, 2.0), Some(48));
    assert_eq!(sample_count(24, 0.5), Some(12));
}

#[test]
fn sample_count_floors_at_two_cells() {
    assert_eq!(sample_count(24, 0.01), Some(2));
}

#[test]
fn non_positive_or_nan_quality_yields_none() {
    assert_eq!(sample_count(24, 0.0), None);
    assert_eq!(sample_count(24, -1.0), None);
    assert_eq!(sample_count(24, f64::NAN), None);
}

#[test]
fn lerp_reproduces_endpoints_exactly() {
    let lo = -1234.567;
    let hi = 89.0125;
    assert_eq!(lerp(lo, hi, 0.0), lo);
    assert_eq!(lerp(lo, hi, 1.0), hi);
}

#[test]
fn grid_patch_shares_coordinates_bit_identically() {
    let mesh = grid_patch(4, 3, |i, j| {
        let p = DVec3::new(i as f64 * 1.1, j as f64 * 2.3, (i * j) as f64 * 0.7);
        (p, DVec3::Z)
    });
    assert_eq!(mesh.quad_count(), 12);

    // Right edge of quad (i, j) equals left edge of quad (i+1, j).
    for j in 0..3 {
        for i in 0..3 {
            let left = &mesh.quads[j * 4 + i];
            let right = &mesh.quads[j * 4 + i + 1];
            assert_eq!(left.positions[1], right.positions[0]);
            assert_eq!(left.positions[2], right.positions[3]);
        }
    }
    // Top edge of quad (i, j) equals bottom edge of quad (i, j+1).
    for j in 0..2 {
        for i in 0..4 {
            let below = &mesh.quads[j * 4 + i];
            let above = &mesh.quads[(j + 1) * 4 + i];
            assert_eq!(below.positions[3], above.positions[0]);
            assert_eq!(below.positions[2], above.positions[1]);
        }
    }
}

#[test]
fn planar_patch_spans_its_rectangle() {
    let mesh = planar_patch(0, 100.0, -50.0, 50.0, -70.0, 70.0, 4, 4, 1.0);
    let (min, max) = mesh.bounding_box().unwrap();
    assert_eq!(min, [100.0, -50.0, -70.0]);
    assert_eq!(max, [100.0, 50.0, 70.0]);
    for quad in &mesh.quads {
        for n in &quad.normals {
            assert_eq!(*n, [1.0, 0.0, 0.0]);
        }
    }
}

// ─── Normal Tests ────────────────────────────────────────────

#[test]
fn unit_normalizes_and_keeps_degenerate() {
    let n = unit(DVec3::new(3.0, 4.0, 0.0));
    assert!((n.length() - 1.0).abs() < 1e-12);

    let tiny = DVec3::new(1e-15, 0.0, 0.0);
    assert_eq!(unit(tiny), tiny);
}

#[test]
fn orient_outward_flips_inward_normals() {
    let p = DVec3::new(1.0, 0.0, 0.0);
    assert_eq!(orient_outward(DVec3::new(-1.0, 0.0, 0.0), p), DVec3::X);
    assert_eq!(orient_outward(DVec3::X, p), DVec3::X);
}

#[test]
fn gradient_normal_recovers_sphere_normal() {
    // f = |p|²; the outward normal at p is p/|p|.
    let f = |q: DVec3| q.length_squared();
    let p = DVec3::new(30.0, 40.0, 0.0);
    let n = gradient_normal(f, p, DVec3::new(100.0, 100.0, 100.0));
    assert!((n - p / 50.0).length() < 1e-6);
}

// ─── Mesh Tests ──────────────────────────────────────────────

fn unit_quad() -> EnvelopeQuad {
    EnvelopeQuad {
        positions: [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        normals: [[0.0, 0.0, 1.0]; 4],
    }
}

#[test]
fn empty_mesh_has_no_bounding_box() {
    assert!(EnvelopeMesh::empty().bounding_box().is_none());
    assert!(EnvelopeMesh::empty().is_empty());
}

#[test]
fn extend_appends_in_order() {
    let mut a = EnvelopeMesh::empty();
    a.quads.push(unit_quad());
    let mut b = EnvelopeMesh::empty();
    b.quads.push(unit_quad());
    b.quads.push(unit_quad());
    a.extend(b);
    assert_eq!(a.quad_count(), 3);
}

#[test]
fn validate_accepts_unit_normals() {
    let mut mesh = EnvelopeMesh::empty();
    mesh.quads.push(unit_quad());
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_rejects_non_unit_normal() {
    let mut quad = unit_quad();
    quad.normals[2] = [0.0, 0.0, 2.0];
    let mut mesh = EnvelopeMesh::empty();
    mesh.quads.push(quad);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_position() {
    let mut quad = unit_quad();
    quad.positions[0][1] = f64::NAN;
    let mut mesh = EnvelopeMesh::empty();
    mesh.quads.push(quad);
    assert!(mesh.validate().is_err());
}

// ─── Exporter Tests ──────────────────────────────────────────

#[test]
fn exported_json_interleaves_vertices() {
    let mut mesh = EnvelopeMesh::empty();
    mesh.quads.push(unit_quad());

    let json = EnvelopeExporter::to_json(&mesh, "edge", "t300_epoxy").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["criterion"], "edge");
    assert_eq!(value["material"], "t300_epoxy");
    assert_eq!(value["quad_count"], 1);
    assert_eq!(value["positions"].as_array().unwrap().len(), 12);
    assert_eq!(value["normals"].as_array().unwrap().len(), 12);
    // Second vertex starts at scalar offset 3.
    assert_eq!(value["positions"][3], 1.0);
}

#[test]
fn export_writes_file() {
    let mut mesh = EnvelopeMesh::empty();
    mesh.quads.push(unit_quad());

    let path = std::env::temp_dir().join("lamina_envelope_export_test.json");
    let exporter = EnvelopeExporter::new(path.to_str().unwrap());
    exporter.export(&mesh, "edge", "test_ply").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"quad_count\":1"));
    std::fs::remove_file(&path).ok();
}
