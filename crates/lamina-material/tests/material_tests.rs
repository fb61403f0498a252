//! Integration tests for lamina-material.

use std::collections::HashMap;

use lamina_material::{MaterialDatabase, MaterialStrengths, PlyState, StressStrainState};
use lamina_types::LaminaError;

fn sample_material() -> MaterialStrengths {
    MaterialStrengths {
        name: "test_ply".into(),
        r_par_tension: 1000.0,
        r_par_compression: 800.0,
        r_nor_tension: 50.0,
        r_nor_compression: 200.0,
        r_shear: 50.0,
        e_par: 100_000.0,
        e_nor: 10_000.0,
        extensions: HashMap::new(),
    }
}

// ─── MaterialStrengths Tests ─────────────────────────────────

#[test]
fn valid_material_passes_validation() {
    assert!(sample_material().validate().is_ok());
}

#[test]
fn non_positive_strength_fails_validation() {
    let mut mat = sample_material();
    mat.r_nor_tension = 0.0;
    assert!(mat.validate().is_err());

    let mut mat = sample_material();
    mat.r_shear = -10.0;
    assert!(mat.validate().is_err());
}

#[test]
fn non_finite_modulus_fails_validation() {
    let mut mat = sample_material();
    mat.e_par = f64::NAN;
    assert!(mat.validate().is_err());
}

#[test]
fn non_finite_extension_fails_validation() {
    let mut mat = sample_material();
    mat.set_extension("Cuntze.m", f64::INFINITY);
    assert!(mat.validate().is_err());
}

#[test]
fn extension_lookup_and_overwrite() {
    let mut mat = sample_material();
    assert!(mat.extension("Cuntze.m").is_none());

    mat.set_extension("Cuntze.m", 2.6);
    assert_eq!(mat.extension("Cuntze.m"), Some(2.6));

    mat.set_extension("Cuntze.m", 3.1);
    assert_eq!(mat.extension("Cuntze.m"), Some(3.1));
}

#[test]
fn missing_required_extension_is_typed_error() {
    let mat = sample_material();
    let err = mat.require_extension("cuntze", "Cuntze.m").unwrap_err();
    match err {
        LaminaError::MissingParameter { criterion, key } => {
            assert_eq!(criterion, "cuntze");
            assert_eq!(key, "Cuntze.m");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn material_serde_round_trip_keeps_extensions() {
    let mut mat = sample_material();
    mat.set_extension("ZTL.f12star", -0.5);
    let json = serde_json::to_string(&mat).unwrap();
    let back: MaterialStrengths = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, "test_ply");
    assert_eq!(back.extension("ZTL.f12star"), Some(-0.5));
}

#[test]
fn extensions_field_defaults_to_empty_on_deserialize() {
    let json = r#"{
        "name": "bare",
        "r_par_tension": 1.0, "r_par_compression": 1.0,
        "r_nor_tension": 1.0, "r_nor_compression": 1.0,
        "r_shear": 1.0, "e_par": 1.0, "e_nor": 1.0
    }"#;
    let mat: MaterialStrengths = serde_json::from_str(json).unwrap();
    assert!(mat.extensions.is_empty());
}

// ─── PlyState Tests ──────────────────────────────────────────

#[test]
fn ply_angle_degree_round_trip() {
    let ply = PlyState::from_degrees(45.0, 0.125, true);
    assert!((ply.angle_deg() - 45.0).abs() < 1e-12);
    assert!((ply.angle_rad - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert!(ply.embedded);
}

// ─── StressStrainState Tests ─────────────────────────────────

#[test]
fn zero_stress_detection_is_exact() {
    let state = StressStrainState::from_stress([0.0, 0.0, 0.0]);
    assert!(state.is_zero_stress());

    let state = StressStrainState::from_stress([1e-300, 0.0, 0.0]);
    assert!(!state.is_zero_stress());
}

#[test]
fn scaling_scales_both_vectors() {
    let state = StressStrainState::new([100.0, -20.0, 5.0], [0.001, -0.0002, 0.0005]);
    let scaled = state.scaled(2.0);
    assert_eq!(scaled.stress, [200.0, -40.0, 10.0]);
    assert_eq!(scaled.strain, [0.002, -0.0004, 0.001]);
}

#[test]
fn strain_rotation_by_ninety_degrees_swaps_normals() {
    let state = StressStrainState::new([1.0, 1.0, 1.0], [0.004, 0.001, 0.0]);
    let local = state.strain_in_ply_frame(std::f64::consts::FRAC_PI_2);
    assert!((local[0] - 0.001).abs() < 1e-15);
    assert!((local[1] - 0.004).abs() < 1e-15);
    assert!(local[2].abs() < 1e-15);
}

#[test]
fn strain_rotation_by_forty_five_degrees_moves_shear() {
    // Pure engineering shear in laminate axes becomes pure normal
    // strain difference in a 45-degree ply.
    let state = StressStrainState::new([1.0, 0.0, 0.0], [0.0, 0.0, 0.002]);
    let local = state.strain_in_ply_frame(std::f64::consts::FRAC_PI_4);
    assert!((local[0] - 0.001).abs() < 1e-15);
    assert!((local[1] + 0.001).abs() < 1e-15);
    assert!(local[2].abs() < 1e-15);
}

// ─── MaterialDatabase Tests ──────────────────────────────────

#[test]
fn default_database_has_five_materials() {
    let db = MaterialDatabase::with_defaults();
    assert_eq!(db.len(), 5);
}

#[test]
fn lookup_all_presets() {
    let db = MaterialDatabase::with_defaults();
    assert!(db.get("t300_epoxy").is_some());
    assert!(db.get("im7_8552").is_some());
    assert!(db.get("e_glass_epoxy").is_some());
    assert!(db.get("s2_glass_epoxy").is_some());
    assert!(db.get("aramid_epoxy").is_some());
}

#[test]
fn missing_material_returns_none() {
    let db = MaterialDatabase::with_defaults();
    assert!(db.get("nonexistent").is_none());
}

#[test]
fn every_preset_is_valid_and_fully_keyed() {
    let db = MaterialDatabase::with_defaults();
    let required = [
        "Cuntze.m",
        "Cuntze.muesp",
        "ZTL.f12star",
        "Rotem.Em",
        "Rotem.Rmt",
        "Rotem.Rmc",
        "MaxStrain.gamma",
    ];
    for name in db.names() {
        let mat = db.get(name).unwrap();
        assert!(mat.validate().is_ok(), "preset {name} invalid");
        for key in required {
            assert!(
                mat.extension(key).is_some(),
                "preset {name} missing {key}"
            );
        }
    }
}

#[test]
fn preset_strength_sanity() {
    let db = MaterialDatabase::with_defaults();
    let t300 = db.get("t300_epoxy").unwrap();
    assert_eq!(t300.r_par_tension, 1500.0);
    // Transverse compression is stronger than transverse tension for
    // every preset resin system.
    for name in db.names() {
        let mat = db.get(name).unwrap();
        assert!(mat.r_nor_compression > mat.r_nor_tension);
    }
}

#[test]
fn custom_material_registration() {
    let mut db = MaterialDatabase::empty();
    assert!(db.is_empty());
    db.register(sample_material());
    assert_eq!(db.len(), 1);
    assert!(db.get("test_ply").is_some());
}
