//! Integration tests for lamina-io.

use std::path::PathBuf;

use lamina_io::contract::MATERIAL_FILE_VERSION;
use lamina_io::{validate_material, validate_materials, MaterialFile};
use lamina_material::{MaterialDatabase, MaterialStrengths};
use lamina_types::LaminaError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lamina_io_test_{name}"))
}

fn preset(name: &str) -> MaterialStrengths {
    MaterialDatabase::with_defaults().get(name).unwrap().clone()
}

// ─── MaterialFile Tests ──────────────────────────────────────

#[test]
fn save_and_load_round_trip() {
    let path = temp_path("round_trip.json");
    let file = MaterialFile::new(vec![preset("t300_epoxy"), preset("im7_8552")]);
    file.save(&path).unwrap();

    let loaded = MaterialFile::load(&path).unwrap();
    assert_eq!(loaded.version, MATERIAL_FILE_VERSION);
    assert_eq!(loaded.materials.len(), 2);
    assert_eq!(loaded.materials[0].name, "t300_epoxy");
    assert_eq!(
        loaded.materials[0].extension("Cuntze.m"),
        preset("t300_epoxy").extension("Cuntze.m")
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn newer_version_is_rejected() {
    let path = temp_path("newer_version.json");
    let mut file = MaterialFile::new(vec![preset("t300_epoxy")]);
    file.version = MATERIAL_FILE_VERSION + 1;
    file.save(&path).unwrap();

    let err = MaterialFile::load(&path).unwrap_err();
    assert!(matches!(err, LaminaError::InvalidConfig(_)));
    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let path = temp_path("malformed.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = MaterialFile::load(&path).unwrap_err();
    assert!(matches!(err, LaminaError::Serialization(_)));
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = MaterialFile::load(&temp_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, LaminaError::Io(_)));
}

// ─── Validator Tests ─────────────────────────────────────────

#[test]
fn every_preset_validates() {
    let db = MaterialDatabase::with_defaults();
    for name in db.names() {
        assert!(validate_material(db.get(name).unwrap()).is_ok(), "{name}");
    }
}

#[test]
fn missing_required_extension_is_rejected() {
    let mut mat = preset("t300_epoxy");
    mat.extensions.remove("Rotem.Em");
    let err = validate_material(&mat).unwrap_err();
    match err {
        LaminaError::InvalidMaterial(msg) => assert!(msg.contains("Rotem.Em")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_positive_strength_is_rejected() {
    let mut mat = preset("t300_epoxy");
    mat.r_shear = 0.0;
    assert!(validate_material(&mat).is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let materials = vec![preset("t300_epoxy"), preset("t300_epoxy")];
    let err = validate_materials(&materials).unwrap_err();
    match err {
        LaminaError::InvalidMaterial(msg) => assert!(msg.contains("Duplicate")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn distinct_valid_materials_pass_batch_validation() {
    let materials = vec![preset("t300_epoxy"), preset("e_glass_epoxy")];
    assert!(validate_materials(&materials).is_ok());
}
