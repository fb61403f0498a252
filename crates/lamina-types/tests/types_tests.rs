//! Integration tests for lamina-types.

use lamina_types::{constants, LaminaError};

#[test]
fn missing_parameter_names_criterion_and_key() {
    let err = LaminaError::MissingParameter {
        criterion: "cuntze",
        key: "Cuntze.m",
    };
    let msg = err.to_string();
    assert!(msg.contains("cuntze"));
    assert!(msg.contains("Cuntze.m"));
}

#[test]
fn numeric_domain_reports_the_discriminant() {
    let err = LaminaError::NumericDomain {
        criterion: "ztl",
        detail: "negative discriminant in quadratic reserve-factor solve",
        discriminant: -16.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("ztl"));
    assert!(msg.contains("-1.6"));
}

#[test]
fn io_errors_convert_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: LaminaError = io.into();
    assert!(matches!(err, LaminaError::Io(_)));
}

#[test]
fn tessellation_bases_are_even() {
    // Even bases keep the σ11 = 0 and τ12 = 0 planes on grid lines.
    assert_eq!(constants::BASE_ANGULAR_SAMPLES % 4, 0);
    assert_eq!(constants::BASE_AXIAL_SAMPLES % 2, 0);
}
