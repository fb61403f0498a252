//! Shared numeric helpers for the criterion implementations.

use lamina_types::constants::EPSILON;
use lamina_types::{LaminaError, LaminaResult, Scalar};

use crate::traits::{FailureMode, ReserveFactor};

/// Linear-ratio candidate: allowable / |stress|.
///
/// A zero stress component means "no load in this direction, cannot
/// fail by this mode" — the candidate is `+∞`, never NaN.
#[inline]
pub fn safe_ratio(allowable: Scalar, stress_magnitude: Scalar) -> Scalar {
    if stress_magnitude == 0.0 {
        Scalar::INFINITY
    } else {
        allowable / stress_magnitude
    }
}

/// Positive root of `a·x² + b·x − 1 = 0`, the quadratic reserve-factor
/// solve shared by the quadratic-form criteria.
///
/// With `a ≈ 0` the equation degrades to the linear case `x = 1/b`
/// (`+∞` when `b ≤ 0`: the ray never reaches the surface). A negative
/// discriminant is a numeric-domain fault and is reported as a typed
/// error — it is never clamped.
pub fn positive_quadratic_root(
    criterion: &'static str,
    a: Scalar,
    b: Scalar,
) -> LaminaResult<Scalar> {
    if a.abs() < EPSILON {
        if b > 0.0 {
            return Ok(1.0 / b);
        }
        return Ok(Scalar::INFINITY);
    }

    let discriminant = b * b + 4.0 * a;
    if discriminant < 0.0 {
        return Err(LaminaError::NumericDomain {
            criterion,
            detail: "negative discriminant in quadratic reserve-factor solve",
            discriminant,
        });
    }

    let root = (discriminant.sqrt() - b) / (2.0 * a);
    if root > 0.0 {
        Ok(root)
    } else {
        // Both roots non-positive: the load ray points away from this
        // mode's surface.
        Ok(Scalar::INFINITY)
    }
}

/// Selects the governing (minimum) candidate reserve factor.
///
/// Exact ties keep the first computed candidate — evaluation order is
/// part of each model's contract and an accepted source of
/// non-uniqueness.
pub fn governing(candidates: &[(Scalar, FailureMode, &'static str)]) -> ReserveFactor {
    let mut best: Option<(Scalar, FailureMode, &'static str)> = None;
    for &(value, mode, label) in candidates {
        match best {
            Some((current, _, _)) if value >= current => {}
            _ => best = Some((value, mode, label)),
        }
    }
    match best {
        Some((value, mode, label)) if value.is_finite() => ReserveFactor { value, mode, label },
        _ => ReserveFactor::undamaged(),
    }
}
