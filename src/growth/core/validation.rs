//! Validation helpers for fatigue crack-growth inputs.
//!
//! Purpose
//! -------
//! Centralize the small, reusable checks the crack-growth stack performs on
//! its inputs: coefficient finiteness, fleet-matrix shape agreement,
//! element-wise finiteness of fleet matrices, and seed-policy values. Every
//! helper fails fast with a typed error instead of letting NaNs, infinities,
//! or silently truncated shapes reach the integration loop.
//!
//! Key behaviors
//! -------------
//! - [`validate_coeff`] rejects non-finite model coefficients by name.
//! - [`validate_matrix_shape`] compares an input matrix against the fleet's
//!   reference `(assets, cycles)` shape.
//! - [`validate_finite_matrix`] scans a matrix for NaN/±inf entries,
//!   reporting the first offending asset and cycle.
//! - [`validate_seed_fixed`] / [`validate_seed_vector`] enforce that seed
//!   crack lengths are finite and non-negative (the propagation law takes a
//!   square root of the accumulated length).
//!
//! Conventions
//! -----------
//! - Matrices are laid out as `(assets, cycles)`; indices in error payloads
//!   are 0-based.
//! - Helpers return `CoeffResult` / `GrowthResult`; none of them panic on
//!   user input.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover the accept/reject behavior of each helper,
//!   including the index/value payloads of the first offending element.
//! - Integration-time guards (stress ratio, running crack length,
//!   non-finite increments) live in the recursion module, not here.
use crate::growth::errors::{CoeffError, CoeffResult, GrowthError, GrowthResult};
use ndarray::{Array1, ArrayView2};

/// Validate that a single model coefficient is finite.
///
/// # Arguments
/// - `name`: coefficient name used in the error payload.
/// - `value`: the coefficient value.
///
/// # Errors
/// - [`CoeffError::NonFiniteCoeff`] if `value` is NaN or ±inf.
pub fn validate_coeff(name: &'static str, value: f64) -> CoeffResult<()> {
    if !value.is_finite() {
        return Err(CoeffError::NonFiniteCoeff { name, value });
    }
    Ok(())
}

/// Validate that an input matrix matches the fleet's reference shape.
///
/// # Arguments
/// - `matrix`: matrix name used in the error payload.
/// - `actual`: the matrix's `(rows, cols)` dimensions.
/// - `expected`: the reference `(assets, cycles)` dimensions.
///
/// # Errors
/// - [`GrowthError::ShapeMismatch`] if the dimensions disagree.
pub fn validate_matrix_shape(
    matrix: &'static str, actual: (usize, usize), expected: (usize, usize),
) -> GrowthResult<()> {
    if actual != expected {
        return Err(GrowthError::ShapeMismatch { matrix, expected, actual });
    }
    Ok(())
}

/// Validate that every entry of an input matrix is finite.
///
/// Scans row-major and stops at the first NaN/±inf entry, reporting its
/// asset (row) and cycle (column) indices along with the offending value.
///
/// # Errors
/// - [`GrowthError::NonFiniteInput`] at the first non-finite element.
pub fn validate_finite_matrix(matrix: &'static str, values: ArrayView2<f64>) -> GrowthResult<()> {
    for ((asset, cycle), &value) in values.indexed_iter() {
        if !value.is_finite() {
            return Err(GrowthError::NonFiniteInput { matrix, asset, cycle, value });
        }
    }
    Ok(())
}

/// Validate a fixed scalar seed crack length.
///
/// Seeds feed the propagation law's square root, so they must be finite and
/// non-negative. Zero is explicitly allowed (it reproduces the bare
/// integration run where damage starts from a pristine component).
///
/// # Errors
/// - [`GrowthError::InvalidSeedFixed`] if `value` is non-finite or negative.
pub fn validate_seed_fixed(value: f64) -> GrowthResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GrowthError::InvalidSeedFixed { value });
    }
    Ok(())
}

/// Validate a per-asset seed vector against the fleet size.
///
/// # Arguments
/// - `values`: one seed crack length per asset.
/// - `assets`: expected fleet size.
///
/// # Errors
/// - [`GrowthError::SeedLengthMismatch`] if `values.len() != assets`.
/// - [`GrowthError::InvalidSeedValue`] at the first non-finite or negative
///   entry.
pub fn validate_seed_vector(values: &Array1<f64>, assets: usize) -> GrowthResult<()> {
    if values.len() != assets {
        return Err(GrowthError::SeedLengthMismatch { expected: assets, actual: values.len() });
    }
    for (asset, &value) in values.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(GrowthError::InvalidSeedValue { asset, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accept/reject behavior of every validation helper in this module.
    // - Index and value payloads reported for the first offending element.
    //
    // They intentionally DO NOT cover:
    // - Integration-time guards (degenerate stress ratio, negative running
    //   crack length, non-finite increments) — covered by recursion tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_coeff` accepts finite values of either sign and
    // rejects NaN with the coefficient's name in the payload.
    //
    // Given
    // -----
    // - Finite values `-1e8` and `0.68`.
    // - A NaN value under the name "blend_rate".
    //
    // Expect
    // ------
    // - Finite values pass.
    // - NaN yields `CoeffError::NonFiniteCoeff { name: "blend_rate", .. }`.
    fn validate_coeff_accepts_finite_and_rejects_nan() {
        assert!(validate_coeff("walker_rate", -1e8).is_ok());
        assert!(validate_coeff("walker_gamma", 0.68).is_ok());

        let err = validate_coeff("blend_rate", f64::NAN).unwrap_err();
        match err {
            CoeffError::NonFiniteCoeff { name, value } => {
                assert_eq!(name, "blend_rate");
                assert!(value.is_nan());
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure `validate_matrix_shape` accepts an exact match and rejects a
    // disagreement with both shapes in the payload.
    //
    // Given
    // -----
    // - Expected shape `(3, 500)`.
    // - Actual shapes `(3, 500)` (match) and `(3, 499)` (mismatch).
    //
    // Expect
    // ------
    // - The match passes.
    // - The mismatch yields `GrowthError::ShapeMismatch` naming the matrix
    //   and carrying both shapes.
    fn validate_matrix_shape_detects_disagreement() {
        assert!(validate_matrix_shape("delta_s", (3, 500), (3, 500)).is_ok());

        let err = validate_matrix_shape("delta_s", (3, 499), (3, 500)).unwrap_err();
        assert_eq!(
            err,
            GrowthError::ShapeMismatch {
                matrix: "delta_s",
                expected: (3, 500),
                actual: (3, 499)
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `validate_finite_matrix` reports the first non-finite entry
    // with its asset and cycle indices.
    //
    // Given
    // -----
    // - A 2×3 matrix with `+inf` at asset 1, cycle 2.
    //
    // Expect
    // ------
    // - `Err(GrowthError::NonFiniteInput { asset: 1, cycle: 2, .. })`.
    fn validate_finite_matrix_reports_first_offender() {
        let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, f64::INFINITY]];

        let err = validate_finite_matrix("seq", values.view()).unwrap_err();
        assert_eq!(
            err,
            GrowthError::NonFiniteInput {
                matrix: "seq",
                asset: 1,
                cycle: 2,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the accept/reject boundary of `validate_seed_fixed`.
    //
    // Given
    // -----
    // - Values `0.0` (allowed), `5e-4` (allowed), `-1e-6` (negative) and
    //   NaN (non-finite).
    //
    // Expect
    // ------
    // - Zero and positive finite values pass.
    // - Negative and NaN values yield `GrowthError::InvalidSeedFixed`.
    fn validate_seed_fixed_allows_zero_and_rejects_negative() {
        assert!(validate_seed_fixed(0.0).is_ok());
        assert!(validate_seed_fixed(5e-4).is_ok());

        assert_eq!(
            validate_seed_fixed(-1e-6).unwrap_err(),
            GrowthError::InvalidSeedFixed { value: -1e-6 }
        );
        assert!(matches!(
            validate_seed_fixed(f64::NAN).unwrap_err(),
            GrowthError::InvalidSeedFixed { .. }
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `validate_seed_vector` enforces both the fleet-size length
    // constraint and element-wise bounds.
    //
    // Given
    // -----
    // - A length-2 vector validated against a 3-asset fleet.
    // - A length-3 vector with a negative entry at asset 1.
    //
    // Expect
    // ------
    // - The short vector yields `SeedLengthMismatch { expected: 3, actual: 2 }`.
    // - The negative entry yields `InvalidSeedValue { asset: 1, .. }`.
    fn validate_seed_vector_checks_length_and_entries() {
        let short = array![0.0, 1e-3];
        assert_eq!(
            validate_seed_vector(&short, 3).unwrap_err(),
            GrowthError::SeedLengthMismatch { expected: 3, actual: 2 }
        );

        let negative = array![0.0, -2e-3, 1e-3];
        assert_eq!(
            validate_seed_vector(&negative, 3).unwrap_err(),
            GrowthError::InvalidSeedValue { asset: 1, value: -2e-3 }
        );

        let valid = array![0.0, 2e-3, 1e-3];
        assert!(validate_seed_vector(&valid, 3).is_ok());
    }
}
