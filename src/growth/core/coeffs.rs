//! Model coefficients for fatigue crack initiation and propagation.
//!
//! Purpose
//! -------
//! Provide the immutable coefficient container shared by the three damage
//! laws: the S-N initiation curve, the Walker propagation law, and the
//! sigmoid regime selector. Passing one validated struct to every pure
//! function keeps the laws free of ambient state and makes a calibration
//! set explicit, comparable, and reproducible.
//!
//! Key behaviors
//! -------------
//! - [`GrowthCoeffs`] stores the nine scalar coefficients and validates
//!   element-wise finiteness at construction via [`GrowthCoeffs::new`].
//! - `GrowthCoeffs::default()` ships the calibration used by the bundled
//!   turbine-fleet demonstration, so a fleet can be integrated out of the
//!   box.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every coefficient is finite. Signs are deliberately unconstrained: the
//!   calibrated set mixes a large negative logistic rate (`walker_rate`)
//!   with a large positive one (`blend_rate`), and the S-N slope is
//!   negative by convention.
//! - Physical plausibility (units, magnitudes) is the caller's
//!   responsibility; this module only enforces numeric sanity.
//!
//! Conventions
//! -----------
//! - Names describe the role each scalar plays in the closed-form laws
//!   rather than single-letter symbols; the mapping to the usual fatigue
//!   notation is documented on each field.
//!
//! Downstream usage
//! ----------------
//! - Construct once per run and share by reference with the damage laws and
//!   the integrator; the struct is `Copy`-cheap to clone and never mutated
//!   after construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, per-coefficient rejection of
//!   non-finite values with the right name in the payload, and the default
//!   calibration values.
use crate::growth::{core::validation::validate_coeff, errors::CoeffResult};

/// `GrowthCoeffs` — validated coefficients for the three damage laws.
///
/// Purpose
/// -------
/// Bundle the nine scalars consumed by the S-N initiation curve, the Walker
/// propagation law, and the sigmoid selector into one immutable
/// configuration value, validated once at construction.
///
/// Key behaviors
/// -------------
/// - Enforces finiteness of every coefficient via [`GrowthCoeffs::new`].
/// - Provides the demonstration calibration via `Default`.
///
/// Fields
/// ------
/// - `sn_slope`: `f64`
///   Slope `a` of the S-N curve exponent `a·Seq + b`; negative for the
///   usual "more stress, faster initiation" convention.
/// - `sn_intercept`: `f64`
///   Intercept `b` of the S-N curve exponent.
/// - `geometry_factor`: `f64`
///   Stress-intensity geometry factor `F` in `ΔK = F·ΔS·√(π·a)`.
/// - `walker_rate`: `f64`
///   Logistic rate `β` gating the Walker exponent by stress ratio.
/// - `walker_gamma`: `f64`
///   Walker exponent `γ` blended into an effective value by the gate.
/// - `paris_coeff`: `f64`
///   Paris-law-style coefficient `C0` of the propagation law.
/// - `paris_exponent`: `f64`
///   Paris-law-style exponent `m` of the propagation law.
/// - `blend_rate`: `f64`
///   Logistic rate `α` of the initiation/propagation regime selector.
/// - `threshold_length`: `f64`
///   Crack length `a_th` at which the selector's blend weight is 1/2.
///
/// Invariants
/// ----------
/// - All nine fields are finite (`is_finite() == true`).
///
/// Performance
/// -----------
/// - Construction is O(1); the type is `Copy` and cheap to pass by value
///   or reference into per-cycle law evaluations.
///
/// Notes
/// -----
/// - No sign or range constraints are imposed beyond finiteness; whether a
///   coefficient set yields non-negative damage increments is a property of
///   the calibration, not of this container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthCoeffs {
    /// S-N curve slope `a` (exponent term `a·Seq + b`).
    pub sn_slope: f64,
    /// S-N curve intercept `b`.
    pub sn_intercept: f64,
    /// Stress-intensity geometry factor `F`.
    pub geometry_factor: f64,
    /// Logistic rate `β` of the Walker stress-ratio gate.
    pub walker_rate: f64,
    /// Walker exponent `γ`.
    pub walker_gamma: f64,
    /// Propagation coefficient `C0` (Paris-law analogue).
    pub paris_coeff: f64,
    /// Propagation exponent `m` (Paris-law analogue).
    pub paris_exponent: f64,
    /// Logistic rate `α` of the regime selector.
    pub blend_rate: f64,
    /// Threshold crack length `a_th` of the regime selector.
    pub threshold_length: f64,
}

impl GrowthCoeffs {
    /// Construct validated crack-growth coefficients.
    ///
    /// Parameters
    /// ----------
    /// - `sn_slope`, `sn_intercept`: `f64`
    ///   S-N curve exponent coefficients `a` and `b`.
    /// - `geometry_factor`: `f64`
    ///   Stress-intensity geometry factor `F`.
    /// - `walker_rate`, `walker_gamma`: `f64`
    ///   Stress-ratio gate rate `β` and Walker exponent `γ`.
    /// - `paris_coeff`, `paris_exponent`: `f64`
    ///   Propagation-law coefficients `C0` and `m`.
    /// - `blend_rate`, `threshold_length`: `f64`
    ///   Regime-selector rate `α` and threshold crack length `a_th`.
    ///
    /// Returns
    /// -------
    /// `CoeffResult<GrowthCoeffs>`
    ///   - `Ok(GrowthCoeffs)` when every coefficient is finite.
    ///   - `Err(CoeffError::NonFiniteCoeff { name, value })` at the first
    ///     NaN/±inf coefficient, with `name` identifying the field.
    ///
    /// Errors
    /// ------
    /// - `CoeffError::NonFiniteCoeff`
    ///   Returned for the first coefficient that is not finite; coefficients
    ///   are checked in declaration order.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via `CoeffError`.
    ///
    /// Notes
    /// -----
    /// - Sign conventions are not enforced. A positive `sn_slope` or a
    ///   negative `blend_rate` is accepted; the laws remain well-defined,
    ///   they just describe a different (possibly unphysical) calibration.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use fatigue_growth::growth::core::coeffs::GrowthCoeffs;
    /// let coeffs = GrowthCoeffs::new(
    ///     -3.73, 13.48261, 2.8, -1e8, 0.68, 1.1323e-10, 3.859, 1e8, 0.5e-3,
    /// )
    /// .unwrap();
    /// assert_eq!(coeffs, GrowthCoeffs::default());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sn_slope: f64, sn_intercept: f64, geometry_factor: f64, walker_rate: f64,
        walker_gamma: f64, paris_coeff: f64, paris_exponent: f64, blend_rate: f64,
        threshold_length: f64,
    ) -> CoeffResult<Self> {
        validate_coeff("sn_slope", sn_slope)?;
        validate_coeff("sn_intercept", sn_intercept)?;
        validate_coeff("geometry_factor", geometry_factor)?;
        validate_coeff("walker_rate", walker_rate)?;
        validate_coeff("walker_gamma", walker_gamma)?;
        validate_coeff("paris_coeff", paris_coeff)?;
        validate_coeff("paris_exponent", paris_exponent)?;
        validate_coeff("blend_rate", blend_rate)?;
        validate_coeff("threshold_length", threshold_length)?;
        Ok(GrowthCoeffs {
            sn_slope,
            sn_intercept,
            geometry_factor,
            walker_rate,
            walker_gamma,
            paris_coeff,
            paris_exponent,
            blend_rate,
            threshold_length,
        })
    }
}

impl Default for GrowthCoeffs {
    /// Calibration used by the bundled turbine-fleet demonstration.
    ///
    /// S-N exponent `-3.73·Seq + 13.48261`, geometry factor `2.8`, Walker
    /// gate `β = -1e8` with `γ = 0.68`, propagation law
    /// `C0 = 1.1323e-10`, `m = 3.859`, and a regime selector switching at
    /// `a_th = 0.5 mm` with rate `α = 1e8` (an effectively hard switch).
    fn default() -> Self {
        GrowthCoeffs {
            sn_slope: -3.73,
            sn_intercept: 13.48261,
            geometry_factor: 2.8,
            walker_rate: -1e8,
            walker_gamma: 0.68,
            paris_coeff: 1.1323e-10,
            paris_exponent: 3.859,
            blend_rate: 1e8,
            threshold_length: 0.5e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::errors::CoeffError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `GrowthCoeffs::new` for finite and
    //   non-finite coefficient sets.
    // - The default demonstration calibration.
    //
    // They intentionally DO NOT cover:
    // - How the coefficients behave inside the damage laws (covered by the
    //   laws and recursion tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `GrowthCoeffs::new` accepts the demonstration calibration
    // and preserves every field.
    //
    // Given
    // -----
    // - The nine default coefficient values, passed explicitly.
    //
    // Expect
    // ------
    // - `new` returns `Ok` and the result equals `GrowthCoeffs::default()`.
    fn growthcoeffs_new_accepts_demonstration_calibration() {
        let coeffs =
            GrowthCoeffs::new(-3.73, 13.48261, 2.8, -1e8, 0.68, 1.1323e-10, 3.859, 1e8, 0.5e-3)
                .expect("finite calibration should construct GrowthCoeffs");

        assert_eq!(coeffs, GrowthCoeffs::default());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `GrowthCoeffs::new` rejects a non-finite coefficient and
    // names the offending field.
    //
    // Given
    // -----
    // - The default calibration with `paris_coeff` replaced by NaN.
    //
    // Expect
    // ------
    // - `Err(CoeffError::NonFiniteCoeff { name: "paris_coeff", .. })`.
    fn growthcoeffs_new_rejects_non_finite_coefficient() {
        let err =
            GrowthCoeffs::new(-3.73, 13.48261, 2.8, -1e8, 0.68, f64::NAN, 3.859, 1e8, 0.5e-3)
                .unwrap_err();

        match err {
            CoeffError::NonFiniteCoeff { name, value } => {
                assert_eq!(name, "paris_coeff");
                assert!(value.is_nan());
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure coefficients of either sign are accepted as long as they are
    // finite.
    //
    // Given
    // -----
    // - A calibration with a positive S-N slope and a negative blend rate
    //   (both reversed relative to the demonstration set).
    //
    // Expect
    // ------
    // - `GrowthCoeffs::new` returns `Ok`.
    fn growthcoeffs_new_accepts_reversed_sign_conventions() {
        let coeffs =
            GrowthCoeffs::new(3.73, 13.48261, 2.8, 1e8, 0.68, 1.1323e-10, 3.859, -1e8, 0.5e-3);

        assert!(coeffs.is_ok());
    }
}
