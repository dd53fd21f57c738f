//! Closed-form damage laws for fatigue crack growth.
//!
//! Implements the three pure per-cycle equations composed by the fleet
//! integrator: the S-N initiation curve, the Walker propagation law, and
//! the sigmoid regime selector.
//!
//! ## Model convention
//! - Initiation: `da_i = 1 / 10^(a·Seq + b)`
//! - Propagation (Walker): `da_p = C · ΔK^m` with
//!   `ΔK = F·ΔS·√(π·a)`, `C = C0 / (1 − R)^(m·(1 − γ_eff))`, and
//!   `γ_eff = γ / (1 + exp(β·R))`
//! - Selector: `da = w·da_p + (1 − w)·da_i` with
//!   `w = 1 / (1 + exp(−α·(a − a_th)))`
//!
//! ## What this module does
//! - Evaluates each law as a pure function of its per-cycle inputs and a
//!   shared [`GrowthCoeffs`] reference; no state, no allocation.
//! - Exposes the selector's blend weight separately ([`blend_weight`]) so
//!   regime-switch behavior can be inspected and tested directly.
//!
//! ## Domain preconditions (enforced by the caller)
//! - [`walker`] requires `crack >= 0` (square-root domain) and
//!   `stress_ratio != 1` (the coefficient divides by `(1 − R)`). The
//!   integrator guards both before every call and reports the offending
//!   asset/cycle; the laws themselves never branch on them.
//! - None of the laws guards against overflow for extreme inputs; the
//!   integrator checks each returned value for finiteness instead of
//!   letting NaN/inf propagate through the walk.
use crate::growth::core::coeffs::GrowthCoeffs;
use std::f64::consts::PI;

/// Initiation-phase damage increment from the S-N curve.
///
/// # Definition
/// `da_i = 1 / 10^(a·Seq + b)` with `a = coeffs.sn_slope` and
/// `b = coeffs.sn_intercept`.
///
/// Monotonic in `seq` for a fixed sign of `a`: with the usual negative
/// slope, more equivalent stress shrinks the exponent and enlarges the
/// increment.
///
/// # Inputs
/// - `seq`: equivalent stress for the cycle.
/// - `coeffs`: shared model coefficients.
pub fn sn_curve(seq: f64, coeffs: &GrowthCoeffs) -> f64 {
    1.0 / 10f64.powf(coeffs.sn_slope * seq + coeffs.sn_intercept)
}

/// Propagation-phase damage increment from the Walker law.
///
/// # Definition
/// ```text
/// ΔK    = F · ΔS · √(π · a)
/// γ_eff = γ / (1 + exp(β·R))
/// C     = C0 / (1 − R)^(m · (1 − γ_eff))
/// da_p  = C · ΔK^m
/// ```
/// The logistic gate turns the Walker exponent on or off by stress ratio;
/// with the calibrated strongly negative `β`, positive ratios drive the
/// gate to 1 (full `γ`) and negative ratios drive it to 0 (plain Paris
/// behavior).
///
/// # Preconditions
/// - `crack >= 0`: the stress-intensity range takes `√(π·crack)`.
/// - `stress_ratio != 1`: the Walker coefficient divides by `(1 − R)`.
///
/// Callers must guard both; the integrator does so per cycle and reports
/// the asset/cycle on violation. Passing out-of-domain values here yields
/// NaN/inf, which the integrator's finiteness guard then rejects.
///
/// # Inputs
/// - `delta_s`: load range for the cycle.
/// - `stress_ratio`: min/max stress ratio for the cycle.
/// - `crack`: accumulated crack length *before* this cycle.
/// - `coeffs`: shared model coefficients.
pub fn walker(delta_s: f64, stress_ratio: f64, crack: f64, coeffs: &GrowthCoeffs) -> f64 {
    let dk = coeffs.geometry_factor * delta_s * (PI * crack).sqrt();
    let gate = 1.0 / (1.0 + (coeffs.walker_rate * stress_ratio).exp());
    let gamma_eff = gate * coeffs.walker_gamma;
    let c = coeffs.paris_coeff
        / (1.0 - stress_ratio).powf(coeffs.paris_exponent * (1.0 - gamma_eff));
    c * dk.powf(coeffs.paris_exponent)
}

/// Logistic weight of the propagation regime at a given crack length.
///
/// `w = 1 / (1 + exp(−α·(crack − a_th)))` — approaches 0 well below the
/// threshold, 1 well above it, with transition width set by `α`. At
/// `crack = a_th ± 100/α` the weight is within 1e-6 of the corresponding
/// limit for positive `α`.
pub fn blend_weight(crack: f64, coeffs: &GrowthCoeffs) -> f64 {
    1.0 / (1.0 + (-coeffs.blend_rate * (crack - coeffs.threshold_length)).exp())
}

/// Smoothly blended damage increment for one cycle.
///
/// # Definition
/// `da = w·da_p + (1 − w)·da_i` with `w = blend_weight(crack, coeffs)`.
///
/// Implements the smooth regime switch: initiation-dominated for cracks
/// well below the threshold length, propagation-dominated well above it.
///
/// # Inputs
/// - `initiation`: S-N increment `da_i` for the cycle.
/// - `propagation`: Walker increment `da_p` for the cycle.
/// - `crack`: accumulated crack length *before* this cycle.
/// - `coeffs`: shared model coefficients.
pub fn sigmoid_blend(initiation: f64, propagation: f64, crack: f64, coeffs: &GrowthCoeffs) -> f64 {
    let w = blend_weight(crack, coeffs);
    w * propagation + (1.0 - w) * initiation
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Point values of the S-N curve at the calibrated coefficients.
    // - Saturation of the selector's blend weight around the threshold.
    // - Walker behavior at zero crack length and under the stress-ratio
    //   gate.
    //
    // They intentionally DO NOT cover:
    // - Domain-violation reporting (R == 1, negative crack length), which
    //   is the integrator's responsibility and is tested there.
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Provide the demonstration calibration for law-level point checks.
    fn demo_coeffs() -> GrowthCoeffs {
        GrowthCoeffs::default()
    }

    #[test]
    // Purpose
    // -------
    // Pin the S-N curve to its closed form at two equivalent-stress values.
    //
    // Given
    // -----
    // - Calibration `a = -3.73`, `b = 13.48261`.
    // - `Seq = 0` and `Seq = 1`.
    //
    // Expect
    // ------
    // - `sn_curve(0)` equals `10^(-13.48261)` (≈ 3.29e-14) to within
    //   1e-12 relative error.
    // - `sn_curve(1)` equals `10^(-(13.48261 - 3.73))`.
    fn sn_curve_matches_closed_form_points() {
        let coeffs = demo_coeffs();

        let at_zero = sn_curve(0.0, &coeffs);
        let expected_zero = 10f64.powf(-13.48261);
        assert!(((at_zero - expected_zero) / expected_zero).abs() < 1e-12);

        let at_one = sn_curve(1.0, &coeffs);
        let expected_one = 10f64.powf(-(13.48261 - 3.73));
        assert!(((at_one - expected_one) / expected_one).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the selector's blend weight saturates on both sides of the
    // threshold crack length.
    //
    // Given
    // -----
    // - A positive blend rate `α = 40.0` and threshold `a_th = 0.5e-3` (a
    //   soft gate, so the transition region is observable).
    // - Crack lengths `a_th - 100/α` and `a_th + 100/α`.
    //
    // Expect
    // ------
    // - Weight within 1e-6 of 0 below, and of 1 above.
    // - Exactly 0.5 at the threshold itself.
    fn blend_weight_saturates_around_threshold() {
        let coeffs = GrowthCoeffs::new(
            -3.73, 13.48261, 2.8, -1e8, 0.68, 1.1323e-10, 3.859, 40.0, 0.5e-3,
        )
        .expect("finite calibration");

        let below = blend_weight(coeffs.threshold_length - 100.0 / coeffs.blend_rate, &coeffs);
        let above = blend_weight(coeffs.threshold_length + 100.0 / coeffs.blend_rate, &coeffs);

        assert!(below < 1e-6);
        assert!(above > 1.0 - 1e-6);
        assert_eq!(blend_weight(coeffs.threshold_length, &coeffs), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify the blended increment converges to each regime's increment at
    // the saturation points.
    //
    // Given
    // -----
    // - The soft-gate calibration from the saturation test.
    // - Distinct initiation (2.0) and propagation (8.0) increments.
    //
    // Expect
    // ------
    // - Well below threshold the blend is within 1e-5 of the initiation
    //   increment; well above, within 1e-5 of the propagation increment.
    fn sigmoid_blend_selects_regime_by_crack_length() {
        let coeffs = GrowthCoeffs::new(
            -3.73, 13.48261, 2.8, -1e8, 0.68, 1.1323e-10, 3.859, 40.0, 0.5e-3,
        )
        .expect("finite calibration");

        let below = sigmoid_blend(
            2.0,
            8.0,
            coeffs.threshold_length - 100.0 / coeffs.blend_rate,
            &coeffs,
        );
        let above = sigmoid_blend(
            2.0,
            8.0,
            coeffs.threshold_length + 100.0 / coeffs.blend_rate,
            &coeffs,
        );

        assert!((below - 2.0).abs() < 1e-5);
        assert!((above - 8.0).abs() < 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // Verify the propagation law vanishes at zero crack length: the
    // stress-intensity range is zero, and `0^m = 0` for positive `m`.
    //
    // Given
    // -----
    // - Demonstration calibration, `ΔS = 50`, `R = 0.3`, `crack = 0`.
    //
    // Expect
    // ------
    // - `walker(..) == 0.0`.
    fn walker_vanishes_at_zero_crack_length() {
        let coeffs = demo_coeffs();

        assert_eq!(walker(50.0, 0.3, 0.0, &coeffs), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the stress-ratio gate reaches its two limits with the
    // calibrated strongly negative rate.
    //
    // Given
    // -----
    // - Demonstration calibration (`β = -1e8`), `ΔS = 50`, crack 1e-3.
    // - A positive ratio (0.3) saturating the gate at 1 (full Walker
    //   exponent) and a negative ratio (-0.5) saturating it at 0 (plain
    //   Paris behavior, `γ_eff = 0`).
    //
    // Expect
    // ------
    // - Both evaluations are finite and strictly positive.
    // - The positive-ratio increment matches the closed form with
    //   `γ_eff = γ`; the negative-ratio increment matches `γ_eff = 0`.
    fn walker_gate_saturates_by_stress_ratio() {
        let coeffs = demo_coeffs();
        let crack = 1e-3;
        let dk = coeffs.geometry_factor * 50.0 * (PI * crack).sqrt();

        let gated = walker(50.0, 0.3, crack, &coeffs);
        let expected_gated = coeffs.paris_coeff
            / (1.0 - 0.3f64).powf(coeffs.paris_exponent * (1.0 - coeffs.walker_gamma))
            * dk.powf(coeffs.paris_exponent);
        assert!(gated.is_finite() && gated > 0.0);
        assert!(((gated - expected_gated) / expected_gated).abs() < 1e-12);

        let ungated = walker(50.0, -0.5, crack, &coeffs);
        let expected_ungated = coeffs.paris_coeff
            / (1.0 - (-0.5f64)).powf(coeffs.paris_exponent)
            * dk.powf(coeffs.paris_exponent);
        assert!(ungated.is_finite() && ungated > 0.0);
        assert!(((ungated - expected_ungated) / expected_ungated).abs() < 1e-12);
    }
}
