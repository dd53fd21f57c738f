//! Seed policies for the crack-growth integrator — control the initial
//! accumulated crack length per asset.
//!
//! Purpose
//! -------
//! Provide a small set of policies for seeding the per-asset crack-length
//! accumulator before integration starts. The integrator's seed and the
//! *reference* series' initial value are two distinct quantities that the
//! source demonstration conflated; this module names both explicitly so a
//! run states which one it uses.
//!
//! Key behaviors
//! -------------
//! - Represent seeding as an explicit policy via [`Seed`]: zero start,
//!   reference-sample start, fixed scalar, or a fully specified per-asset
//!   vector.
//! - Validate fixed-scalar and per-asset policies to ensure seed lengths
//!   are finite and non-negative (the propagation law takes a square root
//!   of the accumulated length) and that vector lengths match the fleet
//!   size.
//! - Surface invalid configurations as typed errors (`GrowthError`) instead
//!   of panicking.
//!
//! Invariants & assumptions
//! ------------------------
//! - All seed crack lengths are finite and `>= 0`; zero is allowed and
//!   models a pristine component.
//! - For `PerAsset`, the vector length must equal the fleet size; the
//!   integrator re-checks this against the actual data before running.
//! - `Reference` defers to the fleet's reference crack-length matrix; the
//!   element values come from validated [`FleetData`] and are resolved at
//!   integration time.
//!
//! Conventions
//! -----------
//! - Seeds are expressed in the same length unit as the fleet's
//!   crack-length series ([`FleetMeta::length_unit`]).
//!
//! Downstream usage
//! ----------------
//! - Choose a [`Seed`] variant at model setup time and carry it inside
//!   `GrowthOptions`; the integrator calls [`Seed::resolve`] once per asset
//!   to obtain the starting accumulator value.
//!
//! Testing notes
//! -------------
//! - Unit tests verify constructor validation (fixed scalar bounds,
//!   per-asset length and element checks) and per-variant `resolve`
//!   behavior against a small fleet.
//!
//! [`FleetMeta::length_unit`]: crate::growth::core::data::FleetMeta
use crate::growth::{
    core::{
        data::FleetData,
        validation::{validate_seed_fixed, validate_seed_vector},
    },
    errors::GrowthResult,
};
use ndarray::Array1;

/// Seed — policies for the integrator's initial crack length per asset.
///
/// Purpose
/// -------
/// Encode how the per-asset crack-length accumulator is initialized before
/// the cycle walk starts, from the bare zero start of the demonstration
/// loop to explicit per-asset warm starts.
///
/// Variants
/// --------
/// - `Zero`
///   Start every asset at zero accumulated crack length. This replicates
///   the plain demonstration loop and is the default policy.
/// - `Reference`
///   Start each asset at its first reference crack-length sample — the
///   convention used by differentiable-layer predictors consuming the same
///   inputs, which makes trajectories directly comparable.
/// - `Fixed(f64)`
///   One validated scalar (finite, `>= 0`) used for every asset.
/// - `PerAsset(Array1<f64>)`
///   Fully explicit per-asset seeds, validated for fleet-size length and
///   element-wise finiteness/non-negativity.
///
/// Invariants
/// ----------
/// - For `Fixed`, the scalar is finite and non-negative.
/// - For `PerAsset`, the vector length equals the fleet size and every
///   entry is finite and non-negative.
///
/// Notes
/// -----
/// - Pattern matching on `Seed` in integration code is exhaustive, so new
///   policies added later trigger compiler warnings where they need
///   handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// Start every asset at zero accumulated crack length.
    Zero,
    /// Start each asset at its first reference crack-length sample.
    Reference,
    /// Use a fixed non-negative scalar for every asset.
    Fixed(f64),
    /// Use explicitly provided per-asset seeds (length = fleet size).
    PerAsset(Array1<f64>),
}

impl Seed {
    /// Start every asset at zero accumulated crack length.
    ///
    /// This is the bare integration run: damage accumulates from a pristine
    /// component, and the reference series is used for comparison only.
    pub const fn zero() -> Self {
        Seed::Zero
    }

    /// Start each asset at its first reference crack-length sample.
    ///
    /// The sample is taken from column 0 of the fleet's reference
    /// crack-length matrix at integration time, so the same policy value
    /// can be reused across fleets.
    pub const fn reference() -> Self {
        Seed::Reference
    }

    /// Use a fixed non-negative scalar seed for every asset.
    ///
    /// Parameters
    /// ----------
    /// - `value`: `f64`
    ///   Initial crack length applied to every asset. Must be finite and
    ///   `>= 0.0`.
    ///
    /// Returns
    /// -------
    /// `GrowthResult<Seed>`
    ///   - `Ok(Seed::Fixed(value))` when `value` is finite and non-negative.
    ///   - `Err(GrowthError::InvalidSeedFixed { value })` otherwise.
    ///
    /// Errors
    /// ------
    /// - `GrowthError::InvalidSeedFixed`
    ///   Returned when `value` is NaN/±inf or negative; a negative seed
    ///   would put the propagation law's square root out of domain on the
    ///   first cycle.
    pub fn fixed(value: f64) -> GrowthResult<Self> {
        validate_seed_fixed(value)?;
        Ok(Seed::Fixed(value))
    }

    /// Use explicitly provided per-asset seeds.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `Array1<f64>`
    ///   One initial crack length per asset; length must equal `assets` and
    ///   every entry must be finite and `>= 0.0`.
    /// - `assets`: `usize`
    ///   Fleet size the vector is validated against.
    ///
    /// Returns
    /// -------
    /// `GrowthResult<Seed>`
    ///   - `Ok(Seed::PerAsset(values))` when the vector validates.
    ///   - `Err(GrowthError::SeedLengthMismatch { .. })` or
    ///     `Err(GrowthError::InvalidSeedValue { .. })` otherwise.
    ///
    /// Errors
    /// ------
    /// - `GrowthError::SeedLengthMismatch`
    ///   Returned when `values.len() != assets`.
    /// - `GrowthError::InvalidSeedValue`
    ///   Returned at the first non-finite or negative entry.
    pub fn per_asset(values: Array1<f64>, assets: usize) -> GrowthResult<Self> {
        validate_seed_vector(&values, assets)?;
        Ok(Seed::PerAsset(values))
    }

    /// Resolve the starting accumulator value for one asset.
    ///
    /// # Behavior
    /// - `Zero` → `0.0`.
    /// - `Reference` → `data.reference_crack[[asset, 0]]`.
    /// - `Fixed(v)` → `v`.
    /// - `PerAsset(values)` → `values[asset]`.
    ///
    /// # Inputs
    /// - `data`: the validated fleet the run integrates; only consulted by
    ///   the `Reference` variant.
    /// - `asset`: 0-based asset index, `< data.shape().assets` (enforced by
    ///   the integrator's iteration bounds).
    pub fn resolve(&self, data: &FleetData, asset: usize) -> f64 {
        match self {
            Seed::Zero => 0.0,
            Seed::Reference => data.reference_crack[[asset, 0]],
            Seed::Fixed(value) => *value,
            Seed::PerAsset(values) => values[asset],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{
        core::{
            data::{FleetData, FleetMeta},
            units::LengthUnit,
        },
        errors::GrowthError,
    };
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constructor validation for `Seed::fixed` and `Seed::per_asset`.
    // - `Seed::resolve` behavior for every variant against a small fleet.
    //
    // They intentionally DO NOT cover:
    // - How seeds interact with the recurrence (covered by recursion and
    //   integration tests).
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Build a 2-asset, 2-cycle fleet whose reference crack lengths differ
    // per asset, so `Seed::Reference` resolution is observable.
    fn make_fleet_stub() -> FleetData {
        let seq = Array2::from_elem((2, 2), 0.01);
        let delta_s = Array2::from_elem((2, 2), 50.0);
        let stress_ratio = Array2::from_elem((2, 2), 0.3);
        let reference_crack = array![[1e-3, 1.1e-3], [2e-3, 2.2e-3]];
        let meta = FleetMeta::new(LengthUnit::Meters, None, false);
        FleetData::new(seq, delta_s, stress_ratio, reference_crack, meta)
            .expect("stub fleet should validate")
    }

    #[test]
    // Purpose
    // -------
    // Verify that `Seed::fixed` accepts zero and positive finite scalars
    // and rejects negative ones.
    //
    // Given
    // -----
    // - Scalars `0.0`, `5e-4`, and `-1.0`.
    //
    // Expect
    // ------
    // - Zero and `5e-4` construct `Seed::Fixed`.
    // - `-1.0` yields `GrowthError::InvalidSeedFixed { value: -1.0 }`.
    fn seed_fixed_validates_scalar() {
        assert_eq!(Seed::fixed(0.0).unwrap(), Seed::Fixed(0.0));
        assert_eq!(Seed::fixed(5e-4).unwrap(), Seed::Fixed(5e-4));

        assert_eq!(
            Seed::fixed(-1.0).unwrap_err(),
            GrowthError::InvalidSeedFixed { value: -1.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `Seed::per_asset` enforces the fleet-size length
    // constraint.
    //
    // Given
    // -----
    // - A length-3 vector validated against a 2-asset fleet.
    //
    // Expect
    // ------
    // - `Err(GrowthError::SeedLengthMismatch { expected: 2, actual: 3 })`.
    fn seed_per_asset_rejects_length_mismatch() {
        let err = Seed::per_asset(array![0.0, 1e-3, 2e-3], 2).unwrap_err();

        assert_eq!(err, GrowthError::SeedLengthMismatch { expected: 2, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Verify `Seed::resolve` for every variant.
    //
    // Given
    // -----
    // - The 2-asset stub fleet with reference initial lengths 1e-3 and
    //   2e-3.
    // - One policy per variant.
    //
    // Expect
    // ------
    // - `Zero` resolves to 0.0 for both assets.
    // - `Reference` resolves to the first reference sample per asset.
    // - `Fixed(7e-4)` resolves to 7e-4 for both assets.
    // - `PerAsset([1e-4, 3e-4])` resolves element-wise.
    fn seed_resolve_matches_policy() {
        let data = make_fleet_stub();

        assert_eq!(Seed::zero().resolve(&data, 0), 0.0);
        assert_eq!(Seed::zero().resolve(&data, 1), 0.0);

        assert_eq!(Seed::reference().resolve(&data, 0), 1e-3);
        assert_eq!(Seed::reference().resolve(&data, 1), 2e-3);

        let fixed = Seed::fixed(7e-4).unwrap();
        assert_eq!(fixed.resolve(&data, 0), 7e-4);
        assert_eq!(fixed.resolve(&data, 1), 7e-4);

        let per_asset = Seed::per_asset(array![1e-4, 3e-4], 2).unwrap();
        assert_eq!(per_asset.resolve(&data, 0), 1e-4);
        assert_eq!(per_asset.resolve(&data, 1), 3e-4);
    }
}
