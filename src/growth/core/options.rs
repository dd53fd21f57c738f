//! Growth options — configuration for fatigue-integration runs.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of one integration run in a single
//! place, making the workflow explicit and reproducible: the seed policy
//! for the per-asset crack-length accumulator and the across-asset
//! execution strategy.
//!
//! Key behaviors
//! -------------
//! - Represent run configuration via [`GrowthOptions`], bundling the
//!   [`Seed`] policy and the `parallel` flag consumed by the fleet driver.
//! - Keep cross-cutting configuration out of low-level recursion code, so
//!   call sites pass explicit, validated options instead of ad-hoc flags.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`GrowthOptions`] assumes its [`Seed`] component has already been
//!   validated by its own constructors; it does not impose additional
//!   cross-field checks.
//! - `parallel` only selects the across-asset fan-out. The within-asset
//!   recurrence is strictly sequential either way, and both paths produce
//!   bit-identical output.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`GrowthOptions`] at model setup time (or start from
//!   `GrowthOptions::default()`) and pass it into the model constructor;
//!   low-level code depends on this type rather than on loose arguments.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `GrowthOptions::new` and `default` preserve
//!   their inputs; the sequential/parallel equivalence is covered by
//!   integration tests.
use crate::growth::core::seed::Seed;

/// GrowthOptions — run-time configuration for the fatigue integrator.
///
/// Purpose
/// -------
/// Bundle the seed policy and execution strategy of one integration run.
///
/// Fields
/// ------
/// - `seed`: [`Seed`]
///   Policy for the initial per-asset crack length (zero start, reference
///   sample, fixed scalar, or per-asset vector).
/// - `parallel`: `bool`
///   When true, assets are integrated on rayon workers and results merged
///   by asset index; when false, assets are walked in order on the calling
///   thread. Output is identical either way.
///
/// Invariants
/// ----------
/// - `seed` is assumed to have been constructed via its validated
///   builders; no extra checks are performed here.
///
/// Performance
/// -----------
/// - The struct is small and `Clone`/`PartialEq`, cheap to pass by value
///   or store inside a model.
///
/// Notes
/// -----
/// - Public APIs should accept `GrowthOptions` rather than separate
///   `seed`/`parallel` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthOptions {
    /// Seed policy for the per-asset crack-length accumulator.
    pub seed: Seed,
    /// Integrate assets on rayon workers instead of the calling thread.
    pub parallel: bool,
}

impl GrowthOptions {
    /// Construct a new [`GrowthOptions`] from already-validated components.
    ///
    /// Parameters
    /// ----------
    /// - `seed`: `Seed`
    ///   Seed policy, constructed via a valid `Seed` builder.
    /// - `parallel`: `bool`
    ///   Across-asset execution strategy.
    ///
    /// Returns
    /// -------
    /// `GrowthOptions`
    ///   The two components packaged without transformation.
    ///
    /// Errors
    /// ------
    /// - Never returns an error; all validation is expected to have been
    ///   performed by the `Seed` constructors.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(seed: Seed, parallel: bool) -> GrowthOptions {
        GrowthOptions { seed, parallel }
    }
}

impl Default for GrowthOptions {
    /// Zero-seed, sequential run — the plain demonstration configuration.
    fn default() -> Self {
        GrowthOptions { seed: Seed::zero(), parallel: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Field preservation by `GrowthOptions::new` and the documented
    //   defaults.
    //
    // They intentionally DO NOT cover:
    // - Seed validation (covered by seed tests) or parallel/sequential
    //   equivalence (covered by integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `GrowthOptions::new` preserves its inputs without
    // mutation.
    //
    // Given
    // -----
    // - A reference seed policy and `parallel = true`.
    //
    // Expect
    // ------
    // - Both fields round-trip exactly.
    fn growthoptions_new_preserves_fields() {
        let opts = GrowthOptions::new(Seed::reference(), true);

        assert_eq!(opts.seed, Seed::Reference);
        assert!(opts.parallel);
    }

    #[test]
    // Purpose
    // -------
    // Verify the documented default configuration.
    //
    // Given
    // -----
    // - `GrowthOptions::default()`.
    //
    // Expect
    // ------
    // - Zero seed and sequential execution.
    fn growthoptions_default_is_zero_seed_sequential() {
        let opts = GrowthOptions::default();

        assert_eq!(opts.seed, Seed::Zero);
        assert!(!opts.parallel);
    }
}
