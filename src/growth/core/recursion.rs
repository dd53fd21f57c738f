//! Crack-growth recursion: per-asset cycle walk and fleet driver.
//!
//! Implements the sequential accumulation loop that turns per-cycle
//! load/stress series into damage increments and cumulative crack length,
//! plus the fleet driver that runs one walk per asset.
//!
//! ## Recurrence
//! For asset `ii` with accumulator `a` seeded by the run's [`Seed`] policy,
//! each cycle `jj` computes
//!
//! ```text
//! da_i = sn_curve(Seq[ii, jj])
//! da_p = walker(ΔS[ii, jj], R[ii, jj], a)      // previous length, not this cycle's
//! da   = sigmoid_blend(da_i, da_p, a)
//! a    = a + da
//! ```
//!
//! and records `da_i`, `da_p`, `da`, and the updated `a` at position `jj`.
//! The propagation law consumes the *previous* accumulated crack length,
//! which is what makes the walk a true recurrence: cycle `jj + 1` cannot be
//! evaluated before cycle `jj` completes for the same asset.
//!
//! ## Ordering and independence
//! - Within one asset, cycles are walked strictly in increasing order; the
//!   data dependency through the accumulator forbids reordering.
//! - Across assets there is no shared mutable state, so the fleet driver
//!   may fan assets out to rayon workers ([`GrowthOptions::parallel`]) and
//!   merge the results by asset index. Both paths produce bit-identical
//!   output.
//!
//! ## Guards
//! The laws themselves are pure and unguarded; this module enforces their
//! domains per cycle and aborts the whole run at the first violation,
//! reporting the asset and cycle:
//! - `R == 1` → [`GrowthError::DegenerateStressRatio`],
//! - accumulator `< 0` → [`GrowthError::NegativeCrackLength`],
//! - any non-finite law output or accumulator value →
//!   [`GrowthError::NonFiniteIncrement`] naming the offending term.
//!
//! An aborted asset's partial trace is discarded; the sequence is only
//! meaningful as a complete, in-order walk.
use crate::growth::{
    core::{
        coeffs::GrowthCoeffs,
        data::FleetData,
        history::GrowthHistory,
        laws::{sigmoid_blend, sn_curve, walker},
        options::GrowthOptions,
        seed::Seed,
        validation::validate_seed_vector,
    },
    errors::{GrowthError, GrowthResult},
};
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;

/// Per-asset output of one complete cycle walk.
///
/// Four aligned series of length `cycles`: the initiation and propagation
/// increments, the blended increment, and the cumulative crack length after
/// each cycle. Assembled into fleet matrices by
/// [`GrowthHistory::from_traces`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssetTrace {
    /// S-N initiation increment per cycle.
    pub initiation: Array1<f64>,
    /// Walker propagation increment per cycle.
    pub propagation: Array1<f64>,
    /// Blended damage increment per cycle.
    pub blended: Array1<f64>,
    /// Cumulative crack length after each cycle.
    pub crack_length: Array1<f64>,
}

/// Walk one asset's cycles in order, accumulating crack length.
///
/// # Behavior
/// - Starts the accumulator at `seed` and evaluates the three damage laws
///   per cycle, recording all four series.
/// - Checks the propagation law's domain (`R != 1`, accumulator `>= 0`)
///   *before* each evaluation and the finiteness of every computed term
///   *after* it, so NaN/inf never propagates silently through the walk.
///
/// # Inputs
/// - `asset`: 0-based asset index, used only for error context.
/// - `seq_row`, `delta_s_row`, `stress_ratio_row`: the asset's per-cycle
///   input series (equal lengths, guaranteed by [`FleetData`]).
/// - `seed`: initial accumulated crack length resolved from the run's
///   [`Seed`] policy.
/// - `coeffs`: shared model coefficients.
///
/// # Returns
/// - `Ok(AssetTrace)` with four full-length series on success.
///
/// # Errors
/// - [`GrowthError::DegenerateStressRatio`] at the first cycle with
///   `R == 1`.
/// - [`GrowthError::NegativeCrackLength`] if the accumulator is negative
///   entering a propagation evaluation (including a negative seed from an
///   unvalidated source such as reference data).
/// - [`GrowthError::NonFiniteIncrement`] if a law output or the updated
///   accumulator is NaN/±inf.
pub fn integrate_asset(
    asset: usize, seq_row: ArrayView1<f64>, delta_s_row: ArrayView1<f64>,
    stress_ratio_row: ArrayView1<f64>, seed: f64, coeffs: &GrowthCoeffs,
) -> GrowthResult<AssetTrace> {
    let cycles = seq_row.len();
    let mut initiation = Array1::zeros(cycles);
    let mut propagation = Array1::zeros(cycles);
    let mut blended = Array1::zeros(cycles);
    let mut crack_length = Array1::zeros(cycles);

    let mut crack = seed;
    for cycle in 0..cycles {
        let ratio = stress_ratio_row[cycle];
        if ratio == 1.0 {
            return Err(GrowthError::DegenerateStressRatio { asset, cycle });
        }
        if crack < 0.0 {
            return Err(GrowthError::NegativeCrackLength { asset, cycle, value: crack });
        }

        let da_init = sn_curve(seq_row[cycle], coeffs);
        ensure_finite("initiation", da_init, asset, cycle)?;

        let da_prop = walker(delta_s_row[cycle], ratio, crack, coeffs);
        ensure_finite("propagation", da_prop, asset, cycle)?;

        let da = sigmoid_blend(da_init, da_prop, crack, coeffs);
        ensure_finite("blended", da, asset, cycle)?;

        crack += da;
        ensure_finite("accumulated crack length", crack, asset, cycle)?;

        initiation[cycle] = da_init;
        propagation[cycle] = da_prop;
        blended[cycle] = da;
        crack_length[cycle] = crack;
    }

    Ok(AssetTrace { initiation, propagation, blended, crack_length })
}

/// Integrate every asset of a fleet and assemble the growth history.
///
/// # Behavior
/// 1. Re-validates a `Seed::PerAsset` vector against the actual fleet size
///    (the policy may have been built for a different fleet).
/// 2. Resolves the seed per asset and runs [`integrate_asset`] for each —
///    in order on the calling thread, or fanned out to rayon workers when
///    `options.parallel` is set.
/// 3. Assembles the per-asset traces into fleet × cycle matrices, merged
///    by asset index.
///
/// # Errors
/// - Seed re-validation errors ([`GrowthError::SeedLengthMismatch`],
///   [`GrowthError::InvalidSeedValue`]) before any integration starts.
/// - The first per-asset error encountered; the whole run aborts with it.
///
/// # Notes
/// - The parallel path changes scheduling only; per-asset arithmetic is
///   identical, so sequential and parallel runs agree bitwise.
pub fn integrate_fleet(
    data: &FleetData, coeffs: &GrowthCoeffs, options: &GrowthOptions,
) -> GrowthResult<GrowthHistory> {
    let shape = data.shape();
    if let Seed::PerAsset(values) = &options.seed {
        validate_seed_vector(values, shape.assets)?;
    }

    let run_asset = |asset: usize| -> GrowthResult<AssetTrace> {
        integrate_asset(
            asset,
            data.seq.row(asset),
            data.delta_s.row(asset),
            data.stress_ratio.row(asset),
            options.seed.resolve(data, asset),
            coeffs,
        )
    };

    let traces: Vec<AssetTrace> = if options.parallel {
        (0..shape.assets).into_par_iter().map(run_asset).collect::<GrowthResult<Vec<_>>>()?
    } else {
        (0..shape.assets).map(run_asset).collect::<GrowthResult<Vec<_>>>()?
    };

    Ok(GrowthHistory::from_traces(shape, &traces))
}

/// Reject a non-finite per-cycle value with full asset/cycle context.
///
/// Used after every law evaluation and accumulator update; `law` names the
/// term that produced the value.
fn ensure_finite(law: &'static str, value: f64, asset: usize, cycle: usize) -> GrowthResult<()> {
    if !value.is_finite() {
        return Err(GrowthError::NonFiniteIncrement { law, asset, cycle, value });
    }
    Ok(())
}
