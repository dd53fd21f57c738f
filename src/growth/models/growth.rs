//! Fatigue crack-growth model: fleet integration surface.
//!
//! This module wires the validated configuration types (shape,
//! coefficients, options) to the fleet integrator and caches the resulting
//! [`GrowthHistory`] for inspection. It is the surface most consumers
//! (including the Python bindings) should depend on.
//!
//! Key ideas:
//! - Configuration is immutable after construction; a model can be run
//!   against any fleet whose dimensions match its [`FleetShape`].
//! - `run` fails fast on a fleet/model dimension disagreement, then
//!   delegates to the recursion driver; the cached history is replaced
//!   only on success.
//! - Trajectory accessors return typed errors before the first successful
//!   run instead of panicking.
use crate::growth::{
    core::{
        coeffs::GrowthCoeffs, data::FleetData, history::GrowthHistory, options::GrowthOptions,
        recursion::integrate_fleet, shape::FleetShape,
    },
    errors::{GrowthError, GrowthResult},
};
use ndarray::ArrayView2;

/// Fatigue crack-growth model over a fixed fleet × cycle grid.
///
/// Encapsulates the fleet dimensions (`shape`), the coefficients of the
/// three damage laws (`coeffs`), and run options (`options`). After a
/// successful [`run`], [`history`] stores the integration output.
///
/// # Notes
/// - The model owns no fleet data; the same instance can integrate
///   successive fleets of matching dimensions (e.g. re-measured load
///   histories), each run replacing the cached history.
/// - Output trajectories are shaped `(assets, cycles)`, directly
///   comparable with an external differentiable-layer predictor fed the
///   same inputs and coefficients.
///
/// [`run`]: FatigueModel::run
/// [`history`]: FatigueModel::history
#[derive(Debug, Clone, PartialEq)]
pub struct FatigueModel {
    /// Fleet dimensions this model integrates.
    pub shape: FleetShape,
    /// Coefficients of the three damage laws.
    pub coeffs: GrowthCoeffs,
    /// Run options (seed policy, execution strategy).
    pub options: GrowthOptions,
    /// Integration output (populated after `run`).
    pub history: Option<GrowthHistory>,
}

impl FatigueModel {
    /// Construct a new [`FatigueModel`] from validated components.
    ///
    /// # Arguments
    /// - `shape`: fleet dimensions, validated via [`FleetShape::new`].
    /// - `coeffs`: damage-law coefficients, validated via
    ///   [`GrowthCoeffs::new`] (or taken from `Default`).
    /// - `options`: seed policy and execution strategy.
    ///
    /// # Returns
    /// A model with no cached history; call [`FatigueModel::run`] to
    /// integrate a fleet.
    pub fn new(shape: FleetShape, coeffs: GrowthCoeffs, options: GrowthOptions) -> FatigueModel {
        FatigueModel { shape, coeffs, options, history: None }
    }

    /// Integrate a fleet and cache the resulting growth history.
    ///
    /// ## Steps
    /// 1. Check the fleet's dimensions against the model's [`FleetShape`]
    ///    (the configured shape is a contract, not a suggestion).
    /// 2. Delegate to the recursion driver, which re-validates per-asset
    ///    seeds, walks every asset, and assembles the output matrices.
    /// 3. Replace `self.history` with the new result on success; a failed
    ///    run leaves any previous history untouched.
    ///
    /// ## Arguments
    /// - `data`: validated fleet input matrices.
    ///
    /// ## Returns
    /// - `Ok(())` on success; `self.history` is populated.
    ///
    /// ## Errors
    /// - [`GrowthError::ShapeMismatch`] (matrix `"fleet"`) if the fleet's
    ///   dimensions disagree with the model's.
    /// - Any integration-time error from the recursion driver
    ///   (degenerate stress ratio, negative crack length, non-finite
    ///   increment, seed re-validation), carrying asset/cycle context.
    pub fn run(&mut self, data: &FleetData) -> GrowthResult<()> {
        if data.shape() != self.shape {
            return Err(GrowthError::ShapeMismatch {
                matrix: "fleet",
                expected: self.shape.dim(),
                actual: data.shape().dim(),
            });
        }
        self.history = Some(integrate_fleet(data, &self.coeffs, &self.options)?);
        Ok(())
    }

    /// The cached growth history of the last successful run.
    ///
    /// ## Errors
    /// - [`GrowthError::HistoryNotComputed`] before the first successful
    ///   [`FatigueModel::run`].
    pub fn history(&self) -> GrowthResult<&GrowthHistory> {
        self.history.as_ref().ok_or(GrowthError::HistoryNotComputed)
    }

    /// The cumulative crack-length trajectories of the last run, shaped
    /// `(assets, cycles)`.
    ///
    /// This is the view to hand to plotting or to comparison against an
    /// external predictor's trajectories.
    ///
    /// ## Errors
    /// - [`GrowthError::HistoryNotComputed`] before the first successful
    ///   run.
    pub fn crack_trajectories(&self) -> GrowthResult<ArrayView2<f64>> {
        Ok(self.history()?.crack_length.view())
    }
}
