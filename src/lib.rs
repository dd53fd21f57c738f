//! fatigue_growth — physics-informed fatigue crack-growth models with Python
//! bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the fatigue crack-growth integrator to Python via the
//! `_fatigue_growth` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes and submodules
//! used by the `fatigue_growth` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`growth`]) as the public crate
//!   surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_fatigue_growth` Python extension.
//! - Create and register the Python submodule (`growth_models`) under
//!   `fatigue_growth` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   [`FatigueModel`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_fatigue_growth.<submodule>` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `fatigue_growth` package.
//! - Indexing, units, and layout conventions follow the documentation of
//!   the underlying Rust modules (`growth::core`, `growth::models`).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   and can ignore the PyO3 items guarded by the `python-bindings`
//!   feature.
//! - External users are expected to interact with either the safe Rust
//!   APIs or the pure-Python wrappers; the PyO3 plumbing is considered
//!   internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the `tests/` integration suite.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.
//!
//! [`FatigueModel`]: crate::growth::models::growth::FatigueModel

pub mod growth;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    growth::models::growth::FatigueModel,
    utils::{build_growth_model, extract_fleet_data, matrix_to_vecs},
};

/// CrackGrowth — Python-facing wrapper for fleet fatigue-growth models.
///
/// Purpose
/// -------
/// Expose the [`FatigueModel`] API to Python callers while preserving the
/// core Rust invariants and error handling, so integrated trajectories can
/// be compared against a differentiable-layer predictor operating on the
/// same inputs and coefficients.
///
/// Key behaviors
/// -------------
/// - Build a [`FatigueModel`] with chosen coefficients, seed policy, and
///   execution strategy from Python-friendly arguments.
/// - Provide an `integrate` method that converts 2-D float64 arrays into a
///   validated fleet and delegates to the core implementation.
/// - Cache the growth history for inspection from Python via property
///   getters (`crack_lengths`, `initiation_rates`, `propagation_rates`,
///   `blended_rates`, `terminal_lengths`).
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `CrackGrowth(assets, cycles, /, sn_slope=..., ..., seed='zero',
/// seed_value=None, seed_values=None, parallel=False)`:
/// - `assets`, `cycles`: `usize`
///   Fleet dimensions; every integrated fleet must match them.
/// - Coefficient keywords (`sn_slope`, `sn_intercept`, `geometry_factor`,
///   `walker_rate`, `walker_gamma`, `paris_coeff`, `paris_exponent`,
///   `blend_rate`, `threshold_length`): `Option<f64>`
///   Each defaults to the demonstration calibration when omitted.
/// - `seed`: `Option<&str>`
///   Seed policy: `'zero'`, `'reference'`, `'fixed'`, or `'per_asset'`.
/// - `seed_value`: `Option<f64>` / `seed_values`: array-like
///   Companion values for the `'fixed'` / `'per_asset'` policies.
/// - `parallel`: `Option<bool>`
///   Integrate assets on rayon workers when true.
///
/// Fields
/// ------
/// - `inner`: [`FatigueModel`]
///   Fully configured fleet model that owns the cached growth history.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed [`FatigueModel`] created through
///   [`build_growth_model`]; coefficients and seed policy are validated at
///   construction.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should work with [`FatigueModel`] directly; this
///   type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "fatigue_growth.growth_models", unsendable)]
pub struct CrackGrowth {
    /// Underlying Rust FatigueModel.
    pub inner: FatigueModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CrackGrowth {
    #[new]
    #[pyo3(
        signature = (
            assets,
            cycles,
            sn_slope = None,
            sn_intercept = None,
            geometry_factor = None,
            walker_rate = None,
            walker_gamma = None,
            paris_coeff = None,
            paris_exponent = None,
            blend_rate = None,
            threshold_length = None,
            seed = None,
            seed_value = None,
            seed_values = None,
            parallel = None,
        ),
        text_signature = "(assets, cycles, /, sn_slope=None, sn_intercept=None, \
                          geometry_factor=None, walker_rate=None, walker_gamma=None, \
                          paris_coeff=None, paris_exponent=None, blend_rate=None, \
                          threshold_length=None, seed='zero', seed_value=None, \
                          seed_values=None, parallel=False)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn crack_growth<'py>(
        py: Python<'py>, assets: usize, cycles: usize, sn_slope: Option<f64>,
        sn_intercept: Option<f64>, geometry_factor: Option<f64>, walker_rate: Option<f64>,
        walker_gamma: Option<f64>, paris_coeff: Option<f64>, paris_exponent: Option<f64>,
        blend_rate: Option<f64>, threshold_length: Option<f64>, seed: Option<&str>,
        seed_value: Option<f64>, seed_values: Option<&Bound<'py, PyAny>>, parallel: Option<bool>,
    ) -> PyResult<Self> {
        let inner = build_growth_model(
            py,
            assets,
            cycles,
            sn_slope,
            sn_intercept,
            geometry_factor,
            walker_rate,
            walker_gamma,
            paris_coeff,
            paris_exponent,
            blend_rate,
            threshold_length,
            seed,
            seed_value,
            seed_values,
            parallel,
        )?;
        Ok(CrackGrowth { inner })
    }

    /// Integrate a fleet and return the crack-length trajectories
    /// (row-major, one list per asset).
    #[pyo3(
        signature = (
            seq,
            delta_s,
            stress_ratio,
            reference_crack,
            unit = None,
            rainflow_counted = None,
        ),
        text_signature = "(self, seq, delta_s, stress_ratio, reference_crack, /, \
                          unit='meters', rainflow_counted=False)"
    )]
    pub fn integrate<'py>(
        &mut self, py: Python<'py>, seq: &Bound<'py, PyAny>, delta_s: &Bound<'py, PyAny>,
        stress_ratio: &Bound<'py, PyAny>, reference_crack: &Bound<'py, PyAny>,
        unit: Option<&str>, rainflow_counted: Option<bool>,
    ) -> PyResult<Vec<Vec<f64>>> {
        let fleet = extract_fleet_data(
            py,
            seq,
            delta_s,
            stress_ratio,
            reference_crack,
            unit,
            rainflow_counted,
        )?;
        self.inner.run(&fleet)?;
        Ok(matrix_to_vecs(&self.inner.history()?.crack_length))
    }

    #[getter]
    pub fn crack_lengths(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_vecs(&self.inner.history()?.crack_length))
    }

    #[getter]
    pub fn initiation_rates(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_vecs(&self.inner.history()?.initiation))
    }

    #[getter]
    pub fn propagation_rates(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_vecs(&self.inner.history()?.propagation))
    }

    #[getter]
    pub fn blended_rates(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_vecs(&self.inner.history()?.blended))
    }

    #[getter]
    pub fn terminal_lengths(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.history()?.terminal_lengths().to_vec())
    }
}

/// _fatigue_growth — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_fatigue_growth` Python module and register its
/// `growth_models` submodule used by the public `fatigue_growth` package.
///
/// Key behaviors
/// -------------
/// - Create the `growth_models` submodule and attach it to the parent
///   `_fatigue_growth` module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _fatigue_growth<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let growth_models_mod = PyModule::new(_py, "growth_models")?;
    growth_models(_py, m, &growth_models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("fatigue_growth.growth_models", growth_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn growth_models<'py>(
    _py: Python, fatigue_growth: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CrackGrowth>()?;
    fatigue_growth.add_submodule(m)?;
    Ok(())
}
