//! Errors for fatigue crack-growth models (input validation, seed policy
//! checks, integration-time domain violations, and numeric overflow).
//!
//! This module defines a model error type, [`GrowthError`], and a coefficient
//! error type, [`CoeffError`], used across the Rust core and the optional
//! Python-facing API. Both implement `Display`/`Error` and, when the
//! `python-bindings` feature is enabled, convert to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy). Every integration-time error
//!   carries the offending asset index and cycle index.
//! - Fleet input matrices must be **equal-shaped and finite**; shape and
//!   finiteness violations fail fast *before* integration starts.
//! - Domain violations (`R == 1`, negative accumulated crack length) and
//!   non-finite intermediates abort the offending asset's walk at the exact
//!   cycle where they occur; the sequence is only meaningful as a complete,
//!   in-order walk, so there is no partial recovery.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for crack-growth operations that may produce
/// [`GrowthError`].
pub type GrowthResult<T> = Result<T, GrowthError>;

/// Result alias for coefficient-construction/validation paths that may
/// produce [`CoeffError`].
pub type CoeffResult<T> = Result<T, CoeffError>;

/// Unified error type for fatigue crack-growth modeling.
///
/// Covers fleet input validation, seed policy checks, integration-time
/// domain violations, and numeric-overflow detection. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries when the `python-bindings` feature is active.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthError {
    // ---- Fleet input validation ----
    /// Fleet has zero assets or zero cycles.
    EmptyFleet,

    /// An input matrix disagrees with the fleet's (assets, cycles) shape.
    ShapeMismatch { matrix: &'static str, expected: (usize, usize), actual: (usize, usize) },

    /// An input matrix entry is NaN/±inf.
    NonFiniteInput { matrix: &'static str, asset: usize, cycle: usize, value: f64 },

    // ---- Seed policy validation ----
    /// Seed::Fixed(v) must be finite and >= 0.
    InvalidSeedFixed { value: f64 },

    /// Seed::PerAsset vector length must equal the fleet size.
    SeedLengthMismatch { expected: usize, actual: usize },

    /// Seed::PerAsset entries must be finite and >= 0.
    InvalidSeedValue { asset: usize, value: f64 },

    // ---- Integration-time domain violations ----
    /// Stress ratio hit exactly 1, making the Walker coefficient divide by
    /// zero.
    DegenerateStressRatio { asset: usize, cycle: usize },

    /// Accumulated crack length went below zero before a propagation-law
    /// evaluation (square-root domain).
    NegativeCrackLength { asset: usize, cycle: usize, value: f64 },

    /// A damage law (or the running crack-length accumulator) produced a
    /// non-finite value.
    NonFiniteIncrement { law: &'static str, asset: usize, cycle: usize, value: f64 },

    // ---- Model surface ----
    /// Trajectories were requested before a successful integration run.
    HistoryNotComputed,

    // ---- CoeffError ----
    /// A model coefficient is NaN/±inf.
    NonFiniteCoeff { name: &'static str, value: f64 },
}

impl std::error::Error for GrowthError {}

impl std::fmt::Display for GrowthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Fleet input validation ----
            GrowthError::EmptyFleet => {
                write!(f, "Fleet must have at least one asset and one cycle.")
            }
            GrowthError::ShapeMismatch { matrix, expected, actual } => {
                write!(
                    f,
                    "Input matrix '{matrix}' has shape {actual:?}, expected {expected:?} (assets, cycles)"
                )
            }
            GrowthError::NonFiniteInput { matrix, asset, cycle, value } => {
                write!(
                    f,
                    "Input matrix '{matrix}' is non-finite at asset {asset}, cycle {cycle}: {value}"
                )
            }
            // ---- Seed policy validation ----
            GrowthError::InvalidSeedFixed { value } => {
                write!(f, "Seed::Fixed must be finite and >= 0; got: {value}")
            }
            GrowthError::SeedLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Seed::PerAsset length mismatch: expected {expected} (fleet size), got {actual}"
                )
            }
            GrowthError::InvalidSeedValue { asset, value } => {
                write!(f, "Seed::PerAsset entry for asset {asset} must be finite and >= 0; got: {value}")
            }
            // ---- Integration-time domain violations ----
            GrowthError::DegenerateStressRatio { asset, cycle } => {
                write!(
                    f,
                    "Stress ratio is exactly 1 at asset {asset}, cycle {cycle}; the Walker coefficient is undefined"
                )
            }
            GrowthError::NegativeCrackLength { asset, cycle, value } => {
                write!(
                    f,
                    "Accumulated crack length is negative at asset {asset}, cycle {cycle}: {value}"
                )
            }
            GrowthError::NonFiniteIncrement { law, asset, cycle, value } => {
                write!(
                    f,
                    "The {law} term is non-finite at asset {asset}, cycle {cycle}: {value}"
                )
            }
            // ---- Model surface ----
            GrowthError::HistoryNotComputed => {
                write!(f, "Model hasn't been run yet; no growth history is available.")
            }
            // ---- CoeffError ----
            GrowthError::NonFiniteCoeff { name, value } => {
                write!(f, "Coefficient '{name}' must be finite; got: {value}")
            }
        }
    }
}

/// Convert a [`GrowthError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GrowthError> for PyErr {
    fn from(err: GrowthError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Errors specific to model-coefficient construction and validation.
///
/// The nine crack-growth coefficients are unconstrained in sign (the
/// calibrated set mixes large negative and positive values) but every one of
/// them must be finite.
#[derive(Debug, Clone, PartialEq)]
pub enum CoeffError {
    /// A coefficient is NaN/±inf.
    NonFiniteCoeff { name: &'static str, value: f64 },
}

impl std::error::Error for CoeffError {}

impl std::fmt::Display for CoeffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoeffError::NonFiniteCoeff { name, value } => {
                write!(f, "Coefficient '{name}' must be finite; got: {value}")
            }
        }
    }
}

/// Convert a [`CoeffError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<CoeffError> for PyErr {
    fn from(err: CoeffError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<CoeffError> for GrowthError {
    fn from(err: CoeffError) -> GrowthError {
        match err {
            CoeffError::NonFiniteCoeff { name, value } => {
                GrowthError::NonFiniteCoeff { name, value }
            }
        }
    }
}
