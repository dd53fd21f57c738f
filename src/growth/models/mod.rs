//! models — high-level fatigue crack-growth model surface.
//!
//! Purpose
//! -------
//! Collect the user-facing crack-growth model API. This layer sits on top
//! of `growth::core`, wiring together the validated configuration types,
//! the per-asset recursion, and the cached output history.
//!
//! Key behaviors
//! -------------
//! - Expose a complete fleet model type [`FatigueModel`] with `run`,
//!   `history`, and `crack_trajectories` methods.
//! - Enforce the model's fleet-shape contract before any integration
//!   starts, so a configured model never silently adapts to a
//!   wrong-sized fleet.
//! - Cache the last successful run's [`GrowthHistory`] for repeated
//!   inspection without re-integrating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fleet inputs are carried in validated [`FleetData`] instances:
//!   equal-shaped, finite matrices laid out `(assets, cycles)`.
//! - Model configuration ([`FleetShape`], [`GrowthCoeffs`],
//!   [`GrowthOptions`]) is validated at construction and immutable
//!   afterwards.
//! - A failed run leaves any previously cached history untouched; the
//!   cache only ever holds complete, in-order output.
//!
//! Conventions
//! -----------
//! - Errors are reported as [`GrowthResult`]; panics indicate programming
//!   errors (e.g., driver-internal trace mismatches), not bad user data.
//! - Output matrices keep the input's `(assets, cycles)` layout so they
//!   are directly comparable with an external differentiable-layer
//!   predictor's trajectories.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`FleetShape`], [`GrowthCoeffs`] (or `Default`), and
//!   [`GrowthOptions`] (seed policy + execution strategy).
//! - Build a [`FatigueModel`] via `FatigueModel::new(shape, coeffs,
//!   options)`, then call `run(&data)` on a matching [`FleetData`].
//! - After a successful run, read `history()` for the four output
//!   matrices or `crack_trajectories()` for the comparison-ready
//!   crack-length view.
//! - Front-ends (Python bindings) are expected to depend mainly on the
//!   items re-exported below or via the [`prelude`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`growth`] cover the shape contract, history caching,
//!   and the not-yet-run error paths.
//! - Higher-level integration tests exercise full pipelines
//!   (fleet → model → run → history) through the public [`FatigueModel`]
//!   API.
//!
//! [`FleetData`]: crate::growth::core::data::FleetData
//! [`FleetShape`]: crate::growth::core::shape::FleetShape
//! [`GrowthCoeffs`]: crate::growth::core::coeffs::GrowthCoeffs
//! [`GrowthOptions`]: crate::growth::core::options::GrowthOptions
//! [`GrowthHistory`]: crate::growth::core::history::GrowthHistory
//! [`GrowthResult`]: crate::growth::errors::GrowthResult

pub mod growth;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::growth::FatigueModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use fatigue_growth::growth::models::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::growth::FatigueModel;
}
