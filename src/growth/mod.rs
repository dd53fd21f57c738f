//! growth — fatigue crack-growth stack: core numerics, models, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive fatigue crack initiation/propagation layer that
//! bundles fleet input containers, coefficient and seed configuration, the
//! three closed-form damage laws, the per-asset recursion with its fleet
//! driver, a model-level run/inspect surface, and shared error types under
//! a single namespace. This is the main entry point for crack-growth
//! modeling in the crate, and the surface most consumers (including the
//! Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   fleet data containers, units, shapes, damage laws, seed policies,
//!   recursion, output history, and validation helpers.
//! - Expose a user-facing model API in [`models`] via [`FatigueModel`],
//!   including fleet integration with a shape contract and cached
//!   trajectory access.
//! - Centralize crack-growth error types in [`errors`] (`GrowthError`,
//!   `CoeffError`, and the `GrowthResult` / `CoeffResult` aliases) so
//!   callers see a uniform error surface across the stack.
//! - Re-export the core "everyday" types directly from this module and
//!   via [`prelude`] for ergonomic imports in downstream crates and
//!   bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fleet inputs are carried in validated [`FleetData`] instances: four
//!   equal-shaped, element-wise finite matrices laid out
//!   `(assets, cycles)`.
//! - The nine damage-law coefficients are finite and carried in one
//!   immutable [`GrowthCoeffs`] shared by reference with every pure law.
//! - The within-asset recurrence is strictly sequential (the propagation
//!   law consumes the previous accumulated crack length); assets are
//!   independent and may be integrated in parallel with results merged by
//!   asset index.
//! - Domain violations (`R == 1`, negative accumulated length) and
//!   non-finite intermediates abort a run with asset/cycle context rather
//!   than being clamped or silently propagated.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; matrices are `(assets, cycles)` with
//!   all four input series aligned index-for-index.
//! - The crack-growth stack performs no I/O and no logging; callers
//!   orchestrate data loading and reporting. Error conditions are
//!   surfaced as [`GrowthResult`] / [`CoeffResult`]; panics indicate
//!   programming errors such as driver-internal trace mismatches.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct [`FleetData`] / [`FleetMeta`] in a chosen [`LengthUnit`].
//!   2. Build a [`FleetShape`], [`GrowthCoeffs`] (calibrated or
//!      `Default`), and [`GrowthOptions`] (seed policy [`Seed`] +
//!      execution strategy).
//!   3. Construct a [`FatigueModel`] via
//!      `FatigueModel::new(shape, coeffs, options)`.
//!   4. Integrate with `run(&data)`; on success read `history()` for the
//!      four output matrices or `crack_trajectories()` for the
//!      comparison-ready crack-length view.
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `GrowthError` / `CoeffError`
//!   conversions into `PyErr` defined in [`errors`].
//! - Advanced callers can work directly with submodules (e.g.,
//!   `core::laws`, `core::recursion`) when they need lower-level control
//!   over per-cycle evaluation or single-asset walks.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover fleet validation, coefficient and seed
//!   validation, law point values and saturation, recursion guards and
//!   ordering, history assembly, and sequential/parallel agreement.
//! - Unit tests in [`models`] cover the shape contract, history caching,
//!   and not-yet-run error paths.
//! - Unit tests in [`errors`] are covered implicitly through the
//!   validation and recursion suites, which assert concrete variants and
//!   payloads. Higher-level integration tests exercise full pipelines
//!   through the public [`growth`](self) API.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (validation helpers, low-level law evaluations, per-asset traces, etc.)
// remain under their respective submodules.

pub use self::core::{
    FleetData, FleetMeta, FleetShape, GrowthCoeffs, GrowthHistory, GrowthOptions, LengthUnit, Seed,
};

pub use self::errors::{CoeffError, CoeffResult, GrowthError, GrowthResult};

pub use self::models::FatigueModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use fatigue_growth::growth::prelude::*;
//
// to import the main crack-growth surface in a single line, without pulling
// in lower-level internals.

pub mod prelude {
    pub use super::{
        CoeffError, CoeffResult, FatigueModel, FleetData, FleetMeta, FleetShape, GrowthCoeffs,
        GrowthError, GrowthHistory, GrowthOptions, GrowthResult, LengthUnit, Seed,
    };
}
