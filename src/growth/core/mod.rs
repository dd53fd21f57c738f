//! core — shared fatigue crack-growth data, coefficients, laws, and
//! recursion.
//!
//! Purpose
//! -------
//! Collect the core building blocks for fatigue crack initiation and
//! propagation over an asset fleet: fleet input containers, coefficient
//! and option types, seed policies, the three closed-form damage laws, the
//! per-asset recursion with its fleet driver, the output history, and
//! validation helpers. The higher-level model surface builds on top of
//! these primitives.
//!
//! Key behaviors
//! -------------
//! - Define configuration and shape types ([`FleetShape`], [`LengthUnit`],
//!   [`GrowthOptions`]) plus the validated coefficient container
//!   ([`GrowthCoeffs`]) and seed policies ([`Seed`]).
//! - Implement the per-cycle damage laws ([`sn_curve`], [`walker`],
//!   [`sigmoid_blend`], [`blend_weight`]) as pure functions over a shared
//!   coefficient reference.
//! - Run the per-asset crack-length recurrence and the fleet driver
//!   ([`integrate_asset`], [`integrate_fleet`]), with per-cycle domain and
//!   finiteness guards that abort the run with asset/cycle context.
//! - Track fleet inputs and metadata ([`FleetData`], [`FleetMeta`]) with
//!   explicit units so downstream code can assume well-formed matrices.
//! - Collect run output in [`GrowthHistory`], shaped for direct
//!   comparison against external predictors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fleet matrices stored in [`FleetData`] are equal-shaped and finite;
//!   shape or finiteness violations fail fast before integration starts.
//! - The within-asset recurrence is strictly sequential: the propagation
//!   law consumes the previous accumulated crack length, so cycles cannot
//!   be reordered or parallelized inside one asset.
//! - Assets are independent; the fleet driver may integrate them on rayon
//!   workers with results merged by asset index, bit-identical to the
//!   sequential walk.
//! - Domain violations (`R == 1`, negative accumulated length) and
//!   non-finite intermediates are surfaced as typed errors at the
//!   offending asset/cycle rather than clamped or propagated as NaN.
//!
//! Conventions
//! -----------
//! - Matrices are laid out `(assets, cycles)`, 0-based on both axes, with
//!   the four input series aligned index-for-index.
//! - Coefficients are carried in one immutable [`GrowthCoeffs`] passed by
//!   reference to every pure law; nothing is captured from ambient scope.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers and scalar values. Error conditions are reported via
//!   `GrowthResult` / `CoeffResult`; panics are reserved for logic bugs
//!   such as irreconcilable trace lengths inside the driver.
//!
//! Downstream usage
//! ----------------
//! - Data preparation code constructs [`FleetData`] / [`FleetMeta`] in a
//!   chosen [`LengthUnit`], then a [`FleetShape`], [`GrowthCoeffs`], and
//!   [`GrowthOptions`] (seed policy + execution strategy) for a model.
//! - The model surface (`growth::models`, Python bindings) calls
//!   [`integrate_fleet`] through [`FatigueModel::run`] and exposes the
//!   cached [`GrowthHistory`]; advanced callers can drive
//!   [`integrate_asset`] directly for single-asset work.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: fleet validation and index payloads,
//!   coefficient and seed validation, law point values and saturation
//!   behavior, recursion guards and ordering, history assembly, and
//!   sequential/parallel agreement.
//! - Integration tests at the model layer exercise full pipelines
//!   (fleet → model → run → history), treating this module as the
//!   numerical and structural core.
//!
//! [`FatigueModel::run`]: crate::growth::models::growth::FatigueModel::run

pub mod coeffs;
pub mod data;
pub mod history;
pub mod laws;
pub mod options;
pub mod recursion;
pub mod seed;
pub mod shape;
pub mod units;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::coeffs::GrowthCoeffs;
pub use self::data::{FleetData, FleetMeta};
pub use self::history::GrowthHistory;
pub use self::laws::{blend_weight, sigmoid_blend, sn_curve, walker};
pub use self::options::GrowthOptions;
pub use self::recursion::{AssetTrace, integrate_asset, integrate_fleet};
pub use self::seed::Seed;
pub use self::shape::FleetShape;
pub use self::units::LengthUnit;
pub use self::validation::{
    validate_coeff, validate_finite_matrix, validate_matrix_shape, validate_seed_fixed,
    validate_seed_vector,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use fatigue_growth::growth::core::prelude::*;
//
// to import the main crack-growth core surface in a single line.

pub mod prelude {
    pub use super::coeffs::GrowthCoeffs;
    pub use super::data::{FleetData, FleetMeta};
    pub use super::history::GrowthHistory;
    pub use super::laws::{blend_weight, sigmoid_blend, sn_curve, walker};
    pub use super::options::GrowthOptions;
    pub use super::recursion::{integrate_asset, integrate_fleet};
    pub use super::seed::Seed;
    pub use super::shape::FleetShape;
    pub use super::units::LengthUnit;
}
