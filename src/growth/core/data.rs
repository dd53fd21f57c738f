//! Fleet input containers for fatigue crack-growth models.
//!
//! Purpose
//! -------
//! Provide small, validated containers for the per-cycle load/stress series
//! of an asset fleet. This module centralizes input validation for the four
//! fleet matrices and standardizes how crack-length units and upstream
//! preprocessing are represented.
//!
//! Key behaviors
//! -------------
//! - [`FleetData`] enforces the rectangular-grid invariants (non-empty,
//!   equal-shaped, element-wise finite matrices).
//! - [`FleetMeta`] describes how to interpret the series (crack-length
//!   units, optional scaling, and rainflow-counting flag) without mutating
//!   raw values.
//!
//! Invariants & assumptions
//! ------------------------
//! - The four matrices share one `(assets, cycles)` shape; the equivalent
//!   stress matrix is the reference the other three are checked against.
//! - Every entry of every matrix is finite. Degenerate stress ratios
//!   (`R == 1`) are **not** rejected here: they are a per-cycle domain
//!   violation surfaced by the integrator at the offending asset/cycle.
//! - `FleetMeta::scale` is an internal numeric stabilizer only; it never
//!   changes the raw values exposed by the matrices.
//!
//! Conventions
//! -----------
//! - Matrices are laid out `(assets, cycles)`: one row per asset, one
//!   column per load cycle, aligned index-for-index across all four.
//! - Units are described via [`LengthUnit`] (meters/millimeters).
//! - This module does **not** perform rainflow cycle counting; it only
//!   records whether the load series were counted upstream.
//!
//! Downstream usage
//! ----------------
//! - Construct [`FleetData`] at the boundary where raw fleet series enter
//!   the crack-growth stack; the integrator and seed policies rely on its
//!   invariants and never re-validate shapes or finiteness.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `FleetData::new` (happy
//!   path, empty grid, shape disagreement per matrix, and non-finite
//!   entries with index payloads).
//! - `FleetMeta::new` is a plain constructor with no additional validation
//!   and is tested implicitly via `FleetData` and higher-level modules.
use crate::growth::{
    core::{
        shape::FleetShape,
        units::LengthUnit,
        validation::{validate_finite_matrix, validate_matrix_shape},
    },
    errors::GrowthResult,
};
use ndarray::Array2;

/// `FleetData` — validated fleet × cycle input matrices plus metadata.
///
/// Purpose
/// -------
/// Represent the complete per-cycle input of one integration run: four
/// equal-shaped matrices (equivalent stress, load range, stress ratio, and
/// reference crack length) with interpretation metadata. Centralizing the
/// shape and finiteness checks here lets the integrator assume a clean
/// rectangular grid.
///
/// Key behaviors
/// -------------
/// - Stores each series as an `ndarray::Array2<f64>` laid out
///   `(assets, cycles)`.
/// - Enforces non-emptiness, shape agreement, and element-wise finiteness
///   at construction time via [`FleetData::new`].
/// - Records interpretation metadata ([`FleetMeta`]) without modifying the
///   raw values.
///
/// Fields
/// ------
/// - `seq`: `Array2<f64>`
///   Equivalent stress per asset and cycle, consumed by the S-N initiation
///   law.
/// - `delta_s`: `Array2<f64>`
///   Load range per asset and cycle, consumed by the Walker propagation
///   law.
/// - `stress_ratio`: `Array2<f64>`
///   Stress ratio (min/max stress) per asset and cycle. Values equal to 1
///   are accepted here and rejected by the integrator at the offending
///   cycle.
/// - `reference_crack`: `Array2<f64>`
///   Observed/reference crack lengths, used for seeding (under
///   `Seed::Reference`) and for comparison against integrated trajectories.
/// - `meta`: [`FleetMeta`]
///   Interpretation details such as crack-length units and whether load
///   series were rainflow-counted upstream.
///
/// Invariants
/// ----------
/// - All four matrices share one shape with `assets > 0` and `cycles > 0`.
/// - Every entry of every matrix is finite.
///
/// Performance
/// -----------
/// - Validation is O(assets × cycles) with a single scan per matrix; after
///   construction this type is a plain container with no hidden
///   allocations.
///
/// Notes
/// -----
/// - No rescaling or transformation is applied to the inputs; `meta` is
///   descriptive only.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetData {
    /// Equivalent stress per asset and cycle.
    pub seq: Array2<f64>,
    /// Load range per asset and cycle.
    pub delta_s: Array2<f64>,
    /// Stress ratio per asset and cycle.
    pub stress_ratio: Array2<f64>,
    /// Reference crack length per asset and cycle.
    pub reference_crack: Array2<f64>,
    /// Interpretation details (units, preprocessing flags).
    pub meta: FleetMeta,
}

impl FleetData {
    /// Construct a validated [`FleetData`] instance from raw fleet matrices.
    ///
    /// Parameters
    /// ----------
    /// - `seq`: `Array2<f64>`
    ///   Equivalent stress matrix; its shape is the reference the other
    ///   three matrices must match.
    /// - `delta_s`: `Array2<f64>`
    ///   Load range matrix.
    /// - `stress_ratio`: `Array2<f64>`
    ///   Stress ratio matrix.
    /// - `reference_crack`: `Array2<f64>`
    ///   Reference crack-length matrix.
    /// - `meta`: [`FleetMeta`]
    ///   Metadata describing how to interpret the series.
    ///
    /// Returns
    /// -------
    /// `GrowthResult<FleetData>`
    ///   - `Ok(FleetData)` if all invariants are satisfied.
    ///   - `Err(GrowthError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `GrowthError::EmptyFleet`
    ///   Returned when the reference shape has zero assets or zero cycles.
    /// - `GrowthError::ShapeMismatch { matrix, .. }`
    ///   Returned when `delta_s`, `stress_ratio`, or `reference_crack`
    ///   disagrees with the reference shape; `matrix` names the offender.
    /// - `GrowthError::NonFiniteInput { matrix, asset, cycle, value }`
    ///   Returned at the first NaN/±inf entry of any matrix.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `GrowthError`.
    ///
    /// Notes
    /// -----
    /// - Matrices are checked in order (`seq`, `delta_s`, `stress_ratio`,
    ///   `reference_crack`), stopping at the first violation.
    pub fn new(
        seq: Array2<f64>, delta_s: Array2<f64>, stress_ratio: Array2<f64>,
        reference_crack: Array2<f64>, meta: FleetMeta,
    ) -> GrowthResult<Self> {
        let shape = FleetShape::new(seq.nrows(), seq.ncols())?;
        validate_matrix_shape("delta_s", delta_s.dim(), shape.dim())?;
        validate_matrix_shape("stress_ratio", stress_ratio.dim(), shape.dim())?;
        validate_matrix_shape("reference_crack", reference_crack.dim(), shape.dim())?;

        validate_finite_matrix("seq", seq.view())?;
        validate_finite_matrix("delta_s", delta_s.view())?;
        validate_finite_matrix("stress_ratio", stress_ratio.view())?;
        validate_finite_matrix("reference_crack", reference_crack.view())?;

        Ok(FleetData { seq, delta_s, stress_ratio, reference_crack, meta })
    }

    /// The fleet's `(assets, cycles)` dimensions.
    pub fn shape(&self) -> FleetShape {
        FleetShape { assets: self.seq.nrows(), cycles: self.seq.ncols() }
    }
}

/// `FleetMeta` — interpretation metadata for fleet input series.
///
/// Purpose
/// -------
/// Describe how the fleet series should be interpreted without altering the
/// raw numeric values: crack-length units, an optional internal scaling
/// hint, and whether load series were rainflow-counted upstream.
///
/// Fields
/// ------
/// - `length_unit`: [`LengthUnit`]
///   Unit of the crack-length series (meters/millimeters).
/// - `scale`: `Option<f64>`
///   Optional internal scaling factor for numerical stability. This is
///   **not** user-facing and does not change the raw matrix values.
/// - `rainflow_counted`: `bool`
///   Indicates whether the load series were reduced to cycles by rainflow
///   counting upstream.
///
/// Invariants
/// ----------
/// - This type does not enforce numeric invariants itself; it assumes the
///   provided values are consistent with the calling context.
///
/// Notes
/// -----
/// - `FleetMeta` is intentionally lightweight and does not validate its
///   fields beyond the type system; validation policies belong to
///   higher-level components.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetMeta {
    /// Unit of the crack-length series.
    pub length_unit: LengthUnit,
    /// Optional internal scaling factor used for numerical stability; not
    /// user-specified and does not alter raw input values.
    pub scale: Option<f64>,
    /// Whether the load series were rainflow-counted upstream.
    pub rainflow_counted: bool,
}

impl FleetMeta {
    /// Construct a new [`FleetMeta`] instance.
    ///
    /// Parameters
    /// ----------
    /// - `length_unit`: [`LengthUnit`]
    ///   Unit of the crack-length series.
    /// - `scale`: `Option<f64>`
    ///   Optional internal scaling hint; does not modify raw input values.
    /// - `rainflow_counted`: `bool`
    ///   Flag indicating whether load series were rainflow-counted
    ///   upstream.
    ///
    /// Returns
    /// -------
    /// `FleetMeta`
    ///   A metadata value that can be attached to [`FleetData`].
    ///
    /// Errors
    /// ------
    /// - Never returns an error; this is a plain constructor.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(length_unit: LengthUnit, scale: Option<f64>, rainflow_counted: bool) -> FleetMeta {
        FleetMeta { length_unit, scale, rainflow_counted }
    }
}
