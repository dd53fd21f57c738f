//! Growth history — fleet × cycle output of one integration run.
//!
//! Purpose
//! -------
//! Collect the integrator's four output matrices (initiation increments,
//! propagation increments, blended increments, cumulative crack length)
//! in a single container whose layout matches the input fleet: one row per
//! asset, one column per cycle. The crack-length matrix is shaped exactly
//! like the trajectory output of an external differentiable-layer
//! predictor fed the same inputs, so the two can be compared or plotted
//! side by side without reshaping.
//!
//! Key behaviors
//! -------------
//! - [`GrowthHistory::from_traces`] assembles per-asset traces into fleet
//!   matrices, merged by asset index.
//! - Accessors expose per-asset trajectories, terminal lengths, and
//!   residuals against a fleet's reference crack-length series.
//!
//! Invariants & assumptions
//! ------------------------
//! - All four matrices share the `(assets, cycles)` shape of the run.
//! - Entries are finite: the integrator aborts before recording any
//!   non-finite value.
//!
//! Testing notes
//! -------------
//! - Unit tests cover trace assembly and the accessors; residual behavior
//!   against mismatched fleets is covered here, end-to-end residual values
//!   by the integration suite.
use crate::growth::{
    core::{data::FleetData, recursion::AssetTrace, shape::FleetShape},
    errors::{GrowthResult, GrowthError},
};
use ndarray::{Array1, Array2, ArrayView1};

/// Fleet × cycle output matrices of one integration run.
///
/// Rows are assets, columns are cycles, aligned index-for-index with the
/// input fleet. See the module docs for the comparability contract with
/// external predictors.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthHistory {
    /// S-N initiation increment per asset and cycle.
    pub initiation: Array2<f64>,
    /// Walker propagation increment per asset and cycle.
    pub propagation: Array2<f64>,
    /// Blended damage increment per asset and cycle.
    pub blended: Array2<f64>,
    /// Cumulative crack length per asset and cycle.
    pub crack_length: Array2<f64>,
}

impl GrowthHistory {
    /// Assemble fleet matrices from per-asset traces, merged by index.
    ///
    /// # Inputs
    /// - `shape`: the run's fleet dimensions; every trace must carry
    ///   `shape.cycles` entries.
    /// - `traces`: one completed [`AssetTrace`] per asset, ordered by asset
    ///   index (the fleet driver guarantees both properties).
    ///
    /// # Panics
    /// - If `traces.len() != shape.assets` or a trace's length disagrees
    ///   with `shape.cycles`. Both indicate a logic bug in the driver, not
    ///   a user-input condition, so this is an assertion rather than a
    ///   `GrowthError`.
    pub fn from_traces(shape: FleetShape, traces: &[AssetTrace]) -> GrowthHistory {
        assert_eq!(traces.len(), shape.assets, "one trace per asset");

        let mut initiation = Array2::zeros(shape.dim());
        let mut propagation = Array2::zeros(shape.dim());
        let mut blended = Array2::zeros(shape.dim());
        let mut crack_length = Array2::zeros(shape.dim());

        for (asset, trace) in traces.iter().enumerate() {
            initiation.row_mut(asset).assign(&trace.initiation);
            propagation.row_mut(asset).assign(&trace.propagation);
            blended.row_mut(asset).assign(&trace.blended);
            crack_length.row_mut(asset).assign(&trace.crack_length);
        }

        GrowthHistory { initiation, propagation, blended, crack_length }
    }

    /// The history's `(assets, cycles)` dimensions.
    pub fn shape(&self) -> FleetShape {
        FleetShape { assets: self.crack_length.nrows(), cycles: self.crack_length.ncols() }
    }

    /// One asset's cumulative crack-length trajectory.
    ///
    /// # Panics
    /// - If `asset >= shape().assets` (standard `ndarray` row indexing).
    pub fn crack_trajectory(&self, asset: usize) -> ArrayView1<f64> {
        self.crack_length.row(asset)
    }

    /// The final accumulated crack length of every asset (last column).
    pub fn terminal_lengths(&self) -> Array1<f64> {
        self.crack_length.column(self.crack_length.ncols() - 1).to_owned()
    }

    /// Residuals of the integrated trajectories against a fleet's reference
    /// crack-length series: `crack_length - reference_crack`, element-wise.
    ///
    /// Useful for validating the integrator against observed data or an
    /// external predictor's fitted trajectories.
    ///
    /// # Errors
    /// - [`GrowthError::ShapeMismatch`] if the fleet's dimensions disagree
    ///   with this history's.
    pub fn residuals(&self, data: &FleetData) -> GrowthResult<Array2<f64>> {
        let expected = self.shape().dim();
        let actual = data.shape().dim();
        if actual != expected {
            return Err(GrowthError::ShapeMismatch {
                matrix: "reference_crack",
                expected,
                actual,
            });
        }
        Ok(&self.crack_length - &data.reference_crack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::core::{
        data::{FleetData, FleetMeta},
        units::LengthUnit,
    };
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Assembly of per-asset traces into fleet matrices by index.
    // - The trajectory, terminal-length, and residual accessors.
    //
    // They intentionally DO NOT cover:
    // - How traces are produced (covered by recursion tests).
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Build a trace with recognizable per-asset values so row placement is
    // observable after assembly.
    fn make_trace(offset: f64) -> AssetTrace {
        AssetTrace {
            initiation: array![offset, offset],
            propagation: array![offset + 0.1, offset + 0.1],
            blended: array![offset + 0.2, offset + 0.2],
            crack_length: array![offset + 0.3, offset + 0.4],
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `from_traces` places each trace on its asset's row.
    //
    // Given
    // -----
    // - Two traces with offsets 1.0 and 2.0 over a 2×2 shape.
    //
    // Expect
    // ------
    // - Row 0 carries the offset-1.0 series, row 1 the offset-2.0 series,
    //   across all four matrices.
    fn from_traces_merges_by_asset_index() {
        let shape = FleetShape::new(2, 2).unwrap();
        let traces = vec![make_trace(1.0), make_trace(2.0)];

        let history = GrowthHistory::from_traces(shape, &traces);

        assert_eq!(history.initiation, array![[1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(history.propagation, array![[1.1, 1.1], [2.1, 2.1]]);
        assert_eq!(history.blended, array![[1.2, 1.2], [2.2, 2.2]]);
        assert_eq!(history.crack_length, array![[1.3, 1.4], [2.3, 2.4]]);
        assert_eq!(history.shape().dim(), (2, 2));
    }

    #[test]
    // Purpose
    // -------
    // Verify the trajectory and terminal-length accessors read the
    // crack-length matrix as documented.
    //
    // Given
    // -----
    // - The assembled 2×2 history from `from_traces_merges_by_asset_index`.
    //
    // Expect
    // ------
    // - `crack_trajectory(1)` is row 1.
    // - `terminal_lengths()` is the last column.
    fn accessors_read_crack_length_matrix() {
        let shape = FleetShape::new(2, 2).unwrap();
        let history = GrowthHistory::from_traces(shape, &[make_trace(1.0), make_trace(2.0)]);

        assert_eq!(history.crack_trajectory(1), array![2.3, 2.4].view());
        assert_eq!(history.terminal_lengths(), array![1.4, 2.4]);
    }

    #[test]
    // Purpose
    // -------
    // Verify residuals subtract the reference series element-wise and
    // reject a fleet of different dimensions.
    //
    // Given
    // -----
    // - A 1×2 history with crack lengths [1.3, 1.4].
    // - A matching fleet whose reference series is [1.0, 1.0].
    // - A second fleet of shape 1×3.
    //
    // Expect
    // ------
    // - Residuals are [[0.3, 0.4]] (to within 1e-12).
    // - The mismatched fleet yields `GrowthError::ShapeMismatch`.
    fn residuals_subtract_reference_and_check_shape() {
        let shape = FleetShape::new(1, 2).unwrap();
        let history = GrowthHistory::from_traces(shape, &[make_trace(1.0)]);

        let meta = FleetMeta::new(LengthUnit::Meters, None, false);
        let matching = FleetData::new(
            Array2::from_elem((1, 2), 0.01),
            Array2::from_elem((1, 2), 50.0),
            Array2::from_elem((1, 2), 0.3),
            Array2::from_elem((1, 2), 1.0),
            meta.clone(),
        )
        .unwrap();

        let residuals = history.residuals(&matching).expect("matching shapes");
        assert!((residuals[[0, 0]] - 0.3).abs() < 1e-12);
        assert!((residuals[[0, 1]] - 0.4).abs() < 1e-12);

        let mismatched = FleetData::new(
            Array2::from_elem((1, 3), 0.01),
            Array2::from_elem((1, 3), 50.0),
            Array2::from_elem((1, 3), 0.3),
            Array2::from_elem((1, 3), 1.0),
            meta,
        )
        .unwrap();

        assert_eq!(
            history.residuals(&mismatched).unwrap_err(),
            GrowthError::ShapeMismatch {
                matrix: "reference_crack",
                expected: (1, 2),
                actual: (1, 3)
            }
        );
    }
}
