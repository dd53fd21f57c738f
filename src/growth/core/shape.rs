//! Fleet dimensions for crack-growth integration.
//!
//! A fleet is a rectangular grid of assets × load cycles:
//! - `assets`: number of independent machines/components being tracked.
//! - `cycles`: number of load cycles recorded per asset.
//!
//! Both dimensions must be > 0 and are fixed for the duration of one run.
use crate::growth::errors::{GrowthError, GrowthResult};

/// Dimensions of the fleet × cycle grid.
///
/// - `assets`: number of assets (rows)
/// - `cycles`: number of load cycles per asset (columns)
///
/// Invariant: neither dimension is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetShape {
    pub assets: usize,
    pub cycles: usize,
}

impl FleetShape {
    /// Construct a [`FleetShape`] and validate both dimensions.
    ///
    /// # Invariants
    /// - `assets > 0` and `cycles > 0`: an empty grid has nothing to
    ///   integrate and would make the per-asset walk vacuous.
    ///
    /// # Arguments
    /// - `assets`: number of assets in the fleet.
    /// - `cycles`: number of load cycles per asset.
    ///
    /// # Errors
    /// - [`GrowthError::EmptyFleet`] if either dimension is zero.
    ///
    /// # Rationale
    /// The per-asset recurrence consumes one cycle at a time and every asset
    /// must contribute at least one cycle. Guarding here fails fast on
    /// degenerate grids so downstream integration can assume a non-empty
    /// rectangular layout.
    pub fn new(assets: usize, cycles: usize) -> GrowthResult<Self> {
        if assets == 0 || cycles == 0 {
            return Err(GrowthError::EmptyFleet);
        }
        Ok(FleetShape { assets, cycles })
    }

    /// The `(assets, cycles)` tuple, as used by `ndarray` 2-D shapes.
    pub fn dim(&self) -> (usize, usize) {
        (self.assets, self.cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::errors::GrowthError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation behavior of `FleetShape::new` for non-empty and degenerate
    //   grids.
    //
    // They intentionally DO NOT cover:
    // - Shape agreement between the four fleet input matrices (covered by
    //   `FleetData` tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `FleetShape::new` accepts a non-empty grid and preserves
    // both dimensions.
    //
    // Given
    // -----
    // - `assets = 3`, `cycles = 500`.
    //
    // Expect
    // ------
    // - `FleetShape::new(3, 500)` returns `Ok(FleetShape)`.
    // - `dim()` reports `(3, 500)`.
    fn fleetshape_new_accepts_non_empty_grid() {
        let shape = FleetShape::new(3, 500).expect("non-empty grid should construct FleetShape");

        assert_eq!(shape.assets, 3);
        assert_eq!(shape.cycles, 500);
        assert_eq!(shape.dim(), (3, 500));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `FleetShape::new` rejects a fleet with zero assets.
    //
    // Given
    // -----
    // - `assets = 0`, `cycles = 10`.
    //
    // Expect
    // ------
    // - `FleetShape::new(0, 10)` returns `Err(GrowthError::EmptyFleet)`.
    fn fleetshape_new_rejects_zero_assets() {
        let err = FleetShape::new(0, 10).unwrap_err();

        assert_eq!(err, GrowthError::EmptyFleet);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `FleetShape::new` rejects a fleet with zero cycles.
    //
    // Given
    // -----
    // - `assets = 2`, `cycles = 0`.
    //
    // Expect
    // ------
    // - `FleetShape::new(2, 0)` returns `Err(GrowthError::EmptyFleet)`.
    fn fleetshape_new_rejects_zero_cycles() {
        let err = FleetShape::new(2, 0).unwrap_err();

        assert_eq!(err, GrowthError::EmptyFleet);
    }
}
