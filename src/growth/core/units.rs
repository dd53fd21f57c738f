//! Units for crack-length series in fatigue growth models.
//!
//! - [`LengthUnit`] declares the crack-length scale (meters/millimeters).
//!
//! Notes
//! -----
//! - `LengthUnit` is metadata only; it does not rescale values by itself.

/// Units of measurement for crack lengths in a fatigue growth model.
///
/// This sets the assumed length scale for the data and for any
/// reporting/interpretation downstream. It does **not** rescale values
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthUnit {
    /// Meters.
    Meters,
    /// Millimeters (1e-3 m).
    Millimeters,
}
