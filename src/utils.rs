#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::growth::{
    core::{
        coeffs::GrowthCoeffs,
        data::{FleetData, FleetMeta},
        options::GrowthOptions,
        seed::Seed,
        shape::FleetShape,
        units::LengthUnit,
    },
    models::growth::FatigueModel,
};

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64"
        ))
    })?;
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != n_cols) {
        return Err(PyValueError::new_err(format!(
            "{name} rows must all have the same length"
        )));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| {
        PyValueError::new_err(format!("{name} could not be reshaped into a 2-D array"))
    })
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(Array1::from(slice.to_vec()));
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if let Ok(slice) = series_ro.as_slice() {
                return Ok(Array1::from(slice.to_vec()));
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{name} must be a 1-D numpy.ndarray, pandas.Series, or sequence of float64"
        ))
    })?;
    Ok(Array1::from(vec))
}

#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_growth_model<'py>(
    py: Python<'py>, assets: usize, cycles: usize, sn_slope: Option<f64>,
    sn_intercept: Option<f64>, geometry_factor: Option<f64>, walker_rate: Option<f64>,
    walker_gamma: Option<f64>, paris_coeff: Option<f64>, paris_exponent: Option<f64>,
    blend_rate: Option<f64>, threshold_length: Option<f64>, seed: Option<&str>,
    seed_value: Option<f64>, seed_values: Option<&Bound<'py, PyAny>>, parallel: Option<bool>,
) -> PyResult<FatigueModel> {
    // Validate the fleet grid.
    let shape = FleetShape::new(assets, cycles)?;

    // Coefficients with the demonstration calibration as per-field default.
    let defaults = GrowthCoeffs::default();
    let coeffs = GrowthCoeffs::new(
        sn_slope.unwrap_or(defaults.sn_slope),
        sn_intercept.unwrap_or(defaults.sn_intercept),
        geometry_factor.unwrap_or(defaults.geometry_factor),
        walker_rate.unwrap_or(defaults.walker_rate),
        walker_gamma.unwrap_or(defaults.walker_gamma),
        paris_coeff.unwrap_or(defaults.paris_coeff),
        paris_exponent.unwrap_or(defaults.paris_exponent),
        blend_rate.unwrap_or(defaults.blend_rate),
        threshold_length.unwrap_or(defaults.threshold_length),
    )?;

    // Seed policy.
    let seed_policy = extract_seed(py, seed, seed_value, seed_values, assets)?;

    let opts = GrowthOptions::new(seed_policy, parallel.unwrap_or(false));

    Ok(FatigueModel::new(shape, coeffs, opts))
}

#[cfg(feature = "python-bindings")]
fn extract_seed<'py>(
    py: Python<'py>, seed: Option<&str>, seed_value: Option<f64>,
    seed_values: Option<&Bound<'py, PyAny>>, assets: usize,
) -> PyResult<Seed> {
    let seed_str = seed.unwrap_or("zero");

    let policy = match seed_str {
        "zero" => Seed::zero(),
        "reference" => Seed::reference(),
        "fixed" => {
            let val = seed_value.ok_or_else(|| {
                PyValueError::new_err("seed_value must be provided when seed='fixed'")
            })?;
            Seed::fixed(val)?
        }
        "per_asset" => {
            let values_any = seed_values.ok_or_else(|| {
                PyValueError::new_err("seed_values must be provided when seed='per_asset'")
            })?;
            let values = extract_f64_array(py, values_any, "seed_values")?;
            Seed::per_asset(values, assets)?
        }
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid seed policy {:?} (expected 'zero', 'reference', 'fixed', or 'per_asset')",
                other
            )));
        }
    };

    Ok(policy)
}

#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn extract_fleet_data<'py>(
    py: Python<'py>, seq: &Bound<'py, PyAny>, delta_s: &Bound<'py, PyAny>,
    stress_ratio: &Bound<'py, PyAny>, reference_crack: &Bound<'py, PyAny>, unit: Option<&str>,
    rainflow_counted: Option<bool>,
) -> PyResult<FleetData> {
    let seq_arr = extract_f64_matrix(py, seq, "seq")?;
    let delta_s_arr = extract_f64_matrix(py, delta_s, "delta_s")?;
    let stress_ratio_arr = extract_f64_matrix(py, stress_ratio, "stress_ratio")?;
    let reference_crack_arr = extract_f64_matrix(py, reference_crack, "reference_crack")?;

    let unit_str = unit.unwrap_or("meters").to_lowercase();
    let length_unit = match unit_str.as_str() {
        "meters" | "m" => LengthUnit::Meters,
        "millimeters" | "mm" => LengthUnit::Millimeters,
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid unit {:?} (expected 'meters' or 'millimeters')",
                other
            )));
        }
    };
    let rainflow_flag = rainflow_counted.unwrap_or(false);
    let meta = FleetMeta::new(length_unit, None, rainflow_flag);
    let fleet = FleetData::new(seq_arr, delta_s_arr, stress_ratio_arr, reference_crack_arr, meta);
    match fleet {
        Ok(data) => Ok(data),
        Err(e) => Err(e.into()),
    }
}

/// Convert an `(assets, cycles)` matrix into row-major nested vectors for
/// Python consumption.
#[cfg(feature = "python-bindings")]
pub fn matrix_to_vecs(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    let mut out = Vec::with_capacity(matrix.nrows());
    for row in matrix.rows() {
        out.push(row.to_vec());
    }
    out
}
