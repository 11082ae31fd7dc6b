//! Exported Python functions

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{breakdown_to_py, parse_cost_parameters};
use crate::classify;
use crate::costs::{self, CostParameters};

fn resolve_params(params: Option<&Bound<'_, PyDict>>) -> PyResult<CostParameters> {
    match params {
        Some(dict) => parse_cost_parameters(dict),
        None => Ok(CostParameters::default()),
    }
}

/// Estimate the delivery cost for a trip
///
/// # Example (from Python)
///
/// ```python
/// from delivery_map._core import estimate_cost
///
/// estimate_cost(10.0, {"driverWage": 20, "avgSpeedKmph": 40})  # 12.67
/// ```
#[pyfunction]
#[pyo3(signature = (distance_km, params=None))]
pub fn estimate_cost(distance_km: f64, params: Option<&Bound<'_, PyDict>>) -> PyResult<f64> {
    let params = resolve_params(params)?;
    Ok(costs::estimate_cost(distance_km, &params)?)
}

/// Estimate with every intermediate term, returned as a dict
#[pyfunction]
#[pyo3(signature = (distance_km, params=None))]
pub fn estimate_breakdown<'py>(
    py: Python<'py>,
    distance_km: f64,
    params: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let params = resolve_params(params)?;
    let breakdown = costs::estimate_breakdown(distance_km, &params)?;
    breakdown_to_py(py, &breakdown)
}

/// Bucket name ("lowest" .. "highest") for a penetration percentage
#[pyfunction]
pub fn classify_penetration(value: f64) -> PyResult<&'static str> {
    Ok(classify::classify_penetration(value)?.as_str())
}

/// Bucket name ("lowest" .. "highest") for a cost estimate
#[pyfunction]
pub fn classify_cost(value: f64) -> PyResult<&'static str> {
    Ok(classify::classify_cost(value)?.as_str())
}
