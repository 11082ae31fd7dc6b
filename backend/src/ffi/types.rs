//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::error::CoreError;
use crate::costs::{CostBreakdown, CostParameters};

impl From<CoreError> for PyErr {
    fn from(err: CoreError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Extract a float field, accepting either the snake_case or the camelCase
/// key, falling back to `default` when neither is present.
fn extract_f64_with_default(
    dict: &Bound<'_, PyDict>,
    snake: &str,
    camel: &str,
    default: f64,
) -> PyResult<f64> {
    if let Some(value) = dict.get_item(snake)? {
        return value.extract();
    }
    match dict.get_item(camel)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Convert Python dict to CostParameters
///
/// # Errors
///
/// Returns PyErr if:
/// - Type conversions fail
/// - Values violate the parameter invariants
pub fn parse_cost_parameters(py_params: &Bound<'_, PyDict>) -> PyResult<CostParameters> {
    let defaults = CostParameters::default();

    let params = CostParameters {
        driver_wage: extract_f64_with_default(py_params, "driver_wage", "driverWage", defaults.driver_wage)?,
        vehicle_cost_per_km: extract_f64_with_default(
            py_params,
            "vehicle_cost_per_km",
            "vehicleCostPerKm",
            defaults.vehicle_cost_per_km,
        )?,
        avg_service_min: extract_f64_with_default(
            py_params,
            "avg_service_min",
            "avgServiceMin",
            defaults.avg_service_min,
        )?,
        avg_speed_kmph: extract_f64_with_default(
            py_params,
            "avg_speed_kmph",
            "avgSpeedKmph",
            defaults.avg_speed_kmph,
        )?,
    };

    params.validate()?;
    Ok(params)
}

/// Convert CostBreakdown to Python dict
pub fn breakdown_to_py<'py>(py: Python<'py>, breakdown: &CostBreakdown) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("distance_km", breakdown.distance_km)?;
    dict.set_item("per_km_driver_cost", breakdown.per_km_driver_cost)?;
    dict.set_item("distance_factor", breakdown.distance_factor)?;
    dict.set_item("base_stop_cost", breakdown.base_stop_cost)?;
    dict.set_item("raw_cost", breakdown.raw_cost)?;
    dict.set_item("total", breakdown.total)?;
    Ok(dict)
}
