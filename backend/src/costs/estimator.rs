//! Delivery Cost Estimator
//!
//! Cost of serving one stop `distance_km` away from the depot:
//!
//! ```text
//! per_km_driver_cost = driver_wage / avg_speed_kmph
//! distance_factor    = per_km_driver_cost + vehicle_cost_per_km
//! base_stop_cost     = driver_wage × (avg_service_min / 60)
//! raw_cost           = base_stop_cost + distance_factor × distance_km
//! total              = round_to_cents(raw_cost)
//! ```
//!
//! Because every term is non-negative for valid parameters, the estimate is
//! never below `base_stop_cost` (up to rounding) and never decreases as the
//! distance grows.

use serde::{Deserialize, Serialize};

use crate::core::error::{require_non_negative, CoreError};
use crate::core::money::round_to_cents;
use crate::costs::params::CostParameters;

/// Intermediate terms of a single estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    /// Trip distance the estimate was computed for
    pub distance_km: f64,
    /// Driver time cost per kilometre travelled
    pub per_km_driver_cost: f64,
    /// Total cost per kilometre (driver + vehicle)
    pub distance_factor: f64,
    /// Driver time cost of the stop itself
    pub base_stop_cost: f64,
    /// Unrounded estimate
    pub raw_cost: f64,
    /// Estimate rounded to two decimal places
    pub total: f64,
}

/// Compute every term of the estimate
///
/// # Errors
/// `CoreError::InvalidInput` if `distance_km` is negative or non-finite, or
/// if `params` violates its invariants (see [`CostParameters::validate`]).
pub fn estimate_breakdown(
    distance_km: f64,
    params: &CostParameters,
) -> Result<CostBreakdown, CoreError> {
    params.validate()?;
    breakdown_unchecked(distance_km, params)
}

/// Estimate the cost of a delivery `distance_km` away
///
/// # Example
/// ```
/// use delivery_map_core_rs::{estimate_cost, CostParameters};
///
/// let params = CostParameters::default();
/// assert_eq!(estimate_cost(10.0, &params).unwrap(), 12.67);
/// assert!(estimate_cost(-1.0, &params).is_err());
/// ```
pub fn estimate_cost(distance_km: f64, params: &CostParameters) -> Result<f64, CoreError> {
    estimate_breakdown(distance_km, params).map(|b| b.total)
}

/// Estimate many distances against one parameter snapshot
///
/// The parameters are validated once and copied, so every result in the
/// batch is computed from the same values. Fails on the first invalid
/// distance; no partial result is returned.
pub fn estimate_batch(distances_km: &[f64], params: &CostParameters) -> Result<Vec<f64>, CoreError> {
    params.validate()?;
    let snapshot = *params;

    distances_km
        .iter()
        .map(|&d| breakdown_unchecked(d, &snapshot).map(|b| b.total))
        .collect()
}

/// Evaluate the formula; `params` must already be validated.
fn breakdown_unchecked(
    distance_km: f64,
    params: &CostParameters,
) -> Result<CostBreakdown, CoreError> {
    let distance_km = require_non_negative("distance_km", distance_km)?;

    let per_km_driver_cost = params.driver_wage / params.avg_speed_kmph;
    let distance_factor = per_km_driver_cost + params.vehicle_cost_per_km;
    let base_stop_cost = params.driver_wage * (params.avg_service_min / 60.0);
    let raw_cost = base_stop_cost + distance_factor * distance_km;
    let total = round_to_cents(raw_cost);

    tracing::debug!(distance_km, raw_cost, total, "estimated delivery cost");

    Ok(CostBreakdown {
        distance_km,
        per_km_driver_cost,
        distance_factor,
        base_stop_cost,
        raw_cost,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_is_stop_cost() {
        let params = CostParameters::default();
        assert_eq!(estimate_cost(0.0, &params).unwrap(), 1.67);
    }

    #[test]
    fn test_breakdown_terms() {
        let b = estimate_breakdown(10.0, &CostParameters::default()).unwrap();
        assert_eq!(b.per_km_driver_cost, 0.5);
        assert!((b.distance_factor - 1.1).abs() < 1e-12);
        assert!((b.base_stop_cost - 20.0 / 12.0).abs() < 1e-12);
        assert!((b.raw_cost - 12.666_666_666_7).abs() < 1e-9);
        assert_eq!(b.total, 12.67);
    }

    #[test]
    fn test_rejects_bad_distance() {
        let params = CostParameters::default();
        assert!(estimate_cost(-1.0, &params).is_err());
        assert!(estimate_cost(f64::NAN, &params).is_err());
        assert!(estimate_cost(f64::INFINITY, &params).is_err());
    }

    #[test]
    fn test_batch_uses_snapshot() {
        let params = CostParameters::default();
        let totals = estimate_batch(&[0.0, 10.0], &params).unwrap();
        assert_eq!(totals, vec![1.67, 12.67]);
    }

    #[test]
    fn test_batch_fails_on_any_bad_distance() {
        let params = CostParameters::default();
        let err = estimate_batch(&[1.0, -2.0, 3.0], &params).unwrap_err();
        assert_eq!(err.field(), "distance_km");
    }

    #[test]
    fn test_empty_batch() {
        let totals = estimate_batch(&[], &CostParameters::default()).unwrap();
        assert!(totals.is_empty());
    }
}
