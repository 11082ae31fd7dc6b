//! Delivery Map Core - Rust Engine
//!
//! Computational core behind the delivery/market analysis map: per-stop
//! delivery cost estimates, severity buckets for map shading, income
//! overlay tiers, zone popups and static isochrone rings.
//!
//! # Architecture
//!
//! - **core**: Input error type and monetary rounding
//! - **costs**: Cost parameters and the linear cost estimator
//! - **classify**: Severity threshold tables and income tiers
//! - **geometry**: `GeometryProvider` capability and isochrone rings
//! - **zones**: Zone metrics, popup text and per-zone cost reports
//!
//! # Critical Invariants
//!
//! 1. Every operation is a pure function of its arguments; there is no
//!    process-wide state. Cost parameters are passed in on every call.
//! 2. Out-of-domain numbers fail fast with `CoreError::InvalidInput`;
//!    no default is ever substituted.
//! 3. Threshold comparisons are strict, so boundary values fall into the
//!    lower bucket.

// Module declarations
pub mod classify;
pub mod core;
pub mod costs;
pub mod geometry;
pub mod zones;

// Re-exports for convenience
pub use classify::{
    classify, classify_cost, classify_penetration, income_tiers, IncomeTier, SeverityBucket,
    ThresholdTable,
};
pub use crate::core::{round_to_cents, CoreError};
pub use costs::{
    estimate_batch, estimate_breakdown, estimate_cost, ConfigError, CostBreakdown, CostParameters,
};
pub use geometry::{isochrone_rings, GeoPoint, GeometryProvider, IsochroneRing, SphericalGeometry};
pub use zones::{cost_popup, zone_popup, ZoneCostReport, ZoneCostRow, ZoneMetrics};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn delivery_map_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::functions::estimate_cost, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::estimate_breakdown, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::classify_penetration, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::classify_cost, m)?)?;
    Ok(())
}
