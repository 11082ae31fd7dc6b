//! Delivery Cost Estimation
//!
//! This module provides:
//! - Cost parameter configuration (`CostParameters`)
//! - The linear per-stop cost estimator (`estimate_cost`, `CostBreakdown`)
//!
//! All monetary values are in the currency units of `driver_wage`
//! (dollars in the sample dataset), rounded to two decimal places.

pub mod estimator;
pub mod params;

// Re-exports
pub use estimator::{estimate_batch, estimate_breakdown, estimate_cost, CostBreakdown};
pub use params::{ConfigError, CostParameters};
