//! Metric Classification
//!
//! Maps numeric zone metrics onto ordered display categories:
//! - `SeverityBucket` via descending threshold tables (penetration, cost)
//! - `IncomeTier` for the stacked income overlays

pub mod income;
pub mod thresholds;

// Re-exports
pub use income::{income_tiers, IncomeTier};
pub use thresholds::{
    classify, classify_cost, classify_penetration, SeverityBucket, ThresholdTable,
    COST_STEPS, PENETRATION_STEPS,
};
