//! Zone Metrics and Reports
//!
//! A zone (FSA) carries the numeric properties the map shades and annotates:
//! income, household and customer counts, penetration and order value.
//!
//! - `metrics`: typed zone record and derived penetration
//! - `popup`: popup text shown when a zone is clicked
//! - `report`: per-zone delivery cost against a depot

pub mod metrics;
pub mod popup;
pub mod report;

// Re-exports
pub use metrics::ZoneMetrics;
pub use popup::{cost_popup, format_thousands, zone_popup};
pub use report::{ZoneCostReport, ZoneCostRow};
