//! Zone metrics model

use serde::{Deserialize, Serialize};

use crate::core::error::{require_non_negative, CoreError};
use crate::geometry::GeoPoint;

/// Numeric properties of one FSA zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    /// Forward sortation area code, e.g. "N6A"
    pub fsa: String,

    /// Average household income
    pub avg_income: f64,

    pub households: u64,

    pub customers: u64,

    /// Customer penetration in percent, when precomputed in the dataset
    #[serde(default)]
    pub penetration_pct: Option<f64>,

    /// Average order value
    #[serde(default)]
    pub avg_order_value: f64,

    /// Representative point of the zone polygon
    pub centroid: GeoPoint,
}

impl ZoneMetrics {
    /// Penetration in percent
    ///
    /// Uses the precomputed value when present, otherwise
    /// `customers / households × 100`.
    ///
    /// # Errors
    /// `CoreError::InvalidInput` if the precomputed value is negative or
    /// non-finite, or if it must be derived and `households` is zero.
    pub fn penetration(&self) -> Result<f64, CoreError> {
        if let Some(pct) = self.penetration_pct {
            return require_non_negative("penetration_pct", pct);
        }
        if self.households == 0 {
            return Err(CoreError::invalid("households", 0.0, "cannot derive penetration"));
        }
        Ok(self.customers as f64 / self.households as f64 * 100.0)
    }
}
