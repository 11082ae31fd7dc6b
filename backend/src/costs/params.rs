//! Cost Parameters
//!
//! The four user-editable knobs of the delivery cost model. The presentation
//! layer owns this value and may change it at any time; every estimate reads
//! whatever copy it is handed, so there is no hidden global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::error::{require_non_negative, require_positive, CoreError};

/// Errors that can occur while loading parameters from a file or string
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    Invalid(#[from] CoreError),
}

/// Cost model parameters
///
/// JSON keys may be given in snake_case or in the camelCase used by the map
/// front end (`driverWage`, `vehicleCostPerKm`, ...). Missing keys fall back
/// to the defaults.
///
/// # Example
/// ```
/// use delivery_map_core_rs::CostParameters;
///
/// let params = CostParameters::from_json_str(r#"{"driverWage": 25}"#).unwrap();
/// assert_eq!(params.driver_wage, 25.0);
/// assert_eq!(params.avg_speed_kmph, 40.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CostParameters {
    /// Driver pay per hour
    #[serde(alias = "driverWage")]
    pub driver_wage: f64,

    /// Vehicle running cost per kilometre
    #[serde(alias = "vehicleCostPerKm")]
    pub vehicle_cost_per_km: f64,

    /// Minutes spent at each stop
    #[serde(alias = "avgServiceMin")]
    pub avg_service_min: f64,

    /// Average travel speed; must be strictly positive
    #[serde(alias = "avgSpeedKmph")]
    pub avg_speed_kmph: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            driver_wage: 20.0,         // $20/h
            vehicle_cost_per_km: 0.6,  // $0.60/km
            avg_service_min: 5.0,      // 5 min per stop
            avg_speed_kmph: 40.0,      // urban average
        }
    }
}

impl CostParameters {
    /// Check the parameter invariants
    ///
    /// # Errors
    /// `CoreError::InvalidInput` if `avg_speed_kmph <= 0`, if any other
    /// field is negative, or if any field is NaN or infinite.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_negative("driver_wage", self.driver_wage)?;
        require_non_negative("vehicle_cost_per_km", self.vehicle_cost_per_km)?;
        require_non_negative("avg_service_min", self.avg_service_min)?;
        require_positive("avg_speed_kmph", self.avg_speed_kmph)?;
        Ok(())
    }

    /// Parse and validate parameters from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: CostParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a JSON parameter file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading cost parameters");
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Kilometres covered in `minutes` at the average speed
    pub fn reach_km(&self, minutes: f64) -> f64 {
        self.avg_speed_kmph * minutes / 60.0
    }
}
