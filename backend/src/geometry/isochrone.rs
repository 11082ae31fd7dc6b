//! Static Delivery Isochrones
//!
//! An "isochrone" here is a fixed-radius circle: the distance covered in
//! `minutes` at the average speed of the cost parameters. No road network
//! is consulted.

use serde::{Deserialize, Serialize};

use crate::core::error::{require_positive, CoreError};
use crate::costs::params::CostParameters;
use crate::geometry::{GeoPoint, GeometryProvider};

/// Travel-time bands drawn around the depot
pub const DEFAULT_ISOCHRONE_MINUTES: [f64; 3] = [10.0, 20.0, 30.0];

/// Polygon resolution of each ring
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// One travel-time band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneRing {
    pub minutes: f64,
    pub radius_km: f64,
    pub ring: Vec<GeoPoint>,
}

/// Build one ring per travel-time band, in the order given
///
/// # Errors
/// `CoreError::InvalidInput` if the parameters are invalid, a band is not a
/// positive finite number of minutes, or `steps < 3`.
pub fn isochrone_rings<G: GeometryProvider + ?Sized>(
    center: GeoPoint,
    minutes: &[f64],
    params: &CostParameters,
    geometry: &G,
    steps: usize,
) -> Result<Vec<IsochroneRing>, CoreError> {
    params.validate()?;

    minutes
        .iter()
        .map(|&m| {
            let minutes = require_positive("minutes", m)?;
            let radius_km = params.reach_km(minutes);
            let ring = geometry.circle(center, radius_km, steps)?;
            tracing::debug!(minutes, radius_km, points = ring.len(), "built isochrone ring");
            Ok(IsochroneRing {
                minutes,
                radius_km,
                ring,
            })
        })
        .collect()
}
