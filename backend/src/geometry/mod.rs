//! Geometry Capability
//!
//! The map layer needs three geometric primitives: a circle polygon around a
//! point, the centroid of a zone, and the distance between two points.
//! They sit behind the `GeometryProvider` trait so the cost and isochrone
//! code never depends on a concrete geometry backend.
//!
//! - `SphericalGeometry`: great-circle implementation on a spherical earth
//! - `isochrone`: static fixed-radius delivery rings around a depot

pub mod isochrone;
pub mod spherical;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

// Re-exports
pub use isochrone::{isochrone_rings, IsochroneRing, DEFAULT_CIRCLE_STEPS, DEFAULT_ISOCHRONE_MINUTES};
pub use spherical::SphericalGeometry;

/// A WGS84 position in decimal degrees
///
/// Deserialization goes through [`GeoPoint::new`], so a point read from JSON
/// is range-checked like one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Unchecked wire form of `GeoPoint`
#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoreError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    /// Create a point, checking that it is a valid position
    ///
    /// # Errors
    /// `CoreError::InvalidInput` if `lat` is outside `[-90, 90]`, `lon`
    /// outside `[-180, 180]`, or either is non-finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::invalid("lat", lat, "must be within [-90, 90]"));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::invalid("lon", lon, "must be within [-180, 180]"));
        }
        Ok(Self { lat, lon })
    }
}

/// Geometric primitives consumed by the map layer
pub trait GeometryProvider {
    /// Closed ring approximating a circle: `steps + 1` points, the last
    /// equal to the first.
    fn circle(&self, center: GeoPoint, radius_km: f64, steps: usize) -> Result<Vec<GeoPoint>, CoreError>;

    /// Centroid of a set of points
    fn centroid(&self, points: &[GeoPoint]) -> Result<GeoPoint, CoreError>;

    /// Distance between two points in kilometres
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}
