//! Great-circle geometry on a spherical earth

use crate::core::error::{require_positive, CoreError};
use crate::geometry::{GeoPoint, GeometryProvider};

/// Mean earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalGeometry {
    radius_km: f64,
}

impl Default for SphericalGeometry {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl SphericalGeometry {
    /// Geometry on a sphere of the given radius
    pub fn with_radius(radius_km: f64) -> Result<Self, CoreError> {
        let radius_km = require_positive("sphere_radius_km", radius_km)?;
        Ok(Self { radius_km })
    }

    /// Point reached by travelling `distance_km` from `origin` along
    /// `bearing_deg` (clockwise from north)
    pub fn destination(&self, origin: GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
        let phi1 = origin.lat.to_radians();
        let lambda1 = origin.lon.to_radians();
        let theta = bearing_deg.to_radians();
        let delta = distance_km / self.radius_km;

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        GeoPoint {
            lat: phi2.to_degrees(),
            lon: normalize_lon(lambda2.to_degrees()),
        }
    }
}

fn normalize_lon(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

impl GeometryProvider for SphericalGeometry {
    fn circle(&self, center: GeoPoint, radius_km: f64, steps: usize) -> Result<Vec<GeoPoint>, CoreError> {
        let radius_km = require_positive("radius_km", radius_km)?;
        if steps < 3 {
            return Err(CoreError::invalid("steps", steps as f64, "need at least 3 steps"));
        }

        // Counter-clockwise ring starting due north
        let mut ring: Vec<GeoPoint> = (0..steps)
            .map(|i| {
                let bearing = -(i as f64) * 360.0 / steps as f64;
                self.destination(center, radius_km, bearing)
            })
            .collect();
        ring.push(ring[0]);
        Ok(ring)
    }

    fn centroid(&self, points: &[GeoPoint]) -> Result<GeoPoint, CoreError> {
        if points.is_empty() {
            return Err(CoreError::invalid("points", 0.0, "centroid of an empty set"));
        }
        let n = points.len() as f64;
        let (lat_sum, lon_sum) = points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
        Ok(GeoPoint {
            lat: lat_sum / n,
            lon: lon_sum / n,
        })
    }

    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let phi1 = from.lat.to_radians();
        let phi2 = to.lat.to_radians();
        let d_phi = (to.lat - from.lat).to_radians();
        let d_lambda = (to.lon - from.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * self.radius_km * a.sqrt().atan2((1.0 - a).sqrt())
    }
}
