//! Per-zone delivery cost report
//!
//! For every zone: great-circle distance from the depot to the zone
//! centroid, the cost estimate for that distance, and the cost and
//! penetration buckets the map uses for shading. All rows are computed from
//! a single copy of the cost parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::{classify_cost, classify_penetration, income_tiers, IncomeTier, SeverityBucket};
use crate::core::error::CoreError;
use crate::costs::estimator::{estimate_breakdown, CostBreakdown};
use crate::costs::params::CostParameters;
use crate::geometry::{GeoPoint, GeometryProvider};
use crate::zones::metrics::ZoneMetrics;

/// One zone's line in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCostRow {
    pub fsa: String,
    pub cost: CostBreakdown,
    pub cost_bucket: SeverityBucket,
    pub penetration_pct: f64,
    pub penetration_bucket: SeverityBucket,
    pub income_tiers: Vec<IncomeTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCostReport {
    pub depot: GeoPoint,
    pub params: CostParameters,
    pub rows: Vec<ZoneCostRow>,
}

impl ZoneCostReport {
    /// Build the report for `zones` served from `depot`
    ///
    /// # Errors
    /// `CoreError::InvalidInput` on the first zone whose metrics are out of
    /// domain, or if `params` is invalid. No partial report is returned.
    pub fn build<G: GeometryProvider + ?Sized>(
        zones: &[ZoneMetrics],
        depot: GeoPoint,
        params: &CostParameters,
        geometry: &G,
    ) -> Result<Self, CoreError> {
        params.validate()?;
        let snapshot = *params;

        let rows = zones
            .iter()
            .map(|zone| {
                let distance_km = geometry.distance_km(depot, zone.centroid);
                let cost = estimate_breakdown(distance_km, &snapshot)?;
                let penetration_pct = zone.penetration()?;
                Ok(ZoneCostRow {
                    fsa: zone.fsa.clone(),
                    cost_bucket: classify_cost(cost.total)?,
                    cost,
                    penetration_pct,
                    penetration_bucket: classify_penetration(penetration_pct)?,
                    income_tiers: income_tiers(zone.avg_income)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        tracing::debug!(zones = rows.len(), "built zone cost report");

        Ok(Self {
            depot,
            params: snapshot,
            rows,
        })
    }

    /// Number of zones in each cost bucket
    pub fn cost_bucket_counts(&self) -> BTreeMap<SeverityBucket, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.cost_bucket).or_insert(0) += 1;
        }
        counts
    }

    /// Mean estimate across zones, `None` for an empty report
    pub fn mean_cost(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| r.cost.total).sum();
        Some(sum / self.rows.len() as f64)
    }
}
