//! Popup text for the map layers

use crate::costs::estimator::CostBreakdown;
use crate::zones::metrics::ZoneMetrics;

/// Format a non-negative amount with thousands separators, no decimals
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Popup shown on the penetration / income layers
///
/// A penetration that cannot be derived (zero households, or a bad
/// precomputed value) is shown as "n/a". `ZoneCostReport::build` fails with
/// `InvalidInput` on the same zone instead of substituting anything.
pub fn zone_popup(zone: &ZoneMetrics) -> String {
    let penetration = match zone.penetration() {
        Ok(pct) => format!("{:.1}%", pct),
        Err(_) => "n/a".to_string(),
    };

    format!(
        "FSA: {}\nAvg income: ${}\nHouseholds: {}\nCustomers: {}\nPenetration: {}\nAvg order: ${:.2}",
        zone.fsa,
        format_thousands(zone.avg_income),
        format_thousands(zone.households as f64),
        format_thousands(zone.customers as f64),
        penetration,
        zone.avg_order_value,
    )
}

/// Popup shown on the delivery cost layer
pub fn cost_popup(fsa: &str, breakdown: &CostBreakdown) -> String {
    format!(
        "FSA: {}\nDistance: {:.1} km\nEst. cost per stop: ${:.2}",
        fsa, breakdown.distance_km, breakdown.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::{estimate_breakdown, CostParameters};
    use crate::geometry::GeoPoint;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(123_456.4), "123,456");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
        assert_eq!(format_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_zone_popup() {
        let zone = ZoneMetrics {
            fsa: "N6A".to_string(),
            avg_income: 152_300.0,
            households: 5000,
            customers: 300,
            penetration_pct: None,
            avg_order_value: 45.2,
            centroid: GeoPoint { lat: 42.99, lon: -81.25 },
        };
        assert_eq!(
            zone_popup(&zone),
            "FSA: N6A\nAvg income: $152,300\nHouseholds: 5,000\nCustomers: 300\nPenetration: 6.0%\nAvg order: $45.20"
        );
    }

    #[test]
    fn test_zone_popup_without_households() {
        let zone = ZoneMetrics {
            fsa: "N0L".to_string(),
            avg_income: 0.0,
            households: 0,
            customers: 0,
            penetration_pct: None,
            avg_order_value: 0.0,
            centroid: GeoPoint { lat: 43.0, lon: -81.5 },
        };
        assert!(zone_popup(&zone).contains("Penetration: n/a"));
    }

    #[test]
    fn test_cost_popup() {
        let b = estimate_breakdown(10.0, &CostParameters::default()).unwrap();
        assert_eq!(
            cost_popup("N6A", &b),
            "FSA: N6A\nDistance: 10.0 km\nEst. cost per stop: $12.67"
        );
    }
}
