//! Classification Tests
//!
//! Both tables use strict `>` comparisons, so a value exactly on a
//! threshold lands in the lower bucket.

use delivery_map_core_rs::{
    classify, classify_cost, classify_penetration, income_tiers, IncomeTier, SeverityBucket,
    ThresholdTable,
};

// ============================================================================
// Penetration table: >12 highest, >6 high, >3 medium, >1 low
// ============================================================================

#[test]
fn test_penetration_boundary_at_twelve() {
    assert_eq!(classify_penetration(12.0).unwrap(), SeverityBucket::High);
    assert_eq!(classify_penetration(12.01).unwrap(), SeverityBucket::Highest);
}

#[test]
fn test_penetration_all_buckets() {
    let cases = [
        (0.0, SeverityBucket::Lowest),
        (1.0, SeverityBucket::Lowest),
        (1.5, SeverityBucket::Low),
        (3.0, SeverityBucket::Low),
        (3.1, SeverityBucket::Medium),
        (6.0, SeverityBucket::Medium),
        (6.5, SeverityBucket::High),
        (25.0, SeverityBucket::Highest),
    ];
    for (value, expected) in cases {
        assert_eq!(classify_penetration(value).unwrap(), expected, "value {}", value);
    }
}

#[test]
fn test_penetration_negative_is_lowest() {
    assert_eq!(classify_penetration(-5.0).unwrap(), SeverityBucket::Lowest);
}

// ============================================================================
// Cost table: >12 highest, >8 high, >4 medium, else lowest
// ============================================================================

#[test]
fn test_cost_boundary_at_eight() {
    assert_eq!(classify_cost(8.0).unwrap(), SeverityBucket::Medium);
    assert_eq!(classify_cost(8.01).unwrap(), SeverityBucket::High);
}

#[test]
fn test_cost_skips_low_bucket() {
    // Values that would be "low" on the penetration table are "lowest" here
    assert_eq!(classify_cost(2.0).unwrap(), SeverityBucket::Lowest);
    assert_eq!(classify_cost(4.0).unwrap(), SeverityBucket::Lowest);
    assert_eq!(classify_cost(4.01).unwrap(), SeverityBucket::Medium);
    assert_eq!(classify_cost(12.0).unwrap(), SeverityBucket::High);
    assert_eq!(classify_cost(12.67).unwrap(), SeverityBucket::Highest);
}

#[test]
fn test_tables_are_not_interchangeable() {
    assert_ne!(ThresholdTable::penetration(), ThresholdTable::cost());
    assert_eq!(classify_penetration(2.0).unwrap(), SeverityBucket::Low);
    assert_eq!(classify_cost(2.0).unwrap(), SeverityBucket::Lowest);
}

// ============================================================================
// Invalid input and custom tables
// ============================================================================

#[test]
fn test_nan_rejected() {
    assert!(classify_penetration(f64::NAN).is_err());
    assert!(classify_cost(f64::NAN).is_err());
}

#[test]
fn test_custom_table() {
    let table = ThresholdTable::new(
        vec![(100.0, SeverityBucket::Highest), (50.0, SeverityBucket::Medium)],
        SeverityBucket::Low,
    )
    .unwrap();
    assert_eq!(classify(100.0, &table).unwrap(), SeverityBucket::Medium);
    assert_eq!(classify(100.5, &table).unwrap(), SeverityBucket::Highest);
    assert_eq!(classify(10.0, &table).unwrap(), SeverityBucket::Low);
}

#[test]
fn test_empty_table_always_floor() {
    let table = ThresholdTable::new(vec![], SeverityBucket::Medium).unwrap();
    assert_eq!(classify(1e9, &table).unwrap(), SeverityBucket::Medium);
}

// ============================================================================
// Income tiers
// ============================================================================

#[test]
fn test_income_tiers() {
    assert!(income_tiers(80_000.0).unwrap().is_empty());
    assert_eq!(income_tiers(100_000.0).unwrap(), vec![IncomeTier::Over100k]);
    assert_eq!(
        income_tiers(150_000.0).unwrap(),
        vec![IncomeTier::Over100k, IncomeTier::Over150k]
    );
    assert_eq!(
        income_tiers(200_000.0).unwrap(),
        vec![IncomeTier::Over100k, IncomeTier::Over150k, IncomeTier::Over200k]
    );
}
