//! Severity Buckets and Threshold Tables
//!
//! A table is a list of `(threshold, bucket)` steps in strictly descending
//! threshold order plus a floor bucket. Classification walks the steps and
//! returns the bucket of the first threshold the value strictly exceeds, so
//! a value exactly on a threshold falls into the lower bucket.
//!
//! The cost table has no `Low` step. Cost and penetration tables are kept
//! separate and must not be unified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// Ordered display category for a metric, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBucket {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl SeverityBucket {
    /// All buckets in ascending order
    pub const ALL: [SeverityBucket; 5] = [
        SeverityBucket::Lowest,
        SeverityBucket::Low,
        SeverityBucket::Medium,
        SeverityBucket::High,
        SeverityBucket::Highest,
    ];

    /// Position in the ordering (0 = lowest)
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBucket::Lowest => "lowest",
            SeverityBucket::Low => "low",
            SeverityBucket::Medium => "medium",
            SeverityBucket::High => "high",
            SeverityBucket::Highest => "highest",
        }
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Penetration (%) steps: >12 highest, >6 high, >3 medium, >1 low
pub const PENETRATION_STEPS: &[(f64, SeverityBucket)] = &[
    (12.0, SeverityBucket::Highest),
    (6.0, SeverityBucket::High),
    (3.0, SeverityBucket::Medium),
    (1.0, SeverityBucket::Low),
];

/// Cost steps: >12 highest, >8 high, >4 medium (no low step)
pub const COST_STEPS: &[(f64, SeverityBucket)] = &[
    (12.0, SeverityBucket::Highest),
    (8.0, SeverityBucket::High),
    (4.0, SeverityBucket::Medium),
];

/// Descending threshold table with a floor bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    steps: Vec<(f64, SeverityBucket)>,
    floor: SeverityBucket,
}

impl ThresholdTable {
    /// Build a table from descending `(threshold, bucket)` steps
    ///
    /// # Errors
    /// `CoreError::InvalidInput` if a threshold is not finite or the
    /// thresholds are not strictly descending.
    pub fn new(
        steps: Vec<(f64, SeverityBucket)>,
        floor: SeverityBucket,
    ) -> Result<Self, CoreError> {
        for &(threshold, _) in &steps {
            if !threshold.is_finite() {
                return Err(CoreError::invalid("threshold", threshold, "must be finite"));
            }
        }
        for pair in steps.windows(2) {
            if pair[1].0 >= pair[0].0 {
                return Err(CoreError::invalid(
                    "threshold",
                    pair[1].0,
                    "thresholds must be strictly descending",
                ));
            }
        }
        Ok(Self { steps, floor })
    }

    /// Table used for the customer-penetration choropleth
    pub fn penetration() -> Self {
        Self {
            steps: PENETRATION_STEPS.to_vec(),
            floor: SeverityBucket::Lowest,
        }
    }

    /// Table used for the per-zone delivery cost layer
    pub fn cost() -> Self {
        Self {
            steps: COST_STEPS.to_vec(),
            floor: SeverityBucket::Lowest,
        }
    }

    pub fn steps(&self) -> &[(f64, SeverityBucket)] {
        &self.steps
    }

    pub fn floor(&self) -> SeverityBucket {
        self.floor
    }
}

/// Classify `value` against `table`
///
/// # Errors
/// `CoreError::InvalidInput` if `value` is NaN. Infinities classify
/// normally (`+inf` to the top step, `-inf` to the floor).
///
/// # Example
/// ```
/// use delivery_map_core_rs::{classify, SeverityBucket, ThresholdTable};
///
/// let table = ThresholdTable::penetration();
/// assert_eq!(classify(12.0, &table).unwrap(), SeverityBucket::High);
/// assert_eq!(classify(12.01, &table).unwrap(), SeverityBucket::Highest);
/// ```
pub fn classify(value: f64, table: &ThresholdTable) -> Result<SeverityBucket, CoreError> {
    if value.is_nan() {
        return Err(CoreError::invalid("value", value, "must not be NaN"));
    }

    let bucket = table
        .steps
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|&(_, bucket)| bucket)
        .unwrap_or(table.floor);

    Ok(bucket)
}

/// Classify a penetration percentage
pub fn classify_penetration(pct: f64) -> Result<SeverityBucket, CoreError> {
    classify(pct, &ThresholdTable::penetration())
}

/// Classify a delivery cost estimate
pub fn classify_cost(cost: f64) -> Result<SeverityBucket, CoreError> {
    classify(cost, &ThresholdTable::cost())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ordering() {
        assert!(SeverityBucket::Lowest < SeverityBucket::Low);
        assert!(SeverityBucket::High < SeverityBucket::Highest);
        let ranks: Vec<u8> = SeverityBucket::ALL.iter().map(|b| b.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_builtin_tables_are_well_formed() {
        for table in [ThresholdTable::penetration(), ThresholdTable::cost()] {
            let rebuilt = ThresholdTable::new(table.steps().to_vec(), table.floor()).unwrap();
            assert_eq!(rebuilt, table);
        }
    }

    #[test]
    fn test_new_rejects_unsorted_steps() {
        let result = ThresholdTable::new(
            vec![(3.0, SeverityBucket::Medium), (6.0, SeverityBucket::High)],
            SeverityBucket::Lowest,
        );
        assert!(result.is_err());

        let result = ThresholdTable::new(
            vec![(3.0, SeverityBucket::Medium), (3.0, SeverityBucket::Low)],
            SeverityBucket::Lowest,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_threshold() {
        let result = ThresholdTable::new(
            vec![(f64::INFINITY, SeverityBucket::High)],
            SeverityBucket::Lowest,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cost_table_has_no_low_step() {
        assert!(ThresholdTable::cost()
            .steps()
            .iter()
            .all(|(_, b)| *b != SeverityBucket::Low));
    }

    #[test]
    fn test_infinities() {
        assert_eq!(classify_penetration(f64::INFINITY).unwrap(), SeverityBucket::Highest);
        assert_eq!(classify_cost(f64::NEG_INFINITY).unwrap(), SeverityBucket::Lowest);
    }

    #[test]
    fn test_serialized_bucket_is_lowercase() {
        let json = serde_json::to_string(&SeverityBucket::Highest).unwrap();
        assert_eq!(json, "\"highest\"");
    }
}
