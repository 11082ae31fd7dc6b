//! Income tiers for the income-threshold overlays
//!
//! The map draws three stacked overlays: zones whose average household
//! income is at least $100k, $150k and $200k. A zone appears in every
//! overlay whose threshold it meets, so tiers are inclusive (`>=`), unlike
//! the strict severity tables.

use serde::{Deserialize, Serialize};

use crate::core::error::{require_non_negative, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeTier {
    Over100k,
    Over150k,
    Over200k,
}

impl IncomeTier {
    pub const ALL: [IncomeTier; 3] = [IncomeTier::Over100k, IncomeTier::Over150k, IncomeTier::Over200k];

    /// Minimum average income for the overlay
    pub fn threshold(self) -> f64 {
        match self {
            IncomeTier::Over100k => 100_000.0,
            IncomeTier::Over150k => 150_000.0,
            IncomeTier::Over200k => 200_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IncomeTier::Over100k => "Income ≥ $100k",
            IncomeTier::Over150k => "Income ≥ $150k",
            IncomeTier::Over200k => "Income ≥ $200k",
        }
    }
}

/// Every overlay tier that `avg_income` qualifies for, lowest first
///
/// # Errors
/// `CoreError::InvalidInput` if `avg_income` is negative or non-finite.
pub fn income_tiers(avg_income: f64) -> Result<Vec<IncomeTier>, CoreError> {
    let avg_income = require_non_negative("avg_income", avg_income)?;
    Ok(IncomeTier::ALL
        .into_iter()
        .filter(|tier| avg_income >= tier.threshold())
        .collect())
}
