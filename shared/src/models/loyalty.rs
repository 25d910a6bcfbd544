//! Loyalty Model

use serde::{Deserialize, Serialize};

/// Points needed to reach silver
pub const SILVER_THRESHOLD: i64 = 2000;
/// Points needed to reach gold
pub const GOLD_THRESHOLD: i64 = 5000;

/// Loyalty tier, derived from accumulated points on every write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyLevel {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyLevel {
    /// gold >= 5000, silver >= 2000, else bronze
    pub fn from_points(points: i64) -> Self {
        if points >= GOLD_THRESHOLD {
            Self::Gold
        } else if points >= SILVER_THRESHOLD {
            Self::Silver
        } else {
            Self::Bronze
        }
    }
}

/// Loyalty account - one row per customer
///
/// `level` is a stored snapshot recomputed whenever points change, not
/// derived on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyPoints {
    pub id: i64,
    pub customer_id: i64,
    pub points: i64,
    pub level: LoyaltyLevel,
}
