//! Inventory Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

/// Stock-on-hand for one (product, store) pair
///
/// Composite identity: at most one row per pair, no surrogate id.
/// `version` increments on every write and backs the optimistic-concurrency
/// check on quantity updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: i64,
    pub store_id: i64,
    pub quantity: i64,
    pub min_stock: i64,
    pub version: i64,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// A row is low on stock when quantity has fallen to the threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }
}

/// Create inventory row payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemCreate {
    pub product_id: i64,
    pub store_id: i64,
    pub quantity: i64,
    pub min_stock: Option<i64>,
}

/// Quantity update payload
///
/// `expected_version`, when supplied, must match the stored row's version;
/// a stale value is rejected so concurrent updates cannot silently overwrite
/// each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuantityUpdate {
    pub quantity: i64,
    pub expected_version: Option<i64>,
}

/// Inventory row joined with its product (store inventory screens)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryWithProduct {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub product: Product,
}
