//! Analytics Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InventoryWithProduct;

/// Manager dashboard aggregate for one store (computed, never stored)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of sale totals since store-local midnight
    pub today_revenue: Decimal,
    pub total_orders: i64,
    /// Orders still pending or preparing
    pub active_orders: i64,
    pub low_stock_count: i64,
    /// Inventory rows with quantity <= minStock, product attached
    pub low_stock_items: Vec<InventoryWithProduct>,
    pub total_customers: i64,
}
