//! Supply Chain Models
//!
//! Purchasing centers are upstream wholesale suppliers; stores restock by
//! placing supply orders against a center's catalog offers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Product;

/// Wholesale supplier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasingCenter {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Category names this center specializes in
    pub specialties: Vec<String>,
    pub delivery_zones: Vec<String>,
    pub is_active: bool,
}

/// Create purchasing center payload (seeding; no public endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasingCenterCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialties: Vec<String>,
    pub delivery_zones: Vec<String>,
}

/// A center's catalog offer for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterProduct {
    pub id: i64,
    pub center_id: i64,
    pub product_id: i64,
    pub unit_price: Decimal,
    pub min_order_quantity: i64,
    pub stock_quantity: i64,
    /// Lead time in days
    pub delivery_time: i64,
    pub is_available: bool,
}

/// Create center offer payload (seeding; no public endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterProductCreate {
    pub center_id: i64,
    pub product_id: i64,
    pub unit_price: Decimal,
    pub min_order_quantity: Option<i64>,
    pub stock_quantity: i64,
    pub delivery_time: Option<i64>,
}

/// Center offer joined with product detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterProductWithProduct {
    #[serde(flatten)]
    pub offer: CenterProduct,
    pub product: Product,
}

/// Supply order lifecycle: pending -> confirmed -> shipped -> delivered,
/// or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyOrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl FromStr for SupplyOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown supply order status: {other}")),
        }
    }
}

impl fmt::Display for SupplyOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Wholesale restocking order placed by a store against a center
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrder {
    pub id: i64,
    /// SUP-<millis>-<random>, uniqueness probabilistic
    pub order_number: String,
    pub store_id: i64,
    pub center_id: i64,
    pub status: SupplyOrderStatus,
    pub total_amount: Decimal,
    pub delivery_date: Option<DateTime<Utc>>,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub invoice_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Supply order line
///
/// `total_price` = quantity x unit price, computed once at creation and
/// never recalculated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Supply order line input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Create supply order payload - order fields plus nested items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrderCreate {
    pub store_id: i64,
    pub center_id: i64,
    pub delivery_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub items: Vec<SupplyOrderItemInput>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrderStatusUpdate {
    pub status: String,
    pub tracking_number: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
}

/// Supply order with its lines attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyOrderWithItems {
    #[serde(flatten)]
    pub order: SupplyOrder,
    pub items: Vec<SupplyOrderItem>,
}
