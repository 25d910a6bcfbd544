//! Sale Model
//!
//! In-person point-of-sale transactions recorded by a manager, distinct
//! from customer orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method at the till
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
}

/// Line of a point-of-sale ticket (embedded, not a separate entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Point-of-sale transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub store_id: i64,
    pub manager_id: i64,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub items: Vec<SaleItem>,
    pub created_at: DateTime<Utc>,
}

/// Record sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreate {
    pub store_id: i64,
    pub manager_id: i64,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub items: Vec<SaleItem>,
}
