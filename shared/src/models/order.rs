//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Product, Store, UserPublic};

/// Order lifecycle: pending -> preparing -> ready -> delivered, or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Fulfilment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Pickup,
    Delivery,
}

/// Customer order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub store_id: i64,
    pub status: OrderStatus,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub total_amount: Decimal,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set once on the transition to delivered, never cleared afterwards
    pub delivered_at: Option<DateTime<Utc>>,
}

/// Order line - unit price is a snapshot taken at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Order line input at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Checkout payload - order fields plus nested items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: i64,
    pub store_id: i64,
    pub status: Option<OrderStatus>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub total_amount: Decimal,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItemInput>,
}

/// Order line joined with product detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Product,
}

/// Denormalized order view: customer + store + lines with product detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFull {
    #[serde(flatten)]
    pub order: Order,
    pub customer: UserPublic,
    pub store: Store,
    pub items: Vec<OrderItemDetail>,
}
