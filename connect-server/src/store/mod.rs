//! In-Memory Storage Layer
//!
//! Sole source of truth for all entities during process lifetime. Backed by
//! `DashMap`s so individual map operations are atomic under concurrent
//! requests; there is no cross-entity transaction machinery. All state is
//! lost on restart.
//!
//! # 结构
//!
//! - [`MemStore`] - 共享存储句柄 (clone = 同一份数据)
//! - [`repository`] - 按实体切分的仓储接口，注入到 handler
//! - [`seed`] - 演示数据
//!
//! Entities are never physically deleted; "not found" is always surfaced as
//! `Option::None` to the caller, which the route layer maps to 404.

pub mod repository;
pub mod seed;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use shared::models::{
    Category, CenterProduct, InventoryItem, LoyaltyPoints, Notification, Order, OrderItem,
    Product, PurchasingCenter, Sale, Store, SupplyOrder, SupplyOrderItem, User,
};

/// Sequential id generator, one per entity type
///
/// First assigned id is 1. Uses a relaxed atomic: ids only need to be unique
/// and increasing, never synchronized with other memory.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Per-entity id counters
#[derive(Debug, Default)]
pub(crate) struct IdSequences {
    pub user: IdSequence,
    pub store: IdSequence,
    pub category: IdSequence,
    pub product: IdSequence,
    pub order: IdSequence,
    pub order_item: IdSequence,
    pub sale: IdSequence,
    pub loyalty: IdSequence,
    pub notification: IdSequence,
    pub center: IdSequence,
    pub center_product: IdSequence,
    pub supply_order: IdSequence,
    pub supply_order_item: IdSequence,
}

/// The in-memory maps, one per entity type
///
/// Inventory is keyed by its composite identity `(product_id, store_id)`;
/// loyalty by `customer_id` (one row per customer); everything else by id.
#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub users: DashMap<i64, User>,
    pub stores: DashMap<i64, Store>,
    pub categories: DashMap<i64, Category>,
    pub products: DashMap<i64, Product>,
    pub inventory: DashMap<(i64, i64), InventoryItem>,
    pub orders: DashMap<i64, Order>,
    pub order_items: DashMap<i64, OrderItem>,
    pub sales: DashMap<i64, Sale>,
    pub loyalty: DashMap<i64, LoyaltyPoints>,
    pub notifications: DashMap<i64, Notification>,
    pub centers: DashMap<i64, PurchasingCenter>,
    pub center_products: DashMap<i64, CenterProduct>,
    pub supply_orders: DashMap<i64, SupplyOrder>,
    pub supply_order_items: DashMap<i64, SupplyOrderItem>,
    pub ids: IdSequences,
}

/// Shared storage handle
///
/// Cheap to clone; every clone sees the same maps. Handlers receive this via
/// `ServerState` and wrap it in the per-entity repositories.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    pub(crate) inner: Arc<StoreInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}
