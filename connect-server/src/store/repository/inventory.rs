//! Inventory Repository
//!
//! Rows are keyed by the composite `(product_id, store_id)` identity; at
//! most one row per pair. Quantity updates never upsert - a missing row is
//! reported back so the handler can return 404.

use chrono::Utc;
use shared::models::{InventoryItem, InventoryItemCreate, InventoryWithProduct};
use thiserror::Error;

use crate::store::MemStore;

/// Default minimum-stock threshold when a row is created without one
const DEFAULT_MIN_STOCK: i64 = 10;

/// Quantity update failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("no inventory row for this product/store pair")]
    NotFound,

    /// The caller's `expected_version` no longer matches the stored row
    #[error("stale version: expected {expected}, current {current}")]
    StaleVersion { expected: i64, current: i64 },
}

#[derive(Clone)]
pub struct InventoryRepository {
    store: MemStore,
}

impl InventoryRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Find one row by its composite identity
    pub fn find(&self, product_id: i64, store_id: i64) -> Option<InventoryItem> {
        self.store
            .inner
            .inventory
            .get(&(product_id, store_id))
            .map(|row| row.clone())
    }

    /// All rows of one store, ordered by product id
    pub fn find_by_store(&self, store_id: i64) -> Vec<InventoryItem> {
        let mut rows: Vec<InventoryItem> = self
            .store
            .inner
            .inventory
            .iter()
            .filter(|row| row.store_id == store_id)
            .map(|row| row.clone())
            .collect();
        rows.sort_by_key(|row| row.product_id);
        rows
    }

    /// Store rows joined with product detail; rows whose product is missing
    /// are silently dropped (dangling-reference protection)
    pub fn find_by_store_with_products(&self, store_id: i64) -> Vec<InventoryWithProduct> {
        let inner = &self.store.inner;
        self.find_by_store(store_id)
            .into_iter()
            .filter_map(|item| {
                let product = inner.products.get(&item.product_id)?.clone();
                Some(InventoryWithProduct { item, product })
            })
            .collect()
    }

    /// Low-stock rows of one store (quantity <= minStock), product attached
    pub fn find_low_stock(&self, store_id: i64) -> Vec<InventoryWithProduct> {
        self.find_by_store_with_products(store_id)
            .into_iter()
            .filter(|row| row.item.is_low_stock())
            .collect()
    }

    /// Create a row for a (product, store) pair
    ///
    /// Returns `None` when a row for the pair already exists.
    pub fn create(&self, data: InventoryItemCreate) -> Option<InventoryItem> {
        let inner = &self.store.inner;
        let key = (data.product_id, data.store_id);
        if inner.inventory.contains_key(&key) {
            return None;
        }
        let item = InventoryItem {
            product_id: data.product_id,
            store_id: data.store_id,
            quantity: data.quantity,
            min_stock: data.min_stock.unwrap_or(DEFAULT_MIN_STOCK),
            version: 1,
            last_updated: Utc::now(),
        };
        inner.inventory.insert(key, item.clone());
        Some(item)
    }

    /// Set the quantity of an existing row (no upsert)
    ///
    /// When `expected_version` is supplied it must match the stored row's
    /// version; a stale value is rejected and nothing changes. The version
    /// increments on every successful write.
    pub fn set_quantity(
        &self,
        product_id: i64,
        store_id: i64,
        quantity: i64,
        expected_version: Option<i64>,
    ) -> Result<InventoryItem, QuantityError> {
        let mut entry = self
            .store
            .inner
            .inventory
            .get_mut(&(product_id, store_id))
            .ok_or(QuantityError::NotFound)?;

        if let Some(expected) = expected_version
            && expected != entry.version
        {
            return Err(QuantityError::StaleVersion {
                expected,
                current: entry.version,
            });
        }

        entry.quantity = quantity;
        entry.version += 1;
        entry.last_updated = Utc::now();
        Ok(entry.clone())
    }
}
