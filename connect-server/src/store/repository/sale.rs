//! Sale Repository

use chrono::{DateTime, Utc};
use shared::models::{Sale, SaleCreate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct SaleRepository {
    store: MemStore,
}

impl SaleRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Sales of one store within `[from, to)`, ordered by id
    pub fn find_by_store(
        &self,
        store_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<Sale> {
        let mut sales: Vec<Sale> = self
            .store
            .inner
            .sales
            .iter()
            .filter(|s| s.store_id == store_id && s.created_at >= from && s.created_at < to)
            .map(|s| s.clone())
            .collect();
        sales.sort_by_key(|s| s.id);
        sales
    }

    /// Record a point-of-sale transaction
    pub fn create(&self, data: SaleCreate) -> Sale {
        let inner = &self.store.inner;
        let sale = Sale {
            id: inner.ids.sale.next(),
            store_id: data.store_id,
            manager_id: data.manager_id,
            total_amount: data.total_amount,
            payment_method: data.payment_method,
            items: data.items,
            created_at: Utc::now(),
        };
        inner.sales.insert(sale.id, sale.clone());
        sale
    }
}
