//! Store Repository

use shared::models::{Store, StoreCreate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct StoreRepository {
    store: MemStore,
}

impl StoreRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Find store by id
    pub fn find_by_id(&self, id: i64) -> Option<Store> {
        self.store.inner.stores.get(&id).map(|s| s.clone())
    }

    /// Stores owned by a manager
    pub fn find_by_manager(&self, manager_id: i64) -> Vec<Store> {
        let mut stores: Vec<Store> = self
            .store
            .inner
            .stores
            .iter()
            .filter(|s| s.manager_id == manager_id)
            .map(|s| s.clone())
            .collect();
        stores.sort_by_key(|s| s.id);
        stores
    }

    /// Distinct stores that currently have the product in stock
    /// (inventory row exists with quantity > 0)
    pub fn find_with_product(&self, product_id: i64) -> Vec<Store> {
        let inner = &self.store.inner;
        let mut store_ids: Vec<i64> = inner
            .inventory
            .iter()
            .filter(|row| row.product_id == product_id && row.quantity > 0)
            .map(|row| row.store_id)
            .collect();
        store_ids.sort_unstable();
        store_ids.dedup();

        store_ids
            .into_iter()
            .filter_map(|id| inner.stores.get(&id).map(|s| s.clone()))
            .collect()
    }

    /// Create a new store
    pub fn create(&self, data: StoreCreate) -> Store {
        let inner = &self.store.inner;
        let store = Store {
            id: inner.ids.store.next(),
            name: data.name,
            address: data.address,
            manager_id: data.manager_id,
            phone: data.phone,
            is_active: true,
        };
        inner.stores.insert(store.id, store.clone());
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::repository::InventoryRepository;
    use shared::models::InventoryItemCreate;

    fn store_at(repo: &StoreRepository, name: &str) -> Store {
        repo.create(StoreCreate {
            name: name.into(),
            address: "Médina, Dakar".into(),
            manager_id: 1,
            phone: None,
        })
    }

    #[test]
    fn with_product_skips_empty_and_missing_rows() {
        let mem = MemStore::new();
        let stores = StoreRepository::new(mem.clone());
        let inventory = InventoryRepository::new(mem.clone());

        let a = store_at(&stores, "Boutique Médina");
        let b = store_at(&stores, "Boutique Plateau");
        let c = store_at(&stores, "Boutique Yoff");

        inventory.create(InventoryItemCreate {
            product_id: 7,
            store_id: a.id,
            quantity: 12,
            min_stock: None,
        });
        inventory.create(InventoryItemCreate {
            product_id: 7,
            store_id: b.id,
            quantity: 0,
            min_stock: None,
        });
        // store c has no row at all

        let found = stores.find_with_product(7);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a.id);
        assert_ne!(found[0].id, c.id);
    }
}
