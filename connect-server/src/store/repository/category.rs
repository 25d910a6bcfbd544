//! Category Repository

use shared::models::{Category, CategoryCreate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct CategoryRepository {
    store: MemStore,
}

impl CategoryRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// All categories ordered by id
    pub fn find_all(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .store
            .inner
            .categories
            .iter()
            .map(|c| c.clone())
            .collect();
        categories.sort_by_key(|c| c.id);
        categories
    }

    /// Find category by id
    pub fn find_by_id(&self, id: i64) -> Option<Category> {
        self.store.inner.categories.get(&id).map(|c| c.clone())
    }

    /// Create a new category
    pub fn create(&self, data: CategoryCreate) -> Category {
        let inner = &self.store.inner;
        let category = Category {
            id: inner.ids.category.next(),
            name: data.name,
            description: data.description,
        };
        inner.categories.insert(category.id, category.clone());
        category
    }
}
