//! Product Repository

use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct ProductRepository {
    store: MemStore,
}

impl ProductRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// All products, optionally filtered by category, ordered by id
    pub fn find_all(&self, category_id: Option<i64>) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .store
            .inner
            .products
            .iter()
            .filter(|p| category_id.is_none_or(|c| p.category_id == Some(c)))
            .map(|p| p.clone())
            .collect();
        products.sort_by_key(|p| p.id);
        products
    }

    /// Find product by id
    pub fn find_by_id(&self, id: i64) -> Option<Product> {
        self.store.inner.products.get(&id).map(|p| p.clone())
    }

    /// Create a new product
    pub fn create(&self, data: ProductCreate) -> Product {
        let inner = &self.store.inner;
        let product = Product {
            id: inner.ids.product.next(),
            name: data.name,
            description: data.description,
            price: data.price,
            category_id: data.category_id,
            image_url: data.image_url,
            unit: data.unit,
            is_active: data.is_active.unwrap_or(true),
        };
        inner.products.insert(product.id, product.clone());
        product
    }

    /// Merge supplied fields into an existing product
    ///
    /// Returns `None` when the id is absent. Only provided keys change.
    pub fn update(&self, id: i64, data: ProductUpdate) -> Option<Product> {
        let mut entry = self.store.inner.products.get_mut(&id)?;
        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(description) = data.description {
            entry.description = Some(description);
        }
        if let Some(price) = data.price {
            entry.price = price;
        }
        if let Some(category_id) = data.category_id {
            entry.category_id = Some(category_id);
        }
        if let Some(image_url) = data.image_url {
            entry.image_url = Some(image_url);
        }
        if let Some(unit) = data.unit {
            entry.unit = unit;
        }
        if let Some(is_active) = data.is_active {
            entry.is_active = is_active;
        }
        Some(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rice() -> ProductCreate {
        ProductCreate {
            name: "Riz brisé parfumé".into(),
            description: Some("Sac de 1 kg".into()),
            price: "650".parse::<Decimal>().unwrap(),
            category_id: Some(1),
            image_url: None,
            unit: "kg".into(),
            is_active: None,
        }
    }

    #[test]
    fn partial_update_keeps_unspecified_fields() {
        let repo = ProductRepository::new(MemStore::new());
        let product = repo.create(rice());

        let updated = repo
            .update(
                product.id,
                ProductUpdate {
                    price: Some("700".parse().unwrap()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, "700".parse::<Decimal>().unwrap());
        assert_eq!(updated.name, "Riz brisé parfumé");
        assert_eq!(updated.unit, "kg");
        assert!(updated.is_active);
    }

    #[test]
    fn update_missing_product_returns_none() {
        let repo = ProductRepository::new(MemStore::new());
        assert!(repo.update(99, ProductUpdate::default()).is_none());
    }

    #[test]
    fn category_filter() {
        let repo = ProductRepository::new(MemStore::new());
        repo.create(rice());
        repo.create(ProductCreate {
            category_id: Some(2),
            ..rice()
        });

        assert_eq!(repo.find_all(None).len(), 2);
        assert_eq!(repo.find_all(Some(2)).len(), 1);
        assert_eq!(repo.find_all(Some(9)).len(), 0);
    }
}
