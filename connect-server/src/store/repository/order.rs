//! Order Repository
//!
//! Customer orders and their lines. Creation takes the order and all of its
//! lines in one call: every referenced entity is checked and every row built
//! before the first map insertion, so a partially-item-populated order can
//! never be observed.

use chrono::Utc;
use shared::models::{
    Order, OrderCreate, OrderFull, OrderItem, OrderItemDetail, OrderStatus,
};

use crate::store::MemStore;

/// Order creation failure - a referenced entity does not exist
#[derive(Debug, PartialEq, Eq)]
pub enum OrderCreateError {
    CustomerNotFound(i64),
    StoreNotFound(i64),
    ProductNotFound(i64),
}

#[derive(Clone)]
pub struct OrderRepository {
    store: MemStore,
}

impl OrderRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Find order by id (flat row, no joins)
    pub fn find_by_id(&self, id: i64) -> Option<Order> {
        self.store.inner.orders.get(&id).map(|o| o.clone())
    }

    /// Orders filtered by store and/or customer, ordered by id
    pub fn find_all(&self, store_id: Option<i64>, customer_id: Option<i64>) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .store
            .inner
            .orders
            .iter()
            .filter(|o| store_id.is_none_or(|s| o.store_id == s))
            .filter(|o| customer_id.is_none_or(|c| o.customer_id == c))
            .map(|o| o.clone())
            .collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    /// Lines of one order, ordered by id
    pub fn find_items(&self, order_id: i64) -> Vec<OrderItem> {
        let mut items: Vec<OrderItem> = self
            .store
            .inner
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .map(|i| i.clone())
            .collect();
        items.sort_by_key(|i| i.id);
        items
    }

    /// Denormalized read: order + customer + store + lines with product
    ///
    /// Returns `None` if the order, its customer, its store, or any line's
    /// product is missing (dangling-reference protection; theoretical, since
    /// nothing is ever deleted).
    pub fn find_full(&self, id: i64) -> Option<OrderFull> {
        let inner = &self.store.inner;
        let order = self.find_by_id(id)?;
        let customer = inner.users.get(&order.customer_id)?.public();
        let store = inner.stores.get(&order.store_id)?.clone();

        let mut items = Vec::new();
        for item in self.find_items(id) {
            let product = inner.products.get(&item.product_id)?.clone();
            items.push(OrderItemDetail { item, product });
        }

        Some(OrderFull {
            order,
            customer,
            store,
            items,
        })
    }

    /// Create an order together with all of its lines
    ///
    /// Unit prices are stored as submitted - a snapshot independent of the
    /// product's current catalog price.
    pub fn create_with_items(&self, data: OrderCreate) -> Result<Order, OrderCreateError> {
        let inner = &self.store.inner;

        if !inner.users.contains_key(&data.customer_id) {
            return Err(OrderCreateError::CustomerNotFound(data.customer_id));
        }
        if !inner.stores.contains_key(&data.store_id) {
            return Err(OrderCreateError::StoreNotFound(data.store_id));
        }
        for item in &data.items {
            if !inner.products.contains_key(&item.product_id) {
                return Err(OrderCreateError::ProductNotFound(item.product_id));
            }
        }

        let order = Order {
            id: inner.ids.order.next(),
            customer_id: data.customer_id,
            store_id: data.store_id,
            status: data.status.unwrap_or(OrderStatus::Pending),
            order_type: data.order_type,
            total_amount: data.total_amount,
            delivery_address: data.delivery_address,
            notes: data.notes,
            created_at: Utc::now(),
            delivered_at: None,
        };

        let items: Vec<OrderItem> = data
            .items
            .into_iter()
            .map(|item| OrderItem {
                id: inner.ids.order_item.next(),
                order_id: order.id,
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();

        inner.orders.insert(order.id, order.clone());
        for item in items {
            inner.order_items.insert(item.id, item);
        }
        Ok(order)
    }

    /// Set the order status
    ///
    /// `delivered_at` is stamped if and only if the new status is delivered
    /// and is never cleared by a later transition (one-way timestamp).
    /// Returns `None` when the id is absent.
    pub fn set_status(&self, id: i64, status: OrderStatus) -> Option<Order> {
        let mut entry = self.store.inner.orders.get_mut(&id)?;
        entry.status = status;
        if status == OrderStatus::Delivered && entry.delivered_at.is_none() {
            entry.delivered_at = Some(Utc::now());
        }
        Some(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::repository::{ProductRepository, StoreRepository, UserRepository};
    use rust_decimal::Decimal;
    use shared::models::{
        OrderItemInput, OrderType, ProductCreate, StoreCreate, UserCreate, UserRole,
    };

    fn fixture(mem: &MemStore) -> (i64, i64, i64) {
        let customer = UserRepository::new(mem.clone()).create(UserCreate {
            username: "awa".into(),
            email: "awa@njaboot.sn".into(),
            password: "password123".into(),
            first_name: "Awa".into(),
            last_name: "Diop".into(),
            role: UserRole::Customer,
            phone: None,
            address: None,
        });
        let store = StoreRepository::new(mem.clone()).create(StoreCreate {
            name: "Boutique Médina".into(),
            address: "Rue 11, Médina".into(),
            manager_id: 1,
            phone: None,
        });
        let product = ProductRepository::new(mem.clone()).create(ProductCreate {
            name: "Huile d'arachide".into(),
            description: None,
            price: "1200".parse().unwrap(),
            category_id: None,
            image_url: None,
            unit: "liter".into(),
            is_active: None,
        });
        (customer.id, store.id, product.id)
    }

    fn order_for(customer_id: i64, store_id: i64, product_id: i64) -> OrderCreate {
        OrderCreate {
            customer_id,
            store_id,
            status: None,
            order_type: OrderType::Pickup,
            total_amount: "2400".parse().unwrap(),
            delivery_address: None,
            notes: None,
            items: vec![OrderItemInput {
                product_id,
                quantity: 2,
                unit_price: "1200".parse().unwrap(),
            }],
        }
    }

    #[test]
    fn unknown_product_creates_nothing() {
        let mem = MemStore::new();
        let (customer_id, store_id, _) = fixture(&mem);
        let repo = OrderRepository::new(mem.clone());

        let err = repo
            .create_with_items(order_for(customer_id, store_id, 999))
            .unwrap_err();
        assert_eq!(err, OrderCreateError::ProductNotFound(999));
        assert!(mem.inner.orders.is_empty());
        assert!(mem.inner.order_items.is_empty());
    }

    #[test]
    fn delivered_timestamp_is_one_way() {
        let mem = MemStore::new();
        let (customer_id, store_id, product_id) = fixture(&mem);
        let repo = OrderRepository::new(mem.clone());
        let order = repo
            .create_with_items(order_for(customer_id, store_id, product_id))
            .unwrap();
        assert!(order.delivered_at.is_none());

        let delivered = repo.set_status(order.id, OrderStatus::Delivered).unwrap();
        let stamp = delivered.delivered_at.expect("delivered_at must be set");

        let cancelled = repo.set_status(order.id, OrderStatus::Cancelled).unwrap();
        assert_eq!(cancelled.delivered_at, Some(stamp));
    }

    #[test]
    fn unit_price_survives_catalog_price_change() {
        let mem = MemStore::new();
        let (customer_id, store_id, product_id) = fixture(&mem);
        let orders = OrderRepository::new(mem.clone());
        let products = ProductRepository::new(mem.clone());

        let order = orders
            .create_with_items(order_for(customer_id, store_id, product_id))
            .unwrap();

        products.update(
            product_id,
            shared::models::ProductUpdate {
                price: Some("1500".parse().unwrap()),
                ..Default::default()
            },
        );

        let full = orders.find_full(order.id).unwrap();
        assert_eq!(
            full.items[0].item.unit_price,
            "1200".parse::<Decimal>().unwrap()
        );
        assert_eq!(full.order.total_amount, "2400".parse::<Decimal>().unwrap());
        // the joined product does reflect the new catalog price
        assert_eq!(full.items[0].product.price, "1500".parse::<Decimal>().unwrap());
    }
}
