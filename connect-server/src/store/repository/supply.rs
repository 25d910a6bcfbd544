//! Supply Chain Repository
//!
//! Purchasing centers, their catalog offers, and store restocking orders.
//! Like customer orders, a supply order and its lines are created in one
//! call with all references checked up front.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use shared::models::{
    CenterProduct, CenterProductCreate, CenterProductWithProduct, PurchasingCenter,
    PurchasingCenterCreate, SupplyOrder, SupplyOrderCreate, SupplyOrderItem,
    SupplyOrderStatus, SupplyOrderWithItems,
};

use crate::store::MemStore;

/// Default minimum order quantity for a center offer
const DEFAULT_MIN_ORDER_QTY: i64 = 1;
/// Default lead time in days for a center offer
const DEFAULT_DELIVERY_TIME: i64 = 3;

/// Supply order creation failure - a referenced entity does not exist
#[derive(Debug, PartialEq, Eq)]
pub enum SupplyCreateError {
    StoreNotFound(i64),
    CenterNotFound(i64),
    ProductNotFound(i64),
}

#[derive(Clone)]
pub struct SupplyRepository {
    store: MemStore,
}

impl SupplyRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    // ========== Purchasing Centers ==========

    /// All active centers, ordered by id
    pub fn find_centers(&self) -> Vec<PurchasingCenter> {
        let mut centers: Vec<PurchasingCenter> = self
            .store
            .inner
            .centers
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.clone())
            .collect();
        centers.sort_by_key(|c| c.id);
        centers
    }

    /// Find center by id
    pub fn find_center(&self, id: i64) -> Option<PurchasingCenter> {
        self.store.inner.centers.get(&id).map(|c| c.clone())
    }

    /// Create a purchasing center
    pub fn create_center(&self, data: PurchasingCenterCreate) -> PurchasingCenter {
        let inner = &self.store.inner;
        let center = PurchasingCenter {
            id: inner.ids.center.next(),
            name: data.name,
            address: data.address,
            city: data.city,
            phone: data.phone,
            email: data.email,
            specialties: data.specialties,
            delivery_zones: data.delivery_zones,
            is_active: true,
        };
        inner.centers.insert(center.id, center.clone());
        center
    }

    // ========== Center Offers ==========

    /// Offers of one center joined with product detail, ordered by id;
    /// offers whose product is missing are dropped
    pub fn find_center_offers(&self, center_id: i64) -> Vec<CenterProductWithProduct> {
        let inner = &self.store.inner;
        let mut offers: Vec<CenterProduct> = inner
            .center_products
            .iter()
            .filter(|o| o.center_id == center_id)
            .map(|o| o.clone())
            .collect();
        offers.sort_by_key(|o| o.id);

        offers
            .into_iter()
            .filter_map(|offer| {
                let product = inner.products.get(&offer.product_id)?.clone();
                Some(CenterProductWithProduct { offer, product })
            })
            .collect()
    }

    /// Create a center catalog offer
    pub fn create_center_offer(&self, data: CenterProductCreate) -> CenterProduct {
        let inner = &self.store.inner;
        let offer = CenterProduct {
            id: inner.ids.center_product.next(),
            center_id: data.center_id,
            product_id: data.product_id,
            unit_price: data.unit_price,
            min_order_quantity: data.min_order_quantity.unwrap_or(DEFAULT_MIN_ORDER_QTY),
            stock_quantity: data.stock_quantity,
            delivery_time: data.delivery_time.unwrap_or(DEFAULT_DELIVERY_TIME),
            is_available: true,
        };
        inner.center_products.insert(offer.id, offer.clone());
        offer
    }

    // ========== Supply Orders ==========

    /// Find supply order by id (flat row)
    pub fn find_order(&self, id: i64) -> Option<SupplyOrder> {
        self.store.inner.supply_orders.get(&id).map(|o| o.clone())
    }

    /// Lines of one supply order, ordered by id
    pub fn find_order_items(&self, order_id: i64) -> Vec<SupplyOrderItem> {
        let mut items: Vec<SupplyOrderItem> = self
            .store
            .inner
            .supply_order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .map(|i| i.clone())
            .collect();
        items.sort_by_key(|i| i.id);
        items
    }

    /// Supply orders of one store with lines attached, newest first
    pub fn find_orders_by_store(&self, store_id: i64) -> Vec<SupplyOrderWithItems> {
        let mut orders: Vec<SupplyOrder> = self
            .store
            .inner
            .supply_orders
            .iter()
            .filter(|o| o.store_id == store_id)
            .map(|o| o.clone())
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.id));

        orders
            .into_iter()
            .map(|order| {
                let items = self.find_order_items(order.id);
                SupplyOrderWithItems { order, items }
            })
            .collect()
    }

    /// Create a supply order together with all of its lines
    ///
    /// Each line's `total_price` is computed as quantity x unit price at
    /// write time and never recalculated; the order total is their sum.
    /// The order number is `SUP-<millis>-<random>` - probabilistically
    /// unique, not enforced.
    pub fn create_order_with_items(
        &self,
        data: SupplyOrderCreate,
    ) -> Result<SupplyOrderWithItems, SupplyCreateError> {
        let inner = &self.store.inner;

        if !inner.stores.contains_key(&data.store_id) {
            return Err(SupplyCreateError::StoreNotFound(data.store_id));
        }
        if !inner.centers.contains_key(&data.center_id) {
            return Err(SupplyCreateError::CenterNotFound(data.center_id));
        }
        for item in &data.items {
            if !inner.products.contains_key(&item.product_id) {
                return Err(SupplyCreateError::ProductNotFound(item.product_id));
            }
        }

        let now = Utc::now();
        let order_number = format!(
            "SUP-{}-{:04}",
            now.timestamp_millis(),
            rand::thread_rng().gen_range(0..10_000)
        );

        let order_id = inner.ids.supply_order.next();
        let items: Vec<SupplyOrderItem> = data
            .items
            .into_iter()
            .map(|item| {
                let total_price = item.unit_price * Decimal::from(item.quantity);
                SupplyOrderItem {
                    id: inner.ids.supply_order_item.next(),
                    order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    total_price,
                }
            })
            .collect();

        let total_amount: Decimal = items.iter().map(|i| i.total_price).sum();

        let order = SupplyOrder {
            id: order_id,
            order_number,
            store_id: data.store_id,
            center_id: data.center_id,
            status: SupplyOrderStatus::Pending,
            total_amount,
            delivery_date: data.delivery_date,
            tracking_number: None,
            notes: data.notes,
            invoice_url: None,
            created_at: now,
            updated_at: now,
        };

        inner.supply_orders.insert(order.id, order.clone());
        for item in &items {
            inner.supply_order_items.insert(item.id, item.clone());
        }
        Ok(SupplyOrderWithItems { order, items })
    }

    /// Set a supply order's status
    ///
    /// Bumps `updated_at`; tracking number and delivery date are merged in
    /// when supplied. Returns `None` when the id is absent.
    pub fn set_order_status(
        &self,
        id: i64,
        status: SupplyOrderStatus,
        tracking_number: Option<String>,
        delivery_date: Option<chrono::DateTime<Utc>>,
    ) -> Option<SupplyOrder> {
        let mut entry = self.store.inner.supply_orders.get_mut(&id)?;
        entry.status = status;
        if let Some(tracking) = tracking_number {
            entry.tracking_number = Some(tracking);
        }
        if let Some(date) = delivery_date {
            entry.delivery_date = Some(date);
        }
        entry.updated_at = Utc::now();
        Some(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::repository::{ProductRepository, StoreRepository};
    use shared::models::{ProductCreate, StoreCreate, SupplyOrderItemInput};

    fn fixture(mem: &MemStore) -> (i64, i64, i64) {
        let store = StoreRepository::new(mem.clone()).create(StoreCreate {
            name: "Boutique Médina".into(),
            address: "Rue 11, Médina".into(),
            manager_id: 1,
            phone: None,
        });
        let center = SupplyRepository::new(mem.clone()).create_center(PurchasingCenterCreate {
            name: "Centrale d'Achat de Dakar".into(),
            address: "Km 4, Route de Rufisque".into(),
            city: "Dakar".into(),
            phone: None,
            email: None,
            specialties: vec!["Céréales".into()],
            delivery_zones: vec!["Dakar".into()],
        });
        let product = ProductRepository::new(mem.clone()).create(ProductCreate {
            name: "Riz brisé parfumé".into(),
            description: None,
            price: "650".parse().unwrap(),
            category_id: None,
            image_url: None,
            unit: "kg".into(),
            is_active: None,
        });
        (store.id, center.id, product.id)
    }

    #[test]
    fn line_total_is_exact() {
        let mem = MemStore::new();
        let (store_id, center_id, product_id) = fixture(&mem);
        let repo = SupplyRepository::new(mem);

        let created = repo
            .create_order_with_items(SupplyOrderCreate {
                store_id,
                center_id,
                delivery_date: None,
                notes: None,
                items: vec![SupplyOrderItemInput {
                    product_id,
                    quantity: 15,
                    unit_price: "440.00".parse().unwrap(),
                }],
            })
            .unwrap();

        assert_eq!(
            created.items[0].total_price,
            "6600.00".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            created.order.total_amount,
            "6600.00".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn order_number_shape() {
        let mem = MemStore::new();
        let (store_id, center_id, product_id) = fixture(&mem);
        let repo = SupplyRepository::new(mem);

        let created = repo
            .create_order_with_items(SupplyOrderCreate {
                store_id,
                center_id,
                delivery_date: None,
                notes: None,
                items: vec![SupplyOrderItemInput {
                    product_id,
                    quantity: 1,
                    unit_price: "100".parse().unwrap(),
                }],
            })
            .unwrap();

        let parts: Vec<&str> = created.order.order_number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "SUP");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn status_change_bumps_updated_at_and_merges_tracking() {
        let mem = MemStore::new();
        let (store_id, center_id, product_id) = fixture(&mem);
        let repo = SupplyRepository::new(mem);

        let created = repo
            .create_order_with_items(SupplyOrderCreate {
                store_id,
                center_id,
                delivery_date: None,
                notes: None,
                items: vec![SupplyOrderItemInput {
                    product_id,
                    quantity: 2,
                    unit_price: "500".parse().unwrap(),
                }],
            })
            .unwrap();

        let shipped = repo
            .set_order_status(
                created.order.id,
                SupplyOrderStatus::Shipped,
                Some("DKR-2031".into()),
                None,
            )
            .unwrap();
        assert_eq!(shipped.status, SupplyOrderStatus::Shipped);
        assert_eq!(shipped.tracking_number.as_deref(), Some("DKR-2031"));
        assert!(shipped.updated_at >= created.order.updated_at);

        // tracking survives a later transition without one
        let delivered = repo
            .set_order_status(created.order.id, SupplyOrderStatus::Delivered, None, None)
            .unwrap();
        assert_eq!(delivered.tracking_number.as_deref(), Some("DKR-2031"));
    }

    #[test]
    fn unknown_center_creates_nothing() {
        let mem = MemStore::new();
        let (store_id, _, product_id) = fixture(&mem);
        let repo = SupplyRepository::new(mem.clone());

        let err = repo
            .create_order_with_items(SupplyOrderCreate {
                store_id,
                center_id: 42,
                delivery_date: None,
                notes: None,
                items: vec![SupplyOrderItemInput {
                    product_id,
                    quantity: 1,
                    unit_price: "100".parse().unwrap(),
                }],
            })
            .unwrap_err();
        assert_eq!(err, SupplyCreateError::CenterNotFound(42));
        assert!(mem.inner.supply_orders.is_empty());
        assert!(mem.inner.supply_order_items.is_empty());
    }
}
