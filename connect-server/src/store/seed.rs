//! Demo seed data
//!
//! Populates an empty store with a small Senegalese grocery catalog, one
//! boutique with stock, demo accounts, and a purchasing center with offers.
//! Only used when `SEED_DEMO_DATA` is enabled; tests build their own state.

use rust_decimal::Decimal;
use shared::models::{
    CategoryCreate, CenterProductCreate, InventoryItemCreate, ProductCreate,
    PurchasingCenterCreate, StoreCreate, UserCreate, UserRole,
};

use super::MemStore;
use super::repository::{
    CategoryRepository, InventoryRepository, LoyaltyRepository, ProductRepository,
    StoreRepository, SupplyRepository, UserRepository,
};

/// Wholesale price offered by the demo purchasing center, as a fraction of
/// the retail price in percent
const WHOLESALE_PERCENT: i64 = 70;

/// Seed the demo dataset. Idempotence is not a concern: this runs once,
/// against a freshly created store.
pub fn seed_demo_data(store: &MemStore) {
    let users = UserRepository::new(store.clone());
    let stores = StoreRepository::new(store.clone());
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store.clone());
    let inventory = InventoryRepository::new(store.clone());
    let loyalty = LoyaltyRepository::new(store.clone());
    let supply = SupplyRepository::new(store.clone());

    // Demo accounts - the placeholder login accepts only "password123"
    let manager = users.create(UserCreate {
        username: "mamadou".into(),
        email: "mamadou@njaboot.sn".into(),
        password: "password123".into(),
        first_name: "Mamadou".into(),
        last_name: "Ndiaye".into(),
        role: UserRole::Manager,
        phone: Some("+221 77 123 45 67".into()),
        address: Some("Médina, Dakar".into()),
    });
    let customer = users.create(UserCreate {
        username: "awa".into(),
        email: "awa@njaboot.sn".into(),
        password: "password123".into(),
        first_name: "Awa".into(),
        last_name: "Diop".into(),
        role: UserRole::Customer,
        phone: Some("+221 76 987 65 43".into()),
        address: Some("Plateau, Dakar".into()),
    });
    loyalty.add_points(customer.id, 0);

    let boutique = stores.create(StoreCreate {
        name: "Njaboot Boutique Médina".into(),
        address: "Rue 11 x Avenue Blaise Diagne, Médina, Dakar".into(),
        manager_id: manager.id,
        phone: Some("+221 33 821 00 00".into()),
    });

    // Catalog
    let cereales = categories.create(CategoryCreate {
        name: "Céréales".into(),
        description: Some("Riz, mil, maïs et dérivés".into()),
    });
    let huiles = categories.create(CategoryCreate {
        name: "Huiles et condiments".into(),
        description: None,
    });
    let boissons = categories.create(CategoryCreate {
        name: "Boissons".into(),
        description: Some("Jus locaux et eaux".into()),
    });

    let catalog: &[(&str, &str, i64, &str)] = &[
        ("Riz brisé parfumé", "kg", 650, "Sac vendu au kilo"),
        ("Mil souna", "kg", 500, "Céréale locale"),
        ("Farine de maïs", "kg", 450, ""),
        ("Huile d'arachide", "liter", 1200, "Pressée à Kaolack"),
        ("Bissap rouge", "sachet", 300, "Fleurs d'hibiscus séchées"),
        ("Jus de bouye", "liter", 1000, "Pain de singe"),
    ];
    let category_ids = [
        cereales.id,
        cereales.id,
        cereales.id,
        huiles.id,
        boissons.id,
        boissons.id,
    ];

    let mut product_ids = Vec::new();
    for ((name, unit, price, description), category_id) in catalog.iter().zip(category_ids) {
        let product = products.create(ProductCreate {
            name: (*name).into(),
            description: (!description.is_empty()).then(|| (*description).into()),
            price: Decimal::from(*price),
            category_id: Some(category_id),
            image_url: None,
            unit: (*unit).into(),
            is_active: None,
        });
        product_ids.push(product.id);
    }

    // Stock the boutique; the last product is deliberately low on stock so
    // the dashboard has something to show
    for (idx, product_id) in product_ids.iter().enumerate() {
        let quantity = if idx == product_ids.len() - 1 { 3 } else { 40 };
        inventory.create(InventoryItemCreate {
            product_id: *product_id,
            store_id: boutique.id,
            quantity,
            min_stock: Some(10),
        });
    }

    // Upstream supplier
    let center = supply.create_center(PurchasingCenterCreate {
        name: "Centrale d'Achat de Dakar".into(),
        address: "Km 4, Route de Rufisque".into(),
        city: "Dakar".into(),
        phone: Some("+221 33 832 11 22".into()),
        email: Some("contact@centrale-dakar.sn".into()),
        specialties: vec!["Céréales".into(), "Huiles et condiments".into()],
        delivery_zones: vec!["Dakar".into(), "Thiès".into(), "Rufisque".into()],
    });

    for product_id in &product_ids {
        let retail = products
            .find_by_id(*product_id)
            .map(|p| p.price)
            .unwrap_or_default();
        supply.create_center_offer(CenterProductCreate {
            center_id: center.id,
            product_id: *product_id,
            unit_price: retail * Decimal::from(WHOLESALE_PERCENT) / Decimal::from(100),
            min_order_quantity: Some(10),
            stock_quantity: 500,
            delivery_time: Some(2),
        });
    }

    tracing::info!(
        products = product_ids.len(),
        "Demo data seeded (boutique, catalog, purchasing center)"
    );
}
