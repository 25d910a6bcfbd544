//! 供应链流程测试
//!
//! 采购中心目录、补货下单 (金额精度) 和状态流转。

mod common;

use common::{ServerState, request, test_app};
use serde_json::json;

use connect_server::store::repository::{ProductRepository, StoreRepository, SupplyRepository};
use shared::models::{
    CenterProductCreate, ProductCreate, PurchasingCenterCreate, StoreCreate,
};

/// One store (manager user 7), one product, one center with one offer
fn seed_supply_fixture(state: &ServerState) -> (i64, i64, i64) {
    let store = StoreRepository::new(state.store.clone()).create(StoreCreate {
        name: "Njaboot Boutique Médina".into(),
        address: "Rue 11, Médina, Dakar".into(),
        manager_id: 7,
        phone: None,
    });
    let product = ProductRepository::new(state.store.clone()).create(ProductCreate {
        name: "Riz brisé parfumé".into(),
        description: None,
        price: "650".parse().unwrap(),
        category_id: None,
        image_url: None,
        unit: "kg".into(),
        is_active: None,
    });
    let supply = SupplyRepository::new(state.store.clone());
    let center = supply.create_center(PurchasingCenterCreate {
        name: "Centrale d'Achat de Dakar".into(),
        address: "Km 4, Route de Rufisque".into(),
        city: "Dakar".into(),
        phone: None,
        email: None,
        specialties: vec!["Céréales".into()],
        delivery_zones: vec!["Dakar".into()],
    });
    supply.create_center_offer(CenterProductCreate {
        center_id: center.id,
        product_id: product.id,
        unit_price: "440.00".parse().unwrap(),
        min_order_quantity: Some(10),
        stock_quantity: 500,
        delivery_time: Some(2),
    });
    (store.id, center.id, product.id)
}

#[tokio::test]
async fn center_catalog_is_joined_with_products() {
    let (app, state) = test_app();
    let (_, center_id, product_id) = seed_supply_fixture(&state);

    let (status, centers) = request(&app, "GET", "/api/purchasing-centers", None).await;
    assert_eq!(status, 200);
    assert_eq!(centers.as_array().unwrap().len(), 1);
    assert_eq!(centers[0]["name"], "Centrale d'Achat de Dakar");
    assert_eq!(centers[0]["specialties"][0], "Céréales");

    let (status, offers) = request(
        &app,
        "GET",
        &format!("/api/center-products/{center_id}"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    let offers = offers.as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["productId"], product_id);
    assert_eq!(offers[0]["unitPrice"], "440.00");
    assert_eq!(offers[0]["product"]["name"], "Riz brisé parfumé");

    let (status, _) = request(&app, "GET", "/api/center-products/99", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn supply_order_totals_are_exact() {
    let (app, state) = test_app();
    let (store_id, center_id, product_id) = seed_supply_fixture(&state);

    let (status, created) = request(
        &app,
        "POST",
        "/api/supply-orders",
        Some(json!({
            "storeId": store_id,
            "centerId": center_id,
            "notes": "Réassort hebdomadaire",
            "items": [
                {"productId": product_id, "quantity": 15, "unitPrice": "440.00"}
            ]
        })),
    )
    .await;
    assert_eq!(status, 201);

    // 15 x 440.00 = 6600.00, currency precision preserved exactly
    assert_eq!(created["items"][0]["totalPrice"], "6600.00");
    assert_eq!(created["totalAmount"], "6600.00");
    assert_eq!(created["status"], "pending");
    assert!(
        created["orderNumber"]
            .as_str()
            .unwrap()
            .starts_with("SUP-")
    );
}

#[tokio::test]
async fn supply_order_status_flow_notifies_the_manager() {
    let (app, state) = test_app();
    let (store_id, center_id, product_id) = seed_supply_fixture(&state);

    let (_, created) = request(
        &app,
        "POST",
        "/api/supply-orders",
        Some(json!({
            "storeId": store_id,
            "centerId": center_id,
            "items": [{"productId": product_id, "quantity": 10, "unitPrice": "440.00"}]
        })),
    )
    .await;
    let order_id = created["id"].as_i64().unwrap();
    let created_updated_at: chrono::DateTime<chrono::Utc> =
        created["updatedAt"].as_str().unwrap().parse().unwrap();

    let (status, shipped) = request(
        &app,
        "PATCH",
        &format!("/api/supply-orders/{order_id}/status"),
        Some(json!({"status": "shipped", "trackingNumber": "DKR-2031"})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(shipped["status"], "shipped");
    assert_eq!(shipped["trackingNumber"], "DKR-2031");
    let shipped_updated_at: chrono::DateTime<chrono::Utc> =
        shipped["updatedAt"].as_str().unwrap().parse().unwrap();
    assert!(shipped_updated_at >= created_updated_at);

    // unknown status value
    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/api/supply-orders/{order_id}/status"),
        Some(json!({"status": "teleported"})),
    )
    .await;
    assert_eq!(status, 400);

    // the store's manager (user 7 in the fixture) was notified
    let (_, notifications) = request(&app, "GET", "/api/notifications/7", None).await;
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], "Commande fournisseur mise à jour");

    // list endpoint returns the order with items attached, newest first
    let (_, listed) = request(&app, "GET", &format!("/api/supply-orders/{store_id}"), None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["items"].as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["trackingNumber"], "DKR-2031");
}

#[tokio::test]
async fn supply_order_with_unknown_reference_creates_nothing() {
    let (app, state) = test_app();
    let (store_id, center_id, _) = seed_supply_fixture(&state);

    let (status, _) = request(
        &app,
        "POST",
        "/api/supply-orders",
        Some(json!({
            "storeId": store_id,
            "centerId": center_id,
            "items": [{"productId": 404, "quantity": 1, "unitPrice": "100"}]
        })),
    )
    .await;
    assert_eq!(status, 404);

    let (_, listed) = request(&app, "GET", &format!("/api/supply-orders/{store_id}"), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);

    // empty items are a validation error
    let (status, _) = request(
        &app,
        "POST",
        "/api/supply-orders",
        Some(json!({"storeId": store_id, "centerId": center_id, "items": []})),
    )
    .await;
    assert_eq!(status, 400);
}
