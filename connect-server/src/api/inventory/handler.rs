//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::store::repository::inventory::QuantityError;
use crate::store::repository::{InventoryRepository, ProductRepository, StoreRepository};
use crate::utils::validation::validate_quantity;
use crate::utils::{AppError, AppResult};
use shared::models::{InventoryItem, InventoryItemCreate, InventoryQuantityUpdate, InventoryWithProduct};

/// GET /api/inventory/:store_id - 门店库存 (带商品详情)
pub async fn list_by_store(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<Vec<InventoryWithProduct>>> {
    let repo = InventoryRepository::new(state.store.clone());
    Ok(Json(repo.find_by_store_with_products(store_id)))
}

/// POST /api/inventory - 为 (商品, 门店) 建立库存行
///
/// 同一组合已有库存行时返回 409。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    validate_quantity(payload.quantity, "quantity")?;
    if let Some(min_stock) = payload.min_stock {
        validate_quantity(min_stock, "minStock")?;
    }

    let products = ProductRepository::new(state.store.clone());
    if products.find_by_id(payload.product_id).is_none() {
        return Err(AppError::not_found(format!(
            "Product {}",
            payload.product_id
        )));
    }
    let stores = StoreRepository::new(state.store.clone());
    if stores.find_by_id(payload.store_id).is_none() {
        return Err(AppError::not_found(format!("Store {}", payload.store_id)));
    }

    let repo = InventoryRepository::new(state.store.clone());
    let product_id = payload.product_id;
    let store_id = payload.store_id;
    let item = repo.create(payload).ok_or_else(|| {
        AppError::conflict(format!(
            "Inventory row for product {product_id} in store {store_id} already exists"
        ))
    })?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/inventory/:product_id/:store_id - 设置库存数量
///
/// 不做 upsert：组合没有库存行时返回 404，什么都不创建。
/// 带 expectedVersion 时做乐观并发检查，过期版本返回 409。
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path((product_id, store_id)): Path<(i64, i64)>,
    Json(payload): Json<InventoryQuantityUpdate>,
) -> AppResult<Json<InventoryItem>> {
    validate_quantity(payload.quantity, "quantity")?;

    let repo = InventoryRepository::new(state.store.clone());
    let item = repo
        .set_quantity(
            product_id,
            store_id,
            payload.quantity,
            payload.expected_version,
        )
        .map_err(|e| match e {
            QuantityError::NotFound => AppError::not_found(format!(
                "Inventory for product {product_id} in store {store_id}"
            )),
            QuantityError::StaleVersion { expected, current } => AppError::conflict(format!(
                "Stale inventory version: expected {expected}, current {current}"
            )),
        })?;
    Ok(Json(item))
}
