//! Store API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::repository::StoreRepository;
use crate::utils::{AppError, AppResult};
use shared::models::Store;

/// GET /api/stores/:id - 获取单个门店
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Store>> {
    let repo = StoreRepository::new(state.store.clone());
    let store = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Store {id}")))?;
    Ok(Json(store))
}

/// GET /api/stores/manager/:manager_id - 某经理名下的门店
pub async fn list_by_manager(
    State(state): State<ServerState>,
    Path(manager_id): Path<i64>,
) -> AppResult<Json<Vec<Store>>> {
    let repo = StoreRepository::new(state.store.clone());
    Ok(Json(repo.find_by_manager(manager_id)))
}

/// GET /api/stores/product/:product_id - 有该商品库存的门店
/// (商品详情页 "哪里能买到")
pub async fn list_with_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<Store>>> {
    let repo = StoreRepository::new(state.store.clone());
    Ok(Json(repo.find_with_product(product_id)))
}
