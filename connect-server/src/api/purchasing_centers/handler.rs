//! Purchasing Center API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::repository::SupplyRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{CenterProductWithProduct, PurchasingCenter};

/// GET /api/purchasing-centers - 所有在营采购中心
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PurchasingCenter>>> {
    let repo = SupplyRepository::new(state.store.clone());
    Ok(Json(repo.find_centers()))
}

/// GET /api/center-products/:center_id - 某中心的商品报价 (带商品详情)
pub async fn list_offers(
    State(state): State<ServerState>,
    Path(center_id): Path<i64>,
) -> AppResult<Json<Vec<CenterProductWithProduct>>> {
    let repo = SupplyRepository::new(state.store.clone());
    if repo.find_center(center_id).is_none() {
        return Err(AppError::not_found(format!("Purchasing center {center_id}")));
    }
    Ok(Json(repo.find_center_offers(center_id)))
}
