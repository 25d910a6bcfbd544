//! Loyalty API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::repository::LoyaltyRepository;
use crate::utils::{AppError, AppResult};
use shared::models::LoyaltyPoints;

/// GET /api/loyalty/:customer_id - 积分账户
pub async fn get_by_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<i64>,
) -> AppResult<Json<LoyaltyPoints>> {
    let repo = LoyaltyRepository::new(state.store.clone());
    let account = repo
        .find_by_customer(customer_id)
        .ok_or_else(|| AppError::not_found(format!("Loyalty account for customer {customer_id}")))?;
    Ok(Json(account))
}
