//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::repository::UserRepository;
use crate::utils::{AppError, AppResult};
use shared::models::UserPublic;

/// GET /api/users/:id - 获取用户 (响应不含密码字段)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserPublic>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("User {id}")))?;
    Ok(Json(user.public()))
}
