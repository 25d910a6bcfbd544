//! Category API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::store::repository::CategoryRepository;
use crate::utils::AppResult;
use shared::models::Category;

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.store.clone());
    Ok(Json(repo.find_all()))
}
