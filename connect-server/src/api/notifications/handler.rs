//! Notification API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::repository::NotificationRepository;
use crate::utils::{AppError, AppResult};
use shared::models::Notification;

/// GET /api/notifications/:user_id - 用户通知，新的在前
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<Notification>>> {
    let repo = NotificationRepository::new(state.store.clone());
    Ok(Json(repo.find_by_user(user_id)))
}

/// PUT /api/notifications/:id/read - 标记已读
pub async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Notification>> {
    let repo = NotificationRepository::new(state.store.clone());
    let notification = repo
        .mark_read(id)
        .ok_or_else(|| AppError::not_found(format!("Notification {id}")))?;
    Ok(Json(notification))
}
