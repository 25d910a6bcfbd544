//! Notification API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/notifications", notification_routes())
}

fn notification_routes() -> Router<ServerState> {
    Router::new()
        .route("/{user_id}", get(handler::list_by_user))
        .route("/{id}/read", put(handler::mark_read))
}
