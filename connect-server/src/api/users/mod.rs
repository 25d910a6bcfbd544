//! User API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", user_routes())
}

fn user_routes() -> Router<ServerState> {
    Router::new().route("/{id}", get(handler::get_by_id))
}
