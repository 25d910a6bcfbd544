//! Auth API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", auth_routes())
}

fn auth_routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register))
}
