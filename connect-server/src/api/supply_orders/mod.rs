//! Supply Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/supply-orders", supply_order_routes())
}

fn supply_order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{store_id}", get(handler::list_by_store))
        .route("/{id}/status", patch(handler::update_status))
}
