//! Inventory API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", inventory_routes())
}

fn inventory_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{store_id}", get(handler::list_by_store))
        .route("/{product_id}/{store_id}", put(handler::set_quantity))
}
