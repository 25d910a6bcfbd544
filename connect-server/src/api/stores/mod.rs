//! Store API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores", store_routes())
}

fn store_routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id))
        .route("/manager/{manager_id}", get(handler::list_by_manager))
        .route("/product/{product_id}", get(handler::list_with_product))
}
