//! Loyalty API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/loyalty", loyalty_routes())
}

fn loyalty_routes() -> Router<ServerState> {
    Router::new().route("/{customer_id}", get(handler::get_by_customer))
}
