//! Purchasing Center API 模块
//!
//! 采购中心目录及各中心的商品报价。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/purchasing-centers", get(handler::list))
        .route("/api/center-products/{center_id}", get(handler::list_offers))
}
