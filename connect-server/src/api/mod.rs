//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录 / 注册
//! - [`users`] - 用户查询
//! - [`stores`] - 门店查询
//! - [`categories`] - 分类
//! - [`products`] - 商品
//! - [`inventory`] - 库存
//! - [`orders`] - 顾客订单
//! - [`sales`] - 门店现场销售
//! - [`analytics`] - 经营看板
//! - [`loyalty`] - 积分账户
//! - [`notifications`] - 站内通知
//! - [`purchasing_centers`] - 采购中心及其报价
//! - [`supply_orders`] - 补货订单

pub mod analytics;
pub mod auth;
pub mod categories;
pub mod health;
pub mod inventory;
pub mod loyalty;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod purchasing_centers;
pub mod sales;
pub mod stores;
pub mod supply_orders;
pub mod users;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        // Catalog APIs
        .merge(stores::router())
        .merge(categories::router())
        .merge(products::router())
        // Store operation APIs
        .merge(inventory::router())
        .merge(orders::router())
        .merge(sales::router())
        .merge(analytics::router())
        // Customer engagement APIs
        .merge(loyalty::router())
        .merge(notifications::router())
        // Supply chain APIs
        .merge(purchasing_centers::router())
        .merge(supply_orders::router())
}

/// Build the fully-layered application for serving
pub fn app(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // SPA 前端跨域访问
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
