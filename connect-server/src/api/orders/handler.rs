//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::core::ServerState;
use crate::store::repository::order::OrderCreateError;
use crate::store::repository::{LoyaltyRepository, NotificationRepository, OrderRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NOTE_LEN, validate_optional_text, validate_positive,
};
use crate::utils::{AppError, AppResult};
use shared::models::{
    NotificationCreate, NotificationKind, Order, OrderCreate, OrderFull, OrderStatus, OrderType,
};

/// Order total spent per loyalty point earned on delivery (1 point / 100 FCFA)
const LOYALTY_EARN_DIVISOR: i64 = 100;

/// Query params for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub store_id: Option<i64>,
    pub customer_id: Option<i64>,
}

/// Status transition payload
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// GET /api/orders?storeId=&customerId= - 订单列表 (可过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(repo.find_all(query.store_id, query.customer_id)))
}

/// GET /api/orders/:id - 订单详情 (含顾客、门店、明细及商品)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderFull>> {
    let repo = OrderRepository::new(state.store.clone());
    let order = repo
        .find_full(id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order))
}

/// POST /api/orders - 下单 (订单 + 明细一次写入)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.delivery_address, "deliveryAddress", MAX_ADDRESS_LEN)?;
    if payload.total_amount.is_sign_negative() {
        return Err(AppError::validation("totalAmount must not be negative"));
    }
    for item in &payload.items {
        validate_positive(item.quantity, "item quantity")?;
        if item.unit_price.is_sign_negative() {
            return Err(AppError::validation("item unitPrice must not be negative"));
        }
    }
    // 配送单必须带地址
    if payload.order_type == OrderType::Delivery
        && payload
            .delivery_address
            .as_deref()
            .is_none_or(|a| a.trim().is_empty())
    {
        return Err(AppError::validation(
            "deliveryAddress is required for delivery orders",
        ));
    }

    let repo = OrderRepository::new(state.store.clone());
    let order = repo.create_with_items(payload).map_err(|e| match e {
        OrderCreateError::CustomerNotFound(id) => AppError::not_found(format!("Customer {id}")),
        OrderCreateError::StoreNotFound(id) => AppError::not_found(format!("Store {id}")),
        OrderCreateError::ProductNotFound(id) => AppError::not_found(format!("Product {id}")),
    })?;

    tracing::info!(order_id = order.id, store_id = order.store_id, "Order placed");

    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /api/orders/:id/status - 订单状态流转
///
/// delivered 时一次性写入 deliveredAt、按订单金额发放积分并通知顾客。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|e: String| AppError::validation(e))?;

    let repo = OrderRepository::new(state.store.clone());
    let previous = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;

    let order = repo
        .set_status(id, status)
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;

    // 只在首次进入 delivered 时发积分/通知，重复提交不再触发
    if status == OrderStatus::Delivered && previous.status != OrderStatus::Delivered {
        let earned = (order.total_amount / Decimal::from(LOYALTY_EARN_DIVISOR))
            .floor()
            .to_i64()
            .unwrap_or(0);
        if earned > 0 {
            LoyaltyRepository::new(state.store.clone()).add_points(order.customer_id, earned);
        }

        NotificationRepository::new(state.store.clone()).create(NotificationCreate {
            user_id: order.customer_id,
            title: "Commande livrée".into(),
            message: format!(
                "Votre commande n°{} a été livrée. Vous gagnez {} points de fidélité.",
                order.id, earned
            ),
            kind: NotificationKind::Success,
        });
    }

    tracing::info!(order_id = id, status = %status, "Order status updated");

    Ok(Json(order))
}
