//! Supply Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::store::repository::supply::SupplyCreateError;
use crate::store::repository::{NotificationRepository, StoreRepository, SupplyRepository};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_positive,
};
use crate::utils::{AppError, AppResult};
use shared::models::{
    NotificationCreate, NotificationKind, SupplyOrder, SupplyOrderCreate, SupplyOrderStatus,
    SupplyOrderStatusUpdate, SupplyOrderWithItems,
};

/// GET /api/supply-orders/:store_id - 门店补货订单 (带明细，新的在前)
pub async fn list_by_store(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<Vec<SupplyOrderWithItems>>> {
    let repo = SupplyRepository::new(state.store.clone());
    Ok(Json(repo.find_orders_by_store(store_id)))
}

/// POST /api/supply-orders - 下补货订单 (订单 + 明细一次写入)
///
/// 每行 totalPrice = 数量 x 单价，写入时计算，之后不再重算。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SupplyOrderCreate>,
) -> AppResult<(StatusCode, Json<SupplyOrderWithItems>)> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if payload.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }
    for item in &payload.items {
        validate_positive(item.quantity, "item quantity")?;
        if item.unit_price.is_sign_negative() {
            return Err(AppError::validation("item unitPrice must not be negative"));
        }
    }

    let repo = SupplyRepository::new(state.store.clone());
    let created = repo.create_order_with_items(payload).map_err(|e| match e {
        SupplyCreateError::StoreNotFound(id) => AppError::not_found(format!("Store {id}")),
        SupplyCreateError::CenterNotFound(id) => {
            AppError::not_found(format!("Purchasing center {id}"))
        }
        SupplyCreateError::ProductNotFound(id) => AppError::not_found(format!("Product {id}")),
    })?;

    tracing::info!(
        order_number = %created.order.order_number,
        store_id = created.order.store_id,
        "Supply order placed"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/supply-orders/:id/status - 补货订单状态流转
///
/// 可一并提交运单号和交货日期；每次流转通知门店经理。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SupplyOrderStatusUpdate>,
) -> AppResult<Json<SupplyOrder>> {
    let status: SupplyOrderStatus = payload
        .status
        .parse()
        .map_err(|e: String| AppError::validation(e))?;
    validate_optional_text(&payload.tracking_number, "trackingNumber", MAX_SHORT_TEXT_LEN)?;

    let repo = SupplyRepository::new(state.store.clone());
    let order = repo
        .set_order_status(id, status, payload.tracking_number, payload.delivery_date)
        .ok_or_else(|| AppError::not_found(format!("Supply order {id}")))?;

    // 通知下单门店的经理
    let stores = StoreRepository::new(state.store.clone());
    if let Some(store) = stores.find_by_id(order.store_id) {
        NotificationRepository::new(state.store.clone()).create(NotificationCreate {
            user_id: store.manager_id,
            title: "Commande fournisseur mise à jour".into(),
            message: format!(
                "La commande {} est maintenant : {}.",
                order.order_number, status
            ),
            kind: NotificationKind::Info,
        });
    }

    tracing::info!(supply_order_id = id, status = %status, "Supply order status updated");

    Ok(Json(order))
}
