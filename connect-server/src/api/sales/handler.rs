//! Sale API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::store::repository::SaleRepository;
use crate::utils::time;
use crate::utils::validation::validate_positive;
use crate::utils::{AppError, AppResult};
use shared::models::{Sale, SaleCreate};

/// Query params for the sales report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/sales/:store_id?startDate=&endDate= - 门店销售记录
///
/// 日期为 YYYY-MM-DD，闭区间，按业务时区换算成当地零点边界。
pub async fn list_by_store(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let tz = state.config.business_timezone;
    let start = query
        .start_date
        .as_deref()
        .map(time::parse_date)
        .transpose()?;
    let end = query.end_date.as_deref().map(time::parse_date).transpose()?;
    let (from, to) = time::range_bounds(start, end, tz);

    let repo = SaleRepository::new(state.store.clone());
    Ok(Json(repo.find_by_store(store_id, from, to)))
}

/// POST /api/sales - 记录一笔现场销售
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    if payload.total_amount.is_sign_negative() {
        return Err(AppError::validation("totalAmount must not be negative"));
    }
    for item in &payload.items {
        validate_positive(item.quantity, "item quantity")?;
    }

    let repo = SaleRepository::new(state.store.clone());
    let sale = repo.create(payload);

    tracing::info!(sale_id = sale.id, store_id = sale.store_id, "Sale recorded");

    Ok((StatusCode::CREATED, Json(sale)))
}
