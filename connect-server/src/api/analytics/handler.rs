//! Analytics API Handlers
//!
//! The dashboard is computed on demand from the live maps, never stored.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use shared::models::{DashboardStats, OrderStatus};

use crate::core::ServerState;
use crate::store::repository::{InventoryRepository, OrderRepository, SaleRepository, StoreRepository};
use crate::utils::time;
use crate::utils::{AppError, AppResult};

/// Customer accounts are global, not per store; a real per-store count has
/// never existed, so the dashboard ships a fixed placeholder.
const TOTAL_CUSTOMERS_PLACEHOLDER: i64 = 156;

/// GET /api/analytics/dashboard/:store_id - 经营看板
///
/// 今日营收按业务时区的当地零点为界。
pub async fn dashboard(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<DashboardStats>> {
    let stores = StoreRepository::new(state.store.clone());
    if stores.find_by_id(store_id).is_none() {
        return Err(AppError::not_found(format!("Store {store_id}")));
    }

    let (day_start, day_end) = time::today_bounds(state.config.business_timezone);
    let sales = SaleRepository::new(state.store.clone());
    let today_revenue: Decimal = sales
        .find_by_store(store_id, day_start, day_end)
        .iter()
        .map(|s| s.total_amount)
        .sum();

    let orders = OrderRepository::new(state.store.clone()).find_all(Some(store_id), None);
    let total_orders = orders.len() as i64;
    let active_orders = orders
        .iter()
        .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Preparing))
        .count() as i64;

    let low_stock_items = InventoryRepository::new(state.store.clone()).find_low_stock(store_id);

    Ok(Json(DashboardStats {
        today_revenue,
        total_orders,
        active_orders,
        low_stock_count: low_stock_items.len() as i64,
        low_stock_items,
        total_customers: TOTAL_CUSTOMERS_PLACEHOLDER,
    }))
}
