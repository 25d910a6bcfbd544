//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::store::repository::ProductRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// Query params for listing products
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_id: Option<i64>,
}

/// GET /api/products?categoryId= - 获取商品 (可按分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.store.clone());
    Ok(Json(repo.find_all(query.category_id)))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.store.clone());
    let product = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    if payload.price.is_sign_negative() {
        return Err(AppError::validation("price must not be negative"));
    }

    let repo = ProductRepository::new(state.store.clone());
    let product = repo.create(payload);
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id - 更新商品 (只合并提交的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    if payload.price.is_some_and(|p| p.is_sign_negative()) {
        return Err(AppError::validation("price must not be negative"));
    }

    let repo = ProductRepository::new(state.store.clone());
    let product = repo
        .update(id, payload)
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}
