//! Authentication Handlers
//!
//! Handles login and registration. There are no sessions or tokens: the
//! storefront keeps the returned user client-side. The credential check is
//! a demo placeholder (see DESIGN.md).

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::store::repository::{LoyaltyRepository, UserRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

use shared::client::{LoginRequest, LoginResponse};
use shared::models::{UserCreate, UserPublic, UserRole};

/// Placeholder credential: the only password the demo accepts. The stored
/// password is never consulted. No security value whatsoever; real
/// credential verification is deliberately out of scope.
const PLACEHOLDER_PASSWORD: &str = "password123";

/// Fixed delay for authentication to prevent email enumeration via timing
const AUTH_FIXED_DELAY_MS: u64 = 200;

/// POST /api/auth/login - 登录
///
/// Both unknown email and wrong password return the same generic 401.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo.find_by_email(&req.email);

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = user.ok_or_else(AppError::invalid_credentials)?;

    if req.password != PLACEHOLDER_PASSWORD {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    Ok(Json(LoginResponse {
        user: user.public(),
    }))
}

/// POST /api/auth/register - 注册
///
/// Duplicate emails are rejected with 400; a fresh customer account gets a
/// zero-point loyalty row.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<UserPublic>)> {
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&payload.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "lastName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    let repo = UserRepository::new(state.store.clone());
    if repo.find_by_email(&payload.email).is_some() {
        return Err(AppError::validation(format!(
            "Email {} is already registered",
            payload.email
        )));
    }

    let role = payload.role;
    let user = repo.create(payload);

    if role == UserRole::Customer {
        LoyaltyRepository::new(state.store.clone()).add_points(user.id, 0);
    }

    tracing::info!(user_id = user.id, role = ?role, "User registered");

    Ok((StatusCode::CREATED, Json(user.public())))
}
