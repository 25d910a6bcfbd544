//! 统一错误处理
//!
//! 提供应用级错误类型和 HTTP 映射：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResult`] - handler 层 Result 别名
//!
//! # 状态码映射
//!
//! | 变体 | 状态码 |
//! |------|--------|
//! | Validation | 400 |
//! | Unauthorized | 401 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Internal | 500 |
//!
//! 存储层的 "not found" 一律以 `Option::None` 上抛，由 handler 转成 404。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 错误响应体
///
/// ```json
/// { "error": "Product 42 not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Authentication failed: {0}")]
    /// 认证失败 (401)
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// 资源冲突 / 版本过期 (409)
    Conflict(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("{msg} not found")),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error; the resource name is completed with
    /// "not found" in the response body
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an invalid credentials error with unified message
    /// Used to prevent email enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Email ou mot de passe incorrect".to_string())
    }
}

/// Application-level Result type used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
