//! Auth request/response DTOs shared by server and client

use serde::{Deserialize, Serialize};

use crate::models::UserPublic;

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response - the authenticated user, password stripped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserPublic,
}
