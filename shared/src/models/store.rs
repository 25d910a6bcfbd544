//! Store Model

use serde::{Deserialize, Serialize};

/// Store entity - one physical retail location, owned by a manager user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub manager_id: i64,
    pub phone: Option<String>,
    pub is_active: bool,
}

/// Create store payload (used by seeding and tests; no public endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreate {
    pub name: String,
    pub address: String,
    pub manager_id: i64,
    pub phone: Option<String>,
}
