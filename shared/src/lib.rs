//! Shared types for Njaboot Connect
//!
//! Wire models exchanged between the server and its clients: entities,
//! create/update payloads, and the denormalized read views the API returns.
//! All JSON is camelCase to match the storefront field names.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse};
