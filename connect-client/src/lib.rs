//! Connect Client - HTTP client for the Njaboot Connect server
//!
//! Thin typed wrappers over the REST API: one method per endpoint, no
//! caching or retry logic.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models;
