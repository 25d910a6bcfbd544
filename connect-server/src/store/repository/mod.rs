//! Repository Module
//!
//! Per-entity CRUD interfaces over [`MemStore`](super::MemStore). Each
//! repository is a thin handle constructed per request in the handlers;
//! swapping the backing store for a real database only touches this module.
//!
//! Conventions:
//! - `create` assigns the next sequential id and fills optional fields
//! - `update_*` returns `None` when the target row is absent (no upsert)
//! - joined reads return `None` if any referenced entity is missing
//! - list results are sorted by id so responses are stable

// Accounts
pub mod loyalty;
pub mod user;

// Catalog
pub mod category;
pub mod product;

// Store operations
pub mod inventory;
pub mod order;
pub mod sale;
pub mod store_info;

// Messaging
pub mod notification;

// Supply chain
pub mod supply;

// Re-exports
pub use category::CategoryRepository;
pub use inventory::InventoryRepository;
pub use loyalty::LoyaltyRepository;
pub use notification::NotificationRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use sale::SaleRepository;
pub use store_info::StoreRepository;
pub use supply::SupplyRepository;
pub use user::UserRepository;
