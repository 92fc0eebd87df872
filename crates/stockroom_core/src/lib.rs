//! Core domain logic for Stockroom.
//! This crate owns the product records and their persistence.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{Product, ProductId};
pub use repo::product_repo::{
    JsonFileProductRepository, ProductRepository, RepoError, RepoResult,
};
pub use service::inventory_service::{InventoryService, StockDirection};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
