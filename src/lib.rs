//! Inventory API: create/list REST backend for products, services, stock and clients.

pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use entity::{Client, Entity, Product, Service, Stock};
pub use error::{AppError, ConfigError};
pub use migration::ensure_tables;
pub use response::{Acknowledgment, Listing};
pub use routes::{app_router, common_routes_with_ready, record_routes};
pub use service::RecordService;
pub use state::AppState;
pub use store::ensure_database_exists;
