//! # Forecourt Management Service
//!
//! Backend service for a petrol-station management business: stations,
//! pumps, staff, fuel sales and inventory over a REST API, with a pure
//! sales-aggregation engine feeding the dashboard.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the reporting engine, repository traits
//! - **application**: Services composing repositories and domain logic
//! - **infrastructure**: External concerns (database, persistence)
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use api::create_api_router;
