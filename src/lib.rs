//! # Watershare
//!
//! Shared water cost allocation service for multi-unit residential
//! buildings. Splits a building's metered water bill across units from
//! per-unit submeter readings, using the municipal stepped tariff table,
//! then reconciles the result against the amount actually billed.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Allocation engine, consistency guard and services
//! - **infrastructure**: Database (SeaORM), migrations, repositories
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
