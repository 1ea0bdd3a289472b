//! HTTP REST API interfaces
//!
//! - `common`: Response envelope and error mapping
//! - `modules`: One module per resource (dto + handlers)
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, AppState};
