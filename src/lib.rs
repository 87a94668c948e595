//! sonargreet: a single-endpoint greeting service.
//!
//! - [`routes`] - the router and the `GET /api/sonarqube` handler
//! - [`middleware`] - request ID and request span
//! - [`http`] - server startup and graceful shutdown
//! - [`config`] - TOML configuration and constants

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
