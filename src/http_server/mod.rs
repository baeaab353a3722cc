//! # HTTP Server Module
//!
//! Axum-based HTTP surface for the action collection.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/actions/` - List and create
//! - `/api/actions/{id}/` - Read, replace, merge, delete

pub mod action_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use action_routes::{action_routes, ActionsState};
pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
