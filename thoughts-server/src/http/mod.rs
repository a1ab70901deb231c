//! HTTP server layer
//!
//! Axum server with:
//! - CORS open to any origin
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, ServerConfig};
