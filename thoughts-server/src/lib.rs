//! thoughts-server: HTTP API for short text posts ("thoughts")
//!
//! Single-resource CRUD over PostgreSQL: list recent, get by id, create,
//! like, update, and delete, with validation before persistence.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, ServerConfig};
