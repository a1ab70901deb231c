//! Database layer - connection pool, schema bootstrap, and repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
