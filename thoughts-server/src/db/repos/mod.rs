//! Repository implementations for database access
//!
//! Each operation issues exactly one SQL statement; not-found is detected
//! via fetch_optional, never a separate existence check.

pub mod thoughts;

pub use thoughts::{DbError, Thought, ThoughtRepo};
