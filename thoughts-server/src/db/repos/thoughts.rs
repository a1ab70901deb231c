//! Thought repository
//!
//! Every operation is a single SQL statement; mutations use RETURNING so
//! the handler never issues a second read.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::ThoughtMessage;

/// Thought record from database
#[derive(Debug, Clone, FromRow)]
pub struct Thought {
    pub id: Uuid,
    pub message: String,
    pub hearts: i32,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Thought repository
pub struct ThoughtRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ThoughtRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the newest thoughts, at most `limit`.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Thought>, DbError> {
        let thoughts = sqlx::query_as(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(thoughts)
    }

    /// Get a single thought by id.
    pub async fn get(&self, id: Uuid) -> Result<Thought, DbError> {
        let thought: Option<Thought> = sqlx::query_as(
            r#"
            SELECT id, message, hearts, created_at
            FROM thoughts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        thought.ok_or_else(|| DbError::NotFound {
            resource: "Thought",
            id: id.to_string(),
        })
    }

    /// Insert a new thought with zero hearts; id and timestamp come from
    /// the database.
    pub async fn create(&self, message: ThoughtMessage) -> Result<Thought, DbError> {
        let thought = sqlx::query_as(
            r#"
            INSERT INTO thoughts (message)
            VALUES ($1)
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(message.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(thought)
    }

    /// Increment hearts by one and return the updated record.
    ///
    /// The increment is a single atomic read-modify-write in the database,
    /// so concurrent likes on the same id never lose updates.
    pub async fn like(&self, id: Uuid) -> Result<Thought, DbError> {
        let thought: Option<Thought> = sqlx::query_as(
            r#"
            UPDATE thoughts
            SET hearts = hearts + 1
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        thought.ok_or_else(|| DbError::NotFound {
            resource: "Thought",
            id: id.to_string(),
        })
    }

    /// Replace the message, leaving hearts and created_at untouched.
    pub async fn update_message(
        &self,
        id: Uuid,
        message: ThoughtMessage,
    ) -> Result<Thought, DbError> {
        let thought: Option<Thought> = sqlx::query_as(
            r#"
            UPDATE thoughts
            SET message = $2
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .bind(message.as_str())
        .fetch_optional(self.pool)
        .await?;

        thought.ok_or_else(|| DbError::NotFound {
            resource: "Thought",
            id: id.to_string(),
        })
    }

    /// Delete a thought, returning its prior state.
    pub async fn delete(&self, id: Uuid) -> Result<Thought, DbError> {
        let thought: Option<Thought> = sqlx::query_as(
            r#"
            DELETE FROM thoughts
            WHERE id = $1
            RETURNING id, message, hearts, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        thought.ok_or_else(|| DbError::NotFound {
            resource: "Thought",
            id: id.to_string(),
        })
    }
}
