//! Schema bootstrap for the thoughts table

use sqlx::PgPool;

use super::repos::DbError;

/// Create the thoughts table and supporting index if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS thoughts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            message TEXT NOT NULL,
            hearts INTEGER NOT NULL DEFAULT 0 CHECK (hearts >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Backs the newest-first list query
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_thoughts_created_at
        ON thoughts (created_at DESC)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
