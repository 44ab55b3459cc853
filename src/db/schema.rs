// src/db/schema.rs
// DOCUMENTATION: Schema bootstrap executed at startup
// PURPOSE: Make sure the advertisement table exists before serving requests

use sqlx::PgPool;

const CREATE_ADVERTISEMENT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS advertisement (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
        author TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_AUTHOR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_advertisement_author ON advertisement (author)";

/// Create tables and indexes if missing
/// DOCUMENTATION: Idempotent, safe to run on every boot
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_ADVERTISEMENT_TABLE)
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_AUTHOR_INDEX).execute(&mut *tx).await?;

    tx.commit().await?;

    log::info!("Database schema is up to date");
    Ok(())
}
