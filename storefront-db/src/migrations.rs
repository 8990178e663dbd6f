//! Schema migrations for the catalog tables.
//!
//! Idempotent DDL, executed in order at startup. The constraints carry the
//! consistency rules: slug uniqueness and the category foreign key are
//! enforced here, not in repository code.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create categories table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            max_quantity INTEGER NOT NULL,
            hero_image TEXT NOT NULL,
            images_url TEXT[] NOT NULL DEFAULT '{}',
            category BIGINT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create products table")?;

    info!("catalog migrations complete");
    Ok(())
}
