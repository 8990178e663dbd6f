//! Database connection pool construction.
//!
//! Repositories borrow the pool; connection concurrency and reuse are the
//! pool's business, not theirs.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{StoreConfig, DEFAULT_MAX_CONNECTIONS};

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns the backend's error if the initial connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a pool with an explicit connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create a pool from a [`StoreConfig`].
pub async fn create_pool_from_config(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&config.database_url, config.max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database:
    // DATABASE_URL=postgres://... cargo test -p storefront-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_from_config_round_trips_a_query() {
        let config = StoreConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool_from_config(&config)
            .await
            .expect("pool creation failed");

        let row: (i64,) = sqlx::query_as("SELECT 21 * 2")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(row.0, 42);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_serves_independent_tasks() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 3)
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let row: (i32,) = sqlx::query_as("SELECT $1::int + 1")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    row.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.expect("task panicked"), i as i32 + 1);
        }
    }
}
