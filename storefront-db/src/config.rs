//! Store configuration.

use anyhow::{Context, Result};
use tracing::debug;

/// Default maximum pool connections. Kept low; this layer serves
/// request-shaped page loads, not fan-out workers.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the catalog store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/storefront".to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    /// Build a config from the environment, failing when `DATABASE_URL` is
    /// absent instead of falling back to the local default.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
        Ok(Self {
            database_url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }
}

/// Load environment variables from a `.env` file in the current directory,
/// if one exists. Variables already set in the process are never
/// overwritten.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded .env from {}", path.display()),
        Err(_) => debug!("no .env file found, using process environment only"),
    }
}
