//! Error taxonomy for catalog operations.
//!
//! One variant per operation, each a thin wrapper keeping the backend's
//! diagnostic verbatim behind a fixed caller-facing prefix. No recovery or
//! retry happens at this layer.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error fetching products with categories: {0}")]
    Fetch(#[source] sqlx::Error),

    #[error("Error creating product: {0}")]
    Create(#[source] sqlx::Error),

    #[error("Error updating product: {0}")]
    Update(#[source] sqlx::Error),

    #[error("Error deleting product: {0}")]
    Delete(#[source] sqlx::Error),

    #[error("Error fetching categories with products: {0}")]
    FetchCategories(#[source] sqlx::Error),
}
