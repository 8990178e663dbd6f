//! storefront-db: PostgreSQL data layer for the storefront catalog
//!
//! # Design principles
//!
//! - Explicit construction: repositories borrow a `PgPool` and a
//!   `ViewInvalidator`; nothing reaches for ambient globals.
//! - All list operations resolve relations with JOINs - no N+1 queries.
//! - Consistency lives in the database: slug uniqueness and the category
//!   foreign key are constraint-enforced, not checked client-side.
//! - No local recovery: backend errors are wrapped with the failing
//!   operation's diagnostic prefix and returned to the caller as-is.

pub mod config;
pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repos;

pub use config::{load_dotenv, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use models::{
    Category, CategoryWithProducts, NewProduct, Product, ProductUpdate, ProductWithCategory,
};
pub use pool::create_pool;
pub use repos::{CategoryRepo, ProductRepo, ADMIN_PRODUCTS_VIEW};
