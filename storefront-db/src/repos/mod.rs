//! Repository implementations for catalog access
//!
//! Shared patterns:
//! - List operations resolve relations with JOINs (no N+1)
//! - Mutations signal the view invalidator only after the backend confirms
//! - Conflicts surface as backend errors; there is no check-then-insert

pub mod categories;
pub mod products;

pub use categories::CategoryRepo;
pub use products::{ProductRepo, ADMIN_PRODUCTS_VIEW};
