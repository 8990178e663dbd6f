use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::product::Product;

/// A catalog category row. Products reference it by id; the category never
/// owns their lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A category with its products embedded, as served to the admin listing.
///
/// Read-only projection assembled by the list query; never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
}
