//! Category repository.
//!
//! Read path for the admin catalog page: every category with its owned
//! products embedded.

use sqlx::{PgPool, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::{CategoryWithProducts, Product};

pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all categories with their products embedded.
    ///
    /// One LEFT JOIN, folded in row order; categories without products keep
    /// an empty list.
    pub async fn list_with_products(&self) -> StoreResult<Vec<CategoryWithProducts>> {
        let rows = sqlx::query(
            r#"
            SELECT
                c.id, c.name, c.created_at,
                p.id AS product_id, p.slug, p.title, p.price, p.max_quantity,
                p.hero_image, p.images_url, p.category,
                p.created_at AS product_created_at
            FROM categories c
            LEFT JOIN products p ON p.category = c.id
            ORDER BY c.id, p.id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(StoreError::FetchCategories)?;

        let mut categories: Vec<CategoryWithProducts> = Vec::new();
        for row in rows {
            let id: i64 = row.get("id");
            if categories.last().map(|c| c.id) != Some(id) {
                categories.push(CategoryWithProducts {
                    id,
                    name: row.get("name"),
                    created_at: row.get("created_at"),
                    products: Vec::new(),
                });
            }

            // NULL product columns mean a childless category's join row.
            let product_id: Option<i64> = row.get("product_id");
            if let Some(product_id) = product_id {
                if let Some(category) = categories.last_mut() {
                    category.products.push(Product {
                        id: product_id,
                        slug: row.get("slug"),
                        title: row.get("title"),
                        price: row.get("price"),
                        max_quantity: row.get("max_quantity"),
                        hero_image: row.get("hero_image"),
                        images_url: row.get("images_url"),
                        category: row.get("category"),
                        created_at: row.get("product_created_at"),
                    });
                }
            }
        }

        Ok(categories)
    }
}
