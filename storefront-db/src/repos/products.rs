//! Product repository.
//!
//! Four operations against the products table, each a single round trip
//! with no intermediate state. Mutations mark the admin products view
//! stale after the backend confirms the write.

use sqlx::{PgPool, Row};
use tracing::debug;

use storefront_core::{slugify, ViewInvalidator};

use crate::error::{StoreError, StoreResult};
use crate::models::{Category, NewProduct, Product, ProductUpdate, ProductWithCategory};

/// View key for the admin product listing, signaled by every mutation.
pub const ADMIN_PRODUCTS_VIEW: &str = "/admin/products";

pub struct ProductRepo<'a> {
    pool: &'a PgPool,
    views: &'a dyn ViewInvalidator,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool, views: &'a dyn ViewInvalidator) -> Self {
        Self { pool, views }
    }

    /// Fetch all products with their categories resolved.
    ///
    /// Order follows the primary key for stable display. An empty table
    /// yields an empty vec, not an error.
    pub async fn list(&self) -> StoreResult<Vec<ProductWithCategory>> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id, p.slug, p.title, p.price, p.max_quantity, p.hero_image,
                p.images_url, p.created_at,
                c.id AS category_id, c.name AS category_name,
                c.created_at AS category_created_at
            FROM products p
            JOIN categories c ON c.id = p.category
            ORDER BY p.id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(StoreError::Fetch)?;

        let products = rows
            .into_iter()
            .map(|r| ProductWithCategory {
                id: r.get("id"),
                slug: r.get("slug"),
                title: r.get("title"),
                price: r.get("price"),
                max_quantity: r.get("max_quantity"),
                hero_image: r.get("hero_image"),
                images_url: r.get("images_url"),
                created_at: r.get("created_at"),
                category: Category {
                    id: r.get("category_id"),
                    name: r.get("category_name"),
                    created_at: r.get("category_created_at"),
                },
            })
            .collect();

        Ok(products)
    }

    /// Insert a product, deriving its slug from the title.
    ///
    /// Slug uniqueness is constraint-enforced; a colliding title surfaces
    /// as the backend's unique-violation diagnostic wrapped in
    /// [`StoreError::Create`].
    pub async fn create(&self, input: NewProduct) -> StoreResult<Product> {
        let slug = slugify(&input.title);

        let product: Product = sqlx::query_as(
            r#"
            INSERT INTO products
                (slug, title, price, max_quantity, hero_image, images_url, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, slug, title, price, max_quantity, hero_image,
                      images_url, category, created_at
            "#,
        )
        .bind(&slug)
        .bind(&input.title)
        .bind(input.price)
        .bind(input.max_quantity)
        .bind(&input.hero_image)
        .bind(&input.images)
        .bind(input.category)
        .fetch_one(self.pool)
        .await
        .map_err(StoreError::Create)?;

        debug!("product created: {}", slug);
        self.views.invalidate(ADMIN_PRODUCTS_VIEW);
        Ok(product)
    }

    /// Replace all non-key fields of the product matching `input.slug`.
    ///
    /// Returns the affected-row count. A slug that matches nothing affects
    /// zero rows and is not an error: the backend does not report it, and
    /// this layer does not reinterpret it.
    pub async fn update(&self, input: ProductUpdate) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET title = $2, price = $3, max_quantity = $4, hero_image = $5,
                images_url = $6, category = $7
            WHERE slug = $1
            "#,
        )
        .bind(&input.slug)
        .bind(&input.title)
        .bind(input.price)
        .bind(input.max_quantity)
        .bind(&input.hero_image)
        .bind(&input.images_url)
        .bind(input.category)
        .execute(self.pool)
        .await
        .map_err(StoreError::Update)?;

        debug!("product updated: {} ({} rows)", input.slug, result.rows_affected());
        self.views.invalidate(ADMIN_PRODUCTS_VIEW);
        Ok(result.rows_affected())
    }

    /// Delete the product matching `slug`. No payload on success.
    pub async fn delete(&self, slug: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM products WHERE slug = $1")
            .bind(slug)
            .execute(self.pool)
            .await
            .map_err(StoreError::Delete)?;

        debug!("product deleted: {}", slug);
        self.views.invalidate(ADMIN_PRODUCTS_VIEW);
        Ok(())
    }
}
