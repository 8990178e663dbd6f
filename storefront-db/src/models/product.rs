use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// A product row.
///
/// `slug` is derived from the title once, at creation, and is the stable
/// external key for update and delete. `id` stays internal to the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub max_quantity: i32,
    pub hero_image: String,
    pub images_url: Vec<String>,
    pub category: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a product. No slug here: the repository derives it
/// from `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub max_quantity: i32,
    pub hero_image: String,
    pub images: Vec<String>,
    pub category: i64,
}

/// Full replacement field set for an update, matched by `slug`.
///
/// The slug is the predicate, never a target: an update does not re-derive
/// it from the new title.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub max_quantity: i32,
    pub hero_image: String,
    pub images_url: Vec<String>,
    pub category: i64,
}

/// A product with its category resolved, as returned by the list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithCategory {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub max_quantity: i32,
    pub hero_image: String,
    pub images_url: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn product_with_category_embeds_category_object() {
        let now = Utc::now();
        let projection = ProductWithCategory {
            id: 1,
            slug: "red-running-shoes".to_string(),
            title: "Red Running Shoes".to_string(),
            price: 89.5,
            max_quantity: 12,
            hero_image: "https://cdn.example.com/shoes.png".to_string(),
            images_url: vec!["https://cdn.example.com/shoes-side.png".to_string()],
            created_at: now,
            category: Category {
                id: 3,
                name: "Footwear".to_string(),
                created_at: now,
            },
        };

        let value = serde_json::to_value(&projection).expect("serialization failed");
        assert_eq!(value["slug"], "red-running-shoes");
        assert_eq!(value["category"]["id"], 3);
        assert_eq!(value["category"]["name"], "Footwear");
    }
}
