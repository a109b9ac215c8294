use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub currency: Option<String>,
    /// 0 through 5 when present.
    pub rating: Option<i32>,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub badge: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<MenuItem>> {
        sqlx::query_as("SELECT * FROM menu_item").fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<MenuItem>> {
        sqlx::query_as("SELECT * FROM menu_item WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field names are the persisted column names; clients depend on them as-is.
    #[test]
    fn serializes_with_persisted_column_names() {
        let item = MenuItem {
            id: 10,
            title: String::from("Nasi Goreng"),
            price: 25000.0,
            currency: Some(String::from("USD")),
            rating: Some(4),
            text: None,
            image_url: None,
            badge: None,
            category_id: Some(1),
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 10);
        assert_eq!(value["title"], "Nasi Goreng");
        assert_eq!(value["price"], 25000.0);
        assert_eq!(value["rating"], 4);
        assert_eq!(value["category_id"], 1);

        let object = value.as_object().unwrap();
        for field in [
            "id",
            "title",
            "price",
            "currency",
            "rating",
            "text",
            "image_url",
            "badge",
            "category_id",
            "created_at",
            "updated_at",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }
}
