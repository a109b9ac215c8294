use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuCategory {
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<MenuCategory>> {
        sqlx::query_as("SELECT * FROM menu_category")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<MenuCategory>> {
        sqlx::query_as("SELECT * FROM menu_category WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
