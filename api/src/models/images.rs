use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: i32,
    pub image_url: String,
    /// Single-character orientation code, e.g. "l" or "p".
    pub orientation: Option<String>,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Image {
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Image>> {
        sqlx::query_as("SELECT * FROM image").fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<Image>> {
        sqlx::query_as("SELECT * FROM image WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
