use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub name: String,
    /// 1 through 5.
    pub rating: i32,
    pub image: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Review>> {
        sqlx::query_as("SELECT * FROM review").fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<Review>> {
        sqlx::query_as("SELECT * FROM review WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
