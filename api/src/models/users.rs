use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<User>> {
        sqlx::query_as(r#"SELECT * FROM "user""#).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<User>> {
        sqlx::query_as(r#"SELECT * FROM "user" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
