use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::Connection;

use crate::AppState;

pub fn diagnostic_routes() -> Router<AppState> {
    Router::new().route("/test-db", get(test_db))
}

#[derive(Serialize)]
struct ProbeSuccess {
    message: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct ProbeFailure {
    message: &'static str,
    error: String,
    status: &'static str,
}

#[tracing::instrument(skip_all)]
async fn test_db(State(state): State<AppState>) -> Response {
    match probe(&state).await {
        Ok(()) => Json(ProbeSuccess {
            message: "Database connection successful",
            status: "connected",
        })
        .into_response(),
        Err(err) => {
            tracing::error!("database probe failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProbeFailure {
                    message: "Unable to connect to database",
                    error: err.to_string(),
                    status: "disconnected",
                }),
            )
                .into_response()
        }
    }
}

// Touches no table; only acquires a connection and pings it.
async fn probe(state: &AppState) -> sqlx::Result<()> {
    let mut conn = state.db.acquire().await?;
    conn.ping().await
}
