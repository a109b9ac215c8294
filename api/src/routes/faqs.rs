use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::AppState;
use crate::error::AppError;
use crate::models::faqs::{self, FaqCategory};

pub fn faq_routes() -> Router<AppState> {
    Router::new().route("/faqs", get(list_faqs))
}

async fn list_faqs(State(state): State<AppState>) -> Result<Json<Vec<FaqCategory>>, AppError> {
    let grouped = faqs::list_grouped(&state.db).await?;
    Ok(Json(grouped))
}
