use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::parse_id;
use crate::AppState;
use crate::error::AppError;
use crate::models::reviews::Review;

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list_reviews))
        .route("/reviews/{id}", get(get_review))
}

async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = Review::list(&state.db).await?;
    Ok(Json(reviews))
}

async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Review"))?;
    let review = Review::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Review"))?;
    Ok(Json(review))
}
