use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::parse_id;
use crate::AppState;
use crate::error::AppError;
use crate::models::images::Image;

pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(list_images))
        .route("/images/{id}", get(get_image))
}

async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<Image>>, AppError> {
    let images = Image::list(&state.db).await?;
    Ok(Json(images))
}

async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Image>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Image"))?;
    let image = Image::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Image"))?;
    Ok(Json(image))
}
