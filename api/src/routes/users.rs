use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::parse_id;
use crate::AppState;
use crate::error::AppError;
use crate::models::users::User;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("User"))?;
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    Ok(Json(user))
}
