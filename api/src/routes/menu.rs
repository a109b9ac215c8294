use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use super::parse_id;
use crate::AppState;
use crate::error::AppError;
use crate::models::menu_categories::MenuCategory;
use crate::models::menu_items::MenuItem;

pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu-categories", get(list_categories))
        .route("/menu-categories/{id}", get(get_category))
        .route("/menu-items", get(list_items))
        .route("/menu-items/{id}", get(get_item))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuCategory>>, AppError> {
    let categories = MenuCategory::list(&state.db).await?;
    Ok(Json(categories))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuCategory>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Menu category"))?;
    let category = MenuCategory::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Menu category"))?;
    Ok(Json(category))
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = MenuItem::list(&state.db).await?;
    Ok(Json(items))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound("Menu item"))?;
    let item = MenuItem::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Menu item"))?;
    Ok(Json(item))
}
