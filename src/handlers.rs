//! Route handlers: map HTTP requests onto the five store operations
//! and store results onto status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::config::AppState;
use crate::error::{Error, Result};
use crate::models::{Item, ItemDraft, ItemPatch};

/// Fixed wire body for missing items. The store reports "no row
/// matched" as `None`; only here does it become this literal.
const NOT_FOUND_BODY: &str = "not found";

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(NOT_FOUND_BODY)).into_response()
}

/// GET / - API info page
pub async fn landing() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    info!("GET /items");
    let items = state.store.list_all().await?;
    Ok(Json(items))
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<ItemDraft>,
) -> Result<(StatusCode, Json<Item>)> {
    info!("POST /items - {:?}", draft.title);

    if draft.title.trim().is_empty() {
        return Err(Error::BadRequest("title must not be empty".to_string()));
    }

    let created = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /items/{id}
pub async fn get_item(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    info!("GET /items/{id}");

    match state.store.get_by_id(id).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(not_found()),
    }
}

/// PATCH /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ItemPatch>,
) -> Result<Response> {
    info!("PATCH /items/{id}");

    match state.store.update_by_id(id, &patch).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(not_found()),
    }
}

/// DELETE /items/{id}
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    info!("DELETE /items/{id}");

    match state.store.delete_by_id(id).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(not_found()),
    }
}
