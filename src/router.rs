//! Route table.

use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .patch(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
