pub mod health;

use axum::{http::Uri, routing::get, routing::post, Router};

use crate::errors::AppError;
use crate::recommendation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/extract",
            post(handlers::handle_extract),
        )
        .fallback(not_found)
        .with_state(state)
}
