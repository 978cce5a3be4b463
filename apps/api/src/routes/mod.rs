pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(handlers::handle_parse_resume),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
