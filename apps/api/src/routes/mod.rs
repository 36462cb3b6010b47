pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form front end
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_form_submit),
        )
        // JSON API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
