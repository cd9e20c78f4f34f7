pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scores/view", post(handlers::handle_view))
        .route("/api/v1/scores/compare", post(handlers::handle_compare))
        .route("/api/v1/scores/trend", post(handlers::handle_trend))
        .with_state(state)
}
