pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/recommend", post(handlers::handle_recommend))
        .route("/analyze/skills", post(handlers::handle_analyze_skills))
        .route("/analyze/careers", post(handlers::handle_analyze_careers))
        .with_state(state)
}
