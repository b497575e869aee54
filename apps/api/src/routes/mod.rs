pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor_handlers;
use crate::news::handlers as news_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/skill-gap", post(advisor_handlers::handle_skill_gap))
        .route("/api/roadmap", post(advisor_handlers::handle_roadmap))
        .route("/api/news", get(news_handlers::handle_news))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP-surface tests: real router on an ephemeral port, upstream feed mocked.
// ────────────────────────────────────────────────────────────────────────────
