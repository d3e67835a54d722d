pub mod health;
pub mod render;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/render/:template", post(render::handle_render))
        .route(
            "/api/v1/render/:template/preview",
            post(render::handle_preview),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
