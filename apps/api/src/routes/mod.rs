pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::storage::handlers as history;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/v1/templates", get(generation::handle_list_templates))
        .route("/api/v1/generate/blog", post(generation::handle_generate_blog))
        .route(
            "/api/v1/generate/social",
            post(generation::handle_generate_social),
        )
        .route(
            "/api/v1/generate/social/preview",
            post(generation::handle_social_preview),
        )
        .route(
            "/api/v1/generate/social/publish",
            post(generation::handle_social_publish),
        )
        .route("/api/v1/generate/docs", post(generation::handle_generate_docs))
        .route(
            "/api/v1/generate/marketing",
            post(generation::handle_generate_marketing),
        )
        // Analysis
        .route("/api/v1/analysis/seo", post(analysis::handle_analyze_seo))
        .route(
            "/api/v1/analysis/hashtags",
            post(analysis::handle_extract_hashtags),
        )
        // History
        .route("/api/v1/content", get(history::handle_list_content))
        .route(
            "/api/v1/content/:id/status",
            patch(history::handle_update_status),
        )
        .route("/api/v1/content/:id", delete(history::handle_delete_content))
        .route("/api/v1/analytics", get(history::handle_list_analytics))
        // Auth
        .route("/api/v1/auth/sign-up", post(auth::handle_sign_up))
        .route("/api/v1/auth/sign-in", post(auth::handle_sign_in))
        .route("/api/v1/auth/sign-out", post(auth::handle_sign_out))
        .with_state(state)
}
