pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as resume;
use crate::cover_letter::handlers as cover_letter;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/upload", post(resume::handle_upload))
        .route("/api/v1/resume/match", post(resume::handle_match))
        .route("/api/v1/resume/enhance", post(resume::handle_enhance))
        .route(
            "/api/v1/resume/line-improvements",
            post(resume::handle_line_improvements),
        )
        // Cover letter API
        .route("/api/v1/cover-letter", post(cover_letter::handle_generate))
        .route(
            "/api/v1/cover-letter/versions",
            post(cover_letter::handle_versions),
        )
        .route(
            "/api/v1/cover-letter/industry",
            post(cover_letter::handle_industry),
        )
        // Job search API
        .route("/api/v1/jobs/search", post(jobs::handle_search))
        .route("/api/v1/jobs/trends", get(jobs::handle_trends))
        .with_state(state)
}
