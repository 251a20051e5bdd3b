use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::{job_trends, search_jobs, JobPosting, JobTrends};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobSearchRequest {
    pub job_title: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation("Job title is required".to_string()));
    }
    let jobs = search_jobs(&state.http, &state.providers, &req.job_title, &req.location).await;
    Ok(Json(JobSearchResponse { jobs }))
}

/// GET /api/v1/jobs/trends
pub async fn handle_trends() -> Json<JobTrends> {
    Json(job_trends())
}
