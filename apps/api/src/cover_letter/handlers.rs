use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::cover_letter::{customize_for_industry, generate, generate_multiple_versions, ToneVersion};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
    pub company_name: String,
    pub position: String,
    pub tone: Option<String>,
}

impl CoverLetterRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation("No resume uploaded".to_string()));
        }
        if self.company_name.trim().is_empty()
            || self.position.trim().is_empty()
            || self.job_description.trim().is_empty()
        {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/cover-letter
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    req.validate()?;
    let tone = req.tone.as_deref().unwrap_or("professional");
    let cover_letter = generate(
        &state.llm,
        &req.resume_text,
        &req.job_description,
        &req.company_name,
        &req.position,
        tone,
    )
    .await;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

#[derive(Serialize)]
pub struct VersionsResponse {
    pub versions: Vec<ToneVersion>,
}

/// POST /api/v1/cover-letter/versions
pub async fn handle_versions(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<VersionsResponse>, AppError> {
    req.validate()?;
    let versions = generate_multiple_versions(
        &state.llm,
        &req.resume_text,
        &req.job_description,
        &req.company_name,
        &req.position,
    )
    .await;
    Ok(Json(VersionsResponse { versions }))
}

#[derive(Deserialize)]
pub struct IndustryRequest {
    pub cover_letter: String,
    pub industry: String,
}

/// POST /api/v1/cover-letter/industry
pub async fn handle_industry(
    State(state): State<AppState>,
    Json(req): Json<IndustryRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if req.cover_letter.trim().is_empty() || req.industry.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }
    let cover_letter =
        customize_for_industry(&state.llm, &req.cover_letter, &req.industry).await;
    Ok(Json(CoverLetterResponse { cover_letter }))
}
