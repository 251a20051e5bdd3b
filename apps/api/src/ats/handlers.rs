use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::{analysis, match_job_description, scorer, MatchResult};
use crate::errors::AppError;
use crate::extract::{extract_text, resolve_format};
use crate::state::AppState;

const DEFAULT_TARGET_SCORE: u32 = 90;

#[derive(Serialize)]
pub struct UploadResponse {
    pub resume_text: String,
    pub ats_score: u32,
    pub feedback: Vec<String>,
    pub resume_length: usize,
}

/// POST /api/v1/resume/upload
///
/// Multipart upload of a `resume` file. Extracts text and runs the
/// heuristic scorer; the extracted text is returned so later calls can
/// carry it (the API is stateless).
pub async fn handle_upload(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("resume") {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let format = resolve_format(content_type.as_deref(), filename.as_deref())?;
        let resume_text = extract_text(&bytes, format)?;
        let report = scorer::analyze_resume(&resume_text);
        info!(
            "resume upload: {} bytes extracted to {} chars, score {}",
            bytes.len(),
            resume_text.len(),
            report.score
        );

        return Ok(Json(UploadResponse {
            resume_length: resume_text.len(),
            resume_text,
            ats_score: report.score,
            feedback: report.feedback,
        }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/resume/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("No resume uploaded".to_string()));
    }
    let result = match_job_description(&state.llm, &req.resume_text, &req.job_description).await;
    Ok(Json(result))
}

#[derive(Deserialize)]
pub struct EnhanceRequest {
    pub resume_text: String,
    pub target_score: Option<u32>,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub enhanced_resume: String,
}

/// POST /api/v1/resume/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("No resume uploaded".to_string()));
    }
    let target = req.target_score.unwrap_or(DEFAULT_TARGET_SCORE);
    let enhanced_resume =
        analysis::generate_enhanced_resume(&state.llm, &req.resume_text, target).await;
    Ok(Json(EnhanceResponse { enhanced_resume }))
}

#[derive(Deserialize)]
pub struct LineImprovementsRequest {
    pub resume_text: String,
}

#[derive(Serialize)]
pub struct LineImprovementsResponse {
    pub improvements: Vec<analysis::LineImprovement>,
}

/// POST /api/v1/resume/line-improvements
pub async fn handle_line_improvements(
    State(state): State<AppState>,
    Json(req): Json<LineImprovementsRequest>,
) -> Result<Json<LineImprovementsResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("No resume uploaded".to_string()));
    }
    let improvements = analysis::get_line_improvements(&state.llm, &req.resume_text).await;
    Ok(Json(LineImprovementsResponse { improvements }))
}
