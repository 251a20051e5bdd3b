//! ATS analysis: heuristic scoring, resume-vs-JD matching, and LLM-backed
//! narrative feedback.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod scorer;
pub mod similarity;

use serde::Serialize;

use crate::llm_client::LlmClient;
use similarity::MIN_JOB_DESCRIPTION_CHARS;

/// Full result of matching a resume against a job description.
///
/// `error` is set only on the degenerate path (job description below the
/// length floor, or a vector space that could not be built); the value is
/// still a well-formed success to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub match_score: u32,
    pub missing_keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResult {
    fn degenerate(error: &str, suggestion: &str) -> Self {
        MatchResult {
            match_score: 0,
            missing_keywords: Vec::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            suggestions: vec![suggestion.to_string()],
            error: Some(error.to_string()),
        }
    }
}

/// Scores the resume against the job description: TF-IDF cosine match,
/// ordered missing-keyword diff, then the narrative analysis (which falls
/// back to static content when the LLM is unavailable).
pub async fn match_job_description(
    llm: &LlmClient,
    resume: &str,
    job_description: &str,
) -> MatchResult {
    if job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return MatchResult::degenerate(
            "Please provide a detailed job description (at least 50 characters)",
            "Add a comprehensive job description to get accurate analysis",
        );
    }

    let match_score = match similarity::match_score(resume, job_description) {
        Some(score) => score,
        None => {
            return MatchResult::degenerate(
                "Analysis failed: could not build a vocabulary from the supplied texts. \
                 Please check your job description format.",
                "Ensure job description contains readable text",
            );
        }
    };

    let missing_keywords = similarity::missing_keywords(resume, job_description);
    let narrative = analysis::analyze(llm, resume, job_description, match_score).await;

    MatchResult {
        match_score,
        missing_keywords,
        strengths: narrative.strengths,
        improvements: narrative.improvements,
        suggestions: narrative.suggestions,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_llm() -> LlmClient {
        LlmClient::new(None, "llama3-8b-8192".to_string())
    }

    #[tokio::test]
    async fn test_short_job_description_is_degenerate() {
        // 49 characters after trimming
        let jd = format!("  {}  ", "x".repeat(49));
        let result = match_job_description(&offline_llm(), "any resume at all", &jd).await;
        assert_eq!(result.match_score, 0);
        assert!(result.missing_keywords.is_empty());
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_fifty_chars_is_enough() {
        let jd = "rust engineer needed for distributed systems work!";
        assert!(jd.trim().len() >= 50);
        let result = match_job_description(&offline_llm(), "rust distributed systems", jd).await;
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_identical_texts_match_near_100_with_fallback_narrative() {
        let text = "Senior Rust engineer, distributed systems, Kubernetes, low-latency caching.";
        let result = match_job_description(&offline_llm(), text, text).await;
        assert!(result.match_score >= 99);
        assert!(result.missing_keywords.is_empty());
        // LLM is unconfigured, so the narrative comes from the static fallback
        assert!(!result.strengths.is_empty());
        assert!(!result.improvements.is_empty());
        assert!(!result.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_unvectorizable_texts_degrade_not_panic() {
        let jd = "the of and to in a an the of and to in a an the of and to in!!";
        assert!(jd.len() >= 50);
        let result = match_job_description(&offline_llm(), "also the and of", jd).await;
        assert_eq!(result.match_score, 0);
        assert!(result.error.is_some());
    }
}
