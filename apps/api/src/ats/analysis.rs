//! Narrative feedback generator — LLM-backed qualitative analysis with
//! deterministic static fallbacks.
//!
//! The reply format is three labeled bullet lists. Parsing is an explicit
//! line-classifier state machine so its behavior is testable without an
//! LLM in the loop.

use serde::Serialize;

use crate::ats::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM,
    LINE_PROMPT_TEMPLATE, LINE_SYSTEM,
};
use crate::llm_client::{or_fallback, truncate_chars, LlmClient};

/// Prompt inputs are bounded to this many characters each.
const ANALYSIS_INPUT_CHARS: usize = 1500;
const ENHANCE_INPUT_CHARS: usize = 2000;
/// Improvements fallback gains two extra entries below this match score.
const LOW_MATCH_THRESHOLD: u32 = 60;
/// Per-line suggestions cover at most this many lines.
const MAX_ANALYZED_LINES: usize = 20;
/// Only lines longer than this (trimmed) are worth a suggestion.
const MIN_LINE_CHARS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineImprovement {
    pub line_number: usize,
    pub original: String,
    pub suggestion: String,
}

/// Runs the qualitative analysis call and parses the reply. Any service
/// failure yields the static match-score-aware fallback triple; no section
/// is ever left empty.
pub async fn analyze(
    llm: &LlmClient,
    resume: &str,
    job_description: &str,
    match_score: u32,
) -> Analysis {
    let prompt = ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", truncate_chars(job_description, ANALYSIS_INPUT_CHARS))
        .replace("{resume}", truncate_chars(resume, ANALYSIS_INPUT_CHARS))
        .replace("{match_score}", &match_score.to_string());

    or_fallback(
        "resume analysis",
        async {
            let reply = llm.complete(ANALYSIS_SYSTEM, &prompt, 600, 0.2).await?;
            Ok(parse_analysis(&reply))
        },
        || fallback_analysis(match_score),
    )
    .await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Strengths,
    Improvements,
    Suggestions,
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Header(Section),
    Bullet(String),
    Other,
}

/// Classifies one reply line: a section header switches state, a bullet is
/// content for the active section, everything else is ignored.
fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    let upper = trimmed.to_uppercase();
    if upper.contains("STRENGTHS:") {
        LineKind::Header(Section::Strengths)
    } else if upper.contains("IMPROVEMENTS:") {
        LineKind::Header(Section::Improvements)
    } else if upper.contains("SUGGESTIONS:") {
        LineKind::Header(Section::Suggestions)
    } else if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('•'))
        .or_else(|| trimmed.strip_prefix('*'))
    {
        LineKind::Bullet(rest.trim().to_string())
    } else {
        LineKind::Other
    }
}

/// Parses an LLM reply into the three sections. Sections left empty by the
/// reply are filled with static fallback content.
pub fn parse_analysis(reply: &str) -> Analysis {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let mut suggestions = Vec::new();
    let mut current = Section::None;

    for line in reply.lines() {
        match classify_line(line) {
            LineKind::Header(section) => current = section,
            LineKind::Bullet(text) if !text.is_empty() => match current {
                Section::Strengths => strengths.push(text),
                Section::Improvements => improvements.push(text),
                Section::Suggestions => suggestions.push(text),
                Section::None => {}
            },
            _ => {}
        }
    }

    if strengths.is_empty() {
        strengths = fallback_strengths();
    }
    if improvements.is_empty() {
        improvements = fallback_improvements();
    }
    if suggestions.is_empty() {
        suggestions = fallback_suggestions();
    }

    Analysis {
        strengths,
        improvements,
        suggestions,
    }
}

fn fallback_strengths() -> Vec<String> {
    vec![
        "Resume contains relevant work experience".to_string(),
        "Professional formatting and structure".to_string(),
    ]
}

fn fallback_improvements() -> Vec<String> {
    vec![
        "Add more quantified achievements with specific numbers".to_string(),
        "Include more industry-specific keywords".to_string(),
        "Strengthen technical skills section".to_string(),
    ]
}

fn fallback_suggestions() -> Vec<String> {
    vec![
        "Tailor experience descriptions to match job requirements".to_string(),
        "Add relevant certifications or training".to_string(),
        "Use action verbs that appear in the job description".to_string(),
        "Include measurable results and impact statements".to_string(),
    ]
}

/// The full static fallback used when the service is unavailable.
/// Deterministic; only the improvements section is match-score-aware.
pub fn fallback_analysis(match_score: u32) -> Analysis {
    let mut improvements = vec![
        "Add more quantified achievements (numbers, percentages, dollar amounts)".to_string(),
        "Include industry-specific keywords from the job description".to_string(),
        "Strengthen your technical skills section".to_string(),
    ];
    if match_score < LOW_MATCH_THRESHOLD {
        improvements.push("Rewrite experience bullets to match job requirements".to_string());
        improvements.push("Add relevant certifications or training".to_string());
    }

    Analysis {
        strengths: vec![
            "Resume has professional structure".to_string(),
            "Contains relevant work experience".to_string(),
        ],
        improvements,
        suggestions: vec![
            "Use exact keywords from the job posting".to_string(),
            "Quantify your achievements with specific metrics".to_string(),
            "Tailor your summary to match the role".to_string(),
            "Add relevant technical skills mentioned in the job description".to_string(),
        ],
    }
}

/// AI-enhanced rewrite of the whole resume; falls back to the original
/// text with a static suggestions block appended.
pub async fn generate_enhanced_resume(llm: &LlmClient, resume: &str, target_score: u32) -> String {
    let prompt = ENHANCE_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume, ENHANCE_INPUT_CHARS))
        .replace("{target_score}", &target_score.to_string());

    or_fallback(
        "resume enhancement",
        llm.complete(ENHANCE_SYSTEM, &prompt, 1500, 0.3),
        || fallback_enhanced_resume(resume),
    )
    .await
}

fn fallback_enhanced_resume(resume: &str) -> String {
    format!(
        "{resume}\n\n--- ENHANCEMENT SUGGESTIONS ---\n\
        • Replace weak verbs with strong action verbs (managed → spearheaded, helped → facilitated)\n\
        • Add specific numbers and percentages to achievements\n\
        • Include relevant technical skills and certifications\n\
        • Use industry-specific keywords throughout\n\
        • Ensure consistent formatting and bullet points\n"
    )
}

/// One suggestion per substantial line among the first 20. Calls are
/// sequential; each line falls back independently so one failure does not
/// abort the rest.
pub async fn get_line_improvements(llm: &LlmClient, resume: &str) -> Vec<LineImprovement> {
    let mut improvements = Vec::new();

    for (i, line) in resume.lines().take(MAX_ANALYZED_LINES).enumerate() {
        let line = line.trim();
        if line.len() <= MIN_LINE_CHARS {
            continue;
        }
        let line_number = i + 1;
        let prompt = LINE_PROMPT_TEMPLATE
            .replace("{line_number}", &line_number.to_string())
            .replace("{line}", line);

        let suggestion = or_fallback(
            "line improvement",
            async {
                let reply = llm.complete(LINE_SYSTEM, &prompt, 100, 0.2).await?;
                Ok(reply.replace("Suggestion: ", "").trim().to_string())
            },
            || "Add quantified results and stronger action verbs".to_string(),
        )
        .await;

        improvements.push(LineImprovement {
            line_number,
            original: line.to_string(),
            suggestion,
        });
    }

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED_REPLY: &str = "\
Here is the analysis you asked for.

STRENGTHS:
- Strong systems background
- Clear project outcomes

IMPROVEMENTS:
- Add cloud certifications
* Quantify latency wins

SUGGESTIONS:
• Mirror the JD vocabulary
- Lead with impact statements
";

    #[test]
    fn test_parse_well_formed_reply() {
        let analysis = parse_analysis(WELL_FORMED_REPLY);
        assert_eq!(
            analysis.strengths,
            vec!["Strong systems background", "Clear project outcomes"]
        );
        assert_eq!(
            analysis.improvements,
            vec!["Add cloud certifications", "Quantify latency wins"]
        );
        assert_eq!(
            analysis.suggestions,
            vec!["Mirror the JD vocabulary", "Lead with impact statements"]
        );
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let analysis = parse_analysis("strengths:\n- one\nImprovements:\n- two\nSUGGESTIONS:\n- three");
        assert_eq!(analysis.strengths, vec!["one"]);
        assert_eq!(analysis.improvements, vec!["two"]);
        assert_eq!(analysis.suggestions, vec!["three"]);
    }

    #[test]
    fn test_bullets_before_first_header_are_ignored() {
        let analysis = parse_analysis("- stray bullet\nSTRENGTHS:\n- kept");
        assert_eq!(analysis.strengths, vec!["kept"]);
    }

    #[test]
    fn test_empty_sections_get_fallback_content() {
        let analysis = parse_analysis("STRENGTHS:\n- only strengths here");
        assert_eq!(analysis.strengths, vec!["only strengths here"]);
        assert!(!analysis.improvements.is_empty());
        assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn test_unparseable_reply_falls_back_entirely() {
        let analysis = parse_analysis("I'm sorry, I can't help with that.");
        assert!(!analysis.strengths.is_empty());
        assert!(!analysis.improvements.is_empty());
        assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn test_classify_line_variants() {
        assert_eq!(
            classify_line("  STRENGTHS: "),
            LineKind::Header(Section::Strengths)
        );
        assert_eq!(
            classify_line("- item"),
            LineKind::Bullet("item".to_string())
        );
        assert_eq!(
            classify_line("• item"),
            LineKind::Bullet("item".to_string())
        );
        assert_eq!(classify_line("prose line"), LineKind::Other);
    }

    #[test]
    fn test_fallback_improvements_are_match_score_aware() {
        let low = fallback_analysis(40);
        let high = fallback_analysis(80);
        assert_eq!(low.improvements.len(), high.improvements.len() + 2);
        assert_eq!(low.strengths, high.strengths);
        assert_eq!(low.suggestions, high.suggestions);
    }

    #[tokio::test]
    async fn test_analyze_falls_back_when_llm_unavailable() {
        let llm = LlmClient::new(None, "llama3-8b-8192".to_string());
        let analysis = analyze(&llm, "resume text", "job description", 30).await;
        assert!(!analysis.strengths.is_empty());
        assert!(analysis.improvements.len() >= 5);
        assert!(!analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_enhanced_resume_fallback_keeps_original_text() {
        let llm = LlmClient::new(None, "llama3-8b-8192".to_string());
        let enhanced = generate_enhanced_resume(&llm, "Original resume body", 90).await;
        assert!(enhanced.starts_with("Original resume body"));
        assert!(enhanced.contains("ENHANCEMENT SUGGESTIONS"));
    }

    #[tokio::test]
    async fn test_line_improvements_skip_short_lines_and_cap_at_20() {
        let llm = LlmClient::new(None, "llama3-8b-8192".to_string());
        let mut resume = String::new();
        for i in 0..30 {
            resume.push_str(&format!("This is substantial resume line number {i}\n"));
        }
        resume.push_str("ok\n"); // short line, skipped anyway
        let improvements = get_line_improvements(&llm, &resume).await;
        assert_eq!(improvements.len(), MAX_ANALYZED_LINES);
        assert_eq!(improvements[0].line_number, 1);
        assert!(improvements
            .iter()
            .all(|li| li.suggestion.contains("quantified results")));
    }
}
