// All LLM prompt constants for the ATS analysis module.

/// System prompt for the resume-vs-JD analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are an expert ATS specialist and career coach. \
    Provide detailed, actionable resume optimization advice.";

/// Analysis prompt template. Replace `{job_description}`, `{resume}`, and
/// `{match_score}` before sending. The reply is parsed by the section
/// state machine in `analysis.rs`, so the three headers are load-bearing.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"As an expert ATS and career coach, analyze this resume against the job description. Provide a comprehensive analysis:

Job Description:
{job_description}

Resume:
{resume}

Match Score: {match_score}%

Provide analysis in this exact format:

STRENGTHS:
- [List 2-3 key strengths]

IMPROVEMENTS:
- [List 3-4 specific improvements needed]

SUGGESTIONS:
- [List 4-5 actionable suggestions to increase match score]

Focus on specific, actionable advice that will improve ATS compatibility and job match."#;

/// System prompt for whole-resume enhancement.
pub const ENHANCE_SYSTEM: &str = "You are an expert resume writer specializing in ATS \
    optimization. Enhance resumes while maintaining their original structure and truthfulness.";

/// Enhancement prompt template. Replace `{resume}` and `{target_score}`.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer and ATS specialist, enhance this resume to achieve a {target_score}% ATS score.

Original Resume:
{resume}

Provide an enhanced version with:
1. Stronger action verbs
2. Quantified achievements
3. ATS-friendly keywords
4. Better formatting suggestions
5. Industry-specific terminology

Return the enhanced resume in the same structure but with improved content."#;

/// System prompt for per-line suggestions.
pub const LINE_SYSTEM: &str =
    "You are an ATS expert. Provide one specific, actionable improvement per resume line.";

/// Per-line prompt template. Replace `{line_number}` and `{line}`.
pub const LINE_PROMPT_TEMPLATE: &str = r#"Analyze this resume line and suggest ONE specific improvement:

Line {line_number}: "{line}"

Provide a brief, actionable suggestion to make it more ATS-friendly and impactful.
Format: "Suggestion: [your improvement]""#;
