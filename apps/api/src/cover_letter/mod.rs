//! Cover letter composer — the same prompt-with-static-fallback pattern as
//! the narrative analyzer, applied to a different document type.

pub mod handlers;
pub mod prompts;

use chrono::Local;
use serde::Serialize;

use crate::llm_client::{or_fallback, truncate_chars, LlmClient};
use prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM_TEMPLATE, INDUSTRY_PROMPT_TEMPLATE,
    INDUSTRY_SYSTEM_TEMPLATE,
};

/// Prompt inputs are bounded to this many characters each.
const LETTER_INPUT_CHARS: usize = 1000;

/// The fixed tone set for multi-version generation. Single-letter
/// generation accepts any free-text tone label.
pub const TONES: [&str; 3] = ["professional", "enthusiastic", "creative"];

#[derive(Debug, Clone, Serialize)]
pub struct ToneVersion {
    pub tone: String,
    pub cover_letter: String,
}

fn today() -> String {
    Local::now().format("%B %d, %Y").to_string()
}

/// Generates a cover letter in the requested tone. Always produces text:
/// on any service failure the fixed template letter is substituted.
pub async fn generate(
    llm: &LlmClient,
    resume: &str,
    job_description: &str,
    company: &str,
    position: &str,
    tone: &str,
) -> String {
    let system = COVER_LETTER_SYSTEM_TEMPLATE.replace("{tone}", tone);
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume, LETTER_INPUT_CHARS))
        .replace(
            "{job_description}",
            truncate_chars(job_description, LETTER_INPUT_CHARS),
        )
        .replace("{company}", company)
        .replace("{position}", position)
        .replace("{tone}", tone)
        .replace("{date}", &today());

    or_fallback(
        "cover letter generation",
        llm.complete(&system, &prompt, 800, 0.3),
        || fallback_letter(company, position),
    )
    .await
}

/// The fixed fallback template with date, company, and position
/// substituted. The closing note marks it as generic.
pub fn fallback_letter(company: &str, position: &str) -> String {
    format!(
        "{date}\n\n\
        Dear Hiring Manager,\n\n\
        I am writing to express my strong interest in the {position} position at {company}. \
        With my background in technology and proven track record of delivering results, I am \
        confident that I would be a valuable addition to your team.\n\n\
        In my previous roles, I have developed strong technical skills and gained experience in \
        problem-solving, project management, and team collaboration. I am particularly drawn to \
        {company} because of your reputation for innovation and commitment to excellence. The \
        {position} role aligns perfectly with my career goals and expertise.\n\n\
        I am excited about the opportunity to contribute to your team's success and would \
        welcome the chance to discuss how my skills and experience can benefit {company}. I \
        have attached my resume for your review and look forward to hearing from you soon.\n\n\
        Thank you for your time and consideration.\n\n\
        Sincerely,\n\
        [Your Name]\n\n\
        ---\n\
        Note: This is a template cover letter. For a more personalized version, please ensure \
        your Groq API key is properly configured.\n",
        date = today(),
    )
}

/// One letter per tone in the fixed set. Each tone generates (and falls
/// back) independently; one failure never aborts the others.
pub async fn generate_multiple_versions(
    llm: &LlmClient,
    resume: &str,
    job_description: &str,
    company: &str,
    position: &str,
) -> Vec<ToneVersion> {
    let mut versions = Vec::with_capacity(TONES.len());
    for tone in TONES {
        let cover_letter = generate(llm, resume, job_description, company, position, tone).await;
        versions.push(ToneVersion {
            tone: tone.to_string(),
            cover_letter,
        });
    }
    versions
}

/// Re-prompts for an industry-specialized rewrite of an existing letter.
/// Returns the input letter verbatim if the rewrite call fails.
pub async fn customize_for_industry(llm: &LlmClient, letter: &str, industry: &str) -> String {
    let system = INDUSTRY_SYSTEM_TEMPLATE.replace("{industry}", industry);
    let prompt = INDUSTRY_PROMPT_TEMPLATE
        .replace("{cover_letter}", letter)
        .replace("{industry}", industry);

    or_fallback(
        "industry customization",
        llm.complete(&system, &prompt, 800, 0.2),
        || letter.to_string(),
    )
    .await
}
