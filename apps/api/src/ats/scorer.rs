//! Heuristic ATS scorer — deterministic, pure, no I/O.
//!
//! Emulates the pattern-matching tendencies of applicant tracking systems:
//! fixed-weight structural, keyword, and formatting checks over the
//! extracted resume text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Action/structure vocabulary checked case-insensitively against the text.
const ATS_KEYWORDS: [&str; 15] = [
    "experience",
    "skills",
    "education",
    "projects",
    "achievements",
    "responsibilities",
    "managed",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "reduced",
    "led",
    "collaborated",
];

const SECTION_WORDS: [&str; 5] = ["experience", "education", "skills", "work", "employment"];

const STRUCTURE_POINTS: u32 = 10;
const KEYWORD_MAX_POINTS: u32 = 40;
const FORMATTING_MAX_POINTS: u32 = 30;
/// Keyword feedback fires below this fraction of the keyword maximum even
/// though partial points were awarded.
const KEYWORD_FEEDBACK_RATIO: f64 = 0.75;
const MIN_TEXT_LEN: usize = 200;
const MIN_NEWLINES: usize = 5;
const MIN_QUANTIFIED_MATCHES: usize = 3;
const MIN_SECTION_WORDS: usize = 2;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});
static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\d+\+|\$\d+|\d+k|\d+ years?|\d+ months?").expect("valid regex")
});
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-\*]").expect("valid regex"));

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: u32,
    pub feedback: Vec<String>,
}

/// Scores resume text against ATS heuristics: structure (30), keywords
/// (40), formatting (30), total clamped to 100. Feedback entries are
/// appended for each failed threshold; a fully passing resume gets a
/// single affirmation instead of an empty list.
pub fn analyze_resume(text: &str) -> ScoreReport {
    let mut score = 0;
    let mut feedback = Vec::new();

    // Structure checks, 10 points each
    if has_contact_info(text) {
        score += STRUCTURE_POINTS;
    } else {
        feedback.push("Add clear contact information (email, phone)".to_string());
    }

    if has_sections(text) {
        score += STRUCTURE_POINTS;
    } else {
        feedback.push("Include standard sections: Experience, Education, Skills".to_string());
    }

    if has_quantified_achievements(text) {
        score += STRUCTURE_POINTS;
    } else {
        feedback.push("Add quantified achievements (numbers, percentages)".to_string());
    }

    let keyword_score = keyword_score(text);
    score += keyword_score;
    if (keyword_score as f64) < KEYWORD_MAX_POINTS as f64 * KEYWORD_FEEDBACK_RATIO {
        feedback.push("Include more action verbs and industry keywords".to_string());
    }

    let format_score = formatting_score(text);
    score += format_score;
    if format_score < 20 {
        feedback.push("Improve formatting: use bullet points, consistent spacing".to_string());
    }

    if feedback.is_empty() {
        feedback.push("Great job! Your resume is ATS-friendly".to_string());
    }

    ScoreReport {
        score: score.min(100),
        feedback,
    }
}

fn has_contact_info(text: &str) -> bool {
    EMAIL_RE.is_match(text) && PHONE_RE.is_match(text)
}

fn has_sections(text: &str) -> bool {
    let lower = text.to_lowercase();
    SECTION_WORDS.iter().filter(|s| lower.contains(**s)).count() >= MIN_SECTION_WORDS
}

fn has_quantified_achievements(text: &str) -> bool {
    QUANTIFIED_RE.find_iter(text).count() >= MIN_QUANTIFIED_MATCHES
}

/// Fraction of the fixed vocabulary present, linearly scaled to 40 and
/// floored to an integer.
fn keyword_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let found = ATS_KEYWORDS.iter().filter(|kw| lower.contains(**kw)).count();
    let scaled = (found as f64 / ATS_KEYWORDS.len() as f64) * KEYWORD_MAX_POINTS as f64;
    (scaled as u32).min(KEYWORD_MAX_POINTS)
}

/// Starts at 30 and loses 10 for each of: short text, few line breaks,
/// no bullet-style characters. Floored at 0.
fn formatting_score(text: &str) -> u32 {
    let mut score = FORMATTING_MAX_POINTS as i32;
    if text.len() < MIN_TEXT_LEN {
        score -= 10;
    }
    if text.matches('\n').count() < MIN_NEWLINES {
        score -= 10;
    }
    if !BULLET_RE.is_match(text) {
        score -= 10;
    }
    score.max(0) as u32
}
