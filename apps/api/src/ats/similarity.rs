//! Similarity engine — TF-IDF cosine similarity between the resume and a
//! job description, plus an ordered keyword diff.
//!
//! The vector space is built over exactly the two documents: unigrams and
//! bigrams, English stop words removed, vocabulary capped at the most
//! frequent terms, smoothed IDF, L2-normalised vectors.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Job descriptions shorter than this (after trimming) get the degenerate
/// zero-score result; no similarity computation is attempted.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
/// Vocabulary cap for the TF-IDF space.
pub const MAX_VOCABULARY_TERMS: usize = 1000;
/// At most this many missing keywords are reported.
pub const MAX_MISSING_KEYWORDS: usize = 15;

static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid regex"));

static ENGLISH_STOPWORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
});

/// Short stop list for the keyword diff (separate from the TF-IDF stop
/// words; keywords are already length-filtered to >= 4 chars).
const KEYWORD_STOPWORDS: [&str; 37] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too",
];

/// Cosine match between the two texts, as an integer percentage.
/// `None` when the vocabulary degenerates (e.g. both texts are all stop
/// words); callers convert that to the degenerate result.
pub fn match_score(resume: &str, job_description: &str) -> Option<u32> {
    let resume_counts = term_counts(resume);
    let job_counts = term_counts(job_description);

    let vocabulary = build_vocabulary(&resume_counts, &job_counts);
    if vocabulary.is_empty() {
        return None;
    }

    let resume_vec = tfidf_vector(&vocabulary, &resume_counts, &job_counts, Doc::Resume)?;
    let job_vec = tfidf_vector(&vocabulary, &resume_counts, &job_counts, Doc::Job)?;

    let similarity: f64 = resume_vec
        .iter()
        .zip(job_vec.iter())
        .map(|(a, b)| a * b)
        .sum();
    Some(((similarity * 100.0).round() as i64).clamp(0, 100) as u32)
}

/// Lowercase alphabetic keywords of length >= 4, deduplicated preserving
/// first-occurrence order, minus the small stop list.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for m in WORD_RE.find_iter(&lower) {
        let word = m.as_str();
        if word.len() <= 3 || KEYWORD_STOPWORDS.contains(&word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

/// The first `MAX_MISSING_KEYWORDS` job-description keywords (in extraction
/// order) absent from the resume.
pub fn missing_keywords(resume: &str, job_description: &str) -> Vec<String> {
    let resume_set: HashSet<String> = extract_keywords(resume).into_iter().collect();
    extract_keywords(job_description)
        .into_iter()
        .take(MAX_MISSING_KEYWORDS)
        .filter(|kw| !resume_set.contains(kw))
        .collect()
}

#[derive(Clone, Copy)]
enum Doc {
    Resume,
    Job,
}

/// Unigram + bigram counts for one document, stop words removed before
/// n-gram formation.
fn term_counts(text: &str) -> HashMap<String, u32> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = TERM_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !ENGLISH_STOPWORDS.contains(*t))
        .collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in &tokens {
        *counts.entry((*token).to_string()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// The `MAX_VOCABULARY_TERMS` highest-corpus-frequency terms, ties broken
/// alphabetically for determinism.
fn build_vocabulary(
    resume_counts: &HashMap<String, u32>,
    job_counts: &HashMap<String, u32>,
) -> Vec<String> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for (term, count) in resume_counts.iter().chain(job_counts.iter()) {
        *totals.entry(term.as_str()).or_insert(0) += count;
    }

    let mut terms: Vec<(&str, u32)> = totals.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms
        .into_iter()
        .take(MAX_VOCABULARY_TERMS)
        .map(|(term, _)| term.to_string())
        .collect()
}

/// L2-normalised TF-IDF vector over the shared vocabulary. Smoothed IDF:
/// ln((1 + n) / (1 + df)) + 1 with n = 2 documents.
fn tfidf_vector(
    vocabulary: &[String],
    resume_counts: &HashMap<String, u32>,
    job_counts: &HashMap<String, u32>,
    doc: Doc,
) -> Option<Vec<f64>> {
    let own_counts = match doc {
        Doc::Resume => resume_counts,
        Doc::Job => job_counts,
    };

    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let tf = *own_counts.get(term).unwrap_or(&0) as f64;
            let df = [resume_counts, job_counts]
                .iter()
                .filter(|counts| counts.contains_key(term))
                .count() as f64;
            let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        return None;
    }
    for v in &mut vector {
        *v /= norm;
    }
    Some(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Senior Rust engineer with distributed systems experience. \
        Built caching layers, optimized latency, deployed Kubernetes clusters in production.";

    #[test]
    fn test_identical_texts_score_near_100() {
        let score = match_score(SAMPLE, SAMPLE).unwrap();
        assert!(score >= 99, "expected ~100, got {score}");
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let resume = "pottery ceramics glazing kiln sculpture artisan";
        let job = "quantitative finance derivatives trading equities portfolio";
        assert_eq!(match_score(resume, job).unwrap(), 0);
    }

    #[test]
    fn test_partial_overlap_scores_between() {
        let resume = "rust engineer distributed systems kubernetes caching";
        let job = "rust engineer payments platform kafka streaming";
        let score = match_score(resume, job).unwrap();
        assert!(score > 0 && score < 100, "got {score}");
    }

    #[test]
    fn test_stop_word_only_texts_degenerate() {
        assert!(match_score("the and of to in", "a an the of").is_none());
    }

    #[test]
    fn test_score_is_deterministic() {
        let job = "Looking for a senior Rust engineer to build distributed systems.";
        assert_eq!(match_score(SAMPLE, job), match_score(SAMPLE, job));
    }

    #[test]
    fn test_extract_keywords_preserves_first_occurrence_order() {
        let keywords = extract_keywords("Kubernetes clusters and kubernetes pods with Docker");
        assert_eq!(keywords, vec!["kubernetes", "clusters", "pods", "with", "docker"]);
    }

    #[test]
    fn test_extract_keywords_drops_short_and_stop_words() {
        let keywords = extract_keywords("the Rust way is not old");
        // "rust" is 4 chars; "way"/"the"/"not"/"old" are 3 chars and dropped
        assert_eq!(keywords, vec!["rust"]);
    }

    #[test]
    fn test_missing_keywords_capped_at_15() {
        let job = "alpha bravo charlie delta echoes foxtrot golfing hotels india \
            juliet kilos limas mikes november oscar papas quebec romeo sierra tango";
        let missing = missing_keywords("completely unrelated resume text", job);
        assert_eq!(missing.len(), MAX_MISSING_KEYWORDS);
        assert_eq!(missing[0], "alpha");
    }

    #[test]
    fn test_missing_keywords_excludes_resume_terms() {
        let missing = missing_keywords(
            "experienced kubernetes administrator",
            "kubernetes experience with terraform required",
        );
        assert!(!missing.contains(&"kubernetes".to_string()));
        assert!(missing.contains(&"terraform".to_string()));
    }

    #[test]
    fn test_bigrams_contribute_to_similarity() {
        let counts = term_counts("distributed systems engineer");
        assert!(counts.contains_key("distributed systems"));
        assert!(counts.contains_key("systems engineer"));
    }
}
