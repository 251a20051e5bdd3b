//! Job search aggregation across multiple free job-board APIs.
//!
//! Each provider is independent: one provider's failure is logged and
//! recovered without affecting the others, and the aggregate falls back to
//! static demo postings only when every provider yields nothing.

pub mod handlers;
pub mod providers;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

/// Providers get this long per HTTP call.
pub const PROVIDER_TIMEOUT_SECS: u64 = 10;
/// The aggregate result is capped at this many postings.
const MAX_RESULTS: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub url: String,
    pub source: String,
}

/// A single job-board backend. Implementations perform one bounded HTTP
/// call and map the provider's JSON into `JobPosting`s.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(
        &self,
        client: &reqwest::Client,
        title: &str,
        location: &str,
    ) -> Result<Vec<JobPosting>, String>;
}

/// Runs every provider in order, recovering per-provider failures, and
/// caps the merged results. Falls back to demo postings when everything
/// fails or comes back empty.
pub async fn search_jobs(
    client: &reqwest::Client,
    providers: &[Box<dyn JobProvider>],
    title: &str,
    location: &str,
) -> Vec<JobPosting> {
    let mut jobs = Vec::new();

    for provider in providers {
        match provider.search(client, title, location).await {
            Ok(mut found) => jobs.append(&mut found),
            Err(e) => warn!("{} provider error: {e}", provider.name()),
        }
    }

    if jobs.is_empty() {
        jobs = mock_jobs(title, location);
    }

    jobs.truncate(MAX_RESULTS);
    jobs
}

/// Two static demo postings, used when no provider returns anything.
pub fn mock_jobs(title: &str, location: &str) -> Vec<JobPosting> {
    let location_or = |default: &str| {
        if location.is_empty() {
            default.to_string()
        } else {
            location.to_string()
        }
    };

    vec![
        JobPosting {
            title: format!("Senior {title}"),
            company: "TechCorp Inc.".to_string(),
            location: location_or("Remote"),
            salary: "$80,000 - $120,000".to_string(),
            description: format!(
                "We are looking for an experienced {title} to join our dynamic team."
            ),
            url: "https://example.com/job1".to_string(),
            source: "Demo".to_string(),
        },
        JobPosting {
            title: format!("Junior {title}"),
            company: "StartupXYZ".to_string(),
            location: location_or("New York, NY"),
            salary: "$60,000 - $80,000".to_string(),
            description: format!("Entry-level {title} position perfect for fresh graduates."),
            url: "https://example.com/job2".to_string(),
            source: "Demo".to_string(),
        },
    ]
}

/// Renders Adzuna's numeric salary bounds into a display string.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("${} - ${}", group_thousands(min), group_thousands(max)),
        (Some(min), None) => format!("${}+", group_thousands(min)),
        (None, Some(max)) => format!("Up to ${}", group_thousands(max)),
        (None, None) => "Not specified".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobTrends {
    pub average_salary: String,
    pub job_growth: String,
    pub top_skills: Vec<String>,
    pub top_locations: Vec<String>,
    pub companies_hiring: Vec<String>,
}

/// Static demo market-trend block.
pub fn job_trends() -> JobTrends {
    JobTrends {
        average_salary: "$85,000".to_string(),
        job_growth: "+15%".to_string(),
        top_skills: vec![
            "Python".to_string(),
            "JavaScript".to_string(),
            "SQL".to_string(),
            "AWS".to_string(),
        ],
        top_locations: vec![
            "San Francisco".to_string(),
            "New York".to_string(),
            "Remote".to_string(),
        ],
        companies_hiring: vec![
            "Google".to_string(),
            "Microsoft".to_string(),
            "Amazon".to_string(),
            "Meta".to_string(),
            "Apple".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl JobProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "Failing"
        }

        async fn search(
            &self,
            _client: &reqwest::Client,
            _title: &str,
            _location: &str,
        ) -> Result<Vec<JobPosting>, String> {
            Err("simulated outage".to_string())
        }
    }

    struct FixedProvider(usize);

    #[async_trait]
    impl JobProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        async fn search(
            &self,
            _client: &reqwest::Client,
            title: &str,
            location: &str,
        ) -> Result<Vec<JobPosting>, String> {
            Ok((0..self.0)
                .map(|i| JobPosting {
                    title: format!("{title} {i}"),
                    company: "Co".to_string(),
                    location: location.to_string(),
                    salary: "Not specified".to_string(),
                    description: String::new(),
                    url: String::new(),
                    source: "Fixed".to_string(),
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_all_providers_failing_falls_back_to_demo_jobs() {
        let providers: Vec<Box<dyn JobProvider>> =
            vec![Box::new(FailingProvider), Box::new(FailingProvider)];
        let jobs = search_jobs(&reqwest::Client::new(), &providers, "Engineer", "").await;
        assert_eq!(jobs.len(), 2);
        assert!(jobs.iter().all(|j| j.source == "Demo"));
        assert_eq!(jobs[0].title, "Senior Engineer");
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_other_providers() {
        let providers: Vec<Box<dyn JobProvider>> =
            vec![Box::new(FailingProvider), Box::new(FixedProvider(3))];
        let jobs = search_jobs(&reqwest::Client::new(), &providers, "Engineer", "Remote").await;
        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().all(|j| j.source == "Fixed"));
    }

    #[tokio::test]
    async fn test_results_capped_at_20() {
        let providers: Vec<Box<dyn JobProvider>> =
            vec![Box::new(FixedProvider(15)), Box::new(FixedProvider(15))];
        let jobs = search_jobs(&reqwest::Client::new(), &providers, "Engineer", "").await;
        assert_eq!(jobs.len(), 20);
    }

    #[test]
    fn test_mock_jobs_use_supplied_location() {
        let jobs = mock_jobs("Analyst", "Berlin");
        assert!(jobs.iter().all(|j| j.location == "Berlin"));
    }

    #[test]
    fn test_format_salary_variants() {
        assert_eq!(
            format_salary(Some(80000.0), Some(120000.0)),
            "$80,000 - $120,000"
        );
        assert_eq!(format_salary(Some(95500.0), None), "$95,500+");
        assert_eq!(format_salary(None, Some(70000.0)), "Up to $70,000");
        assert_eq!(format_salary(None, None), "Not specified");
    }

    #[test]
    fn test_group_thousands_small_values() {
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }
}
