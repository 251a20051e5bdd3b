//! Concrete job-board providers. Each maps one public API's JSON into
//! `JobPosting`s; failures are returned as strings and recovered by the
//! aggregator.

use std::time::Duration;

use async_trait::async_trait;

use super::{format_salary, JobPosting, JobProvider, PROVIDER_TIMEOUT_SECS};

fn timeout() -> Duration {
    Duration::from_secs(PROVIDER_TIMEOUT_SECS)
}

fn str_field(value: &serde_json::Value, key: &str) -> String {
    value[key].as_str().unwrap_or("").to_string()
}

pub struct Adzuna {
    pub app_id: String,
    pub api_key: String,
}

#[async_trait]
impl JobProvider for Adzuna {
    fn name(&self) -> &'static str {
        "Adzuna"
    }

    async fn search(
        &self,
        client: &reqwest::Client,
        title: &str,
        location: &str,
    ) -> Result<Vec<JobPosting>, String> {
        let resp = client
            .get("https://api.adzuna.com/v1/api/jobs/us/search/1")
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.api_key.as_str()),
                ("what", title),
                ("where", location),
                ("results_per_page", "10"),
                ("sort_by", "relevance"),
            ])
            .timeout(timeout())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let data: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        let jobs = data["results"]
            .as_array()
            .map(|results| {
                results
                    .iter()
                    .map(|job| JobPosting {
                        title: str_field(job, "title"),
                        company: str_field(&job["company"], "display_name"),
                        location: str_field(&job["location"], "display_name"),
                        salary: format_salary(
                            job["salary_min"].as_f64(),
                            job["salary_max"].as_f64(),
                        ),
                        description: str_field(job, "description"),
                        url: str_field(job, "redirect_url"),
                        source: "Adzuna".to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(jobs)
    }
}

/// JSearch via RapidAPI. Skipped entirely (empty result, no call) when no
/// key is configured.
pub struct JSearch {
    pub rapidapi_key: Option<String>,
}

#[async_trait]
impl JobProvider for JSearch {
    fn name(&self) -> &'static str {
        "JSearch"
    }

    async fn search(
        &self,
        client: &reqwest::Client,
        title: &str,
        location: &str,
    ) -> Result<Vec<JobPosting>, String> {
        let Some(key) = self.rapidapi_key.as_deref() else {
            return Ok(Vec::new());
        };

        let resp = client
            .get("https://jsearch.p.rapidapi.com/search")
            .query(&[
                ("query", format!("{title} {location}").trim()),
                ("page", "1"),
                ("num_pages", "1"),
            ])
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", "jsearch.p.rapidapi.com")
            .timeout(timeout())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let data: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        let jobs = data["data"]
            .as_array()
            .map(|results| {
                results
                    .iter()
                    .map(|job| JobPosting {
                        title: str_field(job, "job_title"),
                        company: str_field(job, "employer_name"),
                        location: format!(
                            "{}, {}",
                            job["job_city"].as_str().unwrap_or(""),
                            job["job_state"].as_str().unwrap_or("")
                        ),
                        salary: job["job_salary"]
                            .as_str()
                            .unwrap_or("Not specified")
                            .to_string(),
                        description: str_field(job, "job_description"),
                        url: str_field(job, "job_apply_link"),
                        source: "JSearch".to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(jobs)
    }
}

/// Remotive — free remote-jobs API, no auth.
pub struct Remotive;

#[async_trait]
impl JobProvider for Remotive {
    fn name(&self) -> &'static str {
        "Remotive"
    }

    async fn search(
        &self,
        client: &reqwest::Client,
        title: &str,
        _location: &str,
    ) -> Result<Vec<JobPosting>, String> {
        let resp = client
            .get("https://remotive.com/api/remote-jobs")
            .query(&[("search", title)])
            .timeout(timeout())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let data: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        let jobs = data["jobs"]
            .as_array()
            .map(|results| {
                results
                    .iter()
                    .map(|job| JobPosting {
                        title: str_field(job, "title"),
                        company: str_field(job, "company_name"),
                        location: str_field(job, "candidate_required_location"),
                        salary: job["salary"]
                            .as_str()
                            .filter(|s| !s.is_empty())
                            .unwrap_or("Not specified")
                            .to_string(),
                        description: str_field(job, "description"),
                        url: str_field(job, "url"),
                        source: "Remotive".to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(jobs)
    }
}

/// Arbeitnow — general job board API. The endpoint has no search
/// parameter, so the title filter is applied client-side.
pub struct Arbeitnow;

#[async_trait]
impl JobProvider for Arbeitnow {
    fn name(&self) -> &'static str {
        "Arbeitnow"
    }

    async fn search(
        &self,
        client: &reqwest::Client,
        title: &str,
        _location: &str,
    ) -> Result<Vec<JobPosting>, String> {
        let resp = client
            .get("https://arbeitnow.com/api/job-board-api")
            .timeout(timeout())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let data: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        let title_lower = title.to_lowercase();
        let jobs = data["data"]
            .as_array()
            .map(|results| {
                results
                    .iter()
                    .filter(|job| {
                        job["title"]
                            .as_str()
                            .map(|t| t.to_lowercase().contains(&title_lower))
                            .unwrap_or(false)
                    })
                    .map(|job| JobPosting {
                        title: str_field(job, "title"),
                        company: str_field(job, "company_name"),
                        location: str_field(job, "location"),
                        salary: "Not specified".to_string(),
                        description: str_field(job, "description"),
                        url: str_field(job, "url"),
                        source: "Arbeitnow".to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(jobs)
    }
}

/// The default provider stack, in merge order.
pub fn default_providers(
    adzuna_app_id: String,
    adzuna_api_key: String,
    rapidapi_key: Option<String>,
) -> Vec<Box<dyn JobProvider>> {
    vec![
        Box::new(Adzuna {
            app_id: adzuna_app_id,
            api_key: adzuna_api_key,
        }),
        Box::new(JSearch { rapidapi_key }),
        Box::new(Remotive),
        Box::new(Arbeitnow),
    ]
}
