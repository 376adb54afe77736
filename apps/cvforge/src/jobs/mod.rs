//! Job search: a thin client over the Jooble search API, mapping hits
//! into the application's `JobOffer` model.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::job::{JobOffer, JobSource};

const JOOBLE_API_URL: &str = "https://jooble.org/api/";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    keywords: &'a str,
    location: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    jobs: Vec<JoobleJob>,
}

/// One hit as Jooble returns it. The API provides no requirement list,
/// so mapped offers start with empty requirements/keywords.
#[derive(Debug, Deserialize)]
struct JoobleJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "type")]
    job_type: String,
    #[serde(default)]
    updated: String,
}

pub struct JobSearchClient {
    client: Client,
    api_key: Option<String>,
}

impl JobSearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        JobSearchClient {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Searches postings matching `keywords` near `location`.
    pub async fn search(
        &self,
        keywords: &str,
        location: &str,
    ) -> Result<Vec<JobOffer>, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Validation(
                "Jooble API key is not configured (set JOOBLE_API_KEY)".to_string(),
            )
        })?;

        let response = self
            .client
            .post(format!("{JOOBLE_API_URL}{api_key}"))
            .json(&SearchRequest { keywords, location })
            .send()
            .await
            .map_err(|e| AppError::JobSearch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Job search returned {}: {}", status, body);
            return Err(AppError::JobSearch(format!(
                "search failed with status {status}"
            )));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::JobSearch(e.to_string()))?;

        info!("Job search returned {} offers", results.jobs.len());

        Ok(results.jobs.into_iter().map(map_job).collect())
    }
}

/// Maps a raw hit to a `JobOffer`. The posting link doubles as the id;
/// an unparseable `updated` stamp falls back to now.
fn map_job(job: JoobleJob) -> JobOffer {
    let created_at = DateTime::parse_from_rfc3339(&job.updated)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    JobOffer {
        id: job.link.clone(),
        title: job.title,
        company: job.company,
        description: job.snippet,
        requirements: Vec::new(),
        keywords: Vec::new(),
        location: none_if_empty(job.location),
        salary: none_if_empty(job.salary),
        job_type: none_if_empty(job.job_type),
        link: none_if_empty(job.link),
        source: JobSource::Api,
        created_at,
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
