use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a job offer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Upload,
    Url,
    Manual,
    Api,
}

/// A job posting the user is targeting. Search results use the posting
/// link as the id; manual entries get a generated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub link: Option<String>,
    pub source: JobSource,
    pub created_at: DateTime<Utc>,
}

impl JobOffer {
    /// A manually entered offer with only the fields the user typed.
    pub fn manual(title: String, company: String, description: String) -> Self {
        JobOffer {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            company,
            description,
            requirements: Vec::new(),
            keywords: Vec::new(),
            location: None,
            salary: None,
            job_type: None,
            link: None,
            source: JobSource::Manual,
            created_at: Utc::now(),
        }
    }
}
