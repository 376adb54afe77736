use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::{LetterLength, LetterTone};

/// A generated cover letter kept in the store for later reuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetter {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub content: String,
    pub tone: LetterTone,
    pub length: LetterLength,
    pub created_at: DateTime<Utc>,
}

impl CoverLetter {
    pub fn new(
        job_title: String,
        company: String,
        content: String,
        tone: LetterTone,
        length: LetterLength,
    ) -> Self {
        CoverLetter {
            id: Uuid::new_v4(),
            job_title,
            company,
            content,
            tone,
            length,
            created_at: Utc::now(),
        }
    }
}
