use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every fallible path outside the scoring core funnels into this enum;
/// the scoring functions themselves are total and never return it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Job search error: {0}")]
    JobSearch(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
