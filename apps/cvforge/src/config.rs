use std::path::PathBuf;

use anyhow::Result;

use crate::llm_client::Provider;
use crate::models::settings::ApiConfig;

/// Application configuration loaded from environment variables.
/// Every key is optional; features that need a missing key fail when
/// invoked, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub llm: Option<ApiConfig>,
    pub jooble_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = std::env::var("CVFORGE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let llm = match (std::env::var("LLM_PROVIDER"), std::env::var("LLM_API_KEY")) {
            (Ok(provider), Ok(api_key)) => Provider::parse(&provider).map(|provider| ApiConfig {
                provider,
                api_key,
                model: std::env::var("LLM_MODEL").ok(),
            }),
            _ => None,
        };

        Ok(Config {
            data_dir,
            llm,
            jooble_api_key: std::env::var("JOOBLE_API_KEY").ok(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".cvforge"))
        .unwrap_or_else(|_| PathBuf::from(".cvforge"))
}
