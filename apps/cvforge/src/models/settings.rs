use serde::{Deserialize, Serialize};

use crate::llm_client::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    Fr,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Credentials for the configured completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: Option<String>,
}

/// User preferences, persisted separately from the document data so a
/// corrupt data file never wipes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub language: UiLanguage,
    pub theme: Theme,
    pub api_config: Option<ApiConfig>,
    pub auto_save: bool,
    pub default_template: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            language: UiLanguage::Fr,
            theme: Theme::Light,
            api_config: None,
            auto_save: true,
            default_template: "modern".to_string(),
        }
    }
}
