//! LLM client, the single point of entry for all completion-provider
//! calls. No other module talks to a provider API directly.
//!
//! All four providers are "prompt in → text out": OpenAI, DeepSeek and
//! OpenRouter share the chat-completions shape, Gemini uses
//! generateContent. The wire formats live here as an implementation
//! detail; callers only see `TextGenerator`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::settings::ApiConfig;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1500;
const MAX_RETRIES: u32 = 3;

/// Identification headers OpenRouter asks callers to send.
const OPENROUTER_REFERER: &str = "https://github.com/cvforge/cvforge";
const OPENROUTER_TITLE: &str = "CVForge";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    DeepSeek,
    Gemini,
    OpenRouter,
}

impl Provider {
    /// Parses the provider names used in settings and env vars.
    pub fn parse(value: &str) -> Option<Provider> {
        match value.to_lowercase().as_str() {
            "openai" => Some(Provider::OpenAi),
            "deepseek" => Some(Provider::DeepSeek),
            "gemini" => Some(Provider::Gemini),
            "openrouter" => Some(Provider::OpenRouter),
            _ => None,
        }
    }

    /// Model used when the configuration does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4",
            Provider::DeepSeek => "deepseek-chat",
            Provider::Gemini => "gemini-1.5-flash-latest",
            Provider::OpenRouter => "google/gemma-7b-it:free",
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Provider returned empty content")]
    EmptyContent,
}

/// Pluggable text-generation backend. Generation logic depends on this
/// trait so tests can swap in a fake with no network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ── chat-completions wire types (OpenAI / DeepSeek / OpenRouter) ────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

// ── generateContent wire types (Gemini) ─────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The production completion client. Wraps the configured provider's
/// API with retry logic on rate limits and server errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: ApiConfig,
}

impl LlmClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }

    fn model(&self) -> &str {
        self.config
            .model
            .as_deref()
            .unwrap_or_else(|| self.config.provider.default_model())
    }

    /// Sends `prompt` to the configured provider, retrying on 429 and
    /// 5xx with exponential backoff.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.send(prompt).await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Provider returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Surface the provider's own error message when parseable
                let message = serde_json::from_str::<ProviderError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let text = match self.config.provider {
                Provider::Gemini => extract_gemini_text(response.json().await?),
                _ => extract_chat_text(response.json().await?),
            };

            return match text {
                Some(text) => {
                    debug!("LLM call succeeded ({} chars)", text.len());
                    Ok(text)
                }
                None => Err(LlmError::EmptyContent),
            };
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    async fn send(&self, prompt: &str) -> Result<reqwest::Response, reqwest::Error> {
        match self.config.provider {
            Provider::OpenAi => self.send_chat(OPENAI_API_URL, prompt).await,
            Provider::DeepSeek => self.send_chat(DEEPSEEK_API_URL, prompt).await,
            Provider::OpenRouter => {
                self.client
                    .post(OPENROUTER_API_URL)
                    .bearer_auth(&self.config.api_key)
                    .header("HTTP-Referer", OPENROUTER_REFERER)
                    .header("X-Title", OPENROUTER_TITLE)
                    .json(&chat_request(self.model(), prompt))
                    .send()
                    .await
            }
            Provider::Gemini => {
                // Gemini authenticates via query string, not a header.
                let url = format!(
                    "{}/{}:generateContent?key={}",
                    GEMINI_API_BASE,
                    self.model(),
                    self.config.api_key
                );
                self.client
                    .post(url)
                    .json(&GeminiRequest {
                        contents: vec![GeminiContent {
                            parts: vec![GeminiPart { text: prompt }],
                        }],
                        generation_config: GeminiGenerationConfig {
                            temperature: TEMPERATURE,
                            max_output_tokens: MAX_TOKENS,
                        },
                    })
                    .send()
                    .await
            }
        }
    }

    async fn send_chat(&self, url: &str, prompt: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&chat_request(self.model(), prompt))
            .send()
            .await
    }
}

fn chat_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

fn extract_chat_text(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
}

fn extract_gemini_text(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete(prompt).await
    }
}
