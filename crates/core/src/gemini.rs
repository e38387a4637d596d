//! Client for the Gemini `generateContent` endpoint with search grounding.
//!
//! The client is constructed once at process start and passed to whoever
//! needs it; nothing in this module holds ambient global state. Each call is
//! independent: one prompt in, one candidate's text and grounding chunks out.

use std::time::Duration;

use serde::Deserialize;

use mrisafe_types::GroundingChunk;

use crate::error::SearchError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Errors that can occur while loading the Gemini configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
}

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Loads the configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL` and `GEMINI_BASE_URL`
    /// fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if no API key is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            base_url: std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Creates a configuration with explicit key and model, defaults for the
    /// rest. Used by tests and embedding callers.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Text and citations produced by one grounded generation call.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub text: String,
    pub sources: Vec<GroundingChunk>,
}

/// HTTP client for grounded generation calls.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Builds the client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the HTTP client cannot be
    /// constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Sends one prompt with the web-search tool enabled and returns the
    /// first candidate's text plus its grounding chunks.
    ///
    /// # Errors
    ///
    /// - `SearchError::Upstream` on transport failure or a non-success
    ///   status from the API
    /// - `SearchError::EmptyResponse` when no candidate text comes back
    pub async fn generate_grounded(&self, prompt: &str) -> Result<GenerateOutcome, SearchError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });

        tracing::debug!(model = %self.config.model, "sending grounded generation request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream(format!(
                "AI service returned {status}: {detail}"
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        let Some(candidate) = parsed.candidates.into_iter().next() else {
            return Err(SearchError::EmptyResponse);
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        let text = text.trim().to_owned();
        if text.is_empty() {
            return Err(SearchError::EmptyResponse);
        }

        let sources = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default();

        Ok(GenerateOutcome { text, sources })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}
