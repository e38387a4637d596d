//! HTTP client for the mrisafe REST proxy.

use async_trait::async_trait;

use mrisafe_core::{SafetySearch, SearchError};
use mrisafe_types::{ImplantName, SearchRequest, SearchResult};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Client for `POST /api/search` on the proxy.
///
/// Keeps the Gemini API key on the server side; the CLI only ever talks to
/// the proxy. Implements [`SafetySearch`] so the orchestrator treats it like
/// any other lookup.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client against the given base URL (trailing slashes are
    /// dropped).
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    /// Builds a client from `MRISAFE_API_URL`, defaulting to the local dev
    /// proxy address.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the HTTP client cannot be
    /// constructed.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let base_url =
            std::env::var("MRISAFE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(base_url)
    }
}

#[async_trait]
impl SafetySearch for ApiClient {
    async fn search(&self, name: &ImplantName) -> Result<SearchResult, SearchError> {
        let url = format!("{}/api/search", self.base_url);
        let request = SearchRequest {
            implant_name: name.as_str().to_owned(),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream(format!(
                "search API error: {status} {body}"
            )));
        }

        Ok(response.json().await?)
    }
}
