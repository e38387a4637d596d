//! The assembled search pipeline behind a substitutable trait.

use async_trait::async_trait;

use mrisafe_types::{ImplantName, SearchResult};

use crate::error::SearchError;
use crate::extract::extract_safety_info;
use crate::gemini::GeminiClient;
use crate::prompt::build_safety_prompt;
use crate::sources::filter_citable;

/// One safety lookup: implant name in, atomic `SearchResult` out.
///
/// The REST proxy and the CLI orchestrator both program against this trait;
/// tests substitute fakes for it.
#[async_trait]
pub trait SafetySearch: Send + Sync {
    async fn search(&self, name: &ImplantName) -> Result<SearchResult, SearchError>;
}

/// Production pipeline: prompt → Gemini → extraction → citation filter.
pub struct SafetyService {
    client: GeminiClient,
}

impl SafetyService {
    /// Wraps an already-constructed Gemini client. The client is built once
    /// at process start and handed in; the service itself is stateless per
    /// call.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SafetySearch for SafetyService {
    async fn search(&self, name: &ImplantName) -> Result<SearchResult, SearchError> {
        let prompt = build_safety_prompt(name);
        let outcome = self.client.generate_grounded(&prompt).await?;

        let data = extract_safety_info(&outcome.text)?;
        let total = outcome.sources.len();
        let sources = filter_citable(outcome.sources);
        tracing::info!(
            implant = %name,
            classification = ?data.safety_classification,
            sources = sources.len(),
            dropped_sources = total - sources.len(),
            "search completed"
        );

        Ok(SearchResult { data, sources })
    }
}
