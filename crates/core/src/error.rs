//! Error taxonomy for one search attempt.
//!
//! Every variant is terminal for the attempt; nothing in the pipeline
//! retries. The REST proxy maps these onto HTTP statuses and the CLI maps
//! them onto a generic user-facing message, logging the detail instead.

use crate::extract::ExtractError;

/// Failure modes of a safety search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The implant name failed validation before any network call was made
    #[error("invalid input: {0}")]
    InvalidInput(#[from] mrisafe_types::ImplantNameError),

    /// The AI service answered without any candidate text
    #[error("empty response from the AI service")]
    EmptyResponse,

    /// The AI service's text could not be reduced to a JSON object
    #[error(transparent)]
    Extraction(#[from] ExtractError),

    /// Transport failure or non-success status from an upstream call
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Upstream(err.to_string())
    }
}
