use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Web citation attached to a grounding chunk.
///
/// The AI service may return chunks with either field missing or empty, so
/// both are optional here; [`GroundingChunk::is_citable`] is the predicate
/// that decides whether a chunk is worth showing to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One citation returned by the search-grounded AI response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

impl GroundingChunk {
    /// Whether this chunk carries both a non-empty URI and a non-empty title.
    ///
    /// Chunks failing this predicate are dropped from results rather than
    /// rendered as broken links.
    pub fn is_citable(&self) -> bool {
        self.web.as_ref().is_some_and(|web| {
            web.uri.as_deref().is_some_and(|uri| !uri.is_empty())
                && web.title.as_deref().is_some_and(|title| !title.is_empty())
        })
    }
}
