use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{GroundingChunk, StructuredSafetyInfo};

/// Request body for `POST /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub implant_name: String,
}

/// Top-level result of one safety search: the structured finding plus the
/// citations that support it. Produced atomically per query; there are no
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    pub data: StructuredSafetyInfo,
    #[serde(default)]
    pub sources: Vec<GroundingChunk>,
}
