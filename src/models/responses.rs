use serde::{Deserialize, Serialize};
use crate::models::domain::{CompatibilityBreakdown, ScoredMatch};

/// Response for the score command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breakdown: Option<CompatibilityBreakdown>,
}

/// Response for the rank command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
