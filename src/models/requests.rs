use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, PreferenceProfile};

/// Request to rank candidates for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(nested)]
    #[serde(default)]
    pub preferences: PreferenceProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Falls back to the configured default limit when absent
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}
